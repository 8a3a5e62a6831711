use async_trait::async_trait;
use calc_sdk::Constant;
use sea_orm::ConnectionTrait as DbConnTrait;

use crate::domain::error::DomainError;

/// Persistence operations for named constants.
///
/// Every method takes the connection to run on, so the caller decides the
/// session each statement belongs to.
#[async_trait]
pub trait ConstantsRepository: Send + Sync {
    /// All rows stored under `name`, exact case-sensitive match.
    ///
    /// More than one row means the table lost its key constraint; callers
    /// report that as an ambiguity instead of picking a row.
    async fn find_by_name<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Vec<Constant>, DomainError>;

    /// Insert or replace the value stored under `name`.
    async fn upsert<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        value: f64,
    ) -> Result<(), DomainError>;

    /// Delete the row stored under `name`. Returns whether a row was removed.
    async fn delete<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<bool, DomainError>;

    /// Every stored constant, ascending by name.
    async fn list_ordered<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Constant>, DomainError>;
}
