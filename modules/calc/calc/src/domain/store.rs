use std::sync::Arc;

use calc_sdk::Constant;
use sea_orm::ConnectionTrait as DbConnTrait;
use tracing::debug;

use super::error::DomainError;
use super::repo::ConstantsRepository;

/// Name-keyed access to persisted constants.
///
/// Thin contract over [`ConstantsRepository`] that turns raw row sets into
/// the outcomes the rest of the domain reasons about.
pub struct ConstantStore<R: ConstantsRepository> {
    repo: Arc<R>,
}

impl<R: ConstantsRepository> Clone for ConstantStore<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: ConstantsRepository> ConstantStore<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Value stored under `name`.
    ///
    /// # Errors
    ///
    /// `NotFound` when no row matches, `Ambiguous` when several rows do,
    /// `Persistence` when the store fails.
    pub async fn lookup<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<f64, DomainError> {
        let rows = self.repo.find_by_name(conn, name).await?;
        match rows.as_slice() {
            [] => Err(DomainError::not_found(name)),
            [row] => Ok(row.value),
            _ => {
                debug!(name, rows = rows.len(), "constant name matches several rows");
                Err(DomainError::ambiguous(name, rows.len()))
            }
        }
    }

    /// # Errors
    ///
    /// `Validation` for an empty name or a non-finite value, `Persistence`
    /// when the store fails.
    pub async fn upsert<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        value: f64,
    ) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if !value.is_finite() {
            return Err(DomainError::validation("value must be numeric"));
        }
        self.repo.upsert(conn, name, value).await
    }

    /// Removes `name`. Deleting an absent name is not an error.
    ///
    /// # Errors
    ///
    /// `Persistence` when the store fails.
    pub async fn delete<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<(), DomainError> {
        let removed = self.repo.delete(conn, name).await?;
        if !removed {
            debug!(name, "delete requested for absent constant");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// `Persistence` when the store fails.
    pub async fn list_all<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Constant>, DomainError> {
        self.repo.list_ordered(conn).await
    }
}
