use calc_sdk::{Constant, RawOperand};
use sea_orm::ConnectionTrait as DbConnTrait;
use tracing::debug;

use super::error::DomainError;
use super::literal::{Classified, classify, is_numeric_literal};
use super::repo::ConstantsRepository;
use super::store::ConstantStore;

/// Create/list/remove surface over the constant store.
///
/// Inputs are optional because they arrive straight from request payloads;
/// a missing field is a validation failure, not a type error.
pub struct ConstantRegistry<R: ConstantsRepository> {
    store: ConstantStore<R>,
    max_name_length: usize,
}

impl<R: ConstantsRepository> ConstantRegistry<R> {
    pub fn new(store: ConstantStore<R>, max_name_length: usize) -> Self {
        Self {
            store,
            max_name_length,
        }
    }

    /// Validates the payload and upserts the constant.
    ///
    /// # Errors
    ///
    /// `Validation` for a missing, empty, overlong or numeric-looking name and
    /// for a missing or non-numeric value. `Persistence` when the store fails.
    pub async fn create<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: Option<&str>,
        value: Option<&RawOperand>,
    ) -> Result<(), DomainError> {
        let name = self.validate_name(name)?;
        let value = parse_value(value)?;
        debug!(name, value, "upserting constant");
        self.store.upsert(conn, name, value).await
    }

    /// # Errors
    ///
    /// `Validation` when `name` is missing or empty, `Persistence` when the
    /// store fails. An unknown name is not an error.
    pub async fn remove<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: Option<&str>,
    ) -> Result<(), DomainError> {
        let name = match name {
            None => return Err(DomainError::validation("name is required")),
            Some("") => return Err(DomainError::validation("name must not be empty")),
            Some(name) => name,
        };
        self.store.delete(conn, name).await
    }

    /// # Errors
    ///
    /// `Persistence` when the store fails.
    pub async fn list<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Constant>, DomainError> {
        self.store.list_all(conn).await
    }

    fn validate_name<'a>(&self, name: Option<&'a str>) -> Result<&'a str, DomainError> {
        let Some(name) = name else {
            return Err(DomainError::validation("name is required"));
        };
        if name.trim_ascii().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if name.chars().count() > self.max_name_length {
            return Err(DomainError::validation(format!(
                "name exceeds maximum length of {}",
                self.max_name_length
            )));
        }
        if is_numeric_literal(name) {
            return Err(DomainError::validation(format!(
                "name '{name}' is a numeric literal and cannot be used as a constant"
            )));
        }
        Ok(name)
    }
}

fn parse_value(value: Option<&RawOperand>) -> Result<f64, DomainError> {
    let not_numeric = || DomainError::validation("value must be numeric");
    match value {
        None => Err(DomainError::validation("value is required")),
        Some(RawOperand::Number(n)) if n.is_finite() => Ok(*n),
        Some(RawOperand::Number(_)) => Err(not_numeric()),
        Some(RawOperand::Text(text)) => match classify(text) {
            Ok(Classified::Number(n)) => Ok(n),
            Ok(Classified::Name(_)) | Err(_) => Err(not_numeric()),
        },
    }
}
