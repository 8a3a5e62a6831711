use sea_orm::DbErr;

use crate::domain::error::DomainError;

/// Map a store failure to the domain, keeping the driver's message.
#[allow(clippy::needless_pass_by_value)]
pub fn db_err(e: DbErr) -> DomainError {
    DomainError::persistence(e.to_string())
}
