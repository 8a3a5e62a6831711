use calc_sdk::RawOperand;
use sea_orm::ConnectionTrait as DbConnTrait;

use super::error::DomainError;
use super::literal::{Classified, classify};
use super::repo::ConstantsRepository;
use super::store::ConstantStore;

/// Turns a raw operand into a finite number.
///
/// Numbers pass through. Text is parsed as a literal first and only falls
/// back to a constant lookup when it is not one, so literal-only requests
/// never touch the store.
pub struct ArgumentResolver<R: ConstantsRepository> {
    store: ConstantStore<R>,
}

impl<R: ConstantsRepository> ArgumentResolver<R> {
    pub fn new(store: ConstantStore<R>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// `Validation` for empty text or non-finite numbers, otherwise whatever
    /// the constant lookup reports.
    pub async fn resolve<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        raw: &RawOperand,
    ) -> Result<f64, DomainError> {
        match raw {
            RawOperand::Number(n) if n.is_finite() => Ok(*n),
            RawOperand::Number(n) => Err(DomainError::validation(format!(
                "numeric literal '{n}' is out of range"
            ))),
            RawOperand::Text(text) => match classify(text)? {
                Classified::Number(n) => Ok(n),
                Classified::Name(name) => self.store.lookup(conn, name).await,
            },
        }
    }
}
