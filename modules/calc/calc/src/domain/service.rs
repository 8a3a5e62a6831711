use std::sync::Arc;

use calc_sdk::{Constant, Operator, RawOperand};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument};

use super::error::DomainError;
use super::evaluator::evaluate;
use super::registry::ConstantRegistry;
use super::repo::ConstantsRepository;
use super::resolver::ArgumentResolver;
use super::store::ConstantStore;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_name_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
        }
    }
}

/// Request-level orchestration for arithmetic and constant management.
///
/// Holds the injected database handle. Each store call borrows a pooled
/// connection for its own duration only, so nothing outlives a request.
pub struct Service<R: ConstantsRepository> {
    db: DatabaseConnection,
    resolver: ArgumentResolver<R>,
    registry: ConstantRegistry<R>,
}

impl<R: ConstantsRepository> Service<R> {
    pub fn new(db: DatabaseConnection, repo: Arc<R>, config: &ServiceConfig) -> Self {
        let store = ConstantStore::new(repo);
        Self {
            db,
            resolver: ArgumentResolver::new(store.clone()),
            registry: ConstantRegistry::new(store, config.max_name_length),
        }
    }

    /// Resolves both operands concurrently, then evaluates.
    ///
    /// # Errors
    ///
    /// The first resolution failure, or the evaluator's failure.
    #[instrument(skip(self, op, arg1, arg2), fields(op = %op, arg1 = %arg1, arg2 = %arg2))]
    pub async fn calculate(
        &self,
        op: Operator,
        arg1: &RawOperand,
        arg2: &RawOperand,
    ) -> Result<f64, DomainError> {
        let (lhs, rhs) = tokio::try_join!(
            self.resolver.resolve(&self.db, arg1),
            self.resolver.resolve(&self.db, arg2),
        )?;
        let result = evaluate(op, lhs, rhs)?;
        debug!(lhs, rhs, result, "evaluated");
        Ok(result)
    }

    /// # Errors
    ///
    /// `Validation` for a bad payload, `Persistence` when the store fails.
    #[instrument(skip(self, name, value), fields(name = name.unwrap_or_default()))]
    pub async fn create_constant(
        &self,
        name: Option<&str>,
        value: Option<&RawOperand>,
    ) -> Result<(), DomainError> {
        self.registry.create(&self.db, name, value).await?;
        info!("constant stored");
        Ok(())
    }

    /// # Errors
    ///
    /// `Persistence` when the store fails.
    #[instrument(skip(self))]
    pub async fn list_constants(&self) -> Result<Vec<Constant>, DomainError> {
        let constants = self.registry.list(&self.db).await?;
        debug!("listed {} constants", constants.len());
        Ok(constants)
    }

    /// # Errors
    ///
    /// `Validation` for a missing name, `Persistence` when the store fails.
    #[instrument(skip(self, name), fields(name = name.unwrap_or_default()))]
    pub async fn delete_constant(&self, name: Option<&str>) -> Result<(), DomainError> {
        self.registry.remove(&self.db, name).await?;
        info!("constant deleted");
        Ok(())
    }
}
