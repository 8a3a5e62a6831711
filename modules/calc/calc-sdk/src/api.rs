//! `CalcClientV1` trait definition.
//!
//! This trait defines the public API for the calc module (Version 1).

use async_trait::async_trait;

use crate::errors::CalcError;
use crate::models::{Constant, Operator, RawOperand};

/// Public API trait for the calc module (Version 1).
///
/// Arithmetic operands are resolved independently: a numeric literal is used as-is,
/// anything else is looked up as a constant name.
#[async_trait]
pub trait CalcClientV1: Send + Sync {
    /// Resolve both operands and apply `op` to them.
    async fn calculate(
        &self,
        op: Operator,
        arg1: RawOperand,
        arg2: RawOperand,
    ) -> Result<f64, CalcError>;

    /// Create a constant or overwrite the value of an existing one.
    async fn create_constant(&self, name: &str, value: RawOperand) -> Result<(), CalcError>;

    /// List all constants ordered by name.
    async fn list_constants(&self) -> Result<Vec<Constant>, CalcError>;

    /// Delete a constant. Deleting an unknown name succeeds.
    async fn delete_constant(&self, name: &str) -> Result<(), CalcError>;
}
