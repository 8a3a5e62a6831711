//! Domain layer for the calc module.
//!
//! Components, leaf first:
//! - `store` - Constant Store contract over the repository
//! - `resolver` - turns a raw operand into a number
//! - `evaluator` - applies a binary operator to two resolved numbers
//! - `registry` - create/list/remove surface over the store
//! - `service` - per-request orchestration around the injected database handle

pub mod error;
pub mod evaluator;
pub mod literal;
pub mod registry;
pub mod repo;
pub mod resolver;
pub mod service;
pub mod store;

#[cfg(test)]
mod service_test;
