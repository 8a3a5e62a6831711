//! Calc SDK
//!
//! This crate provides the public API for the calc module:
//! - `CalcClientV1` trait for in-process consumers
//! - Model types (`Constant`, `RawOperand`, `Operator`)
//! - Error type (`CalcError`)
//!
//! The calc module ships a local implementation:
//! ```ignore
//! let client: Arc<dyn CalcClientV1> = Arc::new(CalcLocalClient::new(service));
//! let sum = client.calculate(Operator::Add, "2".into(), "pi".into()).await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::CalcClientV1;
pub use errors::CalcError;
pub use models::{Constant, Operator, RawOperand};
