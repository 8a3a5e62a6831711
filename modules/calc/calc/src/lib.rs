//! Calc Module Implementation
//!
//! Arithmetic over literal operands and persisted named constants, plus CRUD over
//! the constant store. The public API is defined in `calc-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - `domain/` - operand resolution, evaluation, constant registry, request service
//! - `infra/storage/` - `SeaORM` entity, repository and migrations
//! - `api/rest/` - DTOs, handlers, routes and the outward result contract
//! - `module.rs` - wiring of the above around an injected database handle

pub use calc_sdk::{CalcClientV1, CalcError, Constant, Operator, RawOperand};

pub mod module;
pub use module::CalcModule;

pub mod local_client;
pub use local_client::CalcLocalClient;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
