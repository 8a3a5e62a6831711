//! REST surface of the calc module.
//!
//! `error` is the outward result contract: every failure is a 400, arithmetic
//! endpoints answer with a bare message string and constant endpoints with
//! `{"error": message}`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
