//! Infrastructure storage layer.
//!
//! All `SeaORM`-specific code lives here:
//! - `entity` - the `constants` table
//! - `mapper` - entity to SDK model conversions
//! - `db` - `DbErr` to domain error mapping
//! - `sea_orm_repo` - the `ConstantsRepository` implementation
//! - `migrations` - schema migrations

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use migrations::Migrator;
pub use sea_orm_repo::OrmConstantsRepository;
