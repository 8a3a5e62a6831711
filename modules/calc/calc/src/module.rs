use std::sync::Arc;

use axum::Router;
use calc_sdk::CalcClientV1;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes::{self, ConcreteService};
use crate::config::CalcConfig;
use crate::domain::service::{Service, ServiceConfig};
use crate::infra::storage::{Migrator, OrmConstantsRepository};
use crate::local_client::CalcLocalClient;

/// Calc module: owns the domain service built around an injected database
/// handle and exposes it over REST and as an in-process client.
pub struct CalcModule {
    db: DatabaseConnection,
    service: Arc<ConcreteService>,
}

impl CalcModule {
    #[must_use]
    pub fn new(db: DatabaseConnection, config: &CalcConfig) -> Self {
        info!("Initializing calc module");
        let service_config = ServiceConfig {
            max_name_length: config.max_name_length,
        };
        let service = Service::new(
            db.clone(),
            Arc::new(OrmConstantsRepository::new()),
            &service_config,
        );
        Self {
            db,
            service: Arc::new(service),
        }
    }

    /// Applies pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running calc module database migrations");
        Migrator::up(&self.db, None).await?;
        info!("Calc module database migrations completed successfully");
        Ok(())
    }

    /// Mounts the calc endpoints on `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering calc REST routes");
        routes::register_routes(router, Arc::clone(&self.service))
    }

    /// Router with only the calc endpoints.
    #[must_use]
    pub fn router(&self) -> Router {
        self.register_rest(Router::new())
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn CalcClientV1> {
        Arc::new(CalcLocalClient::new(Arc::clone(&self.service)))
    }
}
