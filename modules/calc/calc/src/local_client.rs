use std::sync::Arc;

use async_trait::async_trait;
use calc_sdk::{CalcClientV1, CalcError, Constant, Operator, RawOperand};

use crate::domain::repo::ConstantsRepository;
use crate::domain::service::Service;

/// In-process implementation of [`CalcClientV1`] over the domain service.
pub struct CalcLocalClient<R: ConstantsRepository + 'static> {
    service: Arc<Service<R>>,
}

impl<R: ConstantsRepository + 'static> CalcLocalClient<R> {
    #[must_use]
    pub fn new(service: Arc<Service<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: ConstantsRepository + 'static> CalcClientV1 for CalcLocalClient<R> {
    async fn calculate(
        &self,
        op: Operator,
        arg1: RawOperand,
        arg2: RawOperand,
    ) -> Result<f64, CalcError> {
        self.service
            .calculate(op, &arg1, &arg2)
            .await
            .map_err(Into::into)
    }

    async fn create_constant(&self, name: &str, value: RawOperand) -> Result<(), CalcError> {
        self.service
            .create_constant(Some(name), Some(&value))
            .await
            .map_err(Into::into)
    }

    async fn list_constants(&self) -> Result<Vec<Constant>, CalcError> {
        self.service.list_constants().await.map_err(Into::into)
    }

    async fn delete_constant(&self, name: &str) -> Result<(), CalcError> {
        self.service
            .delete_constant(Some(name))
            .await
            .map_err(Into::into)
    }
}
