use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use calc_sdk::Operator;
use utoipa::openapi::OpenApi;

use crate::domain::repo::ConstantsRepository;
use crate::domain::service::Service;

use super::dto::{
    CalcRequest, ConstantListDto, CreateConstantRequest, DeleteConstantRequest,
};
use super::error::{ArithmeticFailure, ConstantFailure};

/// Body of a successful create or delete.
pub const OK: &str = "ok";

/// Arithmetic endpoint body shared by every operator route.
pub async fn calculate<R: ConstantsRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    op: Operator,
    payload: Result<Json<CalcRequest>, JsonRejection>,
) -> Result<Json<f64>, ArithmeticFailure> {
    let Json(req) = payload?;
    let (arg1, arg2) = req.into_operands()?;
    let result = svc.calculate(op, &arg1, &arg2).await?;
    Ok(Json(result))
}

pub async fn create_constant<R: ConstantsRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    payload: Result<Json<CreateConstantRequest>, JsonRejection>,
) -> Result<Json<&'static str>, ConstantFailure> {
    let Json(req) = payload?;
    let value = req.raw_value()?;
    svc.create_constant(req.name.as_deref(), value.as_ref())
        .await?;
    Ok(Json(OK))
}

pub async fn list_constants<R: ConstantsRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
) -> Result<Json<ConstantListDto>, ConstantFailure> {
    let constants = svc.list_constants().await?;
    Ok(Json(constants.into()))
}

pub async fn delete_constant<R: ConstantsRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    payload: Result<Json<DeleteConstantRequest>, JsonRejection>,
) -> Result<Json<&'static str>, ConstantFailure> {
    let Json(req) = payload?;
    svc.delete_constant(req.name.as_deref()).await?;
    Ok(Json(OK))
}

pub async fn delete_constant_by_path<R: ConstantsRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Path(name): Path<String>,
) -> Result<Json<&'static str>, ConstantFailure> {
    svc.delete_constant(Some(&name)).await?;
    Ok(Json(OK))
}

pub async fn openapi_document(Extension(doc): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}
