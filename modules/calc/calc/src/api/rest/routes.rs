use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use calc_sdk::Operator;

use crate::api::rest::openapi::{BodySchema, OpenApiCollector, OperationSpec};
use crate::api::rest::{dto, handlers};
use crate::domain::repo::ConstantsRepository;
use crate::domain::service::Service;
use crate::infra::storage::OrmConstantsRepository;

/// Type alias for the concrete service type.
pub type ConcreteService = Service<OrmConstantsRepository>;

pub const OPENAPI_PATH: &str = "/calc/openapi.json";

/// Path, operation id and summary of the endpoint serving `op`.
fn arithmetic_route(op: Operator) -> (&'static str, &'static str, &'static str) {
    match op {
        Operator::Add => ("/calc/add", "calc.add", "Add two operands"),
        Operator::Subtract => ("/calc/subtract", "calc.subtract", "Subtract arg2 from arg1"),
        Operator::Multiply => ("/calc/mult", "calc.mult", "Multiply two operands"),
        Operator::Divide => ("/calc/divide", "calc.divide", "Divide arg1 by arg2"),
    }
}

/// Mounts every calc endpoint on `router` and documents it.
pub fn register_routes<R: ConstantsRepository + 'static>(
    mut router: Router,
    service: Arc<Service<R>>,
) -> Router {
    let mut openapi = OpenApiCollector::default();
    let calc_req = openapi.ensure_schema::<dto::CalcRequest>();
    let create_req = openapi.ensure_schema::<dto::CreateConstantRequest>();
    let delete_req = openapi.ensure_schema::<dto::DeleteConstantRequest>();
    let list = openapi.ensure_schema::<dto::ConstantListDto>();
    let error = openapi.ensure_schema::<dto::ErrorDto>();
    let constant_failure = || BodySchema::Component(error.clone());

    for op in Operator::ALL {
        let (path, operation_id, summary) = arithmetic_route(op);
        router = router.route(
            path,
            post(
                move |svc: Extension<Arc<Service<R>>>,
                      payload: Result<Json<dto::CalcRequest>, JsonRejection>| {
                    handlers::calculate(svc, op, payload)
                },
            ),
        );
        openapi.register(
            OperationSpec::post(path, operation_id, summary)
                .json_request(&calc_req)
                .responds(BodySchema::Number, BodySchema::Text),
        );
    }

    router = router.route("/calc/create-constant", post(handlers::create_constant::<R>));
    openapi.register(
        OperationSpec::post(
            "/calc/create-constant",
            "calc.create_constant",
            "Create or overwrite a named constant",
        )
        .json_request(&create_req)
        .responds(BodySchema::Text, constant_failure()),
    );

    router = router.route("/calc/list-constants", get(handlers::list_constants::<R>));
    openapi.register(
        OperationSpec::get(
            "/calc/list-constants",
            "calc.list_constants",
            "List constants ordered by name",
        )
        .responds(BodySchema::Component(list), constant_failure()),
    );

    router = router.route("/calc/delete-constant", post(handlers::delete_constant::<R>));
    openapi.register(
        OperationSpec::post(
            "/calc/delete-constant",
            "calc.delete_constant",
            "Delete a constant",
        )
        .json_request(&delete_req)
        .responds(BodySchema::Text, constant_failure()),
    );

    router = router.route(
        "/calc/delete-constant/{name}",
        delete(handlers::delete_constant_by_path::<R>),
    );
    openapi.register(
        OperationSpec::delete(
            "/calc/delete-constant/{name}",
            "calc.delete_constant_by_path",
            "Delete a constant named in the path",
        )
        .path_param("name", "Constant name")
        .responds(BodySchema::Text, constant_failure()),
    );

    let doc = Arc::new(openapi.build("Calc API", env!("CARGO_PKG_VERSION")));
    tracing::debug!("registered {} calc operations", openapi.operations().len());

    router
        .route(OPENAPI_PATH, get(handlers::openapi_document))
        .layer(Extension(doc))
        .layer(Extension(service))
}
