//! OpenAPI document for the calc endpoints.
//!
//! Routes record an [`OperationSpec`] next to their axum registration; the
//! collected specs and component schemas are turned into one document with
//! utoipa's builders.

use std::collections::BTreeMap;

use http::{Method, StatusCode};
use utoipa::openapi::{
    OpenApi, OpenApiBuilder, Ref, RefOr, Required,
    content::ContentBuilder,
    info::InfoBuilder,
    path::{
        HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathsBuilder,
    },
    request_body::RequestBodyBuilder,
    response::{Response, ResponseBuilder, ResponsesBuilder},
    schema::{ComponentsBuilder, ObjectBuilder, Schema, SchemaType, Type},
};

/// Shape of a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySchema {
    /// Named component schema
    Component(String),
    Number,
    Text,
}

impl BodySchema {
    fn to_schema(&self) -> RefOr<Schema> {
        match self {
            Self::Component(name) => RefOr::Ref(Ref::from_schema_name(name.clone())),
            Self::Number => primitive(Type::Number),
            Self::Text => primitive(Type::String),
        }
    }
}

fn primitive(ty: Type) -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new().schema_type(SchemaType::Type(ty)).build(),
    ))
}

/// One documented operation.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    pub method: Method,
    pub path: String,
    pub operation_id: String,
    pub summary: String,
    pub path_param: Option<(String, String)>,
    pub request_body: Option<String>,
    pub success: BodySchema,
    pub failure: BodySchema,
}

impl OperationSpec {
    fn new(method: Method, path: &str, operation_id: &str, summary: &str) -> Self {
        Self {
            method,
            path: path.to_owned(),
            operation_id: operation_id.to_owned(),
            summary: summary.to_owned(),
            path_param: None,
            request_body: None,
            success: BodySchema::Text,
            failure: BodySchema::Text,
        }
    }

    #[must_use]
    pub fn get(path: &str, operation_id: &str, summary: &str) -> Self {
        Self::new(Method::GET, path, operation_id, summary)
    }

    #[must_use]
    pub fn post(path: &str, operation_id: &str, summary: &str) -> Self {
        Self::new(Method::POST, path, operation_id, summary)
    }

    #[must_use]
    pub fn delete(path: &str, operation_id: &str, summary: &str) -> Self {
        Self::new(Method::DELETE, path, operation_id, summary)
    }

    #[must_use]
    pub fn path_param(mut self, name: &str, description: &str) -> Self {
        self.path_param = Some((name.to_owned(), description.to_owned()));
        self
    }

    #[must_use]
    pub fn json_request(mut self, schema_name: &str) -> Self {
        self.request_body = Some(schema_name.to_owned());
        self
    }

    #[must_use]
    pub fn responds(mut self, success: BodySchema, failure: BodySchema) -> Self {
        self.success = success;
        self.failure = failure;
        self
    }
}

/// Accumulates operations and component schemas.
#[derive(Default)]
pub struct OpenApiCollector {
    operations: Vec<OperationSpec>,
    components: BTreeMap<String, RefOr<Schema>>,
}

impl OpenApiCollector {
    /// Registers `T` and the schemas it references. Returns the component name.
    pub fn ensure_schema<T: utoipa::ToSchema + 'static>(&mut self) -> String {
        let root_name = T::name().to_string();
        let mut collected = vec![(root_name.clone(), <T as utoipa::PartialSchema>::schema())];
        T::schemas(&mut collected);
        for (name, schema) in collected {
            self.components.entry(name).or_insert(schema);
        }
        root_name
    }

    pub fn register(&mut self, spec: OperationSpec) {
        self.operations.push(spec);
    }

    #[must_use]
    pub fn operations(&self) -> &[OperationSpec] {
        &self.operations
    }

    #[must_use]
    pub fn build(&self, title: &str, version: &str) -> OpenApi {
        tracing::debug!("building OpenAPI document for {} operations", self.operations.len());

        let mut paths = PathsBuilder::new();
        for spec in &self.operations {
            let mut op = OperationBuilder::new()
                .operation_id(Some(spec.operation_id.clone()))
                .summary(Some(spec.summary.clone()))
                .tag("Calc");

            if let Some((name, description)) = &spec.path_param {
                let param = ParameterBuilder::new()
                    .name(name)
                    .parameter_in(ParameterIn::Path)
                    .required(Required::True)
                    .description(Some(description.clone()))
                    .schema(Some(primitive(Type::String)))
                    .build();
                op = op.parameter(param);
            }

            if let Some(schema_name) = &spec.request_body {
                let content = ContentBuilder::new()
                    .schema(Some(RefOr::Ref(Ref::from_schema_name(schema_name.clone()))))
                    .build();
                let body = RequestBodyBuilder::new()
                    .content("application/json", content)
                    .required(Some(Required::True))
                    .build();
                op = op.request_body(Some(body));
            }

            let responses = ResponsesBuilder::new()
                .response(
                    StatusCode::OK.as_str(),
                    json_response("Success", &spec.success),
                )
                .response(
                    StatusCode::BAD_REQUEST.as_str(),
                    json_response("Failure", &spec.failure),
                )
                .build();
            op = op.responses(responses);

            let method = match spec.method {
                Method::POST => HttpMethod::Post,
                Method::DELETE => HttpMethod::Delete,
                _ => HttpMethod::Get,
            };
            let item = PathItemBuilder::new().operation(method, op.build()).build();
            paths = paths.path(spec.path.clone(), item);
        }

        let mut components = ComponentsBuilder::new();
        for (name, schema) in &self.components {
            components = components.schema(name.clone(), schema.clone());
        }

        let info = InfoBuilder::new().title(title).version(version).build();

        OpenApiBuilder::new()
            .info(info)
            .paths(paths.build())
            .components(Some(components.build()))
            .build()
    }
}

fn json_response(description: &str, body: &BodySchema) -> Response {
    let content = ContentBuilder::new().schema(Some(body.to_schema())).build();
    ResponseBuilder::new()
        .description(description)
        .content("application/json", content)
        .build()
}
