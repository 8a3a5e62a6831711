use calc_sdk::{Constant, RawOperand};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Body of the arithmetic endpoints.
///
/// Each operand is a number, a numeric literal string or a constant name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CalcRequest {
    #[schema(value_type = Object, example = "2")]
    pub arg1: Option<Value>,
    #[schema(value_type = Object, example = "pi")]
    pub arg2: Option<Value>,
}

impl CalcRequest {
    /// # Errors
    ///
    /// `Validation` when an operand is missing, null, or not a number/string.
    pub fn into_operands(self) -> Result<(RawOperand, RawOperand), DomainError> {
        Ok((operand("arg1", self.arg1)?, operand("arg2", self.arg2)?))
    }
}

/// REST DTO for creating or overwriting a constant
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateConstantRequest {
    #[schema(example = "pi")]
    pub name: Option<String>,
    /// Number or numeric literal string
    #[schema(value_type = Object, example = "3.14")]
    pub value: Option<Value>,
}

impl CreateConstantRequest {
    /// Raw value for the registry. A missing or null value stays `None` so
    /// the registry reports it.
    ///
    /// # Errors
    ///
    /// `Validation` when the value is neither a number nor a string.
    pub fn raw_value(&self) -> Result<Option<RawOperand>, DomainError> {
        match &self.value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(|v| Some(RawOperand::Number(v)))
                .ok_or_else(|| DomainError::validation("value must be numeric")),
            Some(Value::String(s)) => Ok(Some(RawOperand::Text(s.clone()))),
            Some(_) => Err(DomainError::validation("value must be numeric")),
        }
    }
}

/// REST DTO for deleting a constant
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteConstantRequest {
    #[schema(example = "pi")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConstantDto {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConstantListDto {
    pub constants: Vec<ConstantDto>,
}

/// Failure body of the constant endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

impl From<Constant> for ConstantDto {
    fn from(c: Constant) -> Self {
        Self {
            name: c.name,
            value: c.value,
        }
    }
}

impl From<Vec<Constant>> for ConstantListDto {
    fn from(constants: Vec<Constant>) -> Self {
        Self {
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }
}

fn operand(field: &str, value: Option<Value>) -> Result<RawOperand, DomainError> {
    match value {
        None | Some(Value::Null) => Err(DomainError::validation(format!("{field} is required"))),
        Some(Value::Number(n)) => n.as_f64().map(RawOperand::Number).ok_or_else(|| {
            DomainError::validation(format!("numeric literal '{n}' is out of range"))
        }),
        Some(Value::String(s)) => Ok(RawOperand::Text(s)),
        Some(_) => Err(DomainError::validation(format!(
            "{field} must be a number or a constant name"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: &Value) -> CalcRequest {
        serde_json::from_value(body.clone()).unwrap()
    }

    #[test]
    fn operands_accept_numbers_and_strings() {
        let (a, b) = request(&json!({"arg1": 2, "arg2": "pi"}))
            .into_operands()
            .unwrap();
        assert_eq!(a, RawOperand::Number(2.0));
        assert_eq!(b, RawOperand::from("pi"));
    }

    #[test]
    fn missing_or_null_operand_is_required() {
        let err = request(&json!({"arg2": "1"})).into_operands().unwrap_err();
        assert_eq!(err.to_string(), "arg1 is required");

        let err = request(&json!({"arg1": "1", "arg2": null}))
            .into_operands()
            .unwrap_err();
        assert_eq!(err.to_string(), "arg2 is required");
    }

    #[test]
    fn structured_operand_is_rejected() {
        for bad in [json!(true), json!([1]), json!({"v": 1})] {
            let err = request(&json!({"arg1": bad, "arg2": "1"}))
                .into_operands()
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation { .. }));
        }
    }

    #[test]
    fn create_value_shapes() {
        let req: CreateConstantRequest =
            serde_json::from_value(json!({"name": "pi", "value": 3.5})).unwrap();
        assert_eq!(req.raw_value().unwrap(), Some(RawOperand::Number(3.5)));

        let req: CreateConstantRequest = serde_json::from_value(json!({"name": "pi"})).unwrap();
        assert_eq!(req.raw_value().unwrap(), None);

        let req: CreateConstantRequest =
            serde_json::from_value(json!({"name": "pi", "value": false})).unwrap();
        assert!(req.raw_value().is_err());
    }

    #[test]
    fn list_dto_shape() {
        let dto: ConstantListDto = vec![Constant::new("a", 1.0)].into();
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({"constants": [{"name": "a", "value": 1.0}]})
        );
    }
}
