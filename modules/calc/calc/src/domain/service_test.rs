#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp, clippy::approx_constant)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use calc_sdk::{Constant, Operator, RawOperand};
use sea_orm::{ConnectionTrait as DbConnTrait, DatabaseConnection};

use super::error::DomainError;
use super::repo::ConstantsRepository;
use super::service::{Service, ServiceConfig};

/// In-memory repository. Each name maps to a list of rows so tests can
/// simulate a table that lost its key constraint.
#[derive(Default)]
struct MockRepository {
    rows: Mutex<BTreeMap<String, Vec<f64>>>,
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl MockRepository {
    fn with_rows(rows: &[(&str, f64)]) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.rows.lock().unwrap();
            for (name, value) in rows {
                map.entry((*name).to_owned()).or_default().push(*value);
            }
        }
        repo
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    fn enter(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(DomainError::persistence(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ConstantsRepository for MockRepository {
    async fn find_by_name<C: DbConnTrait + Send + Sync>(
        &self,
        _conn: &C,
        name: &str,
    ) -> Result<Vec<Constant>, DomainError> {
        self.enter()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .get(name)
            .map(|values| values.iter().map(|v| Constant::new(name, *v)).collect())
            .unwrap_or_default())
    }

    async fn upsert<C: DbConnTrait + Send + Sync>(
        &self,
        _conn: &C,
        name: &str,
        value: f64,
    ) -> Result<(), DomainError> {
        self.enter()?;
        self.rows
            .lock()
            .unwrap()
            .insert(name.to_owned(), vec![value]);
        Ok(())
    }

    async fn delete<C: DbConnTrait + Send + Sync>(
        &self,
        _conn: &C,
        name: &str,
    ) -> Result<bool, DomainError> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().remove(name).is_some())
    }

    async fn list_ordered<C: DbConnTrait + Send + Sync>(
        &self,
        _conn: &C,
    ) -> Result<Vec<Constant>, DomainError> {
        self.enter()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .flat_map(|(name, values)| values.iter().map(|v| Constant::new(name.clone(), *v)))
            .collect())
    }
}

fn service(repo: MockRepository) -> (Service<MockRepository>, Arc<MockRepository>) {
    let repo = Arc::new(repo);
    let svc = Service::new(
        DatabaseConnection::Disconnected,
        Arc::clone(&repo),
        &ServiceConfig::default(),
    );
    (svc, repo)
}

fn text(s: &str) -> RawOperand {
    RawOperand::from(s)
}

#[tokio::test]
async fn literal_operands_skip_the_store() {
    let (svc, repo) = service(MockRepository::failing("store is down"));

    let result = svc
        .calculate(Operator::Multiply, &text("6"), &RawOperand::Number(7.0))
        .await
        .unwrap();

    assert_eq!(result, 42.0);
    assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn constant_operand_is_resolved() {
    let (svc, _repo) = service(MockRepository::with_rows(&[("pi", 3.14)]));

    let result = svc
        .calculate(Operator::Add, &text("2"), &text("pi"))
        .await
        .unwrap();

    assert!((result - 5.14).abs() < 1e-9);
}

#[tokio::test]
async fn missing_constant_reports_name() {
    let (svc, _repo) = service(MockRepository::default());

    let err = svc
        .calculate(Operator::Add, &text("1"), &text("pi"))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::not_found("pi"));
    assert_eq!(err.to_string(), "unable to locate constant 'pi'");
}

#[tokio::test]
async fn duplicate_rows_are_an_integrity_failure() {
    let (svc, _repo) = service(MockRepository::with_rows(&[("e", 2.71), ("e", 2.72)]));

    let err = svc
        .calculate(Operator::Subtract, &text("e"), &text("1"))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::ambiguous("e", 2));
}

#[tokio::test]
async fn division_by_zero_literal() {
    let (svc, _repo) = service(MockRepository::default());

    let err = svc
        .calculate(Operator::Divide, &text("10"), &text("0"))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::DivisionByZero);
    assert!(err.to_string().contains("division by zero"));
}

#[tokio::test]
async fn division_by_zero_constant() {
    let (svc, _repo) = service(MockRepository::with_rows(&[("zero", 0.0)]));

    let err = svc
        .calculate(Operator::Divide, &text("1"), &text("zero"))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::DivisionByZero);
}

#[tokio::test]
async fn empty_operand_is_validation_error() {
    let (svc, repo) = service(MockRepository::default());

    let err = svc
        .calculate(Operator::Add, &text("  "), &text("1"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn store_failure_surfaces_message() {
    let (svc, _repo) = service(MockRepository::failing("connection refused"));

    let err = svc
        .calculate(Operator::Add, &text("pi"), &text("1"))
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::persistence("connection refused"));
}

#[tokio::test]
async fn create_then_resolve_round_trip() {
    let (svc, _repo) = service(MockRepository::default());

    svc.create_constant(Some("tau"), Some(&text("6.28")))
        .await
        .unwrap();
    let result = svc
        .calculate(Operator::Multiply, &text("tau"), &text("1"))
        .await
        .unwrap();

    assert_eq!(result, 6.28);
}

#[tokio::test]
async fn create_overwrites_existing_value() {
    let (svc, repo) = service(MockRepository::default());

    svc.create_constant(Some("g"), Some(&RawOperand::Number(9.8)))
        .await
        .unwrap();
    svc.create_constant(Some("g"), Some(&RawOperand::Number(9.81)))
        .await
        .unwrap();

    let rows = repo.rows.lock().unwrap();
    assert_eq!(rows.get("g"), Some(&vec![9.81]));
}

#[tokio::test]
async fn create_validates_payload_before_touching_store() {
    let (svc, repo) = service(MockRepository::default());
    let long_name = "x".repeat(256);

    let cases: [(Option<&str>, Option<RawOperand>); 6] = [
        (None, Some(text("5"))),
        (Some(""), Some(text("5"))),
        (Some("five"), None),
        (Some("five"), Some(text("abc"))),
        (Some("12"), Some(text("5"))),
        (Some(long_name.as_str()), Some(text("5"))),
    ];
    for (name, value) in &cases {
        let err = svc
            .create_constant(*name, value.as_ref())
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::Validation { .. }),
            "expected validation error for {name:?}"
        );
    }
    assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (svc, _repo) = service(MockRepository::with_rows(&[("pi", 3.14)]));

    svc.delete_constant(Some("pi")).await.unwrap();
    svc.delete_constant(Some("pi")).await.unwrap();

    let err = svc
        .calculate(Operator::Add, &text("pi"), &text("1"))
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::not_found("pi"));
}

#[tokio::test]
async fn delete_requires_name() {
    let (svc, _repo) = service(MockRepository::default());

    let err = svc.delete_constant(None).await.unwrap_err();
    assert_eq!(err, DomainError::validation("name is required"));
}

#[tokio::test]
async fn list_is_ordered_by_name() {
    let (svc, _repo) = service(MockRepository::default());

    svc.create_constant(Some("b"), Some(&RawOperand::Number(2.0)))
        .await
        .unwrap();
    svc.create_constant(Some("a"), Some(&RawOperand::Number(1.0)))
        .await
        .unwrap();

    let list = svc.list_constants().await.unwrap();
    assert_eq!(list, vec![Constant::new("a", 1.0), Constant::new("b", 2.0)]);
}
