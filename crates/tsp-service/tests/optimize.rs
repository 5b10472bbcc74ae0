use rstest::rstest;
use serde_json::{json, Value};
use tsp_core::{DistanceMatrix, SolveError, TourSolution, TspSolver};
use tsp_service::{ErrorKind, OptimizeRequest, RouteOptimizer, ServiceConfig, ServiceError};

fn request(body: Value) -> OptimizeRequest {
    serde_json::from_value(body).unwrap()
}

fn uniform(n: usize) -> Value {
    let rows: Vec<Vec<u32>> = (0..n)
        .map(|i| (0..n).map(|j| u32::from(i != j)).collect())
        .collect();
    json!(rows)
}

#[test]
fn solves_and_reports_metadata() {
    let optimizer = RouteOptimizer::default();
    let response = optimizer
        .optimize(&request(json!({ "matrix": [[0, 1, 4], [1, 0, 2], [4, 2, 0]] })))
        .unwrap();
    assert_eq!(response.route, vec![0, 1, 2, 0]);
    assert_eq!(response.distance, 7.0);
    assert_eq!(response.cities, 3);
    assert_eq!(response.algorithm, "Held-Karp Dynamic Programming");

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "route": [0, 1, 2, 0],
            "distance": 7.0,
            "cities": 3,
            "algorithm": "Held-Karp Dynamic Programming"
        })
    );
}

#[test]
fn single_city_and_pair() {
    let optimizer = RouteOptimizer::default();
    let one = optimizer.optimize(&request(json!({ "matrix": [[0]] }))).unwrap();
    assert_eq!(one.route, vec![0]);
    assert_eq!(one.distance, 0.0);

    let two = optimizer
        .optimize_json(r#"{ "matrix": [[0, 5], [3, 0]] }"#)
        .unwrap();
    assert_eq!(two.route, vec![0, 1, 0]);
    assert_eq!(two.distance, 8.0);
}

#[rstest]
#[case::absent(json!({}), ErrorKind::MissingMatrix)]
#[case::null(json!({ "matrix": null }), ErrorKind::MissingMatrix)]
#[case::zero(json!({ "matrix": 0 }), ErrorKind::MissingMatrix)]
#[case::falsy_bool(json!({ "matrix": false }), ErrorKind::MissingMatrix)]
#[case::empty_string(json!({ "matrix": "" }), ErrorKind::MissingMatrix)]
#[case::string(json!({ "matrix": "[[0]]" }), ErrorKind::InvalidMatrix)]
#[case::overflow_pair(json!({ "matrix": [[0, 1e308], [1e308, 0]] }), ErrorKind::InvalidMatrix)]
#[case::overflow_triangle(json!({ "matrix": [[0, 1e308, 1e308], [1e308, 0, 1e308], [1e308, 1e308, 0]] }), ErrorKind::InvalidMatrix)]
#[case::ragged(json!({ "matrix": [[0, 1], [1, 0, 3]] }), ErrorKind::InvalidMatrix)]
#[case::diagonal(json!({ "matrix": [[1, 1], [1, 0]] }), ErrorKind::InvalidMatrix)]
#[case::negative(json!({ "matrix": [[0, -1], [1, 0]] }), ErrorKind::InvalidMatrix)]
#[case::not_numeric(json!({ "matrix": [[0, "a"], [1, 0]] }), ErrorKind::InvalidMatrix)]
#[case::scalar(json!({ "matrix": 3 }), ErrorKind::InvalidMatrix)]
#[case::empty(json!({ "matrix": [] }), ErrorKind::InvalidMatrix)]
#[case::sixteen(json!({ "matrix": uniform(16) }), ErrorKind::SizeExceeded)]
fn rejects_before_solving(#[case] body: Value, #[case] kind: ErrorKind) {
    let err = RouteOptimizer::default().optimize(&request(body)).unwrap_err();
    assert_eq!(err.kind(), kind);
    assert_eq!(err.status_code(), 400);
}

#[test]
fn fifteen_is_within_default_cap() {
    let response = RouteOptimizer::default()
        .optimize(&request(json!({ "matrix": uniform(15) })))
        .unwrap();
    assert_eq!(response.cities, 15);
    assert_eq!(response.distance, 15.0);
    assert_eq!(response.route.len(), 16);
}

#[test]
fn cap_comes_from_config() {
    let optimizer = RouteOptimizer::new(ServiceConfig { max_cities: 4 }).unwrap();
    let err = optimizer
        .optimize(&request(json!({ "matrix": uniform(5) })))
        .unwrap_err();
    assert!(matches!(err, ServiceError::SizeExceeded { cities: 5, max: 4 }));
    assert_eq!(
        err.to_response().message,
        "Maximum supported matrix size is 4x4 due to computational complexity"
    );
    assert!(optimizer.optimize(&request(json!({ "matrix": uniform(4) }))).is_ok());

    assert!(RouteOptimizer::new(ServiceConfig { max_cities: 0 }).is_err());
}

#[test]
fn invalid_matrix_is_reported_before_size() {
    let mut rows: Vec<Vec<i32>> = (0..20).map(|_| vec![0; 20]).collect();
    rows[3][7] = -2;
    let err = RouteOptimizer::default()
        .optimize(&request(json!({ "matrix": rows })))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMatrix);
}

#[test]
fn large_finite_entries_still_solve() {
    let body = json!({ "matrix": [[0, 1e300, 1e300], [1e300, 0, 1e300], [1e300, 1e300, 0]] });
    let response = RouteOptimizer::default().optimize(&request(body)).unwrap();
    assert!(response.distance.is_finite());
    assert_eq!(response.route, vec![0, 1, 2, 0]);
}

#[test]
fn malformed_body() {
    let optimizer = RouteOptimizer::default();
    for body in ["not json", "42", r#"{"matrix": [[0]]"#] {
        let err = optimizer.optimize_json(body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRequest, "{body}");
        assert_eq!(err.status_code(), 400);
    }
}

#[test]
fn parsed_body() {
    let optimizer = RouteOptimizer::default();
    let response = optimizer
        .optimize_value(json!({ "matrix": [[0, 5, 9, 10], [5, 0, 6, 7], [9, 6, 0, 8], [10, 7, 8, 0]] }))
        .unwrap();
    assert_eq!(response.route, vec![0, 1, 2, 3, 0]);
    assert_eq!(response.distance, 29.0);

    let err = optimizer.optimize_value(json!("matrix")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedRequest);
}

#[test]
fn error_payloads_match_api_wording() {
    let missing = RouteOptimizer::default()
        .optimize(&OptimizeRequest::default())
        .unwrap_err();
    assert_eq!(
        serde_json::to_value(missing.to_response()).unwrap(),
        json!({
            "error": "Missing required field: matrix",
            "message": "Please provide a distance matrix"
        })
    );

    let invalid = RouteOptimizer::default()
        .optimize(&request(json!({ "matrix": [[0, 1], [1, 0, 3]] })))
        .unwrap_err();
    assert_eq!(invalid.to_response().error, "Invalid distance matrix");

    let overflow = RouteOptimizer::default()
        .optimize(&request(json!({ "matrix": [[0, 1e308], [1e308, 0]] })))
        .unwrap_err();
    let response = overflow.to_response();
    assert_eq!(response.error, "Invalid distance matrix");
    assert_eq!(
        response.message,
        "Distances are too large to add up to a finite route length"
    );
    assert_eq!(overflow.status_code(), 400);
}

struct BrokenSolver;

impl TspSolver for BrokenSolver {
    fn algorithm(&self) -> &'static str {
        "broken"
    }

    fn solve(&self, _matrix: &DistanceMatrix) -> Result<TourSolution, SolveError> {
        Err(SolveError::MissingChoice {
            city: 2,
            remaining: 0b1010,
        })
    }
}

#[test]
fn invariant_violation_is_internal_and_opaque() {
    let optimizer = RouteOptimizer::with_solver(ServiceConfig::default(), BrokenSolver).unwrap();
    let err = optimizer
        .optimize(&request(json!({ "matrix": [[0, 1, 2], [1, 0, 3], [2, 3, 0]] })))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_eq!(err.status_code(), 500);

    let response = err.to_response();
    assert_eq!(response.error, "Internal server error");
    assert!(!response.message.contains("remaining"));
}

#[test]
fn validate_ignores_size_cap() {
    let optimizer = RouteOptimizer::new(ServiceConfig { max_cities: 2 }).unwrap();
    assert!(optimizer.validate(&uniform(16)));
    assert!(!optimizer.validate(&json!([[0, 1], [1, 0, 3]])));
}
