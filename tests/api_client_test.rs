use httpmock::prelude::*;
use purchase_sim::core::validator;
use purchase_sim::{ApiError, FormFields, HttpSimulationApi, SimulationApi, SimulationRequest};
use std::time::Duration;

fn request(value: &str, percent: &str, years: &str) -> SimulationRequest {
    validator::parse_request(&FormFields::new(value, percent, years)).unwrap()
}

#[tokio::test]
async fn test_submit_posts_wire_payload_and_parses_result() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/simulacao")
            .json_body(serde_json::json!({
                "valor_imovel": 500000.0,
                "percentual_entrada": 20.0,
                "anos_contrato": 5
            }));
        then.status(200).json_body(serde_json::json!({
            "valor_entrada": 100000.0,
            "valor_financiado": 400000.0,
            "total_a_guardar": 75000.0,
            "parcela_mensal": 1250.0
        }));
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let result = api.submit(&request("500000", "20", "5")).await.unwrap();

    api_mock.assert();
    assert_eq!(result.down_payment_amount, 100000.0);
    assert_eq!(result.financed_amount, 400000.0);
    assert_eq!(result.total_to_save, 75000.0);
    assert_eq!(result.monthly_installment, 1250.0);
}

#[tokio::test]
async fn test_server_error_uses_detail_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/simulacao");
        then.status(400).json_body(serde_json::json!({
            "detail": "Percentual de entrada deve estar entre 5% e 20%"
        }));
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let err = api.submit(&request("300000", "10", "3")).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::ServerError("Percentual de entrada deve estar entre 5% e 20%".to_string())
    );
}

#[tokio::test]
async fn test_server_error_without_payload_reports_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/simulacao");
        then.status(503).body("Service Unavailable");
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let err = api.submit(&request("300000", "10", "3")).await.unwrap_err();

    assert_eq!(err, ApiError::ServerError("HTTP status 503".to_string()));
}

#[tokio::test]
async fn test_undecodable_success_body_is_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/simulacao");
        then.status(200).json_body(serde_json::json!({"valor_entrada": 1.0}));
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let err = api.submit(&request("300000", "10", "3")).await.unwrap_err();

    assert!(matches!(err, ApiError::Unknown(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_negative_amount_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/simulacao");
        then.status(200).json_body(serde_json::json!({
            "valor_entrada": 30000.0,
            "valor_financiado": -1.0,
            "total_a_guardar": 30000.0,
            "parcela_mensal": 1250.0
        }));
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    let err = api.submit(&request("300000", "10", "3")).await.unwrap_err();

    assert!(matches!(err, ApiError::Unknown(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/simulacao");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({
                "valor_entrada": 30000.0,
                "valor_financiado": 270000.0,
                "total_a_guardar": 30000.0,
                "parcela_mensal": 1250.0
            }));
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_millis(200)).unwrap();
    let err = api.submit(&request("300000", "10", "3")).await.unwrap_err();

    assert_eq!(err, ApiError::Timeout);
}

#[tokio::test]
async fn test_unreachable_service_is_connection_failure() {
    // Nothing listens on port 1.
    let api = HttpSimulationApi::new("http://127.0.0.1:1", Duration::from_secs(5)).unwrap();
    let err = api.submit(&request("300000", "10", "3")).await.unwrap_err();

    assert_eq!(err, ApiError::ConnectionFailure);
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).json_body(serde_json::json!({"status": "healthy"}));
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    assert!(api.check_health().await);
    health_mock.assert();
}

#[tokio::test]
async fn test_health_check_never_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(500);
    });

    let api = HttpSimulationApi::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    assert!(!api.check_health().await);

    let unreachable = HttpSimulationApi::new("http://127.0.0.1:1", Duration::from_secs(5)).unwrap();
    assert!(!unreachable.check_health().await);
}
