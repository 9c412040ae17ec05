// Integration tests for QualityClient against a mocked MES API

use secom_quality_client::{
    QualityClient, QualityClientConfig, QualityError,
    model::{Classification, DefectType, PageRequest},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param, query_param_is_missing},
};

fn quality_result(id: i64, classification: i32, risk: f64, score: f64) -> serde_json::Value {
    json!({
        "resultId": id,
        "lot": {"lotId": id * 10, "lotNumber": format!("LOT-{:03}", id), "status": "completed"},
        "classification": classification,
        "predictedRisk": risk,
        "qualityScore": score,
        "defectType": if classification == 1 { json!("electrical_fail") } else { json!(null) }
    })
}

fn page(total: u64, content: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "totalPages": 1,
        "totalElements": total,
        "size": 20,
        "number": 0,
        "numberOfElements": content.len(),
        "first": true,
        "last": true,
        "empty": content.is_empty(),
        "content": content
    })
}

async fn client_for(server: &MockServer) -> QualityClient {
    QualityClient::from_base_url(&format!("{}/api/v1", server.uri())).unwrap()
}

#[tokio::test]
async fn test_get_result_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quality_result(1, -1, 0.1, 95.0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.get_result_by_id(1).await.unwrap();

    assert_eq!(result.result_id, Some(1));
    assert_eq!(result.classification, Some(Classification::Pass));
    assert_eq!(result.lot_number(), Some("LOT-001"));
}

#[tokio::test]
async fn test_get_result_by_id_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_result_by_id(999).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_all_results_without_pagination_sends_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results"))
        .and(query_param_is_missing("page"))
        .and(query_param_is_missing("size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            2,
            vec![quality_result(1, -1, 0.2, 90.0), quality_result(2, 1, 0.8, 40.0)],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let results = client.get_all_results(PageRequest::default()).await.unwrap();

    assert_eq!(results.total_elements, 2);
    assert_eq!(results.content.len(), 2);
}

#[tokio::test]
async fn test_get_passed_results_with_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/passed"))
        .and(query_param("page", "1"))
        .and(query_param("size", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            51,
            vec![quality_result(51, -1, 0.1, 99.0)],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let results = client
        .get_passed_results(PageRequest::new(1, 50))
        .await
        .unwrap();

    assert_eq!(results.total_elements, 51);
    assert!(results.content[0].is_passed());
}

#[tokio::test]
async fn test_get_failed_results_size_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/failed"))
        .and(query_param("size", "5"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let results = client
        .get_failed_results(PageRequest {
            page: None,
            size: Some(5),
        })
        .await
        .unwrap();

    assert!(results.empty);
}

#[tokio::test]
async fn test_get_result_by_lot_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/lot/30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quality_result(3, 1, 0.9, 20.0)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.get_result_by_lot_id(30).await.unwrap();

    assert_eq!(result.lot.unwrap().lot_id, Some(30));
}

#[tokio::test]
async fn test_get_high_risk_results_uses_default_threshold() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/high-risk"))
        .and(query_param("threshold", "0.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            quality_result(4, 1, 0.95, 10.0),
            quality_result(5, 1, 0.75, 30.0)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let results = client.get_high_risk_results(None).await.unwrap();

    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_get_high_risk_results_with_threshold() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/high-risk"))
        .and(query_param("threshold", "0.85"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.get_high_risk_results(Some(0.85)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_results_by_defect_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/defect/electrical_fail"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([quality_result(6, 1, 0.5, 50.0)])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let results = client
        .get_results_by_defect_type(DefectType::ElectricalFail)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].defect_type.as_deref(), Some("electrical_fail"));
}

#[tokio::test]
async fn test_get_quality_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quality_result(2, 1, 0.8, 40.0)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let summary = client.get_quality_summary(2).await.unwrap();

    assert!(!summary.is_passed);
    assert!(summary.is_high_risk);
    assert!(summary.has_defects);
    assert_eq!(summary.result.result_id, Some(2));
}

async fn mount_statistics(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            4,
            vec![
                quality_result(1, -1, 0.1, 90.0),
                quality_result(2, -1, 0.2, 80.0),
                quality_result(3, -1, 0.3, 70.0),
                quality_result(4, 1, 0.9, 40.0),
            ],
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/passed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(3, vec![])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/failed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, vec![])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/high-risk"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([quality_result(4, 1, 0.9, 40.0)])),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_quality_statistics() {
    let server = MockServer::start().await;
    mount_statistics(&server).await;

    let client = client_for(&server).await;
    let stats = client.get_quality_statistics().await.unwrap();

    assert_eq!(stats.total_results, 4);
    assert_eq!(stats.passed_count, 3);
    assert_eq!(stats.failed_count, 1);
    assert_eq!(stats.high_risk_count, 1);
    assert!((stats.pass_rate - 75.0).abs() < 1e-9);
    assert!((stats.average_quality_score - 70.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_get_quality_statistics_propagates_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_quality_statistics().await.unwrap_err();

    assert!(matches!(err, QualityError::RequestFailed { status: 500, .. }));
}

#[tokio::test]
async fn test_safe_get_result_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.safe_get_result(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_safe_get_result_server_error_is_propagated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/5"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.safe_get_result(5).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_safe_get_result_unreachable_is_none() {
    let config = QualityClientConfig::new("http://127.0.0.1:1/api/v1").with_timeouts(500, 1000);
    let client = QualityClient::new(config).unwrap();

    assert!(client.safe_get_result(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_json_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/8"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_result_by_id(8).await.unwrap_err();

    assert!(matches!(err, QualityError::Serialization(_)));
}

#[tokio::test]
async fn test_failover_to_next_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quality_result(1, -1, 0.1, 95.0)))
        .expect(1)
        .mount(&server)
        .await;

    let config = QualityClientConfig::with_servers(vec![
        "http://127.0.0.1:1/api/v1".to_string(),
        format!("{}/api/v1", server.uri()),
    ])
    .with_timeouts(500, 2000);
    let client = QualityClient::new(config).unwrap();

    let result = client.get_result_by_id(1).await.unwrap();
    assert_eq!(result.result_id, Some(1));
    assert_eq!(client.current_server(), format!("{}/api/v1", server.uri()));
}

#[tokio::test]
async fn test_concurrent_requests_fail_over_together() {
    let server = MockServer::start().await;
    mount_statistics(&server).await;

    let config = QualityClientConfig::with_servers(vec![
        "http://127.0.0.1:1/api/v1".to_string(),
        format!("{}/api/v1", server.uri()),
    ])
    .with_timeouts(500, 2000);
    let client = QualityClient::new(config).unwrap();

    // the statistics requests run concurrently and all hit the dead address first
    let stats = client.get_quality_statistics().await.unwrap();
    assert_eq!(stats.total_results, 4);
    assert_eq!(client.current_server(), format!("{}/api/v1", server.uri()));

    for _ in 0..5 {
        let stats = client.get_quality_statistics().await.unwrap();
        assert_eq!(stats.passed_count, 3);
    }
}

#[tokio::test]
async fn test_ping_requests_single_element_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/quality/results"))
        .and(query_param("page", "0"))
        .and(query_param("size", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.ping().await.unwrap();
}
