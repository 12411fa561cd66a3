//! Integration tests for `HttpTransport` against a mock Admin API.
//!
//! The shop's API host is pointed at a local `wiremock` server, so every
//! request goes through the real HTTP stack.

use serde_json::json;
use shopify_metafields::metafield_definitions::list_query;
use shopify_metafields::{
    AccessToken, AdminConfig, ApiVersion, GraphqlClient, HostUrl, HttpTransport,
    MetafieldDefinition, MetafieldDefinitionError, OwnerType, ShopDomain, Transport,
    TransportError,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GRAPHQL_PATH: &str = "/admin/api/2025-10/graphql.json";

fn config_for(server: &MockServer) -> AdminConfig {
    AdminConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("test-access-token").unwrap())
        .api_version(ApiVersion::V2025_10)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn transport_for(server: &MockServer) -> HttpTransport {
    HttpTransport::new(&config_for(server)).unwrap()
}

// ============================================================================
// End-to-end operations
// ============================================================================

#[tokio::test]
async fn test_list_over_http() {
    let mock_server = MockServer::start().await;
    let expected_body = list_query(Some(OwnerType::Product), "oyster").to_body();

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("X-Shopify-Access-Token", "test-access-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "metafieldDefinitions": {
                    "edges": [{
                        "node": {
                            "id": "gid://shopify/MetafieldDefinition/340033559",
                            "name": "Product Type",
                            "namespace": "oyster",
                            "key": "product_type",
                            "validations": []
                        }
                    }]
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GraphqlClient::new(transport_for(&mock_server));
    let definitions = client
        .metafield_definitions()
        .list(Some(OwnerType::Product), "oyster")
        .await
        .unwrap();

    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].key, "product_type");
    assert_eq!(definitions[0].id, "gid://shopify/MetafieldDefinition/340033559");
}

#[tokio::test]
async fn test_create_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "metafieldDefinitionCreate": {
                    "createdDefinition": {
                        "id": "gid://shopify/MetafieldDefinition/343506967",
                        "name": "Test Definition"
                    },
                    "userErrors": []
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = GraphqlClient::new(transport_for(&mock_server));
    let created = client
        .metafield_definitions()
        .create(&MetafieldDefinition {
            name: "Test Definition".into(),
            namespace: "oyster".into(),
            key: "test_definition".into(),
            owner_type: Some(OwnerType::Product),
            type_name: Some("single_line_text_field".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, "gid://shopify/MetafieldDefinition/343506967");
    assert_eq!(created.name, "Test Definition");
}

#[tokio::test]
async fn test_debug_execution_hits_debug_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(wiremock::matchers::query_param("debug", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "metafieldDefinitions": { "edges": [] } },
            "extensions": { "cost": { "requestedQueryCost": 12 } }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GraphqlClient::new(transport_for(&mock_server));
    let body = client
        .execute_with_debug(&list_query(None, ""))
        .await
        .unwrap();

    assert_eq!(body["extensions"]["cost"]["requestedQueryCost"], 12);
}

// ============================================================================
// Transport failures
// ============================================================================

#[tokio::test]
async fn test_unauthorized_is_response_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "errors": "[API] Invalid API key or access token" }))
                .insert_header("X-Request-Id", "abc-123"),
        )
        .mount(&mock_server)
        .await;

    let client = GraphqlClient::new(transport_for(&mock_server));
    let result = client
        .metafield_definitions()
        .list(Some(OwnerType::Product), "")
        .await;

    match result {
        Err(MetafieldDefinitionError::Transport(TransportError::Response(e))) => {
            assert_eq!(e.code, 401);
            assert_eq!(e.error_reference.as_deref(), Some("abc-123"));
            assert!(e.message.contains("Invalid API key or access token"));
            assert!(e.message.contains("abc-123"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_exhausts_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "errors": "Internal Server Error" })),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server).with_tries(2);
    let result = transport.execute("graphql.json", &json!({ "query": "{ shop { name } }" })).await;

    match result {
        Err(TransportError::MaxRetries(e)) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.tries, 2);
            assert!(e.message.contains("Internal Server Error"));
        }
        other => panic!("expected max retries error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_throttled_request_is_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({ "errors": "Throttled" }))
                .insert_header("Retry-After", "0"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "metafieldDefinitions": { "edges": [] } }
        })))
        .mount(&mock_server)
        .await;

    let client = GraphqlClient::new(transport_for(&mock_server).with_tries(3));
    let definitions = client.metafield_definitions().list(None, "").await.unwrap();

    assert!(definitions.is_empty());
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "errors": "Not Found" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server).with_tries(3);
    let result = transport.execute("graphql.json", &json!({})).await;

    assert!(matches!(
        result,
        Err(TransportError::Response(ref e)) if e.code == 404
    ));
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let result = transport.execute("graphql.json", &json!({})).await;

    assert!(matches!(
        result,
        Err(TransportError::InvalidBody { code: 200, .. })
    ));
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let body = transport.execute("graphql.json", &json!({})).await.unwrap();

    assert_eq!(body, json!({}));
}
