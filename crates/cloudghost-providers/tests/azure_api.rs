use cloudghost_providers::{
    AzureClient, AzureEndpoints, ClientCredentials, Error, HttpClient, HttpSettings,
    SharedKeyCredential, StorageClient,
};
use cloudghost_types::{KeyListing, StorageAccount};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn azure_client(server: &MockServer) -> AzureClient {
    let endpoints = AzureEndpoints {
        login: server.uri(),
        management: server.uri(),
        blob: format!("{}/{{account}}", server.uri()),
    };
    AzureClient::new(HttpClient::new(&HttpSettings::default()).unwrap(), endpoints)
}

fn credentials() -> ClientCredentials {
    ClientCredentials {
        client_id: "app-id".to_string(),
        client_secret: "s3cret".to_string(),
        tenant_id: "tenant-1".to_string(),
    }
}

#[tokio::test]
async fn test_request_token_posts_client_credentials_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=app-id"))
        .and(body_string_contains(
            "scope=https%3A%2F%2Fmanagement.azure.com%2F.default",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "eyJ.tok", "expires_in": 3599})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = azure_client(&server)
        .request_token(&credentials())
        .await
        .unwrap();
    assert_eq!(token.access_token, "eyJ.tok");
    assert_eq!(token.expires_in, Some(3599));
}

#[tokio::test]
async fn test_request_token_rejection_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tenant-1/oauth2/v2.0/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"invalid_client\"}"))
        .mount(&server)
        .await;

    let err = azure_client(&server)
        .request_token(&credentials())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "token request failed: 401 Unauthorized\n{\"error\":\"invalid_client\"}"
    );
}

#[tokio::test]
async fn test_request_token_without_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "Bearer"})))
        .mount(&server)
        .await;

    let err = azure_client(&server)
        .request_token(&credentials())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no access_token in response");
}

#[tokio::test]
async fn test_list_subscriptions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions"))
        .and(query_param("api-version", "2020-01-01"))
        .and(header("authorization", "Bearer eyJ.tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"subscriptionId": "sub-1", "displayName": "Prod"},
                {"subscriptionId": "sub-2", "displayName": "Dev"}
            ]
        })))
        .mount(&server)
        .await;

    let subs = azure_client(&server)
        .list_subscriptions("eyJ.tok")
        .await
        .unwrap();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].id, "sub-1");
    assert_eq!(subs[0].name, "Prod");
}

#[tokio::test]
async fn test_management_non_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/resourcegroups"))
        .and(query_param("api-version", "2021-04-01"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = azure_client(&server)
        .resource_groups("tok", "sub-1")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "non-OK HTTP status: 403 Forbidden");
}

#[tokio::test]
async fn test_role_assignments_and_policies_return_documents() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/providers/Microsoft.Authorization/roleAssignments",
        ))
        .and(query_param("api-version", "2022-04-01"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"value": [{"name": "ra-1"}]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/providers/Microsoft.Authorization/policyDefinitions"))
        .and(query_param("api-version", "2021-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": []})))
        .mount(&server)
        .await;

    let client = azure_client(&server);
    let roles = client.role_assignments("tok", "sub-1").await.unwrap();
    assert_eq!(roles["value"][0]["name"], "ra-1");
    let policies = client.policy_definitions("tok").await.unwrap();
    assert_eq!(policies, json!({"value": []}));
}

#[tokio::test]
async fn test_storage_accounts_and_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/subscriptions/sub-1/providers/Microsoft.Storage/storageAccounts",
        ))
        .and(query_param("api-version", "2022-09-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"name": "open", "id": "/subscriptions/sub-1/resourceGroups/rg-a/providers/Microsoft.Storage/storageAccounts/open"},
                {"name": "locked", "id": "/subscriptions/sub-1/resourceGroups/rg-b/providers/Microsoft.Storage/storageAccounts/locked"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-a/providers/Microsoft.Storage/storageAccounts/open/listKeys",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("{\"keys\":[{\"keyName\":\"key1\"}]}"),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(
            "/subscriptions/sub-1/resourceGroups/rg-b/providers/Microsoft.Storage/storageAccounts/locked/listKeys",
        ))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = azure_client(&server);
    let accounts = client.storage_accounts("tok", "sub-1").await.unwrap();
    assert_eq!(
        accounts[0],
        StorageAccount {
            name: "open".to_string(),
            id: "/subscriptions/sub-1/resourceGroups/rg-a/providers/Microsoft.Storage/storageAccounts/open"
                .to_string(),
            resource_group: "rg-a".to_string(),
        }
    );

    let open = client.list_storage_keys("tok", "sub-1", &accounts[0]).await;
    assert_eq!(
        open,
        KeyListing::Keys {
            body: "{\"keys\":[{\"keyName\":\"key1\"}]}".to_string()
        }
    );

    let locked = client.list_storage_keys("tok", "sub-1", &accounts[1]).await;
    assert_eq!(
        locked,
        KeyListing::Denied {
            status: 403,
            reason: "403 Forbidden".to_string()
        }
    );
}

fn storage_client(server: &MockServer) -> StorageClient {
    let endpoints = AzureEndpoints {
        blob: format!("{}/{{account}}", server.uri()),
        ..AzureEndpoints::default()
    };
    // base64("account-key")
    let credential = SharedKeyCredential::new("acct", "YWNjb3VudC1rZXk=").unwrap();
    StorageClient::new(
        HttpClient::new(&HttpSettings::default()).unwrap(),
        &endpoints,
        credential,
    )
}

#[tokio::test]
async fn test_list_blobs_page_is_signed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/acct/images"))
        .and(query_param("restype", "container"))
        .and(query_param("comp", "list"))
        .and(header("x-ms-version", "2023-11-03"))
        .and(header_exists("x-ms-date"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<EnumerationResults><Blobs><Blob><Name>a.png</Name></Blob></Blobs><NextMarker>m1</NextMarker></EnumerationResults>",
        ))
        .mount(&server)
        .await;

    let page = storage_client(&server)
        .list_blobs_page("images", None)
        .await
        .unwrap();
    assert_eq!(page.names, vec!["a.png"]);
    assert_eq!(page.next_marker.as_deref(), Some("m1"));

    let received = server.received_requests().await.unwrap();
    let auth = received[0].headers.get("authorization").unwrap();
    assert!(auth.to_str().unwrap().starts_with("SharedKey acct:"));
}

#[tokio::test]
async fn test_list_blobs_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("AuthenticationFailed"))
        .mount(&server)
        .await;

    let err = storage_client(&server)
        .list_blobs_page("images", None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Rejected { .. }));
    assert!(err.to_string().starts_with("failed to list blobs: 403 Forbidden"));
}

#[tokio::test]
async fn test_download_blob_writes_file() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/acct/images/dir/a.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 2048]))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("a.png");
    let written = storage_client(&server)
        .download_blob("images", "dir/a.png", &output)
        .await?;

    assert_eq!(written, 2048);
    assert_eq!(std::fs::read(&output)?, vec![7u8; 2048]);
    Ok(())
}

#[tokio::test]
async fn test_download_missing_blob_creates_no_file() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("BlobNotFound"))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("missing.bin");
    let err = storage_client(&server)
        .download_blob("images", "missing.bin", &output)
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(!output.exists());
    Ok(())
}
