use cloudghost_providers::{GcpClient, GcpEndpoints, HttpClient, HttpSettings, permission_probes};
use cloudghost_types::{AccessVerdict, ImpersonationOutcome, ProbeBody, ProbeKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "ya29.test";

fn mock_endpoints(server: &MockServer) -> GcpEndpoints {
    let uri = server.uri();
    GcpEndpoints {
        oauth2: uri.clone(),
        compute: uri.clone(),
        storage: uri.clone(),
        cloudfunctions: uri.clone(),
        run: uri.clone(),
        bigquery: uri.clone(),
        iam: uri.clone(),
        iamcredentials: uri,
    }
}

fn gcp_client(server: &MockServer) -> GcpClient {
    GcpClient::new(
        HttpClient::new(&HttpSettings::default()).unwrap(),
        mock_endpoints(server),
        TOKEN,
    )
}

#[tokio::test]
async fn test_probe_sweep_classifies_each_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tokeninfo"))
        .and(query_param("access_token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"scope": "cloud-platform"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/compute/v1/projects/p1/aggregated/instances"))
        .and(header("authorization", "Bearer ya29.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": {}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/storage/v1/b"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/locations/-/functions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/locations/-/services"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    // BigQuery is left unmatched so wiremock answers 404

    let client = gcp_client(&server);
    let probes = permission_probes(client.endpoints(), "p1", client.token());

    let mut verdicts = Vec::new();
    for probe in &probes {
        verdicts.push(client.probe(probe).await);
    }

    assert_eq!(verdicts[0].verdict, AccessVerdict::Granted);
    assert_eq!(verdicts[0].body, None);

    assert_eq!(verdicts[1].kind, ProbeKind::Dump);
    assert_eq!(
        verdicts[1].body,
        Some(ProbeBody::Json {
            body: json!({"items": {}})
        })
    );

    assert_eq!(verdicts[2].verdict, AccessVerdict::Forbidden);
    assert_eq!(verdicts[3].verdict, AccessVerdict::Unauthorized);
    assert_eq!(
        verdicts[4].verdict,
        AccessVerdict::Unexpected { status: 500 }
    );
    assert_eq!(
        verdicts[5].verdict,
        AccessVerdict::Unexpected { status: 404 }
    );
    assert_eq!(verdicts[5].status, Some(404));
}

#[tokio::test]
async fn test_dump_probe_with_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/compute/v1/projects/p1/aggregated/instances"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>denied</html>"))
        .mount(&server)
        .await;

    let client = gcp_client(&server);
    let probes = permission_probes(client.endpoints(), "p1", client.token());
    let report = client.probe(&probes[1]).await;

    assert_eq!(report.verdict, AccessVerdict::Forbidden);
    assert!(matches!(report.body, Some(ProbeBody::Invalid { .. })));
}

#[tokio::test]
async fn test_probe_transport_failure_is_reported() {
    let endpoints = GcpEndpoints {
        oauth2: "http://127.0.0.1:1".to_string(),
        ..GcpEndpoints::default()
    };
    let client = GcpClient::new(
        HttpClient::new(&HttpSettings::default()).unwrap(),
        endpoints,
        TOKEN,
    );
    let probes = permission_probes(client.endpoints(), "p1", client.token());
    let report = client.probe(&probes[0]).await;

    assert!(matches!(report.verdict, AccessVerdict::RequestFailed { .. }));
    assert_eq!(report.status, None);
}

#[tokio::test]
async fn test_list_compute_instances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/compute/v1/projects/p1/aggregated/instances"))
        .and(header("authorization", "Bearer ya29.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": {"zones/us-central1-a": {"instances": [{"name": "vm-1"}]}}
        })))
        .mount(&server)
        .await;

    let doc = gcp_client(&server).list_compute_instances("p1").await.unwrap();
    assert_eq!(
        doc["items"]["zones/us-central1-a"]["instances"][0]["name"],
        "vm-1"
    );
}

#[tokio::test]
async fn test_list_buckets_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/storage/v1/b"))
        .and(query_param("project", "p1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = gcp_client(&server).list_buckets("p1").await.unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Failed to retrieve storage buckets. Status code: 401, token is invalid or expired"
    );
}

#[tokio::test]
async fn test_list_service_accounts_skips_entries_without_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/serviceAccounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accounts": [
                {"email": "a@p1.iam.gserviceaccount.com", "displayName": "A"},
                {"displayName": "broken"},
                {"email": "b@p1.iam.gserviceaccount.com"}
            ]
        })))
        .mount(&server)
        .await;

    let accounts = gcp_client(&server).list_service_accounts("p1").await.unwrap();
    let emails: Vec<&str> = accounts.iter().map(|a| a.email.as_str()).collect();
    assert_eq!(
        emails,
        vec!["a@p1.iam.gserviceaccount.com", "b@p1.iam.gserviceaccount.com"]
    );
    assert_eq!(accounts[0].display_name.as_deref(), Some("A"));
}

#[tokio::test]
async fn test_list_service_accounts_empty_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/p1/serviceAccounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = gcp_client(&server)
        .list_service_accounts("p1")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "No service accounts found or response format invalid"
    );
}

#[tokio::test]
async fn test_generate_access_token_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1/projects/-/serviceAccounts/a@p1.iam.gserviceaccount.com:generateAccessToken",
        ))
        .and(body_json(json!({
            "scope": ["https://www.googleapis.com/auth/cloud-platform"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "ya29.minted",
            "expireTime": "2026-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(
            "/v1/projects/-/serviceAccounts/b@p1.iam.gserviceaccount.com:generateAccessToken",
        ))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = gcp_client(&server);
    assert_eq!(
        client
            .generate_access_token("a@p1.iam.gserviceaccount.com")
            .await,
        ImpersonationOutcome::Success {
            access_token: "ya29.minted".to_string()
        }
    );
    assert_eq!(
        client
            .generate_access_token("b@p1.iam.gserviceaccount.com")
            .await,
        ImpersonationOutcome::Failed { status: 403 }
    );
}

#[tokio::test]
async fn test_generate_access_token_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let outcome = gcp_client(&server)
        .generate_access_token("c@p1.iam.gserviceaccount.com")
        .await;

    let ImpersonationOutcome::DecodeFailed { error } = outcome else {
        panic!("expected decode failure, got {:?}", outcome);
    };
    assert!(error.contains("decoding response body"));
}
