//! Provider response bodies shaped like the real APIs, for mounting on mock servers.

use serde_json::{Value, json};

/// Body of a successful client-credentials token grant
pub fn token_response(access_token: &str) -> Value {
    json!({
        "token_type": "Bearer",
        "expires_in": 3599,
        "ext_expires_in": 3599,
        "access_token": access_token,
    })
}

/// `GET /subscriptions` body for `(id, display name)` pairs
pub fn subscriptions_response(subscriptions: &[(&str, &str)]) -> Value {
    let value: Vec<Value> = subscriptions
        .iter()
        .map(|(id, name)| {
            json!({
                "id": format!("/subscriptions/{}", id),
                "subscriptionId": id,
                "displayName": name,
                "state": "Enabled",
            })
        })
        .collect();
    json!({ "value": value })
}

/// `GET .../resourcegroups` body
pub fn resource_groups_response(subscription_id: &str, groups: &[&str]) -> Value {
    let value: Vec<Value> = groups
        .iter()
        .map(|name| {
            json!({
                "id": format!("/subscriptions/{}/resourceGroups/{}", subscription_id, name),
                "name": name,
                "location": "westeurope",
            })
        })
        .collect();
    json!({ "value": value })
}

/// `GET .../storageAccounts` body for `(account, resource group)` pairs
pub fn storage_accounts_response(subscription_id: &str, accounts: &[(&str, &str)]) -> Value {
    let value: Vec<Value> = accounts
        .iter()
        .map(|(name, group)| {
            json!({
                "id": format!(
                    "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Storage/storageAccounts/{}",
                    subscription_id, group, name
                ),
                "name": name,
                "kind": "StorageV2",
            })
        })
        .collect();
    json!({ "value": value })
}

pub fn storage_keys_response() -> Value {
    json!({
        "keys": [
            {"keyName": "key1", "value": "a2V5LW9uZQ==", "permissions": "FULL"},
            {"keyName": "key2", "value": "a2V5LXR3bw==", "permissions": "FULL"}
        ]
    })
}

/// One List Blobs page; an empty `next_marker` ends the listing
pub fn blob_list_page(container: &str, names: &[&str], next_marker: &str) -> String {
    let blobs: String = names
        .iter()
        .map(|name| {
            format!(
                "<Blob><Name>{}</Name><Properties><BlobType>BlockBlob</BlobType></Properties></Blob>",
                name
            )
        })
        .collect();
    format!(
        "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?>\
<EnumerationResults ServiceEndpoint=\"https://acct.blob.core.windows.net/\" ContainerName=\"{}\">\
<Blobs>{}</Blobs><NextMarker>{}</NextMarker></EnumerationResults>",
        container, blobs, next_marker
    )
}

pub fn service_accounts_response(emails: &[&str]) -> Value {
    let accounts: Vec<Value> = emails
        .iter()
        .map(|email| {
            json!({
                "email": email,
                "displayName": email.split('@').next().unwrap_or_default(),
            })
        })
        .collect();
    json!({ "accounts": accounts })
}

pub fn generated_token_response(access_token: &str) -> Value {
    json!({
        "accessToken": access_token,
        "expireTime": "2030-01-01T00:00:00Z",
    })
}

pub fn aggregated_instances_response(project_id: &str) -> Value {
    json!({
        "kind": "compute#instanceAggregatedList",
        "id": format!("projects/{}/aggregated/instances", project_id),
        "items": {
            "zones/us-central1-a": {
                "instances": [{"name": "vm-1", "status": "RUNNING"}]
            },
            "zones/europe-west1-b": {
                "warning": {"code": "NO_RESULTS_ON_PAGE"}
            }
        }
    })
}

pub fn buckets_response(names: &[&str]) -> Value {
    let items: Vec<Value> = names
        .iter()
        .map(|name| json!({"kind": "storage#bucket", "name": name}))
        .collect();
    json!({ "kind": "storage#buckets", "items": items })
}
