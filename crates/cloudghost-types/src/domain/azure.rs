use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Azure subscription as returned by `GET /subscriptions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "subscriptionId")]
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub name: String,
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Storage account discovered under a subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageAccount {
    pub name: String,
    pub id: String,
    /// Parsed from the `resourceGroups/<name>` segment of `id`; empty when absent
    pub resource_group: String,
}

/// Result of a `listKeys` call for one storage account
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KeyListing {
    /// Raw `listKeys` response body
    Keys { body: String },
    Denied { status: u16, reason: String },
    RequestFailed { error: String },
}

impl KeyListing {
    pub fn is_granted(&self) -> bool {
        matches!(self, KeyListing::Keys { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageAccountReport {
    pub account: StorageAccount,
    pub keys: KeyListing,
}

/// One section of the management enumeration, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementSection {
    Subscriptions,
    ResourceGroups,
    RoleAssignments,
    StorageAccounts,
    PolicyDefinitions,
}

impl ManagementSection {
    /// Same name the section serializes to
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagementSection::Subscriptions => "subscriptions",
            ManagementSection::ResourceGroups => "resource_groups",
            ManagementSection::RoleAssignments => "role_assignments",
            ManagementSection::StorageAccounts => "storage_accounts",
            ManagementSection::PolicyDefinitions => "policy_definitions",
        }
    }

    pub fn progress_label(&self) -> &'static str {
        match self {
            ManagementSection::Subscriptions => "Enumerating subscriptions...",
            ManagementSection::ResourceGroups => "Enumerating resource groups...",
            ManagementSection::RoleAssignments => "Enumerating role assignments...",
            ManagementSection::StorageAccounts => "Enumerating storage accounts...",
            ManagementSection::PolicyDefinitions => "Enumerating policy definitions...",
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            ManagementSection::Subscriptions => None,
            ManagementSection::ResourceGroups => Some("Resource Groups:"),
            ManagementSection::RoleAssignments => Some("Role Assignments:"),
            ManagementSection::StorageAccounts => None,
            ManagementSection::PolicyDefinitions => Some("Policy Definitions:"),
        }
    }

    pub fn requires_subscription(&self) -> bool {
        matches!(
            self,
            ManagementSection::ResourceGroups
                | ManagementSection::RoleAssignments
                | ManagementSection::StorageAccounts
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionPayload {
    /// Decoded JSON document, printed verbatim
    Document { body: Value },
    StorageAccounts { accounts: Vec<StorageAccountReport> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub section: ManagementSection,
    pub payload: SectionPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobDownload {
    pub blob: String,
    pub output: String,
    pub bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_deserializes_from_arm_payload() {
        let sub: Subscription = serde_json::from_str(
            r#"{"id":"/subscriptions/abc","subscriptionId":"abc","displayName":"Prod","state":"Enabled"}"#,
        )
        .unwrap();
        assert_eq!(sub.id, "abc");
        assert_eq!(sub.name, "Prod");
        insta::assert_snapshot!(sub.to_string(), @"Prod (abc)");
    }

    #[test]
    fn test_sections_requiring_subscription() {
        assert!(!ManagementSection::Subscriptions.requires_subscription());
        assert!(ManagementSection::ResourceGroups.requires_subscription());
        assert!(ManagementSection::RoleAssignments.requires_subscription());
        assert!(ManagementSection::StorageAccounts.requires_subscription());
        assert!(!ManagementSection::PolicyDefinitions.requires_subscription());
    }

    #[test]
    fn test_section_names_match_serialization() {
        for section in [
            ManagementSection::Subscriptions,
            ManagementSection::ResourceGroups,
            ManagementSection::RoleAssignments,
            ManagementSection::StorageAccounts,
            ManagementSection::PolicyDefinitions,
        ] {
            assert_eq!(serde_json::to_value(section).unwrap(), section.as_str());
        }
    }

    #[test]
    fn test_key_listing_serializes_with_outcome_tag() {
        let listing = KeyListing::Denied {
            status: 403,
            reason: "403 Forbidden".to_string(),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["outcome"], "denied");
        assert_eq!(json["status"], 403);
        assert!(!listing.is_granted());
    }
}
