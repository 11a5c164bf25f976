use crate::presentation::view_models::{
    AuthViewModel, BlobDownloadViewModel, BlobListViewModel, CommandResultViewModel,
    KeyStatusViewModel, ManagementViewModel, SectionContentViewModel, SectionViewModel,
    StorageAccountViewModel, SubscriptionSelectedViewModel, TokenStoredViewModel,
};
use cloudghost_providers::azure::AzureToken;
use cloudghost_types::{
    BlobDownload, BlobItem, KeyListing, SectionPayload, SectionReport, StorageAccountReport,
    Subscription,
};
use std::path::Path;

pub fn present_token_stored(
    token: &AzureToken,
    tenant_id: &str,
    env_file: &Path,
) -> TokenStoredViewModel {
    TokenStoredViewModel {
        tenant_id: tenant_id.to_string(),
        env_file: env_file.display().to_string(),
        expires_in: token.expires_in,
    }
}

pub fn present_subscription_selected(subscription: &Subscription) -> SubscriptionSelectedViewModel {
    SubscriptionSelectedViewModel {
        id: subscription.id.clone(),
        name: subscription.name.clone(),
    }
}

pub fn present_auth(
    command: &str,
    token: TokenStoredViewModel,
    subscription: SubscriptionSelectedViewModel,
) -> CommandResultViewModel<AuthViewModel> {
    CommandResultViewModel::new(
        command,
        AuthViewModel {
            token,
            subscription,
        },
    )
}

pub fn present_blob_list(
    account: &str,
    container: &str,
    blobs: Vec<BlobItem>,
) -> CommandResultViewModel<BlobListViewModel> {
    CommandResultViewModel::new(
        "azure blob list",
        BlobListViewModel {
            account: account.to_string(),
            container: container.to_string(),
            blobs: blobs.into_iter().map(|blob| blob.name).collect(),
        },
    )
}

pub fn present_blob_download(
    download: BlobDownload,
) -> CommandResultViewModel<BlobDownloadViewModel> {
    CommandResultViewModel::new(
        "azure blob download",
        BlobDownloadViewModel {
            blob: download.blob,
            output: download.output,
            bytes: download.bytes,
        },
    )
}

pub fn present_section(report: SectionReport) -> SectionViewModel {
    let content = match report.payload {
        SectionPayload::Document { body } => SectionContentViewModel::Document { body },
        SectionPayload::StorageAccounts { accounts } => SectionContentViewModel::StorageAccounts {
            accounts: accounts.into_iter().map(present_storage_account).collect(),
        },
    };

    SectionViewModel {
        section: report.section.as_str().to_string(),
        title: report.section.title(),
        content,
    }
}

fn present_storage_account(report: StorageAccountReport) -> StorageAccountViewModel {
    let keys = match report.keys {
        KeyListing::Keys { body } => KeyStatusViewModel::Listed { body },
        KeyListing::Denied { status, reason } => KeyStatusViewModel::Denied {
            code: status,
            reason,
        },
        KeyListing::RequestFailed { error } => KeyStatusViewModel::RequestFailed { error },
    };

    StorageAccountViewModel {
        name: report.account.name,
        resource_group: report.account.resource_group,
        keys,
    }
}

pub fn present_management(
    subscription: Option<&str>,
    sections: Vec<SectionViewModel>,
) -> CommandResultViewModel<ManagementViewModel> {
    CommandResultViewModel::new(
        "azure enum management",
        ManagementViewModel {
            subscription: subscription.map(str::to_string),
            sections,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudghost_types::{ManagementSection, StorageAccount};
    use serde_json::json;

    #[test]
    fn test_section_names_match_serialized_section() {
        let vm = present_section(SectionReport {
            section: ManagementSection::RoleAssignments,
            payload: SectionPayload::Document {
                body: json!({"value": []}),
            },
        });
        assert_eq!(vm.section, "role_assignments");
        assert_eq!(vm.title, Some("Role Assignments:"));
    }

    #[test]
    fn test_storage_section_keeps_denied_accounts() {
        let vm = present_section(SectionReport {
            section: ManagementSection::StorageAccounts,
            payload: SectionPayload::StorageAccounts {
                accounts: vec![StorageAccountReport {
                    account: StorageAccount {
                        name: "acct1".to_string(),
                        id: "/subscriptions/s/resourceGroups/rg1/providers/Microsoft.Storage/storageAccounts/acct1"
                            .to_string(),
                        resource_group: "rg1".to_string(),
                    },
                    keys: KeyListing::Denied {
                        status: 403,
                        reason: "403 Forbidden".to_string(),
                    },
                }],
            },
        });

        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["section"], "storage_accounts");
        assert_eq!(json["kind"], "storage_accounts");
        assert_eq!(json["accounts"][0]["keys"]["status"], "denied");
        assert_eq!(json["accounts"][0]["keys"]["code"], 403);
    }
}
