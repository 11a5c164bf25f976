pub mod azure;
pub mod gcp;

pub use azure::{
    present_auth, present_blob_download, present_blob_list, present_management, present_section,
    present_subscription_selected, present_token_stored,
};
pub use gcp::{
    present_impersonation, present_impersonation_attempt, present_listing, present_permission_sweep,
    present_probe, present_service_accounts,
};

use super::view_models::ProgressViewModel;

pub fn present_progress(message: impl Into<String>) -> ProgressViewModel {
    ProgressViewModel {
        message: message.into(),
    }
}
