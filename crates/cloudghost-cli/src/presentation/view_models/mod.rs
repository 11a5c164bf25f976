pub mod azure;
pub mod common;
pub mod gcp;
pub mod result;

pub use azure::{
    AuthViewModel, BlobDownloadViewModel, BlobListViewModel, KeyStatusViewModel,
    ManagementViewModel, SectionContentViewModel, SectionViewModel, StorageAccountViewModel,
    SubscriptionSelectedViewModel, TokenStoredViewModel,
};
pub use common::{CreateView, ProgressViewModel, ViewStyle};
pub use gcp::{
    ImpersonationAttemptViewModel, ImpersonationStatusViewModel, ImpersonationViewModel,
    ListingViewModel, PermissionSweepViewModel, ProbeResultViewModel, ProbeVerdictViewModel,
    ServiceAccountsViewModel,
};
pub use result::CommandResultViewModel;
