pub mod auth;
pub mod blob;
pub mod impersonation;
pub mod management;
pub mod permissions;

pub use auth::AuthOps;
pub use blob::BlobOps;
pub use impersonation::{ImpersonationOps, ImpersonationProgress};
pub use management::{ManagementOps, ManagementPlan, ManagementRequest};
pub use permissions::PermissionSweep;
