pub mod config;
pub mod error;
pub mod ops;
pub mod workspace;

pub use config::{Config, HttpConfig, StoreConfig};
pub use error::{Error, Result};
pub use ops::{
    AuthOps, BlobOps, ImpersonationOps, ImpersonationProgress, ManagementOps, ManagementPlan,
    ManagementRequest, PermissionSweep,
};
pub use workspace::Workspace;
