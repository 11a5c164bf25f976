pub mod env_store;
pub mod error;
pub mod path;

pub use env_store::{CredentialStore, keys};
pub use error::{Error, Result};
pub use path::{expand_tilde, resolve_env_file, resolve_workspace_path};
