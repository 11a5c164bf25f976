mod context;

pub mod auth;
pub mod blob;
pub mod gcp_enum;
pub mod gcp_list;
pub mod impersonate;
pub mod management;

pub use context::HandlerContext;
