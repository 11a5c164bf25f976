pub mod azure;
pub mod gcp;
pub mod probe;

pub use azure::*;
pub use gcp::*;
pub use probe::*;
