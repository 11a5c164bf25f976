//! Plain-text views. Each view model gets a `CreateView` impl next to its `Display` view.

mod azure;
mod common;
mod gcp;
