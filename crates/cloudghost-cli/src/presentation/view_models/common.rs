use serde::Serialize;
use std::fmt;

/// Plain-text styling decided once per process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStyle {
    pub color: bool,
}

/// Every view model that can be printed as plain text
pub trait CreateView {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a>;
}

/// A single status line announcing the next step (`Enumerating subscriptions...`)
#[derive(Debug, Clone, Serialize)]
pub struct ProgressViewModel {
    pub message: String,
}
