use crate::presentation::view_models::{CreateView, ProgressViewModel, ViewStyle};
use owo_colors::OwoColorize;
use std::fmt;

impl CreateView for ProgressViewModel {
    fn create_view<'a>(&'a self, style: ViewStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProgressView { data: self, style })
    }
}

struct ProgressView<'a> {
    data: &'a ProgressViewModel,
    style: ViewStyle,
}

impl fmt::Display for ProgressView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style.color {
            writeln!(f, "{}", self.data.message.bold())
        } else {
            writeln!(f, "{}", self.data.message)
        }
    }
}
