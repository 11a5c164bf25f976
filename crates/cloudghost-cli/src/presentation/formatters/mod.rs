pub mod json;
pub mod style;
