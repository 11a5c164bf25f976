//! # Presentation Layer
//!
//! MVVM-style split between what a command found and how it is printed:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (drives ops)    (converts)       (Serialize)      (plain/JSON)
//! ```
//!
//! - `view_models/`: pure data, always `Serialize`. The JSON output is these structs.
//! - `presenters/`: functions from runtime/domain results to view models.
//! - `views/`: `fmt::Display` for plain text, one view per view model.
//! - `renderers/`: picks JSON or plain and writes to stdout.
//!
//! Plain output is written step by step as a command progresses. JSON output is a
//! single `{"command": ..., "content": ...}` document written when the command ends.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, ViewStyle};
