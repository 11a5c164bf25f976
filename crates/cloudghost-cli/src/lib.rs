// NOTE: cloudghost layering
//
// args -> commands (dispatch) -> handlers -> cloudghost-runtime ops -> cloudghost-providers
//
// Handlers drive multi-step operations themselves so plain output can appear as each
// step finishes (token stored, then subscription selected; one line per probe).
// JSON output collects the same steps and prints a single document at the end.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{
    AzureCommand, BlobCommand, Cli, Commands, EnumCommand, GcpCommand, GcpListCommand, LogLevel,
    OutputFormat,
};
pub use commands::run;
