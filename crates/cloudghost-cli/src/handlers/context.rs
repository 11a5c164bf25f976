use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewStyle};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    renderer: ConsoleRenderer,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        let style = ViewStyle {
            color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        };
        Self {
            renderer: ConsoleRenderer::new(format == OutputFormat::Json, style),
        }
    }

    /// Render a complete result using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        self.renderer.render(view_model)
    }

    pub fn step<V>(&self, view_model: &V) -> Result<()>
    where
        V: CreateView,
    {
        self.renderer.step(view_model)
    }

    pub fn finish<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize,
    {
        self.renderer.finish(view_model)
    }
}
