use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewStyle};

pub struct ConsoleRenderer {
    json_mode: bool,
    style: ViewStyle,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, style: ViewStyle) -> Self {
        Self { json_mode, style }
    }

    fn write_plain<V: CreateView>(&self, view_model: &V) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{}", view_model.create_view(self.style))?;
        stdout.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize>(&self, result: &CommandResultViewModel<T>) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(result)?);
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return self.write_json(&result);
        }
        self.write_plain(&result.content)
    }

    fn step<V>(&self, view_model: &V) -> Result<()>
    where
        V: CreateView,
    {
        if self.json_mode {
            return Ok(());
        }
        self.write_plain(view_model)
    }

    fn finish<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize,
    {
        if self.json_mode {
            return self.write_json(&result);
        }
        Ok(())
    }
}
