use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub trait Renderer {
    /// Print a finished command result, as JSON or as its plain view
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView;

    /// Print one intermediate step of a long-running command. Plain output only.
    fn step<V>(&self, view_model: &V) -> Result<()>
    where
        V: CreateView;

    /// Close a command whose plain output was already written by `step`. JSON output only.
    fn finish<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize;
}
