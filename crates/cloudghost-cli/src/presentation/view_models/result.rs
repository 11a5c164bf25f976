use serde::Serialize;

/// The JSON document a command prints: `{"command": ..., "content": ...}`
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub command: String,
    pub content: T,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(command: impl Into<String>, content: T) -> Self {
        Self {
            command: command.into(),
            content,
        }
    }
}
