use crate::error::Result;
use crate::runner::{CommandOutput, CommandRunner};
use std::sync::Mutex;

/// Mock runner that records every command and returns a fixed output
#[derive(Default)]
pub struct MockRunner {
    output: CommandOutput,
    commands: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner whose commands succeed silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to every command with `output`
    pub fn with_output(output: CommandOutput) -> Self {
        MockRunner {
            output,
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Commands received so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command.to_string());
        }
        Ok(self.output.clone())
    }
}
