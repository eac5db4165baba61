use async_trait::async_trait;

use super::{Command, CommandResult, GameInfo};

/// Listed like any other command; the registry prints the text itself
/// since only it knows every registered command.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show available commands"
    }

    async fn execute(&self, _info: &GameInfo<'_>) -> CommandResult {
        CommandResult::Handled
    }
}
