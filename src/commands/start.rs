use async_trait::async_trait;

use super::{Command, CommandResult, GameInfo};

pub struct StartCommand;

#[async_trait]
impl Command for StartCommand {
    fn name(&self) -> &str {
        "/start"
    }

    fn aliases(&self) -> &[&str] {
        &["/play", "/again", "/restart"]
    }

    fn description(&self) -> &str {
        "start a new game (abandons the current one)"
    }

    async fn execute(&self, info: &GameInfo<'_>) -> CommandResult {
        info.game.start();
        CommandResult::Redrawn
    }
}
