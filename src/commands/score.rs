use async_trait::async_trait;

use super::{Command, CommandResult, GameInfo};
use crate::engine::Phase;

pub struct ScoreCommand;

#[async_trait]
impl Command for ScoreCommand {
    fn name(&self) -> &str {
        "/score"
    }

    fn aliases(&self) -> &[&str] {
        &["/s"]
    }

    fn description(&self) -> &str {
        "show progress and score for the current game"
    }

    async fn execute(&self, info: &GameInfo<'_>) -> CommandResult {
        println!("{}", status_line(info));
        CommandResult::Handled
    }
}

fn status_line(info: &GameInfo<'_>) -> String {
    let progress = info.game.progress();
    match info.game.phase() {
        Phase::Idle => format!("  no game yet ({} questions in {})", info.game.bank_size(), info.bank),
        Phase::Playing => format!(
            "  answered {} of {}, score {}",
            progress.answered, progress.total, progress.score
        ),
        Phase::Finished => format!("  finished: {} out of {}", progress.score, progress.total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{test_game, test_info};

    #[tokio::test]
    async fn returns_handled() {
        let game = test_game();
        assert!(matches!(
            ScoreCommand.execute(&test_info(&game)).await,
            CommandResult::Handled
        ));
    }

    #[test]
    fn idle_status_mentions_bank() {
        let game = test_game();
        let line = status_line(&test_info(&game));
        assert!(line.contains("no game yet"));
        assert!(line.contains("built-in"));
    }

    #[test]
    fn playing_status_shows_progress() {
        let game = test_game();
        game.start();
        let line = status_line(&test_info(&game));
        assert!(line.contains("answered 0 of 3, score 0"));
    }
}
