//! Startup banner and farewell.

use std::time::Duration;

use crate::consts::VERSION;

/// Game settings shown in the startup banner.
pub struct BannerInfo<'a> {
    pub bank: &'a str,
    pub bank_size: usize,
    pub questions_per_game: usize,
    pub advance_delay: Duration,
}

/// Print the startup banner with game info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║            T R I V I A                ║
   ║     how well do you know freight?     ║
   ╚═══════════════════════════════════════╝

   version   {}
   bank      {} ({} questions)
   per game  {}
   delay     {} ms

   type /start to begin, /help for commands"#,
        VERSION,
        info.bank,
        info.bank_size,
        info.questions_per_game.min(info.bank_size),
        info.advance_delay.as_millis(),
    );
}

/// Print the farewell line, with the number of games finished.
pub fn print_farewell(games_finished: usize) {
    if games_finished > 0 {
        let plural = if games_finished == 1 { "" } else { "s" };
        println!("played {games_finished} game{plural}.");
    }
    println!("goodbye.");
}
