use std::io::{self, BufRead, Write};

use kings_race::communication_protocol::handle_line;
use kings_race::Game;

fn main() -> io::Result<()> {
    let logger_env = env_logger::Env::default().filter_or("LOG_LEVEL", "info");
    env_logger::Builder::from_env(logger_env).format_timestamp_millis().init();

    let mut game = Game::new();
    log::info!("New game\n{}", game.board());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        log::debug!("Received: {}", line);
        let response = handle_line(&mut game, &line);
        let msg = serde_json::to_string(&response)?;
        writeln!(stdout, "{}", msg)?;
        stdout.flush()?;
        log::debug!("\n{}", game.board());
    }
    log::info!("Input closed, final status: {:?}", game.status());
    Ok(())
}
