// Terminal falling-block puzzle with ratatui.
// Controls: W/A/S/D or arrow keys (queued per tick). Q to quit.
// Glyphs: '#' wall, '@' player, '.' flux, 'o'/'O' stone, 'x'/'X' box,
// 'k'/'K' keys, 'l'/'L' locks, ' ' air. Uppercase blocks start falling.

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use rockfall::console_interface::{
    cleanup_terminal, parse_level, pump_input, render_game, setup_terminal,
};
use rockfall::core::{Game, Level, TICK};
use std::io;
use std::time::Instant;

const DEFAULT_LEVEL: &str = r#"
########
#@ ..# #
#o#x.# #
#ko..# #
#o...l #
########
"#;

// const DEFAULT_LEVEL: &str = r#"
// ##########
// #@ ..  # #
// #o#xx.## #
// #ko..  L #
// #o...l K #
// ##########
// "#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let game = match std::env::args().nth(1) {
        Some(path) => load_level(&path)?,
        None => parse_level(DEFAULT_LEVEL),
    };

    let mut terminal = setup_terminal()?;
    let result = run_interactive(game, &mut terminal);
    cleanup_terminal()?;
    result
}

fn load_level(path: &str) -> Result<Game, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    let level: Level = serde_json::from_str(&data)?;
    Ok(level.decode()?)
}

fn run_interactive(
    mut game: Game,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_game(terminal, &game)?;

    loop {
        let deadline = Instant::now() + TICK;
        if pump_input(&mut game, deadline)? {
            break;
        }
        game.tick();
        render_game(terminal, &game)?;
    }

    Ok(())
}
