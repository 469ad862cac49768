use crate::core::{FallingState, Game, Grid, Input, KeyId, Player, Tile};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Instant;

/// Parses an ASCII level fixture. Glyphs: '#' unbreakable, '@' player,
/// '.' flux, 'o'/'O' resting/falling stone, 'x'/'X' resting/falling box,
/// 'k'/'K' key 1/2, 'l'/'L' lock 1/2, anything else air. Short rows are
/// padded to the widest line with air.
pub fn parse_level(s: &str) -> Game {
    let mut cells: Vec<Vec<Tile>> = Vec::new();
    let mut player = Player { x: 0, y: 0 };
    let max_width = s.lines().map(|line| line.len()).max().unwrap_or(0);

    for line in s.lines() {
        if line.is_empty() {
            continue;
        }

        let y = cells.len() as i32;
        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let tile = match ch {
                '#' => Tile::Unbreakable,
                '.' => Tile::Flux,
                'o' => Tile::Stone(FallingState::Resting),
                'O' => Tile::Stone(FallingState::Falling),
                'x' => Tile::Box(FallingState::Resting),
                'X' => Tile::Box(FallingState::Falling),
                'k' => Tile::Key(KeyId(1)),
                'K' => Tile::Key(KeyId(2)),
                'l' => Tile::Lock(KeyId(1)),
                'L' => Tile::Lock(KeyId(2)),
                '@' => {
                    player = Player { x: x as i32, y };
                    Tile::Player
                }
                _ => Tile::Air,
            };
            row.push(tile);
        }
        while row.len() < max_width {
            row.push(Tile::Air);
        }
        cells.push(row);
    }

    Game::new(Grid::new(cells), player)
}

/// Inverse of [`parse_level`]; the fixture round-trip tests depend on it.
pub fn render_game_to_string(game: &Game) -> String {
    let mut result = String::new();
    for y in 0..game.grid.height() {
        for x in 0..game.grid.width() {
            result.push(tile_glyph(game.grid.get(x, y)));
        }
        result.push('\n');
    }
    result
}

fn tile_glyph(tile: Tile) -> char {
    match tile {
        Tile::Air => ' ',
        Tile::Flux => '.',
        Tile::Unbreakable => '#',
        Tile::Player => '@',
        Tile::Stone(FallingState::Resting) => 'o',
        Tile::Stone(FallingState::Falling) => 'O',
        Tile::Box(FallingState::Resting) => 'x',
        Tile::Box(FallingState::Falling) => 'X',
        Tile::Key(KeyId(1)) => 'k',
        Tile::Key(_) => 'K',
        Tile::Lock(KeyId(1)) => 'l',
        Tile::Lock(_) => 'L',
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

const PLAYER_COLOR: Color = Color::Rgb(0xff, 0x00, 0x00);

/// Background color per tile; air and the player marker draw nothing.
fn tile_color(tile: Tile) -> Option<Color> {
    match tile {
        Tile::Air | Tile::Player => None,
        Tile::Flux => Some(Color::Rgb(0xcc, 0xff, 0xcc)),
        Tile::Unbreakable => Some(Color::Rgb(0x99, 0x99, 0x99)),
        Tile::Stone(_) => Some(Color::Rgb(0x00, 0x00, 0xcc)),
        Tile::Box(_) => Some(Color::Rgb(0x8b, 0x45, 0x13)),
        Tile::Key(id) | Tile::Lock(id) => {
            let (r, g, b) = id.configuration().color;
            Some(Color::Rgb(r, g, b))
        }
    }
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &Game,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let mut lines = Vec::new();
        for y in 0..game.grid.height() {
            let mut spans = Vec::new();
            for x in 0..game.grid.width() {
                // the player cell is drawn from the player's own
                // coordinates, not from the marker tile
                let style = if (x, y) == (game.player.x, game.player.y) {
                    Style::default().bg(PLAYER_COLOR)
                } else {
                    match tile_color(game.grid.get(x, y)) {
                        Some(color) => Style::default().bg(color),
                        None => Style::default(),
                    }
                };
                spans.push(Span::styled("  ", style));
            }
            lines.push(Line::from(spans));
        }

        let board = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Rockfall"))
            .alignment(Alignment::Center);
        f.render_widget(board, chunks[0]);

        let instructions = Paragraph::new("Controls: WASD or Arrow keys to move, Q to quit")
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instructions, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Game(Input),
    Quit,
}

fn map_key(code: KeyCode) -> Option<ConsoleInput> {
    Some(match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => ConsoleInput::Game(Input::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => ConsoleInput::Game(Input::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => ConsoleInput::Game(Input::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => ConsoleInput::Game(Input::Right),
        _ => return None,
    })
}

/// Polls key events until the tick deadline, queueing directional inputs
/// on the game. Returns true when the user asked to quit.
pub fn pump_input(game: &mut Game, deadline: Instant) -> Result<bool, Box<dyn std::error::Error>> {
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(false);
        }
        if !event::poll(deadline - now)? {
            return Ok(false);
        }
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            match map_key(code) {
                Some(ConsoleInput::Quit) => return Ok(true),
                Some(ConsoleInput::Game(input)) => game.enqueue(input),
                None => {}
            }
        }
    }
}
