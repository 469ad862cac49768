use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::grid::Grid;
use crate::core::models::{FallingState, Game, KeyId, Player, Tile};

/// The twelve raw tile codes understood in level data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RawTile {
    Air = 0,
    Flux = 1,
    Unbreakable = 2,
    Player = 3,
    Stone = 4,
    FallingStone = 5,
    Box = 6,
    FallingBox = 7,
    Key1 = 8,
    Lock1 = 9,
    Key2 = 10,
    Lock2 = 11,
}

impl RawTile {
    pub fn from_code(code: u8) -> Option<RawTile> {
        Some(match code {
            0 => RawTile::Air,
            1 => RawTile::Flux,
            2 => RawTile::Unbreakable,
            3 => RawTile::Player,
            4 => RawTile::Stone,
            5 => RawTile::FallingStone,
            6 => RawTile::Box,
            7 => RawTile::FallingBox,
            8 => RawTile::Key1,
            9 => RawTile::Lock1,
            10 => RawTile::Key2,
            11 => RawTile::Lock2,
            _ => return None,
        })
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Stone and box codes carry their initial falling state.
    pub fn to_tile(self) -> Tile {
        match self {
            RawTile::Air => Tile::Air,
            RawTile::Flux => Tile::Flux,
            RawTile::Unbreakable => Tile::Unbreakable,
            RawTile::Player => Tile::Player,
            RawTile::Stone => Tile::Stone(FallingState::Resting),
            RawTile::FallingStone => Tile::Stone(FallingState::Falling),
            RawTile::Box => Tile::Box(FallingState::Resting),
            RawTile::FallingBox => Tile::Box(FallingState::Falling),
            RawTile::Key1 => Tile::Key(KeyId(1)),
            RawTile::Lock1 => Tile::Lock(KeyId(1)),
            RawTile::Key2 => Tile::Key(KeyId(2)),
            RawTile::Lock2 => Tile::Lock(KeyId(2)),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row} holds {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile code {code} at column {x}, row {y}")]
    UnknownTileCode { code: u8, x: usize, y: usize },
    #[error("level has no player tile")]
    MissingPlayer,
    #[error("level has a second player tile at column {x}, row {y}")]
    DuplicatePlayer { x: usize, y: usize },
}

/// Level data as decoded from disk: a rectangle of raw tile codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub rows: Vec<Vec<u8>>,
}

impl Level {
    /// Builds the live game, rejecting malformed data instead of guessing:
    /// every row must match the first row's width, every code must be
    /// known, and exactly one cell must hold the player.
    pub fn decode(&self) -> Result<Game, LevelError> {
        let width = self.rows.first().ok_or(LevelError::Empty)?.len();
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut cells = Vec::with_capacity(self.rows.len());
        let mut player: Option<Player> = None;
        for (y, row) in self.rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            let mut tiles = Vec::with_capacity(width);
            for (x, &code) in row.iter().enumerate() {
                let raw =
                    RawTile::from_code(code).ok_or(LevelError::UnknownTileCode { code, x, y })?;
                if raw == RawTile::Player {
                    if player.is_some() {
                        return Err(LevelError::DuplicatePlayer { x, y });
                    }
                    player = Some(Player {
                        x: x as i32,
                        y: y as i32,
                    });
                }
                tiles.push(raw.to_tile());
            }
            cells.push(tiles);
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;
        Ok(Game::new(Grid::new(cells), player))
    }
}
