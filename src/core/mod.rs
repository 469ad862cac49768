mod consts;
mod grid;
mod level;
mod model_helpers;
mod models;
mod update;

pub use consts::*;
pub use grid::Grid;
pub use level::{Level, LevelError, RawTile};
pub use models::{
    FallingState, Game, Input, KeyConfiguration, KeyId, Player, RemoveStrategy, Tile,
    KEY_CONFIGURATIONS,
};
