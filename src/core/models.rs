use crate::core::grid::Grid;

/// Gravity state carried by stone and box tiles. Re-derived every tick
/// from the cell directly beneath the tile; never simulated independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallingState {
    Falling,
    Resting,
}

/// Numeric identity shared by a key and the locks it opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyId(pub u8);

/// Predicate closed over one key id; a full-grid sweep turns every
/// matching tile into air.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveStrategy {
    pub(crate) id: KeyId,
}

/// Pairing of visual identity, id, and removal scope, shared read-only by
/// a key tile and its matching locks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyConfiguration {
    pub id: KeyId,
    pub color: (u8, u8, u8),
    pub removes: RemoveStrategy,
}

pub static KEY_CONFIGURATIONS: [KeyConfiguration; 2] = [
    KeyConfiguration {
        id: KeyId(1),
        color: (0xff, 0xcc, 0x00),
        removes: RemoveStrategy { id: KeyId(1) },
    },
    KeyConfiguration {
        id: KeyId(2),
        color: (0x00, 0xcc, 0xff),
        removes: RemoveStrategy { id: KeyId(2) },
    },
];

/// The closed set of cell variants. Exactly one cell holds `Player` at all
/// times, mirroring the player's tracked coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Air,
    Flux,
    Unbreakable,
    Player,
    Stone(FallingState),
    Box(FallingState),
    Key(KeyId),
    Lock(KeyId),
}

/// One queued directional intent, consumed exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

/// The simulation context: the board, the player, and the pending input
/// queue, threaded explicitly through every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub grid: Grid,
    pub player: Player,
    pub(crate) inputs: Vec<Input>,
}
