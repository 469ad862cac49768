use crate::core::models::{
    FallingState, KeyConfiguration, KeyId, RemoveStrategy, Tile, KEY_CONFIGURATIONS,
};

impl FallingState {
    pub fn is_falling(self) -> bool {
        matches!(self, FallingState::Falling)
    }
}

impl KeyId {
    /// Shared configuration lookup. Level data only produces ids 1 and 2.
    pub fn configuration(self) -> &'static KeyConfiguration {
        match self.0 {
            2 => &KEY_CONFIGURATIONS[1],
            _ => &KEY_CONFIGURATIONS[0],
        }
    }
}

impl RemoveStrategy {
    pub fn new(id: KeyId) -> Self {
        RemoveStrategy { id }
    }

    pub fn check(self, tile: Tile) -> bool {
        tile.fits(self.id)
    }
}

impl Tile {
    pub fn is_air(self) -> bool {
        matches!(self, Tile::Air)
    }

    /// True only for a lock whose configured id matches; every other
    /// variant answers false unconditionally, which is what keeps the
    /// removal sweep scoped to locks.
    pub fn fits(self, id: KeyId) -> bool {
        match self {
            Tile::Lock(lock_id) => lock_id == id,
            _ => false,
        }
    }

    /// Answers for the tile above: a gravity block sitting on this cell
    /// keeps falling only over air.
    pub fn block_on_top_state(self) -> FallingState {
        match self {
            Tile::Air => FallingState::Falling,
            _ => FallingState::Resting,
        }
    }

    pub(crate) fn with_state(self, state: FallingState) -> Tile {
        match self {
            Tile::Stone(_) => Tile::Stone(state),
            Tile::Box(_) => Tile::Box(state),
            other => other,
        }
    }
}
