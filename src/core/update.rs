use crate::core::grid::Grid;
use crate::core::models::{FallingState, Game, Input, Player, Tile};

impl Tile {
    /// Entry policy for the player stepping into this cell from the side.
    pub fn move_horizontal(self, grid: &mut Grid, player: &mut Player, dx: i32) {
        match self {
            Tile::Air | Tile::Flux => player.move_by(grid, dx, 0),
            Tile::Stone(state) | Tile::Box(state) => {
                state.move_horizontal(grid, player, self, dx)
            }
            Tile::Key(id) => {
                grid.remove(id.configuration().removes);
                player.move_by(grid, dx, 0);
            }
            Tile::Unbreakable | Tile::Player | Tile::Lock(_) => {}
        }
    }

    /// Entry policy from above or below. Gravity blocks never yield
    /// vertically.
    pub fn move_vertical(self, grid: &mut Grid, player: &mut Player, dy: i32) {
        match self {
            Tile::Air | Tile::Flux => player.move_by(grid, 0, dy),
            Tile::Key(id) => {
                grid.remove(id.configuration().removes);
                player.move_by(grid, 0, dy);
            }
            Tile::Unbreakable
            | Tile::Player
            | Tile::Lock(_)
            | Tile::Stone(_)
            | Tile::Box(_) => {}
        }
    }

    /// Per-tick physics hook; only gravity blocks do work.
    pub fn update(self, grid: &mut Grid, x: i32, y: i32) {
        match self {
            Tile::Stone(_) | Tile::Box(_) => fall(grid, self, x, y),
            _ => {}
        }
    }
}

/// Re-derive the falling state from the cell below, record it, then let
/// the new state decide whether the tile drops this tick.
fn fall(grid: &mut Grid, tile: Tile, x: i32, y: i32) {
    let state = grid.get(x, y + 1).block_on_top_state();
    let tile = tile.with_state(state);
    grid.set(x, y, tile);
    state.drop(grid, tile, x, y);
}

impl FallingState {
    /// Only a resting block can be pushed; a falling one ignores the
    /// attempt entirely.
    pub(crate) fn move_horizontal(self, grid: &mut Grid, player: &mut Player, tile: Tile, dx: i32) {
        if let FallingState::Resting = self {
            player.push_horizontal(grid, tile, dx);
        }
    }

    pub(crate) fn drop(self, grid: &mut Grid, tile: Tile, x: i32, y: i32) {
        if let FallingState::Falling = self {
            grid.drop_tile(tile, x, y);
        }
    }
}

impl Input {
    pub fn handle(self, grid: &mut Grid, player: &mut Player) {
        match self {
            Input::Left => player.move_horizontal(grid, -1),
            Input::Right => player.move_horizontal(grid, 1),
            Input::Up => player.move_vertical(grid, -1),
            Input::Down => player.move_vertical(grid, 1),
        }
    }
}

impl Game {
    pub fn new(grid: Grid, player: Player) -> Self {
        Game {
            grid,
            player,
            inputs: Vec::new(),
        }
    }

    pub fn enqueue(&mut self, input: Input) {
        self.inputs.push(input);
    }

    /// One simulation step: drain queued inputs newest first, then run a
    /// single physics pass.
    pub fn tick(&mut self) {
        while let Some(input) = self.inputs.pop() {
            input.handle(&mut self.grid, &mut self.player);
        }
        self.grid.update();
    }
}
