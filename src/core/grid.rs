use crate::core::models::{Player, RemoveStrategy, Tile};

/// Row-major tile storage. Every neighbor read is bounds checked: any
/// coordinate outside the map reads as unbreakable rock, so movement and
/// fall computations stay total even on levels without a closed border.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Tile>>) -> Self {
        Grid { cells }
    }

    pub fn width(&self) -> i32 {
        self.cells.first().map_or(0, |row| row.len() as i32)
    }

    pub fn height(&self) -> i32 {
        self.cells.len() as i32
    }

    pub fn get(&self, x: i32, y: i32) -> Tile {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Tile::Unbreakable;
        }
        self.cells[y as usize][x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        self.cells[y as usize][x as usize] = tile;
    }

    /// One physics pass. Rows run bottom to top so a tile that drops this
    /// tick lands in an already-visited row and falls exactly one cell.
    pub fn update(&mut self) {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                self.get(x, y).update(self, x, y);
            }
        }
    }

    /// Unconditional one-cell drop; the falling state is the only caller.
    pub fn drop_tile(&mut self, tile: Tile, x: i32, y: i32) {
        self.set(x, y + 1, tile);
        self.set(x, y, Tile::Air);
    }

    /// (x, y) are the player's coordinates; the pushed block sits at
    /// (x + dx, y). The push lands only when the cell beyond the block is
    /// air and the player's destination has support beneath it.
    pub fn push_horizontal(&mut self, player: &mut Player, tile: Tile, x: i32, y: i32, dx: i32) {
        if self.get(x + dx + dx, y).is_air() && !self.get(x + dx, y + 1).is_air() {
            self.set(x + dx + dx, y, tile);
            player.move_by(self, dx, 0);
        }
    }

    /// Unconditional marker relocation; destination tiles validate first.
    pub fn move_player(&mut self, x: i32, y: i32, new_x: i32, new_y: i32) {
        self.set(x, y, Tile::Air);
        self.set(new_x, new_y, Tile::Player);
    }

    /// Sweeps every tile matching the strategy off the board.
    pub fn remove(&mut self, strategy: RemoveStrategy) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                if strategy.check(self.get(x, y)) {
                    self.set(x, y, Tile::Air);
                }
            }
        }
    }

    /// Movement dispatch: the tile at the destination cell decides what
    /// entering it does.
    pub fn move_horizontal(&mut self, player: &mut Player, x: i32, y: i32, dx: i32) {
        self.get(x + dx, y).move_horizontal(self, player, dx);
    }

    pub fn move_vertical(&mut self, player: &mut Player, x: i32, y: i32, dy: i32) {
        self.get(x, y + dy).move_vertical(self, player, dy);
    }
}

impl Player {
    /// Unvalidated relocation primitive, called by destination tiles once
    /// they have accepted the move. Keeps the marker tile and the tracked
    /// coordinates in lockstep.
    pub fn move_by(&mut self, grid: &mut Grid, dx: i32, dy: i32) {
        grid.move_player(self.x, self.y, self.x + dx, self.y + dy);
        self.x += dx;
        self.y += dy;
    }

    pub fn move_horizontal(&mut self, grid: &mut Grid, dx: i32) {
        let (x, y) = (self.x, self.y);
        grid.move_horizontal(self, x, y, dx);
    }

    pub fn move_vertical(&mut self, grid: &mut Grid, dy: i32) {
        let (x, y) = (self.x, self.y);
        grid.move_vertical(self, x, y, dy);
    }

    /// Entry point for a resting block that accepted a push.
    pub fn push_horizontal(&mut self, grid: &mut Grid, tile: Tile, dx: i32) {
        let (x, y) = (self.x, self.y);
        grid.push_horizontal(self, tile, x, y, dx);
    }
}
