//! Maze grid: tile classification and the geometry derived from it.

pub mod parser;

use bevy_ecs::resource::Resource;
use glam::Vec2;
use tracing::debug;

use crate::constants::{Tile, CELL_SIZE, RAW_LAYOUT};
use crate::error::{GameResult, MazeError};
use crate::geometry::Rect;
use crate::map::parser::LayoutParser;

/// A consumable pickup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    Dot,
    PowerPellet,
}

/// A row of tunnel tiles with mouths on both sides.
///
/// The mouth is the innermost tunnel cell of each side group, where the
/// tunnel meets the playable corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunnelRow {
    pub row: usize,
    pub left_mouth: usize,
    pub right_mouth: usize,
}

/// The static maze for one session.
///
/// Topology never changes after construction; the only mutation is a
/// `Dot`/`PowerPellet` tile turning into `EmptyPath` when consumed (and
/// back, on a session reset).
#[derive(Resource)]
pub struct Maze {
    tiles: Vec<Vec<Tile>>,
    rows: usize,
    cols: usize,
    wall_rects: Vec<Rect>,
    tunnel_rows: Vec<TunnelRow>,
    house_cells: Vec<(usize, usize)>,
    house_exit: Option<Vec2>,
    house_anchor: Option<Vec2>,
    pickup_spawns: Vec<(usize, usize, PickupKind)>,
}

impl Maze {
    /// Builds a maze from a raw tile-code layout.
    pub fn new(layout: &[&[u8]]) -> GameResult<Maze> {
        let parsed = LayoutParser::parse(layout)?;

        let rows = parsed.tiles.len();
        let cols = parsed.tiles[0].len();

        // One collider per wall tile, derived once and immutable after.
        let mut wall_rects = Vec::new();
        let mut pickup_spawns = Vec::new();
        for (row, tiles) in parsed.tiles.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                match tile {
                    Tile::Wall => wall_rects.push(Rect::square(cell_center(row, col), CELL_SIZE)),
                    Tile::Dot => pickup_spawns.push((row, col, PickupKind::Dot)),
                    Tile::PowerPellet => pickup_spawns.push((row, col, PickupKind::PowerPellet)),
                    _ => {}
                }
            }
        }

        let tunnel_rows = parsed
            .tunnel_rows
            .iter()
            .map(|&row| {
                let tiles = &parsed.tiles[row];
                let left_mouth = (0..cols).take_while(|&col| tiles[col] == Tile::Tunnel).last().unwrap_or(0);
                let right_mouth = (0..cols)
                    .rev()
                    .take_while(|&col| tiles[col] == Tile::Tunnel)
                    .last()
                    .unwrap_or(cols - 1);
                TunnelRow {
                    row,
                    left_mouth,
                    right_mouth,
                }
            })
            .collect::<Vec<_>>();

        // The house exit is the first walkable non-house neighbor of a
        // house cell, scanning the house in reading order (up first).
        let house_exit = parsed.house_cells.iter().find_map(|&(row, col)| {
            crate::direction::DIRECTIONS.iter().find_map(|dir| {
                let (dr, dc) = dir.cell_offset();
                let (nr, nc) = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
                let tile = *parsed.tiles.get(nr)?.get(nc)?;
                (tile.is_walkable() && tile != Tile::GhostHouse).then(|| cell_center(nr, nc))
            })
        });

        let house_anchor = (!parsed.house_cells.is_empty()).then(|| {
            let sum: Vec2 = parsed.house_cells.iter().map(|&(row, col)| cell_center(row, col)).sum();
            sum / parsed.house_cells.len() as f32
        });

        debug!(
            rows,
            cols,
            walls = wall_rects.len(),
            pickups = pickup_spawns.len(),
            tunnels = tunnel_rows.len(),
            "Maze built"
        );

        Ok(Maze {
            tiles: parsed.tiles,
            rows,
            cols,
            wall_rects,
            tunnel_rows,
            house_cells: parsed.house_cells,
            house_exit,
            house_anchor,
            pickup_spawns,
        })
    }

    /// The standard board bundled with the crate.
    pub fn standard() -> GameResult<Maze> {
        let layout: Vec<&[u8]> = RAW_LAYOUT.iter().map(|row| row.as_slice()).collect();
        Maze::new(&layout)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The maze's playable size in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(self.cols as f32 * CELL_SIZE, self.rows as f32 * CELL_SIZE)
    }

    fn check_bounds(&self, row: usize, col: usize) -> GameResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MazeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }
            .into());
        }
        Ok(())
    }

    /// Returns the tile at the given cell.
    pub fn classify(&self, row: usize, col: usize) -> GameResult<Tile> {
        self.check_bounds(row, col)?;
        Ok(self.tiles[row][col])
    }

    /// True for every tile except walls. Out-of-bounds cells are not
    /// walkable.
    pub fn is_walkable(&self, row: usize, col: usize) -> bool {
        self.tiles
            .get(row)
            .and_then(|tiles| tiles.get(col))
            .is_some_and(Tile::is_walkable)
    }

    /// Consumes the pickup at a cell, mutating it to `EmptyPath`.
    ///
    /// Idempotent: a second call at the same cell returns `None`.
    pub fn consume_pickup_at(&mut self, row: usize, col: usize) -> GameResult<Option<PickupKind>> {
        self.check_bounds(row, col)?;
        let kind = match self.tiles[row][col] {
            Tile::Dot => PickupKind::Dot,
            Tile::PowerPellet => PickupKind::PowerPellet,
            _ => return Ok(None),
        };
        self.tiles[row][col] = Tile::EmptyPath;
        Ok(Some(kind))
    }

    /// Restores every consumed pickup from the static layout.
    pub fn restore_pickups(&mut self) {
        for &(row, col, kind) in &self.pickup_spawns {
            self.tiles[row][col] = match kind {
                PickupKind::Dot => Tile::Dot,
                PickupKind::PowerPellet => Tile::PowerPellet,
            };
        }
    }

    /// Number of pickups currently present in the maze.
    pub fn pickup_count(&self) -> u32 {
        self.tiles
            .iter()
            .flatten()
            .filter(|tile| matches!(tile, Tile::Dot | Tile::PowerPellet))
            .count() as u32
    }

    /// Positions of the remaining pickups, in reading order.
    pub fn remaining_pickups(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for (row, tiles) in self.tiles.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                if matches!(tile, Tile::Dot | Tile::PowerPellet) {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Immutable wall colliders, one per wall tile.
    pub fn wall_rects(&self) -> &[Rect] {
        &self.wall_rects
    }

    pub fn tunnel_rows(&self) -> &[TunnelRow] {
        &self.tunnel_rows
    }

    /// Maps a position beyond one side of the maze to the tunnel mouth
    /// on the opposite side at the nearest tunnel row. `None` if the
    /// maze has no tunnels.
    pub fn tunnel_partner(&self, position: Vec2) -> Option<Vec2> {
        let nearest = self.tunnel_rows.iter().min_by(|a, b| {
            let da = (cell_center(a.row, 0).y - position.y).abs();
            let db = (cell_center(b.row, 0).y - position.y).abs();
            da.total_cmp(&db)
        })?;

        let mouth = if position.x < self.pixel_size().x / 2.0 {
            nearest.right_mouth
        } else {
            nearest.left_mouth
        };
        Some(cell_center(nearest.row, mouth))
    }

    /// Ghost-house cells in reading order, empty if the layout has no
    /// house.
    pub fn house_cells(&self) -> &[(usize, usize)] {
        &self.house_cells
    }

    /// The walkable gap through which released ghosts leave the house.
    pub fn house_exit(&self) -> Option<Vec2> {
        self.house_exit
    }

    /// The anchor point eaten ghosts return to.
    pub fn house_anchor(&self) -> Option<Vec2> {
        self.house_anchor
    }

    /// The cell containing a position, clamped into the grid.
    pub fn cell_of(&self, position: Vec2) -> (usize, usize) {
        let row = (position.y / CELL_SIZE).floor().clamp(0.0, (self.rows - 1) as f32) as usize;
        let col = (position.x / CELL_SIZE).floor().clamp(0.0, (self.cols - 1) as f32) as usize;
        (row, col)
    }
}

/// The pixel-space center of a cell.
pub fn cell_center(row: usize, col: usize) -> Vec2 {
    Vec2::new((col as f32 + 0.5) * CELL_SIZE, (row as f32 + 0.5) * CELL_SIZE)
}
