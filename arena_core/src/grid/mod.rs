//! [`TileGrid`] is the character-based 2D grid that gives the locations of
//! the walls and doors

pub mod standard_arenas;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One cell of a [`TileGrid`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Tile {
    /// Wall (`#`)
    Wall,
    /// Open floor (space)
    Floor,
    /// Door (`-`)
    Door,
}

impl Tile {
    /// Returns the [`Tile`] for the given map character, or `None` if the
    /// character is not part of the map alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_core::grid::Tile;
    ///
    /// assert_eq!(Tile::from_char('#'), Some(Tile::Wall));
    /// assert_eq!(Tile::from_char(' '), Some(Tile::Floor));
    /// assert_eq!(Tile::from_char('-'), Some(Tile::Door));
    /// assert_eq!(Tile::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Tile::Wall),
            ' ' => Some(Tile::Floor),
            '-' => Some(Tile::Door),
            _ => None,
        }
    }

    /// Returns whether this [`Tile`] is a wall.
    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

/// The ways parsing a tile map can fail.
///
/// All of these are fatal configuration errors; a grid that fails to parse
/// is never rendered.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GridError {
    #[error("grid has no tiles")]
    Empty,
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown tile character {ch:?} at row {row}, col {col}")]
    UnknownTile { row: usize, col: usize, ch: char },
}

/// Which of a tile's four edges face a non-wall neighbor.
///
/// Sides pointing outside the grid are always closed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OpenSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl OpenSides {
    /// Returns the number of open sides (0-4).
    pub fn count(self) -> usize {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .filter(|open| **open)
            .count()
    }

    /// Returns the number of adjacent perpendicular open-side pairs (0-4),
    /// one per convex corner that gets rounded.
    pub fn corner_count(self) -> usize {
        [
            self.top && self.left,
            self.top && self.right,
            self.bottom && self.left,
            self.bottom && self.right,
        ]
        .iter()
        .filter(|corner| **corner)
        .count()
    }
}

/// A validated rectangular grid of [`Tile`]s, indexed by `(row, col)` with
/// row 0 at the top.
///
/// This struct is created by [`TileGrid::parse`]; the grid is immutable
/// afterwards.
///
/// # Examples
///
/// ```
/// use arena_core::grid::TileGrid;
///
/// let grid = TileGrid::parse(&["###", "# #", "###"]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 3);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TileGrid {
    tiles: Vec<Vec<Tile>>,
    width: usize,
    height: usize,
}

impl TileGrid {
    /// Parses a tile map from rows of `#` (wall), space (floor) and `-`
    /// (door) characters.
    ///
    /// Returns a [`GridError`] if the map is empty, not rectangular, or
    /// contains a character outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_core::grid::{GridError, TileGrid};
    ///
    /// assert!(TileGrid::parse(&["##", "##"]).is_ok());
    /// assert_eq!(TileGrid::parse(&[]), Err(GridError::Empty));
    /// assert_eq!(
    ///     TileGrid::parse(&["##", "#"]),
    ///     Err(GridError::RaggedRow { row: 1, len: 1, expected: 2 })
    /// );
    /// ```
    pub fn parse(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(height);
        for (row, chars) in rows.iter().enumerate() {
            let len = chars.chars().count();
            if len != width {
                return Err(GridError::RaggedRow {
                    row,
                    len,
                    expected: width,
                });
            }
            let mut tile_row = Vec::with_capacity(width);
            for (col, ch) in chars.chars().enumerate() {
                match Tile::from_char(ch) {
                    Some(tile) => tile_row.push(tile),
                    None => return Err(GridError::UnknownTile { row, col, ch }),
                }
            }
            tiles.push(tile_row);
        }

        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Returns the number of columns in the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows in the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the [`Tile`] at the given position, or `None` if the position
    /// is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_core::grid::{Tile, TileGrid};
    ///
    /// let grid = TileGrid::parse(&["###", "#-#", "###"]).unwrap();
    /// assert_eq!(grid.tile(0, 0), Some(Tile::Wall));
    /// assert_eq!(grid.tile(1, 1), Some(Tile::Door));
    /// assert_eq!(grid.tile(3, 3), None);
    /// ```
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.tiles[row][col])
    }

    /// Returns whether the tile at the given position is a wall; positions
    /// out of bounds are not walls.
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.tile(row, col).map(Tile::is_wall).unwrap_or(false)
    }

    /// Computes which sides of the tile at `(row, col)` face a non-wall
    /// neighbor.
    ///
    /// A side pointing outside the grid is closed, so boundary tiles never
    /// report an open side towards the missing neighbor. The result is
    /// derived from the grid on every call, never cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_core::grid::TileGrid;
    ///
    /// let grid = TileGrid::parse(&["###", "# #", "###"]).unwrap();
    /// let open = grid.open_sides(1, 0);
    /// assert!(open.right);
    /// assert!(!open.top && !open.bottom && !open.left);
    /// ```
    pub fn open_sides(&self, row: usize, col: usize) -> OpenSides {
        OpenSides {
            top: row > 0 && !self.is_wall(row - 1, col),
            bottom: row + 1 < self.height && !self.is_wall(row + 1, col),
            left: col > 0 && !self.is_wall(row, col - 1),
            right: col + 1 < self.width && !self.is_wall(row, col + 1),
        }
    }
}

impl TryFrom<&[&str]> for TileGrid {
    type Error = GridError;

    fn try_from(rows: &[&str]) -> Result<Self, Self::Error> {
        Self::parse(rows)
    }
}
