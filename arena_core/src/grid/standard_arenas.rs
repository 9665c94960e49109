//! Compiled-in arena tile maps

use crate::grid::{GridError, TileGrid};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardArena {
    #[default]
    Classic,
    Outer,
}

#[allow(dead_code)]
impl StandardArena {
    /// Get a list of all available arenas
    pub fn get_all() -> [Self; 2] {
        [Self::Classic, Self::Outer]
    }

    /// Get the tile map rows associated with this enum
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            Self::Classic => &ARENA_CLASSIC,
            Self::Outer => &ARENA_OUTER,
        }
    }

    /// Get the parsed [`TileGrid`] associated with this enum
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_core::grid::standard_arenas::StandardArena;
    ///
    /// let grid = StandardArena::Classic.tile_grid().unwrap();
    /// assert_eq!(grid.width(), 28);
    /// assert_eq!(grid.height(), 31);
    /// ```
    pub fn tile_grid(&self) -> Result<TileGrid, GridError> {
        TileGrid::parse(self.rows())
    }
}

/// The classic 28x31 arcade arena
///
/// `#` is a wall, space is open floor, `-` is the ghost-house door
#[rustfmt::skip]
pub const ARENA_CLASSIC: [&str; 31] = [
    "############################",
    "#            ##            #",
    "# #### ##### ## ##### #### #",
    "# #### ##### ## ##### #### #",
    "# #### ##### ## ##### #### #",
    "#                          #",
    "# #### ## ######## ## #### #",
    "# #### ## ######## ## #### #",
    "#      ##    ##    ##      #",
    "###### ##### ## ##### ######",
    "     # ##### ## ##### #     ",
    "     # ##          ## #     ",
    "     # ## ###--### ## #     ",
    "###### ## #      # ## ######",
    "          #      #          ",
    "###### ## #      # ## ######",
    "     # ## ######## ## #     ",
    "     # ##          ## #     ",
    "     # ## ######## ## #     ",
    "###### ## ######## ## ######",
    "#            ##            #",
    "# #### ##### ## ##### #### #",
    "# #### ##### ## ##### #### #",
    "#   ##                ##   #",
    "### ## ## ######## ## ## ###",
    "### ## ## ######## ## ## ###",
    "#      ##    ##    ##      #",
    "# ########## ## ########## #",
    "# ########## ## ########## #",
    "#                          #",
    "############################",
];

/// A small arena with a single ring corridor and one door
#[rustfmt::skip]
pub const ARENA_OUTER: [&str; 9] = [
    "#########",
    "#       #",
    "# ##### #",
    "# #   # #",
    "# #   # #",
    "# #   # #",
    "# ##-## #",
    "#       #",
    "#########",
];
