//! Grid and geometry logic for the maze arena renderer
//!
//! Everything in this crate is display-independent: the gui crate consumes
//! the [`geometry::DrawPrimitive`]s produced here and forwards them to the
//! graphics library.

pub mod constants;
pub mod geometry;
pub mod grid;
