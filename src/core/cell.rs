//! Decomposition cell.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// One obstacle-free rectangular region of the wall.
///
/// Produced by the decomposer and never mutated afterwards. Ids are assigned
/// sequentially in emission order (slabs left to right, free spans bottom to
/// top), so they double as indices into the pattern table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Stable identifier, sequential in emission order.
    pub id: u32,
    /// Geometric extent of the cell.
    pub rect: Rect,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(id: u32, rect: Rect) -> Self {
        Self { id, rect }
    }
}
