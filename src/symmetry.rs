//! D4 symmetry group operations on the board

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Cell};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Create a pure clockwise rotation (0, 90, 180 or 270 degrees)
    pub fn rotation(degrees: u16) -> Self {
        D4Transform {
            rotation: degrees % 360,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply transform to a position (0-8)
    pub fn transform_position(&self, pos: usize) -> usize {
        let (mut row, mut col) = (pos / 3, pos % 3);

        // Reflect across the vertical axis first, then rotate clockwise.
        if self.reflection {
            col = 2 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = 2 - row;
            row = new_row;
            col = new_col;
        }

        row * 3 + col
    }

    /// Apply transform to an array of cells
    pub fn apply_to_cells(&self, cells: &[Cell; 9]) -> [Cell; 9] {
        let mut transformed = [Cell::Empty; 9];
        for idx in 0..9 {
            transformed[self.transform_position(idx)] = cells[idx];
        }
        transformed
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // In reflect-then-rotate order every reflected transform is an
            // involution, so it is its own inverse.
            *self
        } else {
            // Pure rotation: inverse is opposite rotation
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl BoardState {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        BoardState {
            cells: t.apply_to_cells(&self.cells),
            to_move: self.to_move,
        }
    }
}
