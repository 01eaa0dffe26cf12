//! Piece module - the active falling tetromino

use crate::shapes::{shape, PieceShape, ShapeMatrix};
use crate::types::{PieceKind, Rgb, Rotation, BOARD_WIDTH};

/// Active falling piece
///
/// `(x, y)` is the board position of the top-left cell of the current
/// orientation's matrix. `y` may be negative while a piece is entering the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl Tetromino {
    /// Create a new tetromino at spawn position: horizontally centered, row 0
    pub fn new(kind: PieceKind) -> Self {
        let entry = shape(kind);
        let width = entry.base().width() as i8;
        Self {
            kind,
            rotation: Rotation::North,
            x: (BOARD_WIDTH as i8) / 2 - width / 2,
            y: 0,
            color: entry.color,
        }
    }

    /// Matrix of the current orientation
    pub fn matrix(&self) -> &'static ShapeMatrix {
        shape(self.kind).matrix(self.rotation)
    }

    /// Get the cell offsets for the current orientation
    pub fn shape(&self) -> PieceShape {
        *shape(self.kind).offsets(self.rotation)
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> PieceShape {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn width(&self) -> u8 {
        self.matrix().width()
    }

    pub fn height(&self) -> u8 {
        self.matrix().height()
    }

    /// Advance the orientation clockwise. Validity is the caller's concern.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotate_cw();
    }

    /// Undo one [`Tetromino::rotate`]
    pub fn rotate_back(&mut self) {
        self.rotation = self.rotation.rotate_ccw();
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
