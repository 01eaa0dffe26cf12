//! Shapes module - the tetromino catalog
//!
//! Each kind is defined by a small row-major occupancy matrix and a color.
//! The three non-spawn orientations are derived from the base matrix by
//! successive 90° clockwise rotations, so a piece's occupancy really changes
//! shape when it rotates. The whole table is built once on first use and is
//! read-only afterwards.

use once_cell::sync::Lazy;

use crate::types::{PieceKind, Rgb, Rotation, BLUE, CYAN, GREEN, MAGENTA, ORANGE, RED, YELLOW};

/// Largest matrix side length in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// Number of filled cells in every tetromino
pub const CELLS_PER_PIECE: usize = 4;

/// Offset of a single cell relative to the matrix's top-left corner
pub type MinoOffset = (i8, i8);

/// The filled cells of one orientation
pub type PieceShape = [MinoOffset; CELLS_PER_PIECE];

/// Rectangular boolean occupancy matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values. Rows must all have the same length.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        debug_assert!(height <= MAX_SHAPE_SIZE && width <= MAX_SHAPE_SIZE);
        debug_assert!(rows.iter().all(|r| r.len() == width));

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (col, row) is filled; out of range is empty
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.width as usize && row < self.height as usize && self.cells[row][col]
    }

    /// Count of filled cells
    pub fn popcount(&self) -> usize {
        self.cells[..self.height as usize]
            .iter()
            .map(|row| row[..self.width as usize].iter().filter(|&&c| c).count())
            .sum()
    }

    /// Rotate 90° clockwise: an h×w matrix becomes w×h.
    ///
    /// Row `r` of the result is column `r` of the source read bottom to top.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, out_row) in cells.iter_mut().enumerate().take(w) {
            for (c, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.cells[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Filled cells as (dx, dy) offsets, scanning rows top to bottom.
    ///
    /// Panics if the matrix does not hold exactly four cells; the catalog only
    /// calls this on tetromino matrices.
    fn offsets(&self) -> PieceShape {
        let mut out = [(0, 0); CELLS_PER_PIECE];
        let mut n = 0;
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] {
                    out[n] = (x as i8, y as i8);
                    n += 1;
                }
            }
        }
        assert_eq!(n, CELLS_PER_PIECE, "tetromino matrix must have four cells");
        out
    }
}

/// Catalog entry for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeEntry {
    pub kind: PieceKind,
    pub color: Rgb,
    /// Matrix per orientation, indexed by [`Rotation::index`]
    matrices: [ShapeMatrix; 4],
    /// Filled-cell offsets per orientation
    offsets: [PieceShape; 4],
}

impl ShapeEntry {
    fn new(kind: PieceKind, color: Rgb, rows: &[&[u8]]) -> Self {
        let base = ShapeMatrix::from_rows(rows);
        let mut matrices = [base; 4];
        for i in 1..4 {
            matrices[i] = matrices[i - 1].rotated_cw();
        }
        let offsets = matrices.map(|m| m.offsets());
        Self {
            kind,
            color,
            matrices,
            offsets,
        }
    }

    /// Spawn-orientation matrix
    pub fn base(&self) -> &ShapeMatrix {
        &self.matrices[0]
    }

    /// Matrix for an orientation
    pub fn matrix(&self, rotation: Rotation) -> &ShapeMatrix {
        &self.matrices[rotation.index()]
    }

    /// Filled-cell offsets for an orientation
    pub fn offsets(&self, rotation: Rotation) -> &PieceShape {
        &self.offsets[rotation.index()]
    }
}

static CATALOG: Lazy<[ShapeEntry; 7]> = Lazy::new(|| {
    [
        ShapeEntry::new(PieceKind::I, CYAN, &[&[1, 1, 1, 1]]),
        ShapeEntry::new(PieceKind::O, YELLOW, &[&[1, 1], &[1, 1]]),
        ShapeEntry::new(PieceKind::T, MAGENTA, &[&[1, 1, 1], &[0, 1, 0]]),
        ShapeEntry::new(PieceKind::L, ORANGE, &[&[1, 1, 1], &[1, 0, 0]]),
        ShapeEntry::new(PieceKind::J, BLUE, &[&[1, 1, 1], &[0, 0, 1]]),
        ShapeEntry::new(PieceKind::S, GREEN, &[&[1, 1, 0], &[0, 1, 1]]),
        ShapeEntry::new(PieceKind::Z, RED, &[&[0, 1, 1], &[1, 1, 0]]),
    ]
});

/// Look up the catalog entry for a kind
pub fn shape(kind: PieceKind) -> &'static ShapeEntry {
    &CATALOG[kind.index()]
}

/// Get the filled-cell offsets for a kind and orientation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    *shape(kind).offsets(rotation)
}

/// Display color of a kind
pub fn color_of(kind: PieceKind) -> Rgb {
    shape(kind).color
}
