// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Coordinate arithmetic. The span algorithms never add vectors to coordinates themselves; they ask a
//! [`CoordService`], which owns the policy for what counts as a valid coordinate.

use thiserror::Error;

use crate::core::{Coord, Vector};

/// Largest board edge that can still be labeled with a single file letter.
pub const MAX_BOARD_EDGE: i32 = 26;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CoordError {
    /// The result lies off the board. This is the board's edge signal: sliding walks end here and fixed offsets
    /// skip the vector.
    #[error("{0} is off the board")]
    OutOfBounds(Coord),
    #[error("adding {vector} to {coord} overflows")]
    Overflow { coord: Coord, vector: Vector },
    #[error("adding {vector} to {coord} was rejected: {reason}")]
    Rejected {
        coord: Coord,
        vector: Vector,
        reason: String,
    },
}

impl CoordError {
    /// Returns whether or not this error only signals the edge of the board.
    pub fn is_boundary(&self) -> bool {
        matches!(self, CoordError::OutOfBounds(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be between 1 and {max}, got {rows}x{columns}")]
    InvalidDimensions { rows: i32, columns: i32, max: i32 },
}

/// Adds vectors to coordinates.
pub trait CoordService {
    fn add_vector_to_coord(&self, coord: Coord, vector: Vector) -> Result<Coord, CoordError>;
}

impl<C: CoordService + ?Sized> CoordService for &C {
    fn add_vector_to_coord(&self, coord: Coord, vector: Vector) -> Result<Coord, CoordError> {
        (**self).add_vector_to_coord(coord, vector)
    }
}

/// A rectangular board. Row 0 is White's back rank, column 0 is the a-file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: i32,
    columns: i32,
}

impl Board {
    pub fn new(rows: i32, columns: i32) -> Result<Board, BoardError> {
        let valid = 1..=MAX_BOARD_EDGE;
        if !valid.contains(&rows) || !valid.contains(&columns) {
            return Err(BoardError::InvalidDimensions {
                rows,
                columns,
                max: MAX_BOARD_EDGE,
            });
        }

        Ok(Board { rows, columns })
    }

    /// The standard 8x8 chessboard.
    pub const fn standard() -> Board {
        Board {
            rows: 8,
            columns: 8,
        }
    }

    pub const fn rows(&self) -> i32 {
        self.rows
    }

    pub const fn columns(&self) -> i32 {
        self.columns
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (0..self.rows).contains(&coord.row) && (0..self.columns).contains(&coord.column)
    }

    /// Tests whether or not the given coordinate touches one of the board's edges.
    pub fn is_edge(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.row == 0
                || coord.column == 0
                || coord.row == self.rows - 1
                || coord.column == self.columns - 1)
    }

    /// All coordinates on the board, row by row starting at a1.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |column| Coord::new(row, column)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl CoordService for Board {
    fn add_vector_to_coord(&self, coord: Coord, vector: Vector) -> Result<Coord, CoordError> {
        if !self.contains(coord) {
            return Err(CoordError::Rejected {
                coord,
                vector,
                reason: "origin is not on the board".to_owned(),
            });
        }

        let row = coord.row.checked_add(vector.d_row);
        let column = coord.column.checked_add(vector.d_column);
        let target = match (row, column) {
            (Some(row), Some(column)) => Coord::new(row, column),
            _ => return Err(CoordError::Overflow { coord, vector }),
        };

        if !self.contains(target) {
            return Err(CoordError::OutOfBounds(target));
        }

        Ok(target)
    }
}
