// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, slice, vec};

use serde::Serialize;

use crate::core::{Board, Coord};

/// The set of coordinates a piece could move to. A Span behaves like a set (no coordinate is ever stored twice)
/// but remembers the order in which coordinates were first inserted, so results are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Span(Vec<Coord>);

impl Span {
    /// Creates a new, empty Span.
    pub const fn empty() -> Span {
        Span(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Span {
        Span(Vec::with_capacity(capacity))
    }

    /// Tests whether or not the given coordinate is contained within this Span.
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    /// Inserts a coordinate, returning false if it was already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            return false;
        }

        self.0.push(coord);
        true
    }

    /// Adds every coordinate of `other` that is not already present, preserving order.
    pub fn union(mut self, other: Span) -> Span {
        for coord in other {
            self.insert(coord);
        }

        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Coord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }

    /// Compares two spans as sets, ignoring insertion order.
    pub fn same_coords(&self, other: &Span) -> bool {
        self.len() == other.len() && self.iter().all(|&c| other.contains(c))
    }

    /// Renders this span on a board, with the piece standing at `origin`.
    pub fn diagram<'a>(&'a self, board: &'a Board, origin: Coord) -> Diagram<'a> {
        Diagram {
            span: self,
            board,
            origin,
        }
    }
}

impl FromIterator<Coord> for Span {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut span = Span::empty();
        for coord in iter {
            span.insert(coord);
        }

        span
    }
}

impl IntoIterator for Span {
    type Item = Coord;
    type IntoIter = vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Span {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for coord in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", coord)?;
            first = false;
        }

        Ok(())
    }
}

/// A Span drawn on a board: `x` marks the piece, `1` every reachable coordinate.
pub struct Diagram<'a> {
    span: &'a Span,
    board: &'a Board,
    origin: Coord,
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.board.rows()).rev() {
            for column in 0..self.board.columns() {
                let coord = Coord::new(row, column);
                if coord == self.origin {
                    write!(f, " x ")?;
                } else if self.span.contains(coord) {
                    write!(f, " 1 ")?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", row + 1)?;
        }

        for _ in 0..self.board.columns() {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for column in 0..self.board.columns() {
            write!(f, " {} ", (b'a' + column as u8) as char)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Span;
    use crate::core::*;

    #[test]
    fn insert_dedups() {
        let mut span = Span::empty();
        assert!(span.insert(Coord::new(0, 0)));
        assert!(!span.insert(Coord::new(0, 0)));
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn union_keeps_order() {
        let a: Span = vec![Coord::new(0, 0), Coord::new(0, 1)].into_iter().collect();
        let b: Span = vec![Coord::new(0, 1), Coord::new(0, 2)].into_iter().collect();
        let union = a.union(b);
        assert_eq!(
            union.into_vec(),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn same_coords_ignores_order() {
        let a: Span = vec![Coord::new(1, 0), Coord::new(0, 1)].into_iter().collect();
        let b: Span = vec![Coord::new(0, 1), Coord::new(1, 0)].into_iter().collect();
        assert_ne!(a, b);
        assert!(a.same_coords(&b));
    }

    #[test]
    fn display() {
        let span: Span = vec![Coord::new(3, 4), Coord::new(-1, 2)].into_iter().collect();
        assert_eq!(span.to_string(), "e4 (-1,2)");
    }

    #[test]
    fn diagram() {
        let board = Board::new(2, 2).unwrap();
        let span: Span = vec![Coord::new(1, 1)].into_iter().collect();
        let rendered = span.diagram(&board, Coord::new(0, 0)).to_string();
        assert_eq!(rendered, " .  1 | 2\n x  . | 1\n------\n a  b \n");
    }
}
