// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{
    core::{Coord, CoordService, Span, Vector},
    error::{SpanContext, SpanError, SpanResult},
};

/// The eight squares surrounding a king.
pub const KING_VECTORS: [Vector; 8] = [
    Vector::new(1, 0),
    Vector::new(1, 1),
    Vector::new(0, 1),
    Vector::new(-1, 1),
    Vector::new(-1, 0),
    Vector::new(-1, -1),
    Vector::new(0, -1),
    Vector::new(1, -1),
];

/// The eight L-shaped knight jumps.
pub const KNIGHT_VECTORS: [Vector; 8] = [
    Vector::new(2, 1),
    Vector::new(1, 2),
    Vector::new(-1, 2),
    Vector::new(-2, 1),
    Vector::new(-2, -1),
    Vector::new(-1, -2),
    Vector::new(1, -2),
    Vector::new(2, -1),
];

const FIXED_OFFSET_SPAN: &str = "fixed offset span";

/// Span reached by adding each of a fixed set of vectors to the origin exactly once. Vectors that leave the board
/// are skipped.
pub struct FixedOffsetSpan<'a, C: ?Sized> {
    coords: &'a C,
}

impl<'a, C: CoordService + ?Sized> FixedOffsetSpan<'a, C> {
    pub fn new(coords: &'a C) -> FixedOffsetSpan<'a, C> {
        FixedOffsetSpan { coords }
    }

    pub fn compute(&self, origin: Coord, vectors: &[Vector]) -> SpanResult<Span> {
        let mut span = Span::with_capacity(vectors.len());
        for &vector in vectors {
            match self.coords.add_vector_to_coord(origin, vector) {
                Ok(target) => {
                    #[cfg(feature = "trace-span")]
                    tracing::trace!(%vector, %target, "offset");
                    span.insert(target);
                }
                Err(e) if e.is_boundary() => continue,
                Err(e) => {
                    return Err(SpanError::arithmetic(e))
                        .with_context(FIXED_OFFSET_SPAN, || format!("{} from {}", vector, origin))
                }
            }
        }

        Ok(span)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::{Board, CoordError};
    use crate::error::FailureKind;

    struct RejectVector {
        board: Board,
        vector: Vector,
    }

    impl CoordService for RejectVector {
        fn add_vector_to_coord(&self, coord: Coord, vector: Vector) -> Result<Coord, CoordError> {
            if vector == self.vector {
                return Err(CoordError::Overflow { coord, vector });
            }

            self.board.add_vector_to_coord(coord, vector)
        }
    }

    #[test]
    fn vector_tables_are_distinct() {
        let king: HashSet<_> = KING_VECTORS.iter().copied().collect();
        assert_eq!(king.len(), 8);
        assert!(KING_VECTORS.iter().all(|v| v.is_unit()));

        let knight: HashSet<_> = KNIGHT_VECTORS.iter().copied().collect();
        assert_eq!(knight.len(), 8);
        for v in &KNIGHT_VECTORS {
            let mut legs = [v.d_row.abs(), v.d_column.abs()];
            legs.sort_unstable();
            assert_eq!(legs, [1, 2]);
        }
    }

    #[test]
    fn king_from_center() {
        let board = Board::standard();
        let e4 = Coord::new(3, 4);
        let span = FixedOffsetSpan::new(&board).compute(e4, &KING_VECTORS).unwrap();
        assert_eq!(span.len(), 8);
        assert!(span.iter().all(|&c| c.distance(e4) == 1));
    }

    #[test]
    fn king_from_corner() {
        let board = Board::standard();
        let span = FixedOffsetSpan::new(&board)
            .compute(Coord::new(0, 0), &KING_VECTORS)
            .unwrap();
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn knight_from_corner() {
        let board = Board::standard();
        let span = FixedOffsetSpan::new(&board)
            .compute(Coord::new(0, 0), &KNIGHT_VECTORS)
            .unwrap();
        assert!(span.same_coords(&vec![Coord::new(2, 1), Coord::new(1, 2)].into_iter().collect()));
    }

    #[test]
    fn duplicate_vectors_are_collapsed() {
        let board = Board::standard();
        let vectors = [Vector::new(1, 0), Vector::new(1, 0)];
        let span = FixedOffsetSpan::new(&board)
            .compute(Coord::new(3, 3), &vectors)
            .unwrap();
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn injected_failure_aborts() {
        let coords = RejectVector {
            board: Board::standard(),
            vector: KNIGHT_VECTORS[5],
        };
        let err = FixedOffsetSpan::new(&coords)
            .compute(Coord::new(3, 3), &KNIGHT_VECTORS)
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::Arithmetic);
        assert_eq!(
            err.cause(),
            Some(&CoordError::Overflow {
                coord: Coord::new(3, 3),
                vector: KNIGHT_VECTORS[5],
            })
        );
    }
}
