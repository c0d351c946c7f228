// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sliding spans for rooks, bishops and queens.
//!
//! Starting at the origin, a ray is cast in each direction, stepping one coordinate at a time until the coordinate
//! service reports the edge of the board. Board occupancy is not consulted: every coordinate up to the edge is part
//! of the span.

use crate::{
    core::{Coord, CoordService, Direction, Span},
    error::{FailureKind, SpanContext, SpanError, SpanResult},
};

/// Longest ray that will be walked before giving up. No board this crate can describe comes close; hitting it
/// means the coordinate service never reported an edge.
pub const MAX_RAY_LENGTH: usize = 256;

const PERPENDICULAR_SPAN: &str = "perpendicular span";
const DIAGONAL_SPAN: &str = "diagonal span";

/// Casts a single ray and adds every coordinate on it to `span`.
fn cast_ray<C: CoordService + ?Sized>(
    coords: &C,
    origin: Coord,
    dir: Direction,
    span: &mut Span,
) -> SpanResult<()> {
    let step = dir.as_vector();
    let mut cursor = origin;
    for _ in 0..MAX_RAY_LENGTH {
        match coords.add_vector_to_coord(cursor, step) {
            Ok(next) => {
                #[cfg(feature = "trace-span")]
                tracing::trace!(direction = %dir, reached = %next, "ray step");
                span.insert(next);
                cursor = next;
            }
            // Did we reach the end of the board? If so, stop.
            Err(e) if e.is_boundary() => return Ok(()),
            Err(e) => {
                return Err(SpanError::arithmetic(e)).with_context("ray", || {
                    format!("{} from {} failed at {}", dir, origin, cursor)
                })
            }
        }
    }

    Err(SpanError::new(
        FailureKind::Internal,
        "ray",
        format!(
            "{} from {} did not reach an edge within {} steps",
            dir, origin, MAX_RAY_LENGTH
        ),
    ))
}

fn slide<C: CoordService + ?Sized>(
    coords: &C,
    origin: Coord,
    directions: &[Direction],
) -> SpanResult<Span> {
    let mut span = Span::empty();
    for &dir in directions {
        cast_ray(coords, origin, dir, &mut span)?;
    }

    Ok(span)
}

/// Span along the four orthogonal directions, as walked by a rook.
pub struct PerpendicularSpan<'a, C: ?Sized> {
    coords: &'a C,
}

impl<'a, C: CoordService + ?Sized> PerpendicularSpan<'a, C> {
    pub fn new(coords: &'a C) -> PerpendicularSpan<'a, C> {
        PerpendicularSpan { coords }
    }

    pub fn compute(&self, origin: Coord) -> SpanResult<Span> {
        slide(self.coords, origin, &Direction::PERPENDICULAR)
            .with_context(PERPENDICULAR_SPAN, || format!("from {}", origin))
    }
}

/// Span along the four diagonal directions, as walked by a bishop.
pub struct DiagonalSpan<'a, C: ?Sized> {
    coords: &'a C,
}

impl<'a, C: CoordService + ?Sized> DiagonalSpan<'a, C> {
    pub fn new(coords: &'a C) -> DiagonalSpan<'a, C> {
        DiagonalSpan { coords }
    }

    pub fn compute(&self, origin: Coord) -> SpanResult<Span> {
        slide(self.coords, origin, &Direction::DIAGONAL)
            .with_context(DIAGONAL_SPAN, || format!("from {}", origin))
    }
}
