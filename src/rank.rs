// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ranks: the movement and value configuration of a piece type, and the single entry point for span computation.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use crate::{
    algorithms::{DiagonalSpan, FixedOffsetSpan, PerpendicularSpan, KING_VECTORS, KNIGHT_VECTORS},
    core::*,
    error::{FailureKind, SpanError, SpanResult},
    pawn::SolutionEngine,
    tracing::constants,
};

// Ransoms, in centipawns. The king cannot be captured.
const KING_RANSOM: u32 = 0;
const QUEEN_RANSOM: u32 = 900;
const ROOK_RANSOM: u32 = 500;
const BISHOP_RANSOM: u32 = 300;
const KNIGHT_RANSOM: u32 = 300;
const PAWN_RANSOM: u32 = 100;

/// A rank is long-lived configuration: it is built once per piece type and then asked for spans of many tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rank {
    id: u32,
    kind: RankKind,
    name: String,
    designation: char,
    /// The value of capturing a piece of this rank.
    ransom: u32,
    /// How many pieces of this rank a single team may field.
    team_quota: u8,
    /// Sectors this rank can move into, as seen by White.
    quadrants: Quadrants,
}

impl Rank {
    pub(crate) fn new(
        id: u32,
        kind: RankKind,
        name: String,
        designation: char,
        ransom: u32,
        team_quota: u8,
        quadrants: Quadrants,
    ) -> Rank {
        Rank {
            id,
            kind,
            name,
            designation,
            ransom,
            team_quota,
            quadrants,
        }
    }

    /// The rank as it is configured for a standard game of chess.
    pub fn standard(kind: RankKind) -> Rank {
        let (id, ransom, team_quota, quadrants) = match kind {
            RankKind::King => (1, KING_RANSOM, 1, Quadrants::ALL),
            RankKind::Queen => (2, QUEEN_RANSOM, 1, Quadrants::ALL),
            RankKind::Rook => (3, ROOK_RANSOM, 2, Quadrants::ALL),
            RankKind::Bishop => (4, BISHOP_RANSOM, 2, Quadrants::ALL),
            RankKind::Knight => (5, KNIGHT_RANSOM, 2, Quadrants::ALL),
            RankKind::Pawn => (6, PAWN_RANSOM, 8, Quadrants::NORTH),
        };

        Rank::new(
            id,
            kind,
            kind.name().to_owned(),
            kind.designation(),
            ransom,
            team_quota,
            quadrants,
        )
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn kind(&self) -> RankKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn designation(&self) -> char {
        self.designation
    }

    pub fn ransom(&self) -> u32 {
        self.ransom
    }

    pub fn team_quota(&self) -> u8 {
        self.team_quota
    }

    pub fn quadrants(&self) -> Vec<Quadrant> {
        self.quadrants.list()
    }

    /// The quadrants this rank can reach for a piece of the given color.
    pub fn quadrants_for(&self, color: Color) -> Quadrants {
        match color {
            Color::White => self.quadrants,
            Color::Black => self.quadrants.mirrored(),
        }
    }

    /// The fixed vector table of this rank, for ranks that move by fixed offsets. Sliding ranks and pawns compute
    /// their spans some other way and have none.
    pub fn vectors(&self) -> Option<&'static [Vector]> {
        match self.kind {
            RankKind::King => Some(&KING_VECTORS),
            RankKind::Knight => Some(&KNIGHT_VECTORS),
            RankKind::Queen | RankKind::Rook | RankKind::Bishop | RankKind::Pawn => None,
        }
    }

    /// Computes the coordinates the given token could move to, if it were of this rank, using `coords` for all
    /// coordinate arithmetic.
    ///
    /// This function always returns. Every failure, including a panic somewhere underneath, is reported as a
    /// [`SpanError`] carrying this rank's name; a successful result never contains duplicates.
    pub fn compute_span<T, C>(&self, token: &T, coords: &C) -> SpanResult<Span>
    where
        T: Token + ?Sized,
        C: CoordService + ?Sized,
    {
        let origin = token.current_position();
        let _span = tracing::info_span!(
            constants::COMPUTE_SPAN,
            rank = self.kind.name(),
            origin = %origin,
            color = %token.color()
        )
        .entered();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(token, coords)))
            .unwrap_or_else(|payload| {
                Err(SpanError::new(
                    FailureKind::Internal,
                    "panic",
                    panic_message(payload.as_ref()),
                ))
            })
            .map_err(|e| e.context(self.kind.name(), "span computation failed"));

        match result {
            Ok(ref span) => {
                tracing::debug!(event = constants::SPAN_COMPLETE, size = span.len());
            }
            Err(ref err) => {
                tracing::warn!(event = constants::SPAN_FAILED, error = %err);
            }
        }

        result
    }

    fn dispatch<T, C>(&self, token: &T, coords: &C) -> SpanResult<Span>
    where
        T: Token + ?Sized,
        C: CoordService + ?Sized,
    {
        let origin = token.current_position();
        match self.kind {
            RankKind::King => FixedOffsetSpan::new(coords).compute(origin, &KING_VECTORS),
            RankKind::Knight => FixedOffsetSpan::new(coords).compute(origin, &KNIGHT_VECTORS),
            RankKind::Rook => PerpendicularSpan::new(coords).compute(origin),
            RankKind::Bishop => DiagonalSpan::new(coords).compute(origin),
            RankKind::Queen => {
                let perpendicular = PerpendicularSpan::new(coords).compute(origin)?;
                let diagonal = DiagonalSpan::new(coords).compute(origin)?;
                Ok(perpendicular.union(diagonal))
            }
            RankKind::Pawn => SolutionEngine::new(coords).compute_for_token(token),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_owned()
    }
}
