// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pawn spans. Unlike every other rank, a pawn's geometry depends on its history: a pawn that has not yet moved
//! may advance two rows. The span is computed in two phases, the peaceful (non-capturing) advances and the attack
//! targets, and the two are unioned. Telling "only if empty" apart from "only if occupied by an enemy" is left to
//! whoever checks legality; this module only produces candidates.
//!
//! All vectors here are written from White's point of view and mirrored for Black.

use crate::{
    algorithms::FixedOffsetSpan,
    core::{Color, Coord, CoordService, MovementState, RankKind, Span, Token, Vector},
    error::{FailureKind, SpanContext, SpanError, SpanResult},
};

const OPENING_PEACEFUL: [Vector; 2] = [Vector::new(1, 0), Vector::new(2, 0)];
const OPENING_ATTACK: [Vector; 3] = [Vector::new(2, 0), Vector::new(2, -1), Vector::new(2, 1)];
const DEVELOPED_PEACEFUL: [Vector; 1] = [Vector::new(1, 0)];
const DEVELOPED_ATTACK: [Vector; 3] = [Vector::new(1, 0), Vector::new(1, -1), Vector::new(1, 1)];

const PAWN_ENGINE: &str = "pawn engine";

/// The vector tables a pawn moves by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PawnMoveCategory {
    /// The pawn has not moved yet.
    OpeningMove,
    /// The pawn has moved at least once.
    DevelopedMove,
}

impl PawnMoveCategory {
    pub const fn peaceful_vectors(self) -> &'static [Vector] {
        match self {
            PawnMoveCategory::OpeningMove => &OPENING_PEACEFUL,
            PawnMoveCategory::DevelopedMove => &DEVELOPED_PEACEFUL,
        }
    }

    pub const fn attack_vectors(self) -> &'static [Vector] {
        match self {
            PawnMoveCategory::OpeningMove => &OPENING_ATTACK,
            PawnMoveCategory::DevelopedMove => &DEVELOPED_ATTACK,
        }
    }
}

impl From<MovementState> for PawnMoveCategory {
    fn from(state: MovementState) -> Self {
        match state {
            MovementState::NotYetMoved => PawnMoveCategory::OpeningMove,
            MovementState::Moved => PawnMoveCategory::DevelopedMove,
        }
    }
}

fn oriented(vectors: &[Vector], color: Color) -> Vec<Vector> {
    vectors.iter().map(|v| v.oriented(color)).collect()
}

/// Coordinates a pawn could advance to without capturing.
pub struct PeacefulSpan<'a, C: ?Sized> {
    coords: &'a C,
}

impl<'a, C: CoordService + ?Sized> PeacefulSpan<'a, C> {
    pub fn new(coords: &'a C) -> PeacefulSpan<'a, C> {
        PeacefulSpan { coords }
    }

    pub fn compute(&self, origin: Coord, category: PawnMoveCategory, color: Color) -> SpanResult<Span> {
        let vectors = oriented(category.peaceful_vectors(), color);
        FixedOffsetSpan::new(self.coords)
            .compute(origin, &vectors)
            .with_context("peaceful span", || format!("{:?} from {}", category, origin))
    }
}

/// Coordinates a pawn could capture on.
pub struct AttackSpan<'a, C: ?Sized> {
    coords: &'a C,
}

impl<'a, C: CoordService + ?Sized> AttackSpan<'a, C> {
    pub fn new(coords: &'a C) -> AttackSpan<'a, C> {
        AttackSpan { coords }
    }

    pub fn compute(&self, origin: Coord, category: PawnMoveCategory, color: Color) -> SpanResult<Span> {
        let vectors = oriented(category.attack_vectors(), color);
        FixedOffsetSpan::new(self.coords)
            .compute(origin, &vectors)
            .with_context("attack span", || format!("{:?} from {}", category, origin))
    }
}

/// Both phases of a pawn span, kept apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PawnSpan {
    pub peaceful: Span,
    pub attack: Span,
}

impl PawnSpan {
    /// The full candidate span: peaceful advances first, then any attack target not already present.
    pub fn union(self) -> Span {
        self.peaceful.union(self.attack)
    }
}

pub struct SolutionEngine<'a, C: ?Sized> {
    coords: &'a C,
}

impl<'a, C: CoordService + ?Sized> SolutionEngine<'a, C> {
    pub fn new(coords: &'a C) -> SolutionEngine<'a, C> {
        SolutionEngine { coords }
    }

    /// Computes both phases for a pawn in a known category.
    pub fn solve(&self, origin: Coord, category: PawnMoveCategory, color: Color) -> SpanResult<PawnSpan> {
        let peaceful = PeacefulSpan::new(self.coords).compute(origin, category, color)?;
        let attack = AttackSpan::new(self.coords).compute(origin, category, color)?;
        Ok(PawnSpan { peaceful, attack })
    }

    pub fn compute(&self, origin: Coord, category: PawnMoveCategory, color: Color) -> SpanResult<Span> {
        self.solve(origin, category, color).map(PawnSpan::union)
    }

    /// Picks the category for a token and solves for it. Fails if the token is not a pawn, or if its movement
    /// predicates do not select exactly one category.
    pub fn solve_for_token<T: Token + ?Sized>(&self, token: &T) -> SpanResult<PawnSpan> {
        if token.kind() != RankKind::Pawn {
            return Err(SpanError::new(
                FailureKind::Precondition,
                PAWN_ENGINE,
                format!("expected a pawn token, got a {}", token.kind()),
            ));
        }

        let category = category_for(token)?;
        self.solve(token.current_position(), category, token.color())
            .context(PAWN_ENGINE, "pawn span computation failed")
    }

    pub fn compute_for_token<T: Token + ?Sized>(&self, token: &T) -> SpanResult<Span> {
        self.solve_for_token(token).map(PawnSpan::union)
    }
}

fn category_for<T: Token + ?Sized>(token: &T) -> SpanResult<PawnMoveCategory> {
    token.movement_state().map(PawnMoveCategory::from).ok_or_else(|| {
        SpanError::new(
            FailureKind::UnhandledState,
            PAWN_ENGINE,
            format!(
                "can_open = {}, is_developed = {}",
                token.can_open(),
                token.is_developed()
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, CoordError, Piece};

    const E2: Coord = Coord::new(1, 4);
    const E3: Coord = Coord::new(2, 4);
    const E4: Coord = Coord::new(3, 4);
    const D4: Coord = Coord::new(3, 3);
    const F4: Coord = Coord::new(3, 5);

    struct Stuck {
        can_open: bool,
        is_developed: bool,
    }

    impl Token for Stuck {
        fn current_position(&self) -> Coord {
            E2
        }

        fn can_open(&self) -> bool {
            self.can_open
        }

        fn is_developed(&self) -> bool {
            self.is_developed
        }

        fn kind(&self) -> RankKind {
            RankKind::Pawn
        }

        fn color(&self) -> Color {
            Color::White
        }
    }

    struct RejectTarget(Coord);

    impl CoordService for RejectTarget {
        fn add_vector_to_coord(&self, coord: Coord, vector: Vector) -> Result<Coord, CoordError> {
            let next = Board::standard().add_vector_to_coord(coord, vector)?;
            if next == self.0 {
                return Err(CoordError::Rejected {
                    coord,
                    vector,
                    reason: "injected".to_owned(),
                });
            }

            Ok(next)
        }
    }

    #[test]
    fn opening_phases() {
        let board = Board::standard();
        let span = SolutionEngine::new(&board)
            .solve(E2, PawnMoveCategory::OpeningMove, Color::White)
            .unwrap();
        assert_eq!(span.peaceful.as_slice(), &[E3, E4]);
        assert!(span.attack.same_coords(&vec![E4, D4, F4].into_iter().collect()));

        // e4 is in both tables but only appears once.
        let union = span.union();
        assert_eq!(union.len(), 4);
        assert_eq!(union.iter().filter(|&&c| c == E4).count(), 1);
    }

    #[test]
    fn developed_phases() {
        let board = Board::standard();
        let span = SolutionEngine::new(&board)
            .solve(E3, PawnMoveCategory::DevelopedMove, Color::White)
            .unwrap();
        assert_eq!(span.peaceful.as_slice(), &[E4]);
        assert!(span.attack.same_coords(&vec![E4, D4, F4].into_iter().collect()));
        assert!(span.union().len() <= 3);
    }

    #[test]
    fn black_pawns_move_down() {
        let board = Board::standard();
        let e7 = Coord::new(6, 4);
        let span = SolutionEngine::new(&board)
            .compute(e7, PawnMoveCategory::OpeningMove, Color::Black)
            .unwrap();
        assert!(span.contains(Coord::new(5, 4)));
        assert!(span.contains(Coord::new(4, 4)));
        assert!(span.iter().all(|c| c.row < e7.row));
    }

    #[test]
    fn edge_file_pawn() {
        let board = Board::standard();
        let a3 = Coord::new(2, 0);
        let span = SolutionEngine::new(&board)
            .compute(a3, PawnMoveCategory::DevelopedMove, Color::White)
            .unwrap();
        assert!(span.same_coords(&vec![Coord::new(3, 0), Coord::new(3, 1)].into_iter().collect()));
    }

    #[test]
    fn last_row_pawn_has_empty_span() {
        let board = Board::standard();
        let span = SolutionEngine::new(&board)
            .compute(Coord::new(7, 4), PawnMoveCategory::DevelopedMove, Color::White)
            .unwrap();
        assert!(span.is_empty());
    }

    #[test]
    fn token_selects_category() {
        let board = Board::standard();
        let engine = SolutionEngine::new(&board);
        let fresh = Piece::new(RankKind::Pawn, Color::White, E2);
        assert_eq!(engine.compute_for_token(&fresh).unwrap().len(), 4);
        let moved = Piece::new(RankKind::Pawn, Color::White, E3).with_moves(1);
        assert_eq!(engine.compute_for_token(&moved).unwrap().len(), 3);
    }

    #[test]
    fn neither_state_is_unhandled() {
        let board = Board::standard();
        let token = Stuck {
            can_open: false,
            is_developed: false,
        };
        let err = SolutionEngine::new(&board).compute_for_token(&token).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnhandledState);
    }

    #[test]
    fn both_states_is_unhandled() {
        let board = Board::standard();
        let token = Stuck {
            can_open: true,
            is_developed: true,
        };
        let err = SolutionEngine::new(&board).compute_for_token(&token).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnhandledState);
    }

    #[test]
    fn non_pawn_token_is_rejected() {
        let board = Board::standard();
        let knight = Piece::new(RankKind::Knight, Color::White, E2);
        let err = SolutionEngine::new(&board).compute_for_token(&knight).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Precondition);
    }

    #[test]
    fn attack_failure_aborts_whole_span() {
        let coords = RejectTarget(F4);
        let pawn = Piece::new(RankKind::Pawn, Color::White, E2);
        let err = SolutionEngine::new(&coords).compute_for_token(&pawn).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Arithmetic);
        assert_eq!(
            err.components(),
            vec![PAWN_ENGINE, "attack span", "fixed offset span"]
        );
    }
}
