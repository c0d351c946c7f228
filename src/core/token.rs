// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::{Color, Coord, RankKind};

/// Whether a piece has moved yet this game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementState {
    NotYetMoved,
    Moved,
}

/// A read-only view of a piece standing on the board. Span computation only ever reads a token; the piece
/// lifecycle belongs to whoever owns the board.
pub trait Token {
    fn current_position(&self) -> Coord;

    /// True if the piece has never moved.
    fn can_open(&self) -> bool;

    /// True if the piece has moved at least once.
    fn is_developed(&self) -> bool;

    fn kind(&self) -> RankKind;

    fn color(&self) -> Color;

    /// Folds the two movement predicates into a single state. Returns `None` if the predicates are inconsistent,
    /// i.e. neither or both of them hold.
    fn movement_state(&self) -> Option<MovementState> {
        match (self.can_open(), self.is_developed()) {
            (true, false) => Some(MovementState::NotYetMoved),
            (false, true) => Some(MovementState::Moved),
            _ => None,
        }
    }
}

/// A plain snapshot of a piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: RankKind,
    pub color: Color,
    pub position: Coord,
    pub moves_made: u32,
}

impl Piece {
    pub const fn new(kind: RankKind, color: Color, position: Coord) -> Piece {
        Piece {
            kind,
            color,
            position,
            moves_made: 0,
        }
    }

    pub const fn with_moves(mut self, moves_made: u32) -> Piece {
        self.moves_made = moves_made;
        self
    }
}

impl Token for Piece {
    fn current_position(&self) -> Coord {
        self.position
    }

    fn can_open(&self) -> bool {
        self.moves_made == 0
    }

    fn is_developed(&self) -> bool {
        self.moves_made > 0
    }

    fn kind(&self) -> RankKind {
        self.kind
    }

    fn color(&self) -> Color {
        self.color
    }
}
