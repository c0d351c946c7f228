// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains core datatypes used pervasively throughout `rankspan`, along with the two collaborators
//! span computation relies on: coordinate arithmetic and the piece token.

mod coords;
mod span;
mod token;
mod types;

pub use coords::{Board, BoardError, CoordError, CoordService, MAX_BOARD_EDGE};
pub use span::{Diagram, Span};
pub use token::{MovementState, Piece, Token};
pub use types::{
    colors, rank_kinds, Color, ColorParseError, Coord, CoordParseError, Direction, Quadrant,
    Quadrants, RankKind, RankParseError, Vector,
};
