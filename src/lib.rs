// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `rankspan` computes where chess pieces can go.
//!
//! Given a [`Rank`](rank::Rank) (the configuration of a piece type) and a [`Token`](core::Token) (a snapshot of a
//! piece on the board), [`Rank::compute_span`](rank::Rank::compute_span) produces the candidate set of coordinates
//! that piece could move to. Board occupancy, turn order and the rest of the rules of chess are someone else's
//! problem: a span is geometry only.

pub mod algorithms;
pub mod core;
pub mod error;
pub mod pawn;
pub mod rank;
pub mod roster;
pub mod tracing;

pub use crate::error::{FailureKind, SpanError, SpanResult};
pub use crate::rank::Rank;
pub use crate::roster::Roster;
