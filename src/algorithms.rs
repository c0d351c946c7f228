// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Geometric span algorithms shared by the ranks.

mod offset;
mod sliding;

pub use offset::{FixedOffsetSpan, KING_VECTORS, KNIGHT_VECTORS};
pub use sliding::{DiagonalSpan, PerpendicularSpan, MAX_RAY_LENGTH};
