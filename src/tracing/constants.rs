// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tracing constants that are used elsewhere in rankspan.
//!
//! Span computations create spans and events with known string values, so that they can be interpreted by `tracing`
//! Layers that are operating upon them. This module collects them all in one place.

/// The name of a span representing a call to `Rank::compute_span`.
pub const COMPUTE_SPAN: &'static str = "compute_span";

/// A span computation finished successfully.
pub const SPAN_COMPLETE: &'static str = "span complete";

/// A span computation failed.
pub const SPAN_FAILED: &'static str = "span failed";
