// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fs, fs::File, io, path::PathBuf};

use anyhow::{bail, Context};
use rankspan::{
    core::{Board, Color, Coord, Piece, RankKind},
    tracing::span_log::SpanLogLayer,
    Roster,
};
use structopt::StructOpt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prints the coordinates a piece could move to.
#[derive(Debug, StructOpt)]
struct Options {
    /// Rank of the piece, by name ("queen") or designation ("Q").
    #[structopt(name = "RANK")]
    rank: RankKind,
    /// Where the piece stands, either algebraic ("e4") or "row,column".
    #[structopt(name = "COORD")]
    coord: Coord,
    /// Color of the piece.
    #[structopt(short, long, default_value = "white")]
    color: Color,
    /// Number of moves the piece has already made.
    #[structopt(short, long, default_value = "0")]
    moves: u32,
    /// Number of rows on the board.
    #[structopt(long, default_value = "8")]
    rows: i32,
    /// Number of columns on the board.
    #[structopt(long, default_value = "8")]
    columns: i32,
    /// Roster file to read rank configuration from, instead of the standard roster.
    #[structopt(long)]
    roster: Option<PathBuf>,
    /// Print the span as JSON instead of drawing it.
    #[structopt(long)]
    json: bool,
    /// File to write a span event log to.
    #[structopt(long)]
    span_log: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Options::from_args();
    let span_log = match args.span_log {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open span log {}", path.display()))?;
            Some(SpanLogLayer::new(file))
        }
        None => None,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(filter))
        .with(span_log)
        .init();

    let roster = match args.roster {
        Some(ref path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read roster {}", path.display()))?;
            Roster::from_json(&json).with_context(|| format!("invalid roster {}", path.display()))?
        }
        None => Roster::standard().clone(),
    };

    let board = Board::new(args.rows, args.columns)?;
    if !board.contains(args.coord) {
        bail!(
            "{} is not on a {}x{} board",
            args.coord,
            board.rows(),
            board.columns()
        );
    }

    let rank = roster.rank(args.rank);
    let piece = Piece::new(args.rank, args.color, args.coord).with_moves(args.moves);
    let span = rank.compute_span(&piece, &board).with_context(|| {
        format!(
            "the reachable squares of the {} {} on {} could not be computed",
            args.color,
            rank.name(),
            args.coord
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string(&span)?);
        return Ok(());
    }

    println!("{} {} ({}) on {}", args.color, rank.name(), rank.designation(), args.coord);
    print!("{}", span.diagram(&board, args.coord));
    println!("{:<10} {}", "Count:", span.len());
    println!("{:<10} {}", "Span:", span);
    Ok(())
}
