// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fs, path::PathBuf};

use anyhow::Context;
use rankspan::Roster;
use structopt::StructOpt;

/// Prints a roster, either the standard one or one read from a file.
#[derive(Debug, StructOpt)]
struct Options {
    /// Roster file to validate and print.
    #[structopt(name = "FILE")]
    file: Option<PathBuf>,
    /// Print the roster as JSON, suitable as a starting point for a roster file.
    #[structopt(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Options::from_args();
    let roster = match args.file {
        Some(ref path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read roster {}", path.display()))?;
            Roster::from_json(&json).with_context(|| format!("invalid roster {}", path.display()))?
        }
        None => Roster::standard().clone(),
    };

    if args.json {
        println!("{}", roster.to_json()?);
        return Ok(());
    }

    println!(
        "{:<4} {:<4} {:<10} {:>8} {:>6}  {}",
        "Id", "Des", "Name", "Ransom", "Quota", "Quadrants"
    );
    for rank in roster.ranks() {
        let quadrants: Vec<_> = rank.quadrants().iter().map(|q| format!("{:?}", q)).collect();
        println!(
            "{:<4} {:<4} {:<10} {:>8} {:>6}  {}",
            rank.id(),
            rank.designation(),
            rank.name(),
            rank.ransom(),
            rank.team_quota(),
            quadrants.join(",")
        );
    }
    println!("{:<10} {}", "Team size:", roster.team_size());
    Ok(())
}
