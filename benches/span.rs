// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rankspan::core::{Board, Color, Coord, Piece, RankKind};
use rankspan::Rank;

fn criterion_benchmark(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("queen-span-center", |b| {
        let rank = Rank::standard(RankKind::Queen);
        let piece = Piece::new(RankKind::Queen, Color::White, Coord::new(3, 3));
        b.iter(|| rank.compute_span(black_box(&piece), &board));
    });

    c.bench_function("knight-span-corner", |b| {
        let rank = Rank::standard(RankKind::Knight);
        let piece = Piece::new(RankKind::Knight, Color::White, Coord::new(0, 0));
        b.iter(|| rank.compute_span(black_box(&piece), &board));
    });

    c.bench_function("pawn-span-opening", |b| {
        let rank = Rank::standard(RankKind::Pawn);
        let piece = Piece::new(RankKind::Pawn, Color::Black, Coord::new(6, 4));
        b.iter(|| rank.compute_span(black_box(&piece), &board));
    });

    c.bench_function("all-ranks-every-square", |b| {
        let ranks: Vec<_> = rankspan::core::rank_kinds().map(Rank::standard).collect();
        b.iter(|| {
            for rank in &ranks {
                for coord in board.coords() {
                    let piece = Piece::new(rank.kind(), Color::White, coord).with_moves(1);
                    let _ = black_box(rank.compute_span(&piece, &board));
                }
            }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
