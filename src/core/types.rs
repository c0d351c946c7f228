// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of columns that can be written with a single file letter.
const ALGEBRAIC_COLUMNS: i32 = 26;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("empty coordinate")]
    Empty,
    #[error("invalid file char: {0}")]
    InvalidFile(char),
    #[error("invalid row: {0}")]
    InvalidRow(String),
    #[error("malformed coordinate: {0}")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankParseError {
    #[error("invalid designation: {0}")]
    InvalidDesignation(char),
    #[error("unknown rank: {0}")]
    UnknownName(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unknown color: {0}")]
    UnknownName(String),
}

/// A coordinate on the board, as a (row, column) pair. Rows grow towards Black, columns grow towards the h-file.
///
/// Coordinates are plain values: they carry no notion of which board they belong to. Whether or not a coordinate is
/// actually on the board is decided by a [`CoordService`](crate::core::CoordService).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub column: i32,
}

impl Coord {
    pub const fn new(row: i32, column: i32) -> Coord {
        Coord { row, column }
    }

    /// Returns the vector that, added to `self`, yields `other`.
    pub const fn offset_to(self, other: Coord) -> Vector {
        Vector::new(other.row - self.row, other.column - self.column)
    }

    /// Chebyshev ("king move") distance between two coordinates.
    pub fn distance(self, other: Coord) -> i32 {
        self.offset_to(other).chebyshev_len()
    }

    fn is_algebraic(self) -> bool {
        self.row >= 0 && self.column >= 0 && self.column < ALGEBRAIC_COLUMNS
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_algebraic() {
            let file = (b'a' + self.column as u8) as char;
            write!(f, "{}{}", file, self.row + 1)
        } else {
            write!(f, "({},{})", self.row, self.column)
        }
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    /// Accepts either algebraic notation (`e4`) or an explicit `row,column` pair (`3,4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CoordParseError::Empty);
        }

        if let Some((row, column)) = s.split_once(',') {
            let row = row
                .trim()
                .parse()
                .map_err(|_| CoordParseError::Malformed(s.to_owned()))?;
            let column = column
                .trim()
                .parse()
                .map_err(|_| CoordParseError::Malformed(s.to_owned()))?;
            return Ok(Coord::new(row, column));
        }

        let mut chars = s.chars();
        let file = chars.next().ok_or(CoordParseError::Empty)?;
        if !file.is_ascii_lowercase() {
            return Err(CoordParseError::InvalidFile(file));
        }

        let row_str = chars.as_str();
        let row: i32 = row_str
            .parse()
            .map_err(|_| CoordParseError::InvalidRow(row_str.to_owned()))?;
        if row < 1 {
            return Err(CoordParseError::InvalidRow(row_str.to_owned()));
        }

        Ok(Coord::new(row - 1, (file as u8 - b'a') as i32))
    }
}

/// An offset that can be applied to a [`Coord`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub d_row: i32,
    pub d_column: i32,
}

impl Vector {
    pub const fn new(d_row: i32, d_column: i32) -> Vector {
        Vector { d_row, d_column }
    }

    /// Vectors are written from White's point of view; Black sees the board upside down.
    pub const fn oriented(self, color: Color) -> Vector {
        Vector::new(self.d_row * color.forward(), self.d_column)
    }

    pub const fn reverse(self) -> Vector {
        Vector::new(-self.d_row, -self.d_column)
    }

    pub fn chebyshev_len(self) -> i32 {
        self.d_row.abs().max(self.d_column.abs())
    }

    pub fn is_unit(self) -> bool {
        self.chebyshev_len() == 1
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:+},{:+}>", self.d_row, self.d_column)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single step "forward" for this color.
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ColorParseError::UnknownName(s.to_owned())),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const PERPENDICULAR: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    pub const fn as_vector(self) -> Vector {
        match self {
            Direction::North => Vector::new(1, 0),
            Direction::NorthEast => Vector::new(1, 1),
            Direction::East => Vector::new(0, 1),
            Direction::SouthEast => Vector::new(-1, 1),
            Direction::South => Vector::new(-1, 0),
            Direction::SouthWest => Vector::new(-1, -1),
            Direction::West => Vector::new(0, -1),
            Direction::NorthWest => Vector::new(1, -1),
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::SouthEast | Direction::SouthWest | Direction::NorthWest
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::NorthEast => "north-east",
            Direction::East => "east",
            Direction::SouthEast => "south-east",
            Direction::South => "south",
            Direction::SouthWest => "south-west",
            Direction::West => "west",
            Direction::NorthWest => "north-west",
        };

        write!(f, "{}", name)
    }
}

/// The six kinds of rank. This is a closed set; every `match` over it is exhaustive.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl RankKind {
    pub const fn designation(self) -> char {
        match self {
            RankKind::King => 'K',
            RankKind::Queen => 'Q',
            RankKind::Rook => 'R',
            RankKind::Bishop => 'B',
            RankKind::Knight => 'N',
            RankKind::Pawn => 'P',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RankKind::King => "king",
            RankKind::Queen => "queen",
            RankKind::Rook => "rook",
            RankKind::Bishop => "bishop",
            RankKind::Knight => "knight",
            RankKind::Pawn => "pawn",
        }
    }
}

impl TryFrom<char> for RankKind {
    type Error = RankParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value.to_ascii_uppercase() {
            'K' => RankKind::King,
            'Q' => RankKind::Queen,
            'R' => RankKind::Rook,
            'B' => RankKind::Bishop,
            'N' => RankKind::Knight,
            'P' => RankKind::Pawn,
            _ => return Err(RankParseError::InvalidDesignation(value)),
        };

        Ok(kind)
    }
}

impl FromStr for RankKind {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return RankKind::try_from(c);
        }

        rank_kinds()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RankParseError::UnknownName(s.to_owned()))
    }
}

impl fmt::Display for RankKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A sector of the board as seen from a piece standing at some origin.
///
/// Sectors are half-open so that every coordinate other than the origin falls into exactly one of them:
/// the positive row axis belongs to the north-east, the negative column axis to the north-west, and so on
/// counter-clockwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Returns the sector of `to` relative to `from`, or `None` if they are the same coordinate.
    pub fn between(from: Coord, to: Coord) -> Option<Quadrant> {
        let v = from.offset_to(to);
        let (dr, dc) = (v.d_row, v.d_column);
        if dr > 0 && dc >= 0 {
            Some(Quadrant::NorthEast)
        } else if dr >= 0 && dc < 0 {
            Some(Quadrant::NorthWest)
        } else if dr < 0 && dc <= 0 {
            Some(Quadrant::SouthWest)
        } else if dr <= 0 && dc > 0 {
            Some(Quadrant::SouthEast)
        } else {
            None
        }
    }

    /// The same sector as seen from the other side of the board.
    pub const fn mirrored(self) -> Quadrant {
        match self {
            Quadrant::NorthEast => Quadrant::SouthEast,
            Quadrant::NorthWest => Quadrant::SouthWest,
            Quadrant::SouthWest => Quadrant::NorthWest,
            Quadrant::SouthEast => Quadrant::NorthEast,
        }
    }

    pub const fn flag(self) -> Quadrants {
        match self {
            Quadrant::NorthEast => Quadrants::NORTH_EAST,
            Quadrant::NorthWest => Quadrants::NORTH_WEST,
            Quadrant::SouthWest => Quadrants::SOUTH_WEST,
            Quadrant::SouthEast => Quadrants::SOUTH_EAST,
        }
    }
}

bitflags! {
    pub struct Quadrants: u8 {
        const NORTH_EAST = 0b0000_0001;
        const NORTH_WEST = 0b0000_0010;
        const SOUTH_WEST = 0b0000_0100;
        const SOUTH_EAST = 0b0000_1000;
        const NORTH = Self::NORTH_EAST.bits | Self::NORTH_WEST.bits;
        const SOUTH = Self::SOUTH_WEST.bits | Self::SOUTH_EAST.bits;
        const ALL = Self::NORTH.bits | Self::SOUTH.bits;
    }
}

impl Quadrants {
    pub fn list(self) -> Vec<Quadrant> {
        Quadrant::ALL
            .iter()
            .copied()
            .filter(|q| self.contains(q.flag()))
            .collect()
    }

    pub fn mirrored(self) -> Quadrants {
        self.list()
            .into_iter()
            .fold(Quadrants::empty(), |acc, q| acc | q.mirrored().flag())
    }
}

impl<'a> FromIterator<&'a Quadrant> for Quadrants {
    fn from_iter<I: IntoIterator<Item = &'a Quadrant>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Quadrants::empty(), |acc, q| acc | q.flag())
    }
}

pub fn rank_kinds() -> ::std::vec::IntoIter<RankKind> {
    vec![
        RankKind::King,
        RankKind::Queen,
        RankKind::Rook,
        RankKind::Bishop,
        RankKind::Knight,
        RankKind::Pawn,
    ]
    .into_iter()
}

pub fn colors() -> ::std::vec::IntoIter<Color> {
    vec![Color::White, Color::Black].into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_algebraic_round_trip() {
        let e4: Coord = "e4".parse().unwrap();
        assert_eq!(e4, Coord::new(3, 4));
        assert_eq!(e4.to_string(), "e4");
    }

    #[test]
    fn coord_pair_syntax() {
        assert_eq!("-2, 7".parse::<Coord>(), Ok(Coord::new(-2, 7)));
        assert_eq!(Coord::new(-2, 7).to_string(), "(-2,7)");
    }

    #[test]
    fn coord_parse_errors() {
        assert_eq!("".parse::<Coord>(), Err(CoordParseError::Empty));
        assert_eq!("E4".parse::<Coord>(), Err(CoordParseError::InvalidFile('E')));
        assert_eq!(
            "e0".parse::<Coord>(),
            Err(CoordParseError::InvalidRow("0".to_owned()))
        );
        assert!(matches!(
            "1,x".parse::<Coord>(),
            Err(CoordParseError::Malformed(_))
        ));
    }

    #[test]
    fn vector_orientation() {
        let up = Vector::new(1, -1);
        assert_eq!(up.oriented(Color::White), up);
        assert_eq!(up.oriented(Color::Black), Vector::new(-1, -1));
    }

    #[test]
    fn direction_vectors() {
        for dir in Direction::PERPENDICULAR.iter().chain(Direction::DIAGONAL.iter()) {
            let v = dir.as_vector();
            assert!(v.is_unit());
            assert_eq!(dir.reverse().as_vector(), v.reverse());
            assert_eq!(dir.is_diagonal(), v.d_row != 0 && v.d_column != 0);
        }
    }

    #[test]
    fn rank_kind_parse() {
        assert_eq!("N".parse::<RankKind>(), Ok(RankKind::Knight));
        assert_eq!("queen".parse::<RankKind>(), Ok(RankKind::Queen));
        assert_eq!("Bishop".parse::<RankKind>(), Ok(RankKind::Bishop));
        assert!("x".parse::<RankKind>().is_err());
        for kind in rank_kinds() {
            assert_eq!(RankKind::try_from(kind.designation()), Ok(kind));
        }
    }

    #[test]
    fn quadrants_partition_the_plane() {
        let origin = Coord::new(4, 4);
        assert_eq!(Quadrant::between(origin, origin), None);
        for row in 0..9 {
            for column in 0..9 {
                let target = Coord::new(row, column);
                if target == origin {
                    continue;
                }
                let hits = Quadrant::ALL
                    .iter()
                    .filter(|&&q| Quadrant::between(origin, target) == Some(q))
                    .count();
                assert_eq!(hits, 1, "{} should be in exactly one sector", target);
            }
        }
    }

    #[test]
    fn quadrant_axes() {
        let o = Coord::new(0, 0);
        assert_eq!(Quadrant::between(o, Coord::new(1, 0)), Some(Quadrant::NorthEast));
        assert_eq!(Quadrant::between(o, Coord::new(0, -1)), Some(Quadrant::NorthWest));
        assert_eq!(Quadrant::between(o, Coord::new(-1, 0)), Some(Quadrant::SouthWest));
        assert_eq!(Quadrant::between(o, Coord::new(0, 1)), Some(Quadrant::SouthEast));
    }

    #[test]
    fn quadrants_mirror() {
        assert_eq!(Quadrants::NORTH.mirrored(), Quadrants::SOUTH);
        assert_eq!(Quadrants::ALL.mirrored(), Quadrants::ALL);
        let set: Quadrants = [Quadrant::NorthWest, Quadrant::SouthEast].iter().collect();
        assert_eq!(set.list(), vec![Quadrant::NorthWest, Quadrant::SouthEast]);
    }
}
