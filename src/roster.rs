// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A roster is the full set of six ranks a game is played with. Rosters are plain data and can be read from JSON:
//!
//! ```json
//! { "ranks": [ { "kind": "queen", "ransom": 900, "team_quota": 1 }, ... ] }
//! ```
//!
//! Fields other than `kind`, `ransom` and `team_quota` are optional and default to the standard rank's values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    core::{rank_kinds, Quadrant, Quadrants, RankKind},
    rank::Rank,
};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to parse roster: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rank {0} is configured more than once")]
    DuplicateRank(RankKind),
    #[error("rank {0} is missing")]
    MissingRank(RankKind),
    #[error("rank {kind} has invalid {field}: {reason}")]
    InvalidField {
        kind: RankKind,
        field: &'static str,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    pub kind: RankKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<char>,
    pub ransom: u32,
    pub team_quota: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadrants: Option<Vec<Quadrant>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub ranks: Vec<RankConfig>,
}

impl RankConfig {
    fn into_rank(self) -> Result<Rank, RosterError> {
        let standard = Rank::standard(self.kind);
        let invalid = |field, reason: &str| RosterError::InvalidField {
            kind: self.kind,
            field,
            reason: reason.to_owned(),
        };

        if self.team_quota == 0 {
            return Err(invalid("team_quota", "must be at least 1"));
        }

        let name = self.name.clone().unwrap_or_else(|| standard.name().to_owned());
        if name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }

        let designation = self.designation.unwrap_or_else(|| standard.designation());
        if !designation.is_ascii_alphabetic() {
            return Err(invalid("designation", "must be an ASCII letter"));
        }

        let quadrants = match self.quadrants {
            Some(ref list) if list.is_empty() => {
                return Err(invalid("quadrants", "must not be empty"));
            }
            Some(ref list) => list.iter().collect(),
            None => standard.quadrants().iter().collect::<Quadrants>(),
        };

        Ok(Rank::new(
            self.id.unwrap_or_else(|| standard.id()),
            self.kind,
            name,
            designation,
            self.ransom,
            self.team_quota,
            quadrants,
        ))
    }
}

impl From<&Rank> for RankConfig {
    fn from(rank: &Rank) -> Self {
        RankConfig {
            kind: rank.kind(),
            id: Some(rank.id()),
            name: Some(rank.name().to_owned()),
            designation: Some(rank.designation()),
            ransom: rank.ransom(),
            team_quota: rank.team_quota(),
            quadrants: Some(rank.quadrants()),
        }
    }
}

/// Exactly one [`Rank`] per [`RankKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    ranks: Vec<Rank>,
}

lazy_static::lazy_static! {
    static ref STANDARD_ROSTER: Roster = Roster {
        ranks: rank_kinds().map(Rank::standard).collect(),
    };
}

impl Roster {
    /// The ranks of a standard game of chess.
    pub fn standard() -> &'static Roster {
        &STANDARD_ROSTER
    }

    pub fn from_config(config: RosterConfig) -> Result<Roster, RosterError> {
        let mut slots: Vec<Option<Rank>> = rank_kinds().map(|_| None).collect();
        for rank_config in config.ranks {
            let kind = rank_config.kind;
            let slot = &mut slots[kind as usize];
            if slot.is_some() {
                return Err(RosterError::DuplicateRank(kind));
            }

            *slot = Some(rank_config.into_rank()?);
        }

        let mut ranks = Vec::with_capacity(slots.len());
        for (kind, slot) in rank_kinds().zip(slots) {
            ranks.push(slot.ok_or(RosterError::MissingRank(kind))?);
        }

        Ok(Roster { ranks })
    }

    pub fn from_json(json: &str) -> Result<Roster, RosterError> {
        let config: RosterConfig = serde_json::from_str(json)?;
        Roster::from_config(config)
    }

    pub fn to_config(&self) -> RosterConfig {
        RosterConfig {
            ranks: self.ranks.iter().map(RankConfig::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string_pretty(&self.to_config())?)
    }

    pub fn rank(&self, kind: RankKind) -> &Rank {
        &self.ranks[kind as usize]
    }

    pub fn ranks(&self) -> impl Iterator<Item = &Rank> {
        self.ranks.iter()
    }

    /// The number of pieces a full team fields.
    pub fn team_size(&self) -> u32 {
        self.ranks.iter().map(|r| r.team_quota() as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "ranks": [
            { "kind": "king", "ransom": 0, "team_quota": 1 },
            { "kind": "queen", "ransom": 950, "team_quota": 1 },
            { "kind": "rook", "ransom": 500, "team_quota": 2 },
            { "kind": "bishop", "ransom": 325, "team_quota": 2, "name": "archer", "designation": "A" },
            { "kind": "knight", "ransom": 300, "team_quota": 2 },
            { "kind": "pawn", "ransom": 100, "team_quota": 8, "quadrants": ["north_east", "north_west"] }
        ]
    }"#;

    #[test]
    fn standard_roster() {
        let roster = Roster::standard();
        assert_eq!(roster.team_size(), 16);
        for kind in rank_kinds() {
            assert_eq!(roster.rank(kind).kind(), kind);
        }
        let ids: Vec<_> = roster.ranks().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn parse_minimal_roster() {
        let roster = Roster::from_json(MINIMAL).unwrap();
        assert_eq!(roster.rank(RankKind::Queen).ransom(), 950);
        assert_eq!(roster.rank(RankKind::Queen).name(), "queen");
        let bishop = roster.rank(RankKind::Bishop);
        assert_eq!(bishop.name(), "archer");
        assert_eq!(bishop.designation(), 'A');
        assert_eq!(
            roster.rank(RankKind::Pawn).quadrants(),
            vec![Quadrant::NorthEast, Quadrant::NorthWest]
        );
    }

    #[test]
    fn standard_roster_survives_json() {
        let json = Roster::standard().to_json().unwrap();
        let roster = Roster::from_json(&json).unwrap();
        assert_eq!(&roster, Roster::standard());
    }

    #[test]
    fn duplicate_rank() {
        let mut config = Roster::standard().to_config();
        config.ranks.push(config.ranks[0].clone());
        assert!(matches!(
            Roster::from_config(config),
            Err(RosterError::DuplicateRank(RankKind::King))
        ));
    }

    #[test]
    fn missing_rank() {
        let mut config = Roster::standard().to_config();
        config.ranks.retain(|r| r.kind != RankKind::Knight);
        assert!(matches!(
            Roster::from_config(config),
            Err(RosterError::MissingRank(RankKind::Knight))
        ));
    }

    #[test]
    fn invalid_fields() {
        let mut config = Roster::standard().to_config();
        config.ranks[2].team_quota = 0;
        assert!(matches!(
            Roster::from_config(config),
            Err(RosterError::InvalidField {
                field: "team_quota",
                ..
            })
        ));

        let mut config = Roster::standard().to_config();
        config.ranks[5].quadrants = Some(vec![]);
        assert!(matches!(
            Roster::from_config(config),
            Err(RosterError::InvalidField {
                field: "quadrants",
                ..
            })
        ));

        let mut config = Roster::standard().to_config();
        config.ranks[1].designation = Some('9');
        assert!(Roster::from_config(config).is_err());
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            Roster::from_json("{ \"ranks\": 7 }"),
            Err(RosterError::Json(_))
        ));
    }
}
