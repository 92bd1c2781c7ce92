use std::fmt::{Display, Formatter};

#[cfg(feature = "serialization")]
use serde::Serialize;
use thiserror::Error;

use crate::players::PlayerInfo;

pub const GROUP_ANONYMIZED: &str = "player names in server query are anonymized";

#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub enum Failure {
    #[error("unable to verify due to absent player count")]
    AbsentPlayers,

    #[error("player #{position} (index {index}): expected name {expected:?}, got {actual:?}")]
    NameMismatch {
        position: usize,
        index: u8,
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Report {
    pub group: &'static str,

    // Number of player entries compared against the expected name.
    pub checked: usize,

    pub failures: Vec<Failure>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Panics with every recorded failure if the group did not pass.
    pub fn assert_passed(&self) {
        if !self.passed() {
            panic!("{}", self);
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.passed() {
            return write!(f, "{}: ok ({} checked)", self.group, self.checked);
        }

        write!(
            f,
            "{}: {} failure(s) in {} checked",
            self.group,
            self.failures.len(),
            self.checked
        )?;

        for failure in &self.failures {
            write!(f, "\n  - {}", failure)?;
        }

        Ok(())
    }
}

/// Checks every player name against `expected`. All entries are compared so a
/// single report carries each offending player; an empty list is a failure.
pub fn verify(expected: &str, info: &PlayerInfo) -> Report {
    if info.is_empty() {
        return Report {
            group: GROUP_ANONYMIZED,
            checked: 0,
            failures: vec![Failure::AbsentPlayers],
        };
    }

    let failures = info
        .players
        .iter()
        .enumerate()
        .filter(|(_, player)| player.name != expected)
        .map(|(position, player)| Failure::NameMismatch {
            position,
            index: player.index,
            expected: expected.to_string(),
            actual: player.name.clone(),
        })
        .collect();

    Report {
        group: GROUP_ANONYMIZED,
        checked: info.count(),
        failures,
    }
}
