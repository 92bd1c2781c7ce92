#[cfg(feature = "serialization")]
use serde::Serialize;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct PlayerInfo {
    // Players in the order the server reported them.
    pub players: Vec<Player>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Player {
    // Index of player chunk starting from 0.
    pub index: u8,

    // Name of the player, or the placeholder while anonymized.
    pub name: String,

    // Player's score (usually "frags" or "kills".)
    pub score: i64,

    // Time (in seconds) player has been connected to the server.
    pub duration: f32,
}

impl Player {
    pub fn named<S: Into<String>>(index: u8, name: S) -> Player {
        Player {
            index,
            name: name.into(),
            score: 0,
            duration: 0.0,
        }
    }
}

impl PlayerInfo {
    pub fn count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl From<a2s::players::Player> for Player {
    fn from(p: a2s::players::Player) -> Self {
        Player {
            index: p.index,
            name: p.name,
            score: p.score.into(),
            duration: p.duration,
        }
    }
}

impl From<Vec<a2s::players::Player>> for PlayerInfo {
    fn from(players: Vec<a2s::players::Player>) -> Self {
        PlayerInfo {
            players: players.into_iter().map(Player::from).collect(),
        }
    }
}

impl FromIterator<Player> for PlayerInfo {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        PlayerInfo {
            players: iter.into_iter().collect(),
        }
    }
}
