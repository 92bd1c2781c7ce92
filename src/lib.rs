//! Checks that a game server running the StreamerFriendly plugin hides player
//! names from A2S player queries.
//!
//! A run connects to the configured server, issues a single player query and
//! compares every returned name against the anonymized placeholder.

pub mod client;
pub mod config;
pub mod errors;
pub mod players;
pub mod verify;

use log::info;

pub use crate::client::QueryClient;
pub use crate::config::{Config, Endpoint, ANONYMIZED_NAME};
pub use crate::errors::{Error, Result};
pub use crate::players::{Player, PlayerInfo};
pub use crate::verify::{verify, Failure, Report};

/// Connects, queries the player list and verifies it.
///
/// Connection and query errors are returned before any assertion is made;
/// the caller decides whether that aborts the run.
#[cfg(not(feature = "async"))]
pub fn run(config: &Config) -> Result<Report> {
    let client = QueryClient::connect(&config.endpoint)?;

    let players = client.players()?;
    info!("{} returned {} player(s)", client.addr(), players.count());

    Ok(verify(&config.expected_name, &players))
}

#[cfg(feature = "async")]
pub async fn run(config: &Config) -> Result<Report> {
    let client = QueryClient::connect(&config.endpoint).await?;

    let players = client.players().await?;
    info!("{} returned {} player(s)", client.addr(), players.count());

    Ok(verify(&config.expected_name, &players))
}
