use std::io::Error as IoError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration for {key}: {reason}")]
    Config { key: &'static str, reason: String },

    #[error("unable to resolve {endpoint}")]
    Resolve {
        endpoint: String,
        #[source]
        source: IoError,
    },

    #[error("{0} did not resolve to any address")]
    Unresolved(String),

    #[error("{0} resolved only to IPv6 addresses, which the query client cannot reach")]
    NoIpv4(String),

    #[error("unable to create query client")]
    Connect(#[source] a2s::errors::Error),

    #[error("query to {endpoint} failed")]
    Query {
        endpoint: String,
        #[source]
        source: a2s::errors::Error,
    },
}
