use std::env;
use std::fmt::{Display, Formatter};

use crate::errors::{Error, Result};

/// Placeholder the anonymization plugin writes over every player name.
pub const ANONYMIZED_NAME: &str = "StreamerFriendly";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 28015;

const KEY_ADDR: &str = "SERVER_ADDR";
const KEY_HOST: &str = "SERVER_HOST";
const KEY_PORT: &str = "SERVER_PORT";
const KEY_NAME: &str = "ANONYMIZED_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new<H: Into<String>>(host: H, port: u16) -> Endpoint {
        Endpoint {
            host: host.into(),
            port,
        }
    }

    /// Parses a `host:port` connect string. The split happens on the last
    /// colon so bracketed IPv6 hosts (`[::1]:28015`) survive intact; an
    /// unbracketed IPv6 literal is rejected.
    pub fn parse(addr: &str) -> Result<Endpoint> {
        let (host, port) = addr.rsplit_once(':').ok_or_else(|| Error::Config {
            key: KEY_ADDR,
            reason: format!("{:?} is missing a port", addr),
        })?;

        if host.is_empty() {
            return Err(Error::Config {
                key: KEY_ADDR,
                reason: format!("{:?} is missing a host", addr),
            });
        }

        let bracketed = host.starts_with('[') && host.ends_with(']');
        if host.contains(':') && !bracketed {
            return Err(Error::Config {
                key: KEY_ADDR,
                reason: format!("{:?} has an IPv6 host without brackets", addr),
            });
        }

        Ok(Endpoint::new(host, parse_port(KEY_ADDR, port)?))
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: Endpoint,
    pub expected_name: String,
}

impl Config {
    pub fn new(endpoint: Endpoint) -> Config {
        Config {
            endpoint,
            expected_name: ANONYMIZED_NAME.to_string(),
        }
    }

    pub fn expected_name<S: Into<String>>(mut self, name: S) -> Self {
        self.expected_name = name.into();
        self
    }

    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let endpoint = match get(KEY_ADDR) {
            Some(addr) => Endpoint::parse(&addr)?,
            None => {
                let host = get(KEY_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
                let port = match get(KEY_PORT) {
                    Some(port) => parse_port(KEY_PORT, &port)?,
                    None => DEFAULT_PORT,
                };

                Endpoint::new(host, port)
            }
        };

        let expected_name = get(KEY_NAME).unwrap_or_else(|| ANONYMIZED_NAME.to_string());

        Ok(Config {
            endpoint,
            expected_name,
        })
    }
}

fn parse_port(key: &'static str, value: &str) -> Result<u16> {
    value.parse().map_err(|_| Error::Config {
        key,
        reason: format!("{:?} is not a valid port", value),
    })
}
