use std::net::SocketAddr;
#[cfg(not(feature = "async"))]
use std::net::ToSocketAddrs;

use a2s::A2SClient;
use log::debug;

#[cfg(feature = "async")]
use tokio::net::lookup_host;

use crate::config::Endpoint;
use crate::errors::{Error, Result};
use crate::players::PlayerInfo;

/// A query client bound to one resolved server address.
///
/// A2S is connectionless, so "connecting" means resolving the endpoint and
/// binding the local socket. Both failures surface here, before any query.
pub struct QueryClient {
    inner: A2SClient,
    endpoint: Endpoint,
    addr: SocketAddr,
}

impl QueryClient {
    #[cfg(not(feature = "async"))]
    pub fn connect(endpoint: &Endpoint) -> Result<QueryClient> {
        let addrs = endpoint
            .to_string()
            .to_socket_addrs()
            .map_err(|source| Error::Resolve {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let addr = pick_ipv4(endpoint, addrs)?;

        let inner = A2SClient::new().map_err(Error::Connect)?;

        debug!("query client ready for {} ({})", endpoint, addr);

        Ok(QueryClient {
            inner,
            endpoint: endpoint.clone(),
            addr,
        })
    }

    #[cfg(feature = "async")]
    pub async fn connect(endpoint: &Endpoint) -> Result<QueryClient> {
        let addrs = lookup_host(endpoint.to_string())
            .await
            .map_err(|source| Error::Resolve {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let addr = pick_ipv4(endpoint, addrs)?;

        let inner = A2SClient::new().await.map_err(Error::Connect)?;

        debug!("query client ready for {} ({})", endpoint, addr);

        Ok(QueryClient {
            inner,
            endpoint: endpoint.clone(),
            addr,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    #[cfg(not(feature = "async"))]
    pub fn players(&self) -> Result<PlayerInfo> {
        let players = self.inner.players(self.addr).map_err(|e| self.query_error(e))?;

        Ok(PlayerInfo::from(players))
    }

    #[cfg(feature = "async")]
    pub async fn players(&self) -> Result<PlayerInfo> {
        let players = self
            .inner
            .players(self.addr)
            .await
            .map_err(|e| self.query_error(e))?;

        Ok(PlayerInfo::from(players))
    }

    fn query_error(&self, source: a2s::errors::Error) -> Error {
        Error::Query {
            endpoint: self.endpoint.to_string(),
            source,
        }
    }
}

// The a2s socket is bound to 0.0.0.0, so only IPv4 targets are reachable.
fn pick_ipv4<I>(endpoint: &Endpoint, addrs: I) -> Result<SocketAddr>
where
    I: Iterator<Item = SocketAddr>,
{
    let mut resolved = false;

    for addr in addrs {
        if addr.is_ipv4() {
            return Ok(addr);
        }
        resolved = true;
    }

    if resolved {
        Err(Error::NoIpv4(endpoint.to_string()))
    } else {
        Err(Error::Unresolved(endpoint.to_string()))
    }
}
