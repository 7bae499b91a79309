//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;

/// Bind address used when `USER_REGISTRY_BIND` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration for one server process.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_demo_data: bool,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// `USER_REGISTRY_BIND` sets the socket address; `USER_REGISTRY_SEED=0`
    /// starts with an empty store instead of the demo users.
    pub fn from_env() -> std::io::Result<Self> {
        let bind = env::var("USER_REGISTRY_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind.parse().map_err(|error| {
            std::io::Error::other(format!("invalid USER_REGISTRY_BIND '{bind}': {error}"))
        })?;
        let seed_demo_data = env::var("USER_REGISTRY_SEED").map(|v| v != "0").unwrap_or(true);
        Ok(Self {
            bind_addr,
            seed_demo_data,
        })
    }

    /// The socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
