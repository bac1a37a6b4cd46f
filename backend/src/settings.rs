//! Server settings loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the HTTP listener and startup seeding.
///
/// Values come from CLI flags, `FREEMARKET_*` environment variables and
/// configuration files, in OrthoConfig precedence order.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FREEMARKET")]
pub struct ServerSettings {
    /// Address to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// Load the sample marketplace on startup.
    #[ortho_config(default = false)]
    pub seed_example_data: bool,
}

impl ServerSettings {
    /// Socket address assembled from the configured host and port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}
