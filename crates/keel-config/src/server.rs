//! Dev-server settings.

use std::net::{IpAddr, Ipv4Addr};

use serde::{Serialize, Serializer};

use crate::proxy::ProxyTable;

/// Which interfaces the dev server listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostBinding {
    Localhost,
    #[default]
    AllInterfaces,
}

impl HostBinding {
    pub fn ip(self) -> IpAddr {
        match self {
            HostBinding::Localhost => IpAddr::V4(Ipv4Addr::LOCALHOST),
            HostBinding::AllInterfaces => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl Serialize for HostBinding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.ip())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSettings {
    pub host: HostBinding,
    /// Port exactly as configured; the engine parses and validates it.
    pub port: String,
    pub open: bool,
    pub proxy: ProxyTable,
}

impl ServerSettings {
    /// The port as a number, when it is a valid non-zero TCP port.
    pub fn port_number(&self) -> Option<u16> {
        self.port.parse::<u16>().ok().filter(|p| *p != 0)
    }
}
