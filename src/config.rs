//! Server configuration, read from command-line flags with environment fallbacks. A `.env` file
//! in the working directory is loaded into the environment first.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use dotenvy::dotenv;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "bookshelf", version, about = "GraphQL API over an in-memory book store")]
pub struct Config {
    /// Address to bind to.
    #[arg(long, env = "BOOKSHELF_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,
    /// Port to listen on. Zero picks a free port.
    #[arg(short, long, env = "BOOKSHELF_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Do not serve the `GraphiQL` explorer on `GET /graphql`.
    #[arg(long, env = "BOOKSHELF_NO_GRAPHIQL")]
    pub no_graphiql: bool,
    /// Log filter directives, e.g. `info` or `bookshelf=debug`.
    #[arg(long, env = "BOOKSHELF_LOG", default_value = "info")]
    pub log: String,
}

impl Config {
    /// Read the configuration from the process arguments and environment, after loading `.env`
    /// if present. Exits with a usage message on invalid arguments.
    #[inline]
    #[must_use]
    pub fn load() -> Self {
        // A missing `.env` is normal.
        let _unused = dotenv().ok();
        Self::parse()
    }

    /// The address to bind to.
    #[inline]
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the `GraphiQL` explorer is served.
    #[inline]
    #[must_use]
    pub const fn graphiql(&self) -> bool {
        !self.no_graphiql
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            no_graphiql: false,
            log: "info".to_owned(),
        }
    }
}
