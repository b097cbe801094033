//! Stub resolution against a single nameserver.
//!
//! Owns the UDP exchange: builds one query with `dnsq-proto`, sends it,
//! and decodes the reply into typed records, retrying up to a configured
//! cap with a bounded receive timeout.

pub mod config;
pub mod errors;
pub mod resolver;
pub mod transport;

pub use config::{ConfigError, ResolverConfig};
pub use errors::ResolveError;
pub use resolver::{Resolution, StubResolver};
pub use transport::{Transport, UdpTransport, MAX_MESSAGE_SIZE};
