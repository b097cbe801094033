//! Blocking UDP transport (RFC 1035 §4.2.1)
//!
//! One socket per exchange, ephemeral local port, bounded receive
//! timeout. Messages are sent as-is; replies over 512 bytes are cut off
//! by the receive buffer (no EDNS, no TCP fallback).

use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

use tracing::{debug, warn};

use crate::errors::ResolveError;

/// Largest datagram accepted, the classic pre-EDNS message limit.
pub const MAX_MESSAGE_SIZE: usize = 512;

/// One query-in, reply-out exchange with a nameserver.
pub trait Transport {
    fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, ResolveError>;
}

/// DNS over UDP against a single server.
pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }
}

impl Transport for UdpTransport {
    fn exchange(&self, query: &[u8]) -> Result<Vec<u8>, ResolveError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };

        let socket = UdpSocket::bind(bind_addr).map_err(ResolveError::Transport)?;
        socket
            .set_read_timeout(Some(self.timeout))
            .map_err(ResolveError::Transport)?;

        let bytes_sent = socket
            .send_to(query, self.server_addr)
            .map_err(ResolveError::Transport)?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_MESSAGE_SIZE];
        let (bytes_received, from_addr) = match socket.recv_from(&mut recv_buf) {
            Ok(received) => received,
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                return Err(ResolveError::Timeout);
            }
            Err(e) => return Err(ResolveError::Transport(e)),
        };

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let addr: SocketAddr = "8.8.8.8:53".parse().unwrap();
        let transport = UdpTransport::new(addr, Duration::from_secs(3));
        assert_eq!(transport.server_addr, addr);
    }

    #[test]
    fn test_timeout_on_silent_server() {
        // A socket we never write to stands in for a dead server.
        let silent = UdpSocket::bind("127.0.0.1:0").unwrap();
        let transport =
            UdpTransport::new(silent.local_addr().unwrap(), Duration::from_millis(50));

        let result = transport.exchange(&[0u8; 12]);
        assert!(matches!(result, Err(ResolveError::Timeout)));
    }
}
