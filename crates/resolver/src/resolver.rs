//! Single-exchange resolution driver.
//!
//! One attempt is: build a query, exchange it over the transport, parse
//! the reply. A reply with answers finishes resolution; a reply with none
//! (a referral) re-issues the same question to the same server. Timeouts
//! and malformed replies also count as attempts. The attempt cap turns
//! the original "loop until an answer shows up" behavior into a bounded
//! retry loop with an explicit failure.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dnsq_proto::{Message, RData, RecordType, ResourceRecord};
use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::errors::ResolveError;
use crate::transport::{Transport, UdpTransport};

/// Decoded answer, authority and additional sections of the final reply,
/// in wire order.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Resolution {
    /// IPv4 addresses from the A records of the answer section.
    pub fn ipv4_addresses(&self) -> Vec<Ipv4Addr> {
        self.answers
            .iter()
            .filter_map(|record| match record.data {
                RData::A(addr) => Some(addr),
                _ => None,
            })
            .collect()
    }
}

pub struct StubResolver<T: Transport> {
    transport: T,
    max_attempts: u32,
    cancel: Option<Arc<AtomicBool>>,
}

impl StubResolver<UdpTransport> {
    pub fn new(server: IpAddr, config: &ResolverConfig) -> Self {
        let addr = SocketAddr::new(server, config.port);
        Self::with_transport(
            UdpTransport::new(addr, config.timeout()),
            config.max_attempts,
        )
    }
}

impl<T: Transport> StubResolver<T> {
    pub fn with_transport(transport: T, max_attempts: u32) -> Self {
        Self {
            transport,
            max_attempts,
            cancel: None,
        }
    }

    /// Cooperative cancellation, checked between attempts.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves `domain` with a single-question query per attempt.
    ///
    /// Transport failures other than a receive timeout are fatal to the
    /// whole resolution; retrying a broken socket would only hide the
    /// defect. A non-zero response code is surfaced, not retried.
    pub fn resolve(&self, domain: &str, qtype: RecordType) -> Result<Resolution, ResolveError> {
        for attempt in 1..=self.max_attempts {
            if let Some(cancel) = &self.cancel {
                if cancel.load(Ordering::Relaxed) {
                    return Err(ResolveError::Cancelled);
                }
            }

            let id = fastrand::u16(..);
            let query = Message::build_query(id, domain, qtype)?;

            let reply = match self.transport.exchange(&query) {
                Ok(bytes) => bytes,
                Err(ResolveError::Timeout) => {
                    warn!(attempt, domain, "receive timed out");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let message = match Message::parse(&reply) {
                Ok(message) => message,
                Err(e) => {
                    warn!(attempt, domain, error = %e, "discarding malformed reply");
                    continue;
                }
            };

            if message.header.id != id {
                warn!(
                    attempt,
                    expected = id,
                    received = message.header.id,
                    "discarding reply with mismatched id"
                );
                continue;
            }

            let rcode = message.header.rcode();
            if rcode != 0 {
                return Err(ResolveError::ResponseCode { code: rcode });
            }

            debug!(
                attempt,
                domain,
                answers = message.header.answer_count,
                authority = message.header.authority_count,
                additional = message.header.additional_count,
                truncated = message.header.truncated(),
                "reply parsed"
            );

            if message.header.answer_count > 0 {
                return Ok(Resolution {
                    answers: message.answers,
                    authorities: message.authorities,
                    additionals: message.additionals,
                });
            }

            // A referral names other servers in the authority section; we
            // do not follow it, we ask the same server again.
            debug!(attempt, domain, "no answers in reply, retrying");
        }

        Err(ResolveError::RetriesExhausted {
            attempts: self.max_attempts,
        })
    }
}
