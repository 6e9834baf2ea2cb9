//! UDP statsd client.
//!
//! The address is resolved first; for each candidate the socket is bound to
//! an ephemeral port of the same address family, connected, and switched to
//! non-blocking mode. The first candidate that connects wins. A full send buffer or an ICMP refusal
//! from a dead backend shows up as a send error, which is logged and dropped.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use reqstat_core::error::{Result, ReqstatError};
use reqstat_core::protocol::statsd;

use super::Statter;

#[derive(Debug)]
pub struct UdpStatter {
    socket: UdpSocket,
}

impl UdpStatter {
    /// Resolve `address` and connect a datagram socket to it.
    pub fn connect(address: &str) -> Result<Self> {
        let candidates = address
            .to_socket_addrs()
            .map_err(|e| ReqstatError::Unreachable(format!("{address}: {e}")))?;

        let mut last_err = None;
        for target in candidates {
            match connect_one(target) {
                Ok(socket) => {
                    socket.set_nonblocking(true).map_err(|e| {
                        ReqstatError::Internal(format!("set_nonblocking failed: {e}"))
                    })?;
                    return Ok(Self { socket });
                }
                Err(e) => last_err = Some(e),
            }
        }

        Err(ReqstatError::Unreachable(match last_err {
            Some(e) => format!("{address}: {e}"),
            None => format!("{address}: resolved to no addresses"),
        }))
    }

    fn send(&self, line: String) {
        if let Err(e) = self.socket.send(line.as_bytes()) {
            tracing::debug!(error = %e, %line, "statsd datagram dropped");
        }
    }
}

fn connect_one(target: SocketAddr) -> std::io::Result<UdpSocket> {
    let local: SocketAddr = match target {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };
    let socket = UdpSocket::bind(local)?;
    socket.connect(target)?;
    Ok(socket)
}

impl Statter for UdpStatter {
    fn timing(&self, sample_rate: f32, name: &str, value: Duration) {
        self.send(statsd::timing_line(name, value, sample_rate));
    }

    fn counter(&self, sample_rate: f32, name: &str, value: i64) {
        self.send(statsd::counter_line(name, value, sample_rate));
    }
}
