//! Ambient reads used to fill in missing origin fields.
//!
//! [`OriginBuilder::build`](crate::OriginBuilder::build) needs four things
//! from the host when the caller leaves a field unset: the login name, a
//! local unicast address, the clock, and a random source. They sit behind
//! the [`Environment`] trait so tests (and embedders that must not leak the
//! machine's identity into SDP) can supply fixed values.

use std::net::{SocketAddr, ToSocketAddrs};

use crate::time;

/// Source of the values substituted for unset origin fields.
pub trait Environment {
    /// Name of the user running the process.
    fn username(&self) -> String;

    /// Unicast address of this host, or `None` if it cannot be resolved.
    fn host_address(&self) -> Option<String>;

    /// Current time in whole NTP seconds.
    fn ntp_time(&self) -> u64 {
        time::current_ntp_time()
    }

    /// Uniformly random session version in `[0, bound)`.
    fn session_version(&self, bound: u64) -> u64 {
        rand::random_range(0..bound.max(1))
    }
}

/// [`Environment`] backed by the operating system.
///
/// The host address comes from resolving the machine's host name, so it
/// reflects `/etc/hosts` / DNS rather than interface enumeration. IPv4
/// results are preferred since the default address type is `IP4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn username(&self) -> String {
        whoami::username()
    }

    fn host_address(&self) -> Option<String> {
        let hostname = match whoami::fallible::hostname() {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!(error = %e, "hostname lookup failed");
                return None;
            }
        };

        let addrs: Vec<SocketAddr> = match (hostname.as_str(), 0).to_socket_addrs() {
            Ok(addrs) => addrs.collect(),
            Err(e) => {
                tracing::debug!(hostname = %hostname, error = %e, "hostname did not resolve");
                return None;
            }
        };

        let addr = addrs
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addrs.first())?;
        tracing::trace!(hostname = %hostname, addr = %addr.ip(), "resolved host address");
        Some(addr.ip().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Environment for Fixed {
        fn username(&self) -> String {
            "fixed".into()
        }

        fn host_address(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn default_session_version_in_range() {
        for _ in 0..1000 {
            assert!(Fixed.session_version(10) < 10);
        }
    }

    #[test]
    fn zero_bound_does_not_panic() {
        assert_eq!(Fixed.session_version(0), 0);
    }

    #[test]
    fn default_ntp_time_is_current() {
        let expected = time::current_ntp_time();
        let got = Fixed.ntp_time();
        assert!(got.abs_diff(expected) <= 2);
    }

    #[test]
    fn system_username_not_empty() {
        assert!(!SystemEnvironment.username().is_empty());
    }
}
