//! SDP origin field (RFC 4566 §5.2).
//!
//! ```text
//! o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>
//! o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5
//! ```
//!
//! - **username**: login on the originating host, `-` if the host has no
//!   notion of user ids.
//! - **sess-id**: numeric id, unique together with username and address.
//!   RFC 4566 suggests an NTP timestamp.
//! - **sess-version**: must increase every time the session description
//!   changes.
//! - **nettype / addrtype**: `IN` and `IP4` / `IP6`.
//! - **unicast-address**: address of the machine that created the session.
//!
//! [`Origin`] is the immutable value; [`OriginBuilder`] constructs it and
//! fills in anything the caller leaves out.

pub mod builder;

use std::fmt;

pub use builder::{OriginBuilder, OriginDefaults};

/// Network type for the Internet (`IN`).
pub const NETWORK_TYPE_INTERNET: &str = "IN";
/// IPv4 address type.
pub const ADDRESS_TYPE_IP4: &str = "IP4";
/// IPv6 address type.
pub const ADDRESS_TYPE_IP6: &str = "IP6";
/// Address advertised when the local host address cannot be resolved.
pub const UNSPECIFIED_ADDRESS: &str = "0.0.0.0";
/// Exclusive upper bound for randomly chosen session versions.
pub const SESSION_VERSION_BOUND: u64 = 65_535;

/// An immutable SDP origin.
///
/// Equality and hashing are field-wise, so two origins describing the same
/// session at the same version compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    username: String,
    session_id: u64,
    session_version: u64,
    address: String,
    address_type: String,
    network_type: String,
}

impl Origin {
    /// Create an origin with every field given explicitly. No defaulting.
    pub fn new(
        username: impl Into<String>,
        session_id: u64,
        session_version: u64,
        address: impl Into<String>,
        address_type: impl Into<String>,
        network_type: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            session_id,
            session_version,
            address: address.into(),
            address_type: address_type.into(),
            network_type: network_type.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn session_version(&self) -> u64 {
        self.session_version
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn address_type(&self) -> &str {
        &self.address_type
    }

    pub fn network_type(&self) -> &str {
        &self.network_type
    }

    /// Builder pre-populated with this origin's fields.
    ///
    /// The usual way to publish a changed description:
    ///
    /// ```
    /// # use sdp::Origin;
    /// let current = Origin::new("alice", 3_900_000_000, 7, "10.0.0.1", "IP4", "IN");
    /// let mut builder = current.to_builder();
    /// let next = current.session_version() + 1;
    /// builder.set_session_version(next as i64);
    /// let updated = builder.build();
    /// assert_eq!(updated.session_version(), 8);
    /// assert_eq!(updated.session_id(), current.session_id());
    /// ```
    pub fn to_builder(&self) -> OriginBuilder {
        OriginBuilder::from_origin(self)
    }
}

/// Renders the full `o=` line (without line terminator).
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "o={} {} {} {} {} {}",
            self.username,
            self.session_id,
            self.session_version,
            self.network_type,
            self.address_type,
            self.address
        )
    }
}
