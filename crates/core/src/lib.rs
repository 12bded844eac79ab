//! SDP origin construction (RFC 4566 / RFC 8866).
//!
//! Builds the `o=` field of a session description, filling in anything the
//! caller leaves out with the defaults RFC 4566 recommends: the local login
//! name, an NTP-derived session id, a random session version and the host's
//! unicast address.

pub mod env;
pub mod error;
pub mod guard;
pub mod origin;
pub mod time;

pub use env::{Environment, SystemEnvironment};
pub use error::{Result, SdpError};
pub use origin::{Origin, OriginBuilder, OriginDefaults};
