use crate::env::{Environment, SystemEnvironment};

use super::{
    ADDRESS_TYPE_IP4, NETWORK_TYPE_INTERNET, Origin, SESSION_VERSION_BOUND, UNSPECIFIED_ADDRESS,
};

/// Values substituted by [`OriginBuilder::build`] when the caller leaves a
/// field out.
///
/// The username, address and session id defaults come from the
/// [`Environment`]; everything that is a plain constant lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginDefaults {
    /// Address type used when none is set (`IP4`).
    pub address_type: String,
    /// Network type used when none is set (`IN`).
    pub network_type: String,
    /// Address used when the host address cannot be resolved (`0.0.0.0`).
    pub fallback_address: String,
    /// Exclusive upper bound for a random session version.
    pub session_version_bound: u64,
}

impl Default for OriginDefaults {
    fn default() -> Self {
        Self {
            address_type: ADDRESS_TYPE_IP4.to_string(),
            network_type: NETWORK_TYPE_INTERNET.to_string(),
            fallback_address: UNSPECIFIED_ADDRESS.to_string(),
            session_version_bound: SESSION_VERSION_BOUND,
        }
    }
}

/// Where a builder field's value came from.
///
/// `Seeded` values were copied from an existing [`Origin`] and are never
/// replaced by a default, so rebuilding an origin reproduces it exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Slot<T> {
    #[default]
    Unset,
    Given(T),
    Seeded(T),
}

impl<T: Clone> Slot<T> {
    fn get(&self) -> Option<&T> {
        match self {
            Slot::Unset => None,
            Slot::Given(v) | Slot::Seeded(v) => Some(v),
        }
    }

    /// The stored value, or `default()` when unset or when a caller-given
    /// value matches `is_blank`.
    fn resolve(&self, is_blank: impl Fn(&T) -> bool, default: impl FnOnce() -> T) -> T {
        match self {
            Slot::Seeded(v) => v.clone(),
            Slot::Given(v) if !is_blank(v) => v.clone(),
            _ => default(),
        }
    }
}

fn text(value: Option<&str>) -> Slot<String> {
    Slot::Given(value.unwrap_or_default().to_string())
}

/// Builder for [`Origin`] values.
///
/// Any field left unset is filled in by [`build`](Self::build):
///
/// | Field | Default |
/// |-------|---------|
/// | username | login name of the current user |
/// | session id | current NTP time (also used when set to `0`) |
/// | session version | random in `[0, 65535)` (an explicit `0` is kept) |
/// | address | resolved host address, else `0.0.0.0` |
/// | address type | `IP4` |
/// | network type | `IN` |
///
/// The username and address defaults expose the machine's identity. Set
/// them explicitly when that matters.
///
/// ```
/// # use sdp::OriginBuilder;
/// let origin = OriginBuilder::new()
///     .set_username("server")
///     .set_session_id(1234567890)
///     .set_session_version(1)
///     .set_address("192.168.1.100")
///     .build();
/// assert_eq!(origin.to_string(), "o=server 1234567890 1 IN IP4 192.168.1.100");
/// ```
///
/// A builder is meant for one configure-then-build sequence on a single
/// thread.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OriginBuilder {
    username: Slot<String>,
    session_id: Slot<u64>,
    session_version: Slot<u64>,
    address: Slot<String>,
    address_type: Slot<String>,
    network_type: Slot<String>,
    defaults: OriginDefaults,
}

impl OriginBuilder {
    /// Create an empty builder. Every field will be defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding a verbatim copy of `origin`.
    ///
    /// Copied fields are never defaulted, even when empty, so
    /// `OriginBuilder::from_origin(&o).build() == o`.
    pub fn from_origin(origin: &Origin) -> Self {
        Self {
            username: Slot::Seeded(origin.username.clone()),
            session_id: Slot::Seeded(origin.session_id),
            session_version: Slot::Seeded(origin.session_version),
            address: Slot::Seeded(origin.address.clone()),
            address_type: Slot::Seeded(origin.address_type.clone()),
            network_type: Slot::Seeded(origin.network_type.clone()),
            defaults: OriginDefaults::default(),
        }
    }

    /// Replace the constant defaults used by [`build`](Self::build).
    pub fn with_defaults(&mut self, defaults: OriginDefaults) -> &mut Self {
        self.defaults = defaults;
        self
    }

    /// Set the username. `None` is stored as empty text, which
    /// [`build`](Self::build) replaces with the current user's login name.
    pub fn set_username<'a>(&mut self, username: impl Into<Option<&'a str>>) -> &mut Self {
        self.username = text(username.into());
        self
    }

    pub fn get_username(&self) -> Option<&str> {
        self.username.get().map(String::as_str)
    }

    /// Set the session id. The sign is dropped.
    ///
    /// `0` cannot be used as a session id: [`build`](Self::build) treats it
    /// as unset and substitutes the current NTP time.
    pub fn set_session_id(&mut self, session_id: i64) -> &mut Self {
        self.session_id = Slot::Given(session_id.unsigned_abs());
        self
    }

    pub fn get_session_id(&self) -> Option<u64> {
        self.session_id.get().copied()
    }

    /// Set the session version. The sign is dropped. Unlike the session id,
    /// `0` is a valid explicit version.
    pub fn set_session_version(&mut self, version: i64) -> &mut Self {
        self.session_version = Slot::Given(version.unsigned_abs());
        self
    }

    pub fn get_session_version(&self) -> Option<u64> {
        self.session_version.get().copied()
    }

    /// Set the unicast address. `None` or empty text selects the host address.
    pub fn set_address<'a>(&mut self, address: impl Into<Option<&'a str>>) -> &mut Self {
        self.address = text(address.into());
        self
    }

    pub fn get_address(&self) -> Option<&str> {
        self.address.get().map(String::as_str)
    }

    /// Set the address type (`IP4`, `IP6`). Not validated.
    pub fn set_address_type<'a>(&mut self, address_type: impl Into<Option<&'a str>>) -> &mut Self {
        self.address_type = text(address_type.into());
        self
    }

    pub fn get_address_type(&self) -> Option<&str> {
        self.address_type.get().map(String::as_str)
    }

    /// Set the network type (`IN`). Not validated.
    pub fn set_network_type<'a>(&mut self, network_type: impl Into<Option<&'a str>>) -> &mut Self {
        self.network_type = text(network_type.into());
        self
    }

    pub fn get_network_type(&self) -> Option<&str> {
        self.network_type.get().map(String::as_str)
    }

    /// Build the origin, resolving defaults against the operating system.
    ///
    /// Never fails. May block on a host name lookup when no address is set.
    pub fn build(&self) -> Origin {
        self.build_with(&SystemEnvironment)
    }

    /// Build the origin, resolving defaults against `env`.
    ///
    /// `env` is only consulted for fields that need a default.
    pub fn build_with<E: Environment + ?Sized>(&self, env: &E) -> Origin {
        let defaults = &self.defaults;

        let username = self
            .username
            .resolve(|v| v.is_empty(), || env.username());
        let session_id = self.session_id.resolve(|v| *v == 0, || env.ntp_time());
        let session_version = self.session_version.resolve(
            |_| false,
            || env.session_version(defaults.session_version_bound),
        );
        let address = self.address.resolve(
            |v| v.is_empty(),
            || match env.host_address() {
                Some(addr) => addr,
                None => {
                    tracing::warn!(
                        fallback = %defaults.fallback_address,
                        "host address unresolved, using fallback"
                    );
                    defaults.fallback_address.clone()
                }
            },
        );
        let address_type = self
            .address_type
            .resolve(|v| v.is_empty(), || defaults.address_type.clone());
        let network_type = self
            .network_type
            .resolve(|v| v.is_empty(), || defaults.network_type.clone());

        tracing::debug!(
            username = %username,
            session_id,
            session_version,
            address = %address,
            address_type = %address_type,
            network_type = %network_type,
            "origin built"
        );

        Origin {
            username,
            session_id,
            session_version,
            address,
            address_type,
            network_type,
        }
    }
}

impl From<&Origin> for OriginBuilder {
    fn from(origin: &Origin) -> Self {
        Self::from_origin(origin)
    }
}
