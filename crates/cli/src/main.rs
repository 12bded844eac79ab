use clap::Parser;
use sdp::{OriginBuilder, OriginDefaults};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sdp-origin",
    about = "Print an SDP o= line, defaulting any field not given"
)]
struct Args {
    /// Originating user name (default: current login name)
    #[arg(long, short)]
    username: Option<String>,

    /// Session id; 0 or absent selects the current NTP time
    #[arg(long, allow_negative_numbers = true)]
    session_id: Option<i64>,

    /// Session version (default: random in [0, 65535))
    #[arg(long, allow_negative_numbers = true)]
    session_version: Option<i64>,

    /// Unicast address (default: resolved host address)
    #[arg(long, short)]
    address: Option<String>,

    /// Address type (default: IP4)
    #[arg(long)]
    address_type: Option<String>,

    /// Network type (default: IN)
    #[arg(long)]
    network_type: Option<String>,

    /// Address advertised when the host address cannot be resolved
    #[arg(long, default_value = "0.0.0.0")]
    fallback_address: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = OriginBuilder::new();
    builder.with_defaults(OriginDefaults {
        fallback_address: args.fallback_address,
        ..OriginDefaults::default()
    });
    if let Some(username) = args.username.as_deref() {
        builder.set_username(username);
    }
    if let Some(id) = args.session_id {
        builder.set_session_id(id);
    }
    if let Some(version) = args.session_version {
        builder.set_session_version(version);
    }
    if let Some(address) = args.address.as_deref() {
        builder.set_address(address);
    }
    if let Some(address_type) = args.address_type.as_deref() {
        builder.set_address_type(address_type);
    }
    if let Some(network_type) = args.network_type.as_deref() {
        builder.set_network_type(network_type);
    }

    let origin = builder.build();
    tracing::info!(session_id = origin.session_id(), "origin generated");
    println!("{origin}");
}
