use std::io;

use forwardemail::{Auth, DomainName, ForwardEmailClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("FORWARDEMAIL_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FORWARDEMAIL_API_KEY environment variable is required",
        )
    })?;
    let domain = std::env::var("FORWARDEMAIL_DOMAIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FORWARDEMAIL_DOMAIN environment variable is required",
        )
    })?;

    let client = ForwardEmailClient::new(Auth::api_key(api_key)?);
    let aliases = client.get_aliases(&DomainName::new(domain)?).await?;

    for alias in aliases {
        println!(
            "{} enabled={} recipients={:?} labels={:?}",
            alias.name, alias.is_enabled, alias.recipients, alias.labels
        );
    }

    Ok(())
}
