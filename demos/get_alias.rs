use std::io;

use forwardemail::{AliasName, Auth, DomainName, ForwardEmailClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("FORWARDEMAIL_API_KEY")?;
    let domain = required_env("FORWARDEMAIL_DOMAIN")?;
    let alias = required_env("FORWARDEMAIL_ALIAS")?;

    let client = ForwardEmailClient::new(Auth::api_key(api_key)?);
    let alias = client
        .get_alias(&DomainName::new(domain)?, &AliasName::new(alias)?)
        .await?;

    println!(
        "id: {}, name: {}, user: {}, domain: {}, created_at: {:?}",
        alias.id,
        alias.name,
        alias.user.id(),
        alias.domain.id(),
        alias.created_at
    );

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
