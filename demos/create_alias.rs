use std::io;

use forwardemail::{AliasName, AliasParameters, Auth, DomainName, ForwardEmailClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("FORWARDEMAIL_API_KEY")?;
    let domain = required_env("FORWARDEMAIL_DOMAIN")?;
    let alias = required_env("FORWARDEMAIL_ALIAS")?;
    let recipients = required_env("FORWARDEMAIL_RECIPIENTS")?;
    let description = std::env::var("FORWARDEMAIL_DESCRIPTION").unwrap_or_default();

    let parameters = AliasParameters {
        recipients: Some(
            recipients
                .split(',')
                .map(str::trim)
                .filter(|it| !it.is_empty())
                .map(str::to_owned)
                .collect(),
        ),
        description,
        is_enabled: Some(true),
        ..Default::default()
    };

    let client = ForwardEmailClient::new(Auth::api_key(api_key)?);
    let alias = client
        .create_alias(
            &DomainName::new(domain)?,
            &AliasName::new(alias)?,
            &parameters,
        )
        .await?;

    println!("created alias {} ({})", alias.name, alias.id);

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
