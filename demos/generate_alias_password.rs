use std::io;
use std::time::Duration;

use forwardemail::{AliasName, Auth, DomainName, ForwardEmailClient, GeneratePasswordParameters};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("FORWARDEMAIL_API_KEY")?;
    let domain = required_env("FORWARDEMAIL_DOMAIN")?;
    let alias = required_env("FORWARDEMAIL_ALIAS")?;

    let parameters = GeneratePasswordParameters {
        emailed_instructions: std::env::var("FORWARDEMAIL_INSTRUCTIONS_TO").ok(),
        is_override: std::env::var("FORWARDEMAIL_OVERRIDE")
            .ok()
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true")),
        ..Default::default()
    };

    let client = ForwardEmailClient::builder(Auth::api_key(api_key)?)
        .timeout(Duration::from_secs(30))
        .user_agent("forwardemail-demos")
        .build()?;
    let generated = client
        .generate_alias_password(
            &DomainName::new(domain)?,
            &AliasName::new(alias)?,
            &parameters,
        )
        .await?;

    println!("username: {}", generated.username);
    println!("password: {}", generated.password);

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
