use std::error::Error;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use user_api_core::{ApiClient, Settings, UreqTransport};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            let mut source = e.source();
            while let Some(cause) = source {
                message.push_str(": ");
                message.push_str(&cause.to_string());
                source = cause.source();
            }
            tracing::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let endpoint = settings.endpoint()?;

    let client = ApiClient::new(UreqTransport::new());
    let url = client.build_url(&endpoint.scheme, &endpoint.host, &endpoint.path);
    tracing::info!(%url, "fetching user");

    let user = client.fetch_user(&url)?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}
