use std::io;
use std::process::ExitCode;

use uniroute_chat::logging::init_logging;
use uniroute_config::{ChatConfig, LoggingConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging(&LoggingConfig::from_env())?;

    let outcome = uniroute_chat::run(ChatConfig::from_env(), &mut io::stdout()).await?;
    tracing::debug!(?outcome, "exiting");

    Ok(outcome.into())
}
