mod cli;
mod config;
mod error;
mod logging;
mod poller;
mod practicum;
mod status;
mod telegram;
mod validator;

use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use tracing::{error, info};

use cli::Cli;
use config::Config;
use error::BotError;
use poller::Poller;
use practicum::PracticumClient;
use telegram::TelegramClient;

const WEEK: i64 = 7 * 24 * 60 * 60;

/// Wires the real clients into a poller. Takes an already validated
/// [`Config`], so nothing touches the network without every credential.
fn bootstrap(
    cli: &Cli,
    mut config: Config,
) -> Result<Poller<PracticumClient, TelegramClient>, BotError> {
    if let Some(secs) = cli.interval {
        config.retry_time = Duration::from_secs(secs);
    }
    let from_date = cli
        .from_date
        .unwrap_or_else(|| Utc::now().timestamp() - WEEK);

    let source = PracticumClient::new(
        config.practicum_token,
        config.endpoint,
        config.request_timeout,
    )?;
    let notifier = TelegramClient::new(
        config.telegram_token,
        config.telegram_chat_id,
        config.telegram_api_url,
        config.request_timeout,
    )?;
    Ok(Poller::new(source, notifier, config.retry_time, from_date))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.log_path().map(|p| p.as_path()), cli.verbose)?;

    let mut poller = match Config::from_env().and_then(|config| bootstrap(&cli, config)) {
        Ok(poller) => poller,
        Err(err) => {
            error!(error = %err, "refusing to start");
            return Err(err.into());
        }
    };

    if cli.once {
        let delivery = poller.tick().await;
        info!(?delivery, next_from_date = poller.from_date(), "single iteration finished");
    } else {
        poller.run().await;
    }
    Ok(())
}
