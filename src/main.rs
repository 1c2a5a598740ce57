mod aggregator;
mod args;
mod client;
mod detector;
mod dispatcher;
mod dota2;
mod notification;
mod opendota;
mod poller;
mod steam;
mod time;

use std::{io::Write, time::Duration};

use chrono_tz::Tz;
use clap::Parser;

use crate::{
    aggregator::Aggregator,
    args::{Args, DEFAULT_TIMEZONE},
    client::Client,
    dispatcher::Dispatcher,
    opendota::OpenDota,
    poller::Poller,
};

fn init_logger(zone: Tz) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                time::log_prefix(zone),
                record.level(),
                record.args()
            )
        })
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // the logger needs a zone before the arguments are known
            let zone = std::env::var("TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.into());
            init_logger(time::resolve_zone(&zone));
            log::error!("Invalid configuration. Quitting...\n{}", err);
            std::process::exit(err.exit_code());
        }
    };
    let zone = time::resolve_zone(&args.timezone);
    init_logger(zone);

    let account_id = match steam::steam64_to_32(&args.steam_id) {
        Ok(account_id) => account_id,
        Err(err) => {
            log::error!("Unable to get account id from {}. Quitting...", args.steam_id);
            return Err(err.into());
        }
    };

    log::info!("Dota 2 match notifier");
    if zone.name() != args.timezone {
        log::warn!("Unknown time zone {:?}, falling back to UTC", args.timezone);
    }
    log::info!("Watching account {} every {} seconds", account_id, args.poll_time);

    let client = Client::new(args.proxy.as_deref())?;
    let api = OpenDota::new(&client, &args.opendota_url, args.opendota_api_key.as_deref());
    let aggregator = Aggregator::new(api, &account_id);
    let dispatcher = Dispatcher::new(&client, &args.discord_url);

    let mut poller = Poller::new(
        aggregator,
        dispatcher,
        Duration::from_secs(args.poll_time),
        &args.webhook_username,
        zone,
    );
    poller.run().await;

    Ok(())
}
