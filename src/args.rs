use clap::Parser;

pub const DEFAULT_TIMEZONE: &str = "America/Denver";

#[derive(Parser, Debug)]
#[command(about = "Posts a Discord message whenever the watched player finishes a Dota 2 match")]
pub struct Args {
    /// 64-bit Steam id of the watched player
    #[arg(long, env = "STEAM_ID")]
    pub steam_id: String,
    /// Discord webhook the notifications are posted to
    #[arg(long, env = "DISCORD_URL")]
    pub discord_url: String,
    /// Seconds to sleep between two polls
    #[arg(long, env = "POLL_TIME", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_time: u64,
    #[arg(long, env = "TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,
    #[arg(long, env = "PROXY")]
    pub proxy: Option<String>,
    #[arg(long, env = "OPENDOTA_URL", default_value = "https://api.opendota.com/api")]
    pub opendota_url: String,
    #[arg(long, env = "OPENDOTA_API_KEY")]
    pub opendota_api_key: Option<String>,
    #[arg(long, env = "WEBHOOK_USERNAME", default_value = "Dota Tracker")]
    pub webhook_username: String,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn parses_required_and_defaults() {
        let args = Args::try_parse_from([
            "notifier",
            "--steam-id",
            "76561197960265729",
            "--discord-url",
            "https://discord.test/hook",
            "--poll-time",
            "60",
        ])
        .expect("valid arguments");
        assert_eq!(args.poll_time, 60);
        assert_eq!(args.timezone, "America/Denver");
        assert_eq!(args.webhook_username, "Dota Tracker");
        assert!(args.proxy.is_none());
    }

    #[test]
    fn missing_required_value_is_a_config_error() {
        let err = Args::try_parse_from(["notifier", "--poll-time", "60"]).unwrap_err();
        assert!(err.use_stderr());
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        // help is not an error and keeps going to stdout
        let help = Args::try_parse_from(["notifier", "--help"]).unwrap_err();
        assert!(!help.use_stderr());
    }

    #[test]
    fn rejects_zero_poll_time() {
        let res = Args::try_parse_from([
            "notifier",
            "--steam-id",
            "1",
            "--discord-url",
            "https://discord.test/hook",
            "--poll-time",
            "0",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_non_numeric_poll_time() {
        let res = Args::try_parse_from([
            "notifier",
            "--steam-id",
            "1",
            "--discord-url",
            "https://discord.test/hook",
            "--poll-time",
            "soon",
        ]);
        assert!(res.is_err());
    }
}
