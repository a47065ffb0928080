use chrono::Utc;
use clap::Parser;
use view_helpers::core::{datetime, gravatar, text};
use view_helpers::domain::model::VersionInfo;
use view_helpers::domain::ports::SettingsProvider;
use view_helpers::utils::{logger, validation::Validate};
use view_helpers::{CliConfig, Command, Result, TomlConfig, ViewHelpers};

fn load_config(path: Option<&str>) -> Result<TomlConfig> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(TomlConfig::default()),
    }
}

fn run(cli: &CliConfig) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;
    let catalog = config.catalog();
    let helpers = ViewHelpers::new(config, catalog);

    let output = match &cli.command {
        Command::Count { value } => helpers.small_count(*value)?,
        Command::Duration { millis } => helpers.duration(*millis)?,
        Command::Since { timestamp, now } => {
            let value = timestamp.as_deref().map(datetime::parse_timestamp).transpose()?;
            let now = match now {
                Some(now) => datetime::parse_timestamp(now)?,
                None => Utc::now().fixed_offset(),
            };
            helpers.time_since(value.as_ref(), &now).to_string()
        }
        Command::Date { timestamp, format } => {
            let value = datetime::parse_timestamp(timestamp)?;
            helpers.localized_datetime(&value, format.as_deref())
        }
        Command::Wrap { text: value, every } => text::soft_wrap(value, *every)?,
        Command::Truncate { text: value, length } => text::truncate(value, *length),
        Command::Percent { value, total } => text::percent(*value, *total).to_string(),
        Command::Quote { value, safe } => text::url_quote(value, safe),
        Command::Basename { path } => text::basename(path).to_string(),
        Command::Gravatar {
            email,
            size,
            default,
        } => gravatar::gravatar_url(
            email,
            *size,
            Some(default.as_deref().unwrap_or(helpers.settings().gravatar_default())),
            helpers.settings().gravatar_base_url(),
        ),
        Command::Version { current, latest } => {
            let info = VersionInfo::new(current, latest.as_deref())?;
            if info.update_available {
                format!("{} -> {} (update available)", info.current, info.latest)
            } else {
                format!("{} (up to date)", info.current)
            }
        }
    };
    Ok(output)
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}
