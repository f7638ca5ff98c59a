use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slsname::config::Config;
use slsname::naming::{self, physical, Category, PhysicalKind};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Derive logical ids and physical names for serverless resources
#[derive(Parser, Debug)]
#[command(name = "slsname", version, about, long_about = None)]
struct Args {
    /// Service name
    #[arg(long, global = true)]
    service: Option<String>,

    /// Deployment stage
    #[arg(long, global = true)]
    stage: Option<String>,

    /// Deployment region
    #[arg(long, global = true)]
    region: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long = "config", global = true)]
    config_file: Option<PathBuf>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the logical id of a resource category
    LogicalId {
        /// Category key (see `categories`)
        category: String,
        /// Tokens, in the category's slot order
        tokens: Vec<String>,
        /// Disambiguating index
        #[arg(short, long)]
        index: Option<u64>,
    },
    /// Derive a physical name
    PhysicalName {
        /// Kind key (see `categories --physical`)
        kind: String,
        /// Function name, where the kind needs one
        #[arg(default_value = "")]
        token: String,
        /// Event bus rule index
        #[arg(short, long, default_value_t = 0)]
        index: u64,
    },
    /// List the categories an existing logical id belongs to
    Recognize {
        /// Logical id to classify
        id: String,
    },
    /// Extract conventional names from an ARN
    Arn {
        /// ARN to inspect
        arn: String,
    },
    /// Build a function ARN from the configured region
    FunctionArn {
        /// Function name, as deployed
        function_name: String,
        /// Account id
        #[arg(long)]
        account: String,
        /// Partition
        #[arg(long, default_value = "aws")]
        partition: String,
    },
    /// Normalize a token
    Normalize {
        token: String,
        #[arg(short, long, value_enum, default_value = "function")]
        mode: NormalizeMode,
    },
    /// List known categories
    Categories {
        /// List physical name kinds instead
        #[arg(long)]
        physical: bool,
    },
    /// Show the effective configuration, or save it
    Config {
        /// Write the effective configuration (file, SLSNAME_* environment and
        /// flags merged) to --config, or to the default location
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NormalizeMode {
    Name,
    AlphaNumeric,
    Function,
    Path,
    PathPart,
    Method,
    Words,
    RouteKey,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("slsname started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("slsname").join("slsname.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".slsname").join("slsname.log");
    }
    PathBuf::from("slsname.log")
}

/// Config file, then environment, then flags
fn resolve_config(args: &Args) -> Result<Config> {
    let config = match &args.config_file {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load(),
    };

    Ok(config.with_env().merge_flags(
        args.service.as_deref(),
        args.stage.as_deref(),
        args.region.as_deref(),
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let config = resolve_config(&args)?;
    let ctx = config.context();
    tracing::debug!("Using context: {:?}", ctx);

    match &args.command {
        Command::LogicalId {
            category,
            tokens,
            index,
        } => {
            let category: Category = category.parse()?;
            let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
            println!("{}", naming::synthesize(category, &tokens, *index));
        }
        Command::PhysicalName { kind, token, index } => {
            let kind: PhysicalKind = kind.parse()?;
            if ctx.service.is_empty() {
                tracing::warn!("No service configured, deriving {} with an empty service", kind);
            }
            println!("{}", kind.derive(&ctx, config.overrides(), token, *index));
        }
        Command::Recognize { id } => {
            let categories = naming::classify(id);
            if categories.is_empty() {
                println!("{id}: not recognized");
            }
            for category in categories {
                println!("{category}\t{}", naming::extract_token(category, id));
            }
        }
        Command::Arn { arn } => {
            if let Some(parsed) = naming::Arn::parse(arn) {
                println!("partition\t{}", parsed.partition);
                println!("service\t{}", parsed.service);
                println!("region\t{}", parsed.region);
                println!("account\t{}", parsed.account);
                println!("resource\t{}", parsed.resource);
            } else {
                tracing::info!("{} is not a well-formed ARN", arn);
            }
            println!("lambda\t{}", naming::extract_lambda_name_from_arn(arn));
            println!("authorizer\t{}", naming::extract_authorizer_name_from_arn(arn));
            println!("event-bus\t{}", naming::extract_event_bus_name(arn));
        }
        Command::FunctionArn {
            function_name,
            account,
            partition,
        } => {
            println!(
                "{}",
                physical::lambda_arn(partition, &ctx.region, account, function_name)
            );
        }
        Command::Normalize { token, mode } => {
            let normalized = match mode {
                NormalizeMode::Name => naming::normalize_name(token),
                NormalizeMode::AlphaNumeric => naming::normalize_alpha_numeric(token),
                NormalizeMode::Function => naming::normalize_function_name(token),
                NormalizeMode::Path => naming::normalize_path(token),
                NormalizeMode::PathPart => naming::normalize_path_part(token),
                NormalizeMode::Method => naming::normalize_method_name(token),
                NormalizeMode::Words => naming::normalize_words(token),
                NormalizeMode::RouteKey => naming::normalize_route_key(token),
            };
            println!("{normalized}");
        }
        Command::Categories { physical } => {
            if *physical {
                for kind in PhysicalKind::ALL {
                    println!("{kind}");
                }
            } else {
                for category in Category::ALL {
                    let def = naming::get_category(*category);
                    let mut usage = def.tokens.join(" ");
                    if def.is_indexed() {
                        usage.push_str(" [--index N]");
                    }
                    println!("{category}\t{}\t{}", usage.trim(), def.description);
                }
            }
        }
        Command::Config { save } => {
            if *save {
                match args.config_file.clone().or_else(Config::config_path) {
                    Some(path) => {
                        config
                            .save_to(&path)
                            .with_context(|| format!("Failed to save config {}", path.display()))?;
                        println!("Saved {}", path.display());
                    }
                    None => tracing::warn!("No config directory, nothing saved"),
                }
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
