use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use spoken_time_core::config::load_config;
use spoken_time_core::logging::init_tracing;
use spoken_time_protocol::{Time, TimeRequest};
use spoken_time_rules::{
    render_rules, BritishTimeConverter, RuleEngine, RuleFormat, TimeConverter, TimeService,
};
use tracing::debug;

mod output;

use output::{explanation_line, print_failure, print_json, table_line, CliError};

#[derive(Parser)]
#[command(name = "spoken-time")]
#[command(about = "Convert 24-hour clock times into British spoken English", long_about = None)]
struct Cli {
    /// Rule file or directory replacing the built-in table
    #[arg(long, global = true, env = "SPOKEN_TIME_RULES")]
    rules: Option<PathBuf>,
    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, env = "SPOKEN_TIME_LOG")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the spoken form of one or more HH:mm times
    Convert(ConvertArgs),
    /// Show which rule renders a time
    Explain {
        /// Time in HH:mm format
        time: String,
    },
    /// Print every minute of one hour, or of the whole day
    Table {
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: Option<u32>,
    },
    /// Dump the active rule table
    Rules {
        #[arg(long, value_enum, default_value_t = DumpFormat::Yaml)]
        format: DumpFormat,
    },
    /// Show version information
    Version,
}

#[derive(Args)]
struct ConvertArgs {
    #[arg(required = true)]
    times: Vec<String>,
    /// Emit one JSON response per line
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DumpFormat {
    Yaml,
    Json,
}

impl From<DumpFormat> for RuleFormat {
    fn from(value: DumpFormat) -> Self {
        match value {
            DumpFormat::Yaml => RuleFormat::Yaml,
            DumpFormat::Json => RuleFormat::Json,
        }
    }
}

fn main() -> Result<(), CliError> {
    let config = load_config()?;
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.default_log_level());
    if let Err(err) = init_tracing(Some(log_level)) {
        eprintln!("failed to initialise tracing: {err}");
    }

    let converter = match cli.rules.or(config.rules_path) {
        Some(path) => {
            debug!(path = %path.display(), "loading custom rule table");
            BritishTimeConverter::with_engine(RuleEngine::from_path(path)?)
        }
        None => BritishTimeConverter::new(),
    };

    match cli.command {
        Commands::Convert(args) => convert(converter, &args),
        Commands::Explain { time } => {
            let time = converter.parse(&time)?;
            println!("{}", explanation_line(&converter.explain(&time)?));
            Ok(())
        }
        Commands::Table { hour } => {
            let times: Box<dyn Iterator<Item = Time>> = match hour {
                Some(hour) => Box::new(Time::all_in_hour(hour)),
                None => Box::new(Time::all_day()),
            };
            for time in times {
                println!("{}", table_line(&converter.explain(&time)?));
            }
            Ok(())
        }
        Commands::Rules { format } => {
            print!("{}", render_rules(converter.engine().rules(), format.into())?);
            Ok(())
        }
        Commands::Version => {
            println!("spoken-time v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn convert(converter: BritishTimeConverter, args: &ConvertArgs) -> Result<(), CliError> {
    let service = TimeService::new(converter);
    let mut failed = 0;

    for time in &args.times {
        match service.convert_time(&TimeRequest::new(time.as_str())) {
            Ok(response) if args.json => print_json(&response)?,
            Ok(response) => println!("{}", response.spoken_form),
            Err(err) => {
                failed += 1;
                print_failure(time, &err);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: args.times.len(),
        });
    }
    Ok(())
}
