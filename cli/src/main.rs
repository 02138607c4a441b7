use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use guild_points_core::file_utils::write_text_file;
use guild_points_core::models::GuildData;
use guild_points_core::parsers::parse_sql_dump;
use guild_points_core::processors::{aggregate, summarize, total_items};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "guild-points",
    version = "0.1.0",
    about = "Convert guild item point SQL dumps into guild data JSON",
    long_about = None
)]
struct Cli {
    /// Path to log file (logs go to stderr only when unset)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Verbosity level (repeat for more verbose output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Used when no subcommand is given
    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Args)]
struct InputArgs {
    /// SQL dump containing guild_item_points INSERT statements
    #[arg(long, env = "GUILD_POINTS_INPUT", default_value = "guild_data_raw.sql")]
    input: PathBuf,
}

#[derive(Args)]
struct ConvertArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Write JSON to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the SQL dump to nested guild data JSON (default)
    Convert(ConvertArgs),

    /// Print item counts per guild
    Summary {
        #[command(flatten)]
        input: InputArgs,
        /// Also list item counts per pattern and rank key
        #[arg(long, default_value_t = false)]
        ranks: bool,
    },
}

fn setup_logging(
    verbose: u8,
    log_file: Option<&Path>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter_level = match verbose {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(filter_level.into());

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_appender = tracing_appender::rolling::never(
                path.parent().unwrap_or(Path::new(".")),
                path.file_name().unwrap_or(std::ffi::OsStr::new("guild-points.log")),
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(fmt::Layer::new().with_writer(non_blocking).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::Layer::new().with_writer(std::io::stderr).with_ansi(true))
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn convert(input: &Path, output: Option<&Path>) -> Result<()> {
    info!("Converting {:?}", input);
    let json = guild_points_core::run(input)?;

    match output {
        Some(path) => {
            write_text_file(path, &format!("{}\n", json))?;
            info!("Wrote guild data to {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn summary_lines(data: &GuildData, show_ranks: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for guild in summarize(data) {
        lines.push(format!(
            "Guild {} ({}): {} patterns, {} ranks, {} items",
            guild.guild_id,
            guild.name.unwrap_or("Unknown"),
            guild.patterns,
            guild.ranks,
            guild.items
        ));

        if show_ranks {
            for (pattern, ranks) in &data[&guild.guild_id] {
                for (rank, items) in ranks {
                    lines.push(format!(
                        "  pattern {} rank {}: {} items",
                        pattern,
                        rank,
                        items.len()
                    ));
                }
            }
        }
    }
    lines.push(format!("Total: {} guilds, {} items", data.len(), total_items(data)));
    lines
}

fn summary(input: &Path, show_ranks: bool) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found at {:?}", input);
    }

    let data = aggregate(parse_sql_dump(input)?);
    for line in summary_lines(&data, show_ranks) {
        println!("{}", line);
    }
    Ok(())
}

impl Cli {
    /// The chosen subcommand, or `convert` built from the top-level flags.
    fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Convert(self.convert))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting guild-points CLI");

    match cli.into_command() {
        Commands::Convert(args) => convert(&args.input.input, args.output.as_deref())?,
        Commands::Summary { input, ranks } => summary(&input.input, ranks)?,
    }

    Ok(())
}
