//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use benchdex_core::merge::MergeOptions;
use benchdex_core::pipeline::{ExtractOptions, ProgressReporter};
use benchdex_dataset::report::DatasetSummary;
use benchdex_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// benchdex — build the benchmark-paper dataset.
#[derive(Parser)]
#[command(
    name = "benchdex",
    version,
    about = "Extract benchmark-related papers from conference title lists and merge classified subsets.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Extract benchmark-related papers from a directory of title lists.
    Extract {
        /// Directory of <conference>_<year>.txt title lists.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output path for the raw dataset.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Merge classified dataset files into the final dataset.
    Merge {
        /// Classified dataset files, in merge order (defaults to config).
        inputs: Vec<PathBuf>,

        /// Output path for the merged dataset.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print summary statistics for an existing dataset file.
    Stats {
        /// Dataset file to summarize.
        file: PathBuf,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract { input, out } => cmd_extract(input, out),
        Command::Merge { inputs, out } => cmd_merge(inputs, out),
        Command::Stats { file } => cmd_stats(&file),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn file_processed(&self, name: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("[{current}/{total}] {name}"));
    }

    fn done(&self) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_extract(input: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;

    let options = ExtractOptions {
        input_dir: input.unwrap_or_else(|| PathBuf::from(&config.extract.input_dir)),
        output: out.unwrap_or_else(|| PathBuf::from(&config.extract.output)),
    };

    info!(
        input = %options.input_dir.display(),
        output = %options.output.display(),
        "extracting benchmark papers"
    );

    let reporter = CliProgress::new();
    let outcome = benchdex_core::pipeline::extract(&options, &reporter)?;

    println!();
    println!("  Extraction complete!");
    println!("  Lists:   {}", outcome.files_scanned);
    println!("  Titles:  {}", outcome.titles_seen);
    println!("  Matched: {}", outcome.summary.total);
    println!(
        "  Output:  {} ({:.1} KB)",
        outcome.output_path.display(),
        outcome.bytes_written as f64 / 1024.0
    );
    println!("  Time:    {:.1}s", outcome.elapsed.as_secs_f64());
    print_domain_breakdown(&outcome.summary);

    Ok(())
}

fn cmd_merge(inputs: Vec<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;

    let inputs = if inputs.is_empty() {
        config.merge.inputs.iter().map(PathBuf::from).collect()
    } else {
        inputs
    };
    let options = MergeOptions {
        inputs,
        output: out.unwrap_or_else(|| PathBuf::from(&config.merge.output)),
    };

    info!(
        inputs = options.inputs.len(),
        output = %options.output.display(),
        "merging classified datasets"
    );

    let reporter = CliProgress::new();
    let outcome = benchdex_core::merge::merge(&options, &reporter)?;

    println!();
    println!("  Merge complete!");
    for source in &outcome.sources {
        let name = source.path.display();
        if source.present {
            println!("  {name}: {} papers", source.loaded);
        } else {
            println!("  {name}: missing (0 papers)");
        }
    }
    println!("  Total:         {}", outcome.summary.total);
    println!("  Uncategorized: {}", outcome.summary.uncategorized);
    println!(
        "  Output:        {} ({:.1} KB)",
        outcome.output_path.display(),
        outcome.bytes_written as f64 / 1024.0
    );
    println!("  Time:          {:.1}s", outcome.elapsed.as_secs_f64());
    print_category_breakdown(&outcome.summary);

    Ok(())
}

fn cmd_stats(file: &Path) -> Result<()> {
    let records = benchdex_dataset::read_records(file)?;
    let summary = DatasetSummary::from_records(&records);

    println!();
    println!("  {}: {} papers", file.display(), summary.total);
    print_domain_breakdown(&summary);
    print_category_breakdown(&summary);

    Ok(())
}

/// Print per-domain and top conference+year counts.
fn print_domain_breakdown(summary: &DatasetSummary) {
    if summary.domains.is_empty() {
        return;
    }
    println!();
    println!("  By domain:");
    for (domain, count) in &summary.domains {
        println!("    {domain}: {count}");
    }

    println!();
    println!("  By conference/year (top 20):");
    for (conference, count) in summary.conferences.iter().take(20) {
        println!("    {conference}: {count}");
    }
}

/// Print the category frequency distribution.
fn print_category_breakdown(summary: &DatasetSummary) {
    if summary.categories.is_empty() {
        return;
    }
    println!();
    println!("  Category distribution:");
    for (category, count) in &summary.categories {
        if category.is_empty() {
            println!("    (uncategorized): {count}");
        } else {
            println!("    {category}: {count}");
        }
    }
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
