use anyhow::Context;
use clap::Parser;
use ghstats::{CardConfig, Locale, StatsCard};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render a GitHub user's public statistics as an SVG card
#[derive(Debug, Parser)]
#[command(name = "ghstats", version, about)]
struct Cli {
    /// GitHub username
    username: String,

    /// Where to write the card (defaults to ./<username>-github-stats.svg)
    #[arg(short, long, conflicts_with_all = ["stdout", "data_uri"])]
    output: Option<PathBuf>,

    /// Print the SVG to stdout instead of writing a file
    #[arg(long, conflicts_with = "data_uri")]
    stdout: bool,

    /// Print a base64 data URI instead of writing a file
    #[arg(long)]
    data_uri: bool,

    /// Label language (ja or en)
    #[arg(long = "lang", env = "GHSTATS_LANG", default_value = "ja")]
    locale: Locale,

    /// REST API base URL
    #[arg(long, env = "GHSTATS_API_BASE", default_value = ghstats::DEFAULT_API_BASE)]
    api_base: String,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "GHSTATS_TIMEOUT_MS", default_value_t = 30000)]
    timeout_ms: u64,
}

impl Cli {
    fn config(&self) -> CardConfig {
        CardConfig {
            api_base: self.api_base.clone(),
            timeout_ms: self.timeout_ms,
            locale: self.locale,
            ..Default::default()
        }
    }
}

/// Deliver the card: a data URI or the raw SVG on `out`, otherwise a file
/// (`--output`, or `{login}-github-stats.svg` under `dir`) whose path is echoed.
fn emit(cli: &Cli, card: &StatsCard, dir: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    if cli.stdout {
        out.write_all(card.svg().as_bytes())?;
    } else if cli.data_uri {
        writeln!(out, "{}", card.to_data_uri())?;
    } else {
        let path = cli
            .output
            .clone()
            .unwrap_or_else(|| dir.join(card.file_name()));
        card.write_to(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writeln!(out, "{}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

fn run(cli: Cli, dir: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let config = cli.config();
    log::debug!("fetching stats for {:?} from {}", cli.username, config.api_base);
    let card = ghstats::generate_card(&config, &cli.username)?;
    emit(&cli, &card, dir, out)
}

fn report(err: &anyhow::Error) -> String {
    format!("error: {:#}", err)
}

fn main() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let stdout = std::io::stdout();
    if let Err(e) = run(Cli::parse(), Path::new("."), &mut stdout.lock()) {
        eprintln!("{}", report(&e));
        std::process::exit(1);
    }
}
