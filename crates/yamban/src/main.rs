//! CLI entry point for yamban.

use std::io::{self, BufRead as _, Write as _};
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};
use yamban_app::YamlTaskRepository;
use yamban_core::BoardDocument;
use yamban_store_yaml::BoardFile;

mod api;

const DEFAULT_BOARD_FILE: &str = "backlog.yaml";

/// Single-user kanban board served over HTTP from one YAML file.
#[derive(Parser, Debug)]
#[command(
    name = "yamban",
    version,
    about = "yamban: a kanban board served from a single YAML file"
)]
struct Cli {
    /// Board file to serve (created on demand, defaults to backlog.yaml).
    #[arg(value_name = "YAML_FILE")]
    yaml_file: Option<PathBuf>,

    /// Host to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.debug);

    let path = cli.yaml_file.clone().unwrap_or_else(|| {
        println!("No YAML file provided, using default: {DEFAULT_BOARD_FILE}");
        PathBuf::from(DEFAULT_BOARD_FILE)
    });

    if !path.exists() {
        let question = format!("Board file '{}' does not exist. Create it?", path.display());
        if confirm(&question)? {
            BoardFile::open(&path)
                .write(&BoardDocument::default())
                .with_context(|| format!("failed to create {}", path.display()))?;
            println!("Created empty board file: {}", path.display());
        } else {
            bail!("aborted: board file does not exist");
        }
    }

    println!("Using board file: {}", path.display());
    println!(
        "Server will be available at: http://{}:{}",
        cli.host, cli.port
    );

    let repo = YamlTaskRepository::open(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    tokio::runtime::Runtime::new()?.block_on(api::serve(repo, &cli.host, cli.port))
}

/// Ask a yes/no question on the terminal; plain enter means yes.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [Y/n] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_confirmation(&answer))
}

fn parse_confirmation(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn install_tracing(debug: bool) {
    let default = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(default.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["yamban"]);
        assert_eq!(cli.yaml_file, None);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 5000);
        assert!(!cli.debug);
    }

    #[test]
    fn parse_explicit_arguments() {
        let cli = Cli::parse_from([
            "yamban",
            "boards/work.yaml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--debug",
        ]);
        assert_eq!(cli.yaml_file, Some(PathBuf::from("boards/work.yaml")));
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8080);
        assert!(cli.debug);
    }

    #[test]
    fn confirmation_defaults_to_yes() {
        assert!(parse_confirmation("\n"));
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation("Yes\n"));
        assert!(!parse_confirmation("n\n"));
        assert!(!parse_confirmation("no\n"));
        assert!(!parse_confirmation("maybe\n"));
    }
}
