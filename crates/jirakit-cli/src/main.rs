// Rust guideline compliant 2026-10-19

//! jirakit CLI Application
//!
//! Command-line interface for drawing JIRA dependency diagrams and release
//! tables.

use anyhow::Result;
use clap::Parser;
use jirakit_cli::commands::{graph::GraphArgs, ldm::LdmArgs, table::TableArgs};
use jirakit_cli::{commands, init_tracing, open_source, print_error, should_use_color};
use jirakit_cli::GraphvizRenderer;
use jirakit_core::config::CONFIG_FILE;
use jirakit_core::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "jirakit",
    version,
    about = "Dependency diagrams and release tables from JIRA",
    long_about = "jirakit queries JIRA for milestones and epics and renders their blocking relationships as GraphViz diagrams, or lists them as CSV, text or LDM-240 style tables.",
    after_help = "Examples:\n  jirakit graph 02C.04 --format svg --output alerts.svg\n  jirakit graph --query 'project = DLP AND issuetype = Epic' --link-type Blocks,Relates\n  jirakit table 02C.04 --csv --title --url-base https://jira.lsstcorp.org/browse/\n  jirakit ldm --title\n  jirakit --issues-file search.json graph 02C\n"
)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Read issues from a saved JIRA search response instead of the server
    #[arg(long, global = true)]
    issues_file: Option<PathBuf>,

    /// JIRA server URL (overrides the configuration)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Draw the dependency diagram of a WBS element
    Graph {
        /// WBS element (prefix match)
        #[arg(required_unless_present = "query")]
        wbs: Option<String>,

        /// Raw JQL query instead of a WBS element
        #[arg(long)]
        query: Option<String>,

        /// Output format: dot, eps, fig, pdf, svg, png or ps
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Link types drawn as edges
        #[arg(long, value_delimiter = ',')]
        link_type: Vec<String>,

        /// Diagram title
        #[arg(long)]
        title: Option<String>,

        /// Do not cluster issues by release cycle
        #[arg(long)]
        no_ranks: bool,

        /// GraphViz layout program
        #[arg(long, default_value = "dot")]
        layout: String,
    },

    /// List the milestones of a WBS element
    Table {
        /// WBS element (prefix match)
        wbs: String,

        /// Emit CSV
        #[arg(long)]
        csv: bool,

        /// Hide the issue key column
        #[arg(long)]
        no_key: bool,

        /// Show the issue title column
        #[arg(long)]
        title: bool,

        /// Link issue keys to this URL prefix
        #[arg(long)]
        url_base: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the LDM-240 release table of all milestones
    Ldm {
        /// Show the issue key in cells (default)
        #[arg(short, long)]
        key: bool,

        /// Show the issue title in cells
        #[arg(short, long)]
        title: bool,

        /// Emit CSV
        #[arg(long)]
        csv: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err), use_color);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(&cli.config)?;
    if let Some(server) = cli.server {
        config.server = server;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.to_lowercase();
    }
    config.validate()?;

    init_tracing(&config.log_level, cli.log_json)?;

    let source = open_source(&config, cli.issues_file.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Graph {
            wbs,
            query,
            format,
            output,
            link_type,
            title,
            no_ranks,
            layout,
        } => {
            let args = GraphArgs {
                wbs,
                query,
                format,
                output,
                link_types: link_type,
                title,
                no_ranks,
            };
            let renderer = GraphvizRenderer::new(layout);
            commands::graph::execute(source.as_ref(), &config, &args, &renderer, &mut out)?;
        }
        Commands::Table {
            wbs,
            csv,
            no_key,
            title,
            url_base,
            output,
        } => {
            let args = TableArgs {
                wbs,
                csv,
                no_key,
                title,
                url_base,
                output,
            };
            commands::table::execute(source.as_ref(), &config, &args, &mut out)?;
        }
        Commands::Ldm {
            key,
            title,
            csv,
            output,
        } => {
            let args = LdmArgs {
                key,
                title,
                csv,
                output,
            };
            commands::ldm::execute(source.as_ref(), &config, &args, &mut out)?;
        }
    }

    Ok(())
}
