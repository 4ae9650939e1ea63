use bundle_diff::cmd;
use bundle_diff::locator::{BundleLocator, Env, Mode};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

/// Bundle analysis snapshot comparator
///
/// bundle-diff compares two bundle-analyzer snapshots (JSON arrays or saved
/// HTML reports) and reports per-module size deltas, totals, and the modules
/// added or removed between them.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two bundle snapshots
    Compare {
        /// Old snapshot (JSON array or saved HTML report)
        old: String,

        /// New snapshot (JSON array or saved HTML report)
        new: String,

        /// Output the full report as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,

        /// Limit the number of changed modules displayed
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Derive a report URL from a bundle descriptor
    #[command(disable_version_flag = true)]
    Url {
        /// VTEX workspace name
        #[arg(long)]
        workspace: String,

        /// VTEX account name
        #[arg(long)]
        account: String,

        /// App name (vendor.app)
        #[arg(long)]
        app: String,

        /// App version
        #[arg(long)]
        version: String,

        /// Report flavor for published apps
        #[arg(long, value_enum, default_value = "dev")]
        env: Env,

        /// Linked (dev) vs published (prod) serving route
        #[arg(long, value_enum, default_value = "dev")]
        mode: Mode,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Compare {
            old,
            new,
            json,
            limit,
        }) => cmd::cmd_compare(old, new, *json, *limit),
        Some(Commands::Url {
            workspace,
            account,
            app,
            version,
            env,
            mode,
        }) => cmd::cmd_url(&BundleLocator {
            workspace: workspace.clone(),
            account: account.clone(),
            app: app.clone(),
            version: version.clone(),
            env: *env,
            mode: *mode,
        }),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bundle-diff v{}", env!("CARGO_PKG_VERSION"));
            println!("Bundle analysis snapshot comparator\n");
            println!("Usage: bundle-diff <COMMAND>\n");
            println!("Commands:");
            println!("  compare      Compare two bundle snapshots");
            println!("  url          Derive a report URL from a bundle descriptor");
            println!("  completions  Generate shell completions");
            println!("\nRun 'bundle-diff <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use bundle_diff::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
