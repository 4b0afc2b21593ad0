use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cz_undo::cli::{UndoArgs, UndoCommand};
use cz_undo::config;
use cz_undo::git::Git2Repository;
use cz_undo::runner::ShellRunner;
use cz_undo::ui::{self, ConsoleOutput};

#[derive(clap::Parser)]
#[command(
    name = "cz-undo",
    version,
    about = "Reset the latest version bump or the latest commit"
)]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(["bump", "commit"])
))]
struct Args {
    #[arg(short, long, help = "Delete the latest tag and drop the bump commit")]
    bump: bool,

    #[arg(short, long, help = "Reset the latest commit, keeping its changes")]
    commit: bool,

    #[arg(long, help = "Print the undo command without running it")]
    dry_run: bool,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Show debug output")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    debug!(?config, "loaded configuration");

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let mut runner = ShellRunner::new(&config.shell);
    if let Some(workdir) = repo.workdir() {
        runner = runner.current_dir(workdir);
    }

    let undo_args = UndoArgs {
        bump: args.bump,
        commit: args.commit,
        dry_run: args.dry_run,
    };

    let output = ConsoleOutput;
    let undo = UndoCommand::new(&config, &repo, &runner, &output);

    match undo.execute(&undo_args) {
        Ok(outcome) => {
            debug!(?outcome, "undo finished");
            Ok(())
        }
        Err(e) => {
            if !e.is_user_error() {
                debug!(error = ?e, "undo failed");
            }
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
