//! hostaudit entry point
//!
//! Parses flags, loads the package-manager profile and dispatches the
//! requested actions.

use clap::{CommandFactory, Parser};
use hostaudit::checks::{self, AuditContext, Platform};
use hostaudit::cli::Cli;
use hostaudit::driver::Driver;
use hostaudit::error::Result;
use hostaudit::interactive::TerminalPrompt;
use hostaudit::observability::init_observability;
use hostaudit_common::{PackageManagerConfig, Privilege, SearchPath, SystemRunner, load_package_profile};
use std::io;
use tracing::debug;

macro_rules! bootstrap_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let actions = cli.actions();

    if actions.is_empty() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let _observability_guard = init_observability(&cli.log_level, cli.log_dir.as_deref())?;

    let profile = PackageManagerConfig::locate(&cli.config)
        .and_then(|path| load_package_profile(&path))
        .inspect_err(|e| {
            bootstrap_error!("❌ Failed to load package manager profile: {}", e);
            bootstrap_error!(
                "Create {} or specify a path with: hostaudit --config <path>",
                cli.config.display()
            );
        })?;

    let runner = SystemRunner;
    let lookup = SearchPath::from_env();
    let ctx = AuditContext::new(&runner, &lookup, Privilege::detect(), Platform::current());
    debug!("Audit context: privilege={:?}, platform={:?}", ctx.privilege, ctx.platform);

    let menu = checks::menu();
    let driver = Driver {
        profile: &profile,
        ctx: &ctx,
        menu: &menu,
    };

    driver.dispatch(&actions, &mut TerminalPrompt::default(), &mut io::stdout())
}
