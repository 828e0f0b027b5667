use anyhow::Result;
use clap::Parser;

use publish_tool::config;
use publish_tool::error::PublishError;
use publish_tool::executor::CommandExecutor;
use publish_tool::orchestrator;
use publish_tool::store;
use publish_tool::target::{self, PublishTarget};
use publish_tool::ui;
use publish_tool::version::{bump_version, BumpKind};

#[derive(clap::Parser)]
#[command(
    name = "publish-tool",
    about = "Bump module versions and publish artifacts to the selected target"
)]
struct Args {
    #[arg(help = "Publish target: local | test | github | all")]
    target: Option<String>,

    #[arg(help = "Version bump kind: major | minor | patch (defaults to patch)")]
    bump_kind: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

fn print_usage() {
    eprintln!("Usage: publish-tool <target> [bump_kind]");
    eprintln!("  target:    local | test | github | all");
    eprintln!("  bump_kind: major | minor | patch (defaults to patch)");
}

fn main() -> Result<()> {
    // Every invalid-input path must exit with status 1, so clap errors are
    // intercepted instead of letting clap exit with its default status 2.
    // Help and version requests keep clap's normal rendering.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            print_usage();
            std::process::exit(1);
        }
    };

    let target_name = match args.target {
        Some(name) => name,
        None => {
            let err = PublishError::invalid_argument("missing publish target");
            ui::display_error(&err.to_string());
            print_usage();
            std::process::exit(1);
        }
    };

    let target = match PublishTarget::parse(&target_name) {
        Ok(target) => target,
        Err(e) => {
            ui::display_error(&e.to_string());
            print_usage();
            std::process::exit(1);
        }
    };

    let kind = args
        .bump_kind
        .as_deref()
        .map(BumpKind::parse)
        .unwrap_or_default();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.dry_run {
        return dry_run(&config, target, kind);
    }

    let executor = CommandExecutor::new(config.clone());
    match orchestrator::run(&config, target, kind, &executor) {
        Ok(report) => {
            ui::display_report(&report);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Show what a run would do without writing the versions file or
/// executing any publish action.
fn dry_run(config: &config::Config, target: PublishTarget, kind: BumpKind) -> Result<()> {
    let plan = target::resolve(target);

    let current = match store::load(&config.versions_file, &config.module) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_status("Dry run: no files written, no actions executed");
    if plan.should_bump {
        let bumped = bump_version(current, kind);
        ui::display_success(&format!(
            "Would bump {} version: {} -> {}",
            config.module, current, bumped
        ));
    } else {
        ui::display_success(&format!(
            "Would publish {} at declared version {}",
            config.module, current
        ));
    }

    for action in &plan.actions {
        ui::display_success(&format!("Would run: {}", action));
    }

    Ok(())
}
