use crate::orchestrator::PublishReport;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the final summary of a publish run.
pub fn display_report(report: &PublishReport) {
    println!("\n{}", style("Publish summary:").bold());
    println!("  Target:  {}", report.target);
    if report.new_version == report.old_version {
        println!("  Version: {} (not bumped)", report.new_version);
    } else {
        println!(
            "  Version: {} -> {}",
            style(report.old_version).red(),
            style(report.new_version).green()
        );
    }

    for outcome in &report.outcomes {
        let mark = if outcome.success {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("  {} {}", mark, outcome.action);
    }
}
