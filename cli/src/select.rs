use anyhow::Context;
use tagpick_markers::run::RunReport;
use tagpick_markers::types::RunStamp;

use crate::Cli;
use crate::Command;

/// Execute the command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let layout = cli.layout(&cwd);
    tracing::debug!("layout: {layout:?}");

    match cli.cmd {
        Some(Command::Stats) => {
            let stats = tagpick_markers::stats::stats(&layout)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        None => {
            let stamp = RunStamp::now();
            let report = tagpick_markers::run::run(&layout, &cli.counts(), &stamp)
                .context("marker selection failed")?;
            print_report(&report);
        }
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    for (category, names) in report.selection.iter() {
        for name in names {
            println!("{category}: {name}");
        }
    }
    for shortfall in &report.selection.shortfalls {
        println!("warning: {shortfall}");
    }
    println!("Recorded {}", report.record_path.display());
    println!("Archived {}", report.archive_path.display());
}
