use anyhow::{ anyhow, Result };
use indicatif::ProgressBar;
use log::{ info, warn };
use std::path::Path;

use buildreg::{ BuildingLedger, ClockConfig, OutputFormat, ReplayScript };

use crate::cli::ui;

/// Apply every step of a script to a fresh ledger and report each outcome
pub fn execute(
    script_path: &Path,
    clock: &ClockConfig,
    output_format: OutputFormat,
    show_state: bool,
    strict: bool
) -> Result<()> {
    let script = ReplayScript::from_file(script_path)?;
    let invocations = script.invocations()?;
    info!("Loaded {} steps from {}", invocations.len(), script_path.display());

    let mut ledger = BuildingLedger::new(clock.build());

    let pb = match output_format {
        OutputFormat::Text => {
            ui::print_header("Replaying invocations");
            ui::create_progress_bar(invocations.len() as u64, "applying")
        }
        OutputFormat::Json => ProgressBar::hidden(),
    };

    let mut declined = 0usize;
    let mut skipped = 0usize;
    for (index, invocation) in invocations.iter().enumerate() {
        let step = index + 1;
        match ledger.dispatch(invocation) {
            Ok(outcome) => {
                if !outcome.is_success() {
                    declined += 1;
                }
                match output_format {
                    OutputFormat::Text => pb.println(ui::format_outcome(step, invocation, &outcome)),
                    OutputFormat::Json => {
                        let line = serde_json::json!({
                            "step": step,
                            "registry": invocation.registry,
                            "operation": invocation.operation,
                            "sender": invocation.sender,
                            "result": outcome,
                        });
                        println!("{}", serde_json::to_string(&line)?);
                    }
                }
            }
            Err(err) => {
                if strict {
                    pb.abandon();
                    return Err(anyhow!("Step {} ({}): {}", step, invocation.operation, err));
                }
                warn!("Skipping step {}: {}", step, err);
                skipped += 1;
                if output_format == OutputFormat::Text {
                    pb.suspend(|| ui::print_recoverable(&err));
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if output_format == OutputFormat::Text {
        ui::print_result("Steps", &invocations.len().to_string());
        ui::print_result("Declined", &declined.to_string());
        if skipped > 0 {
            ui::print_warning(&format!("{} malformed steps were skipped", skipped));
        } else {
            ui::print_success("Replay completed");
        }
    }

    if show_state {
        println!("{}", serde_json::to_string_pretty(&ledger.snapshot())?);
    }

    Ok(())
}
