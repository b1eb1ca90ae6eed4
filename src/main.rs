mod cli;
mod config;
mod ctrf;
mod error;
mod format;
mod reporter;
mod teams;
mod types;
mod ui;

use cli::Command;
use config::DeliveryConfig;
use error::NotifyError;
use log::debug;
use reporter::{Outcome, ResultsOptions};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve where messages go before touching the report
    let config = match config::build_delivery_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args.command, &config) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load the report and execute one subcommand
fn run(command: &Command, config: &DeliveryConfig) -> Result<(), NotifyError> {
    let report = ctrf::parse_ctrf_file(command.report_path())?;
    debug!("running {:?}", command);

    match command {
        Command::Results { on_fail_only, use_adaptive_card, .. } => {
            let options = ResultsOptions { on_fail_only: *on_fail_only, use_adaptive_card: *use_adaptive_card };
            let outcome = reporter::send_test_results(&report, options, config)?;
            report_outcome(&outcome, config);
        }
        Command::FailDetails { .. } => {
            println!("{}", reporter::failed_tests_summary(&report));
        }
        Command::Flaky { .. } => {
            let outcome = reporter::send_flaky_results(&report, config)?;
            report_outcome(&outcome, config);
        }
        Command::Ai { .. } => {
            let sent = reporter::send_ai_summaries(&report, config)?;
            if sent == 0 {
                ui::status(reporter::NO_AI_SKIP);
            } else if !config.is_dry_run() {
                ui::status(&format!("Sent {} AI summary message(s) to Teams", sent));
            }
        }
    }

    Ok(())
}

/// Tell the user what happened; dry-run output stays pure JSON when a message was produced
fn report_outcome(outcome: &Outcome, config: &DeliveryConfig) {
    match outcome {
        Outcome::Skipped(reason) => ui::status(reason),
        Outcome::Sent if !config.is_dry_run() => ui::status("Message sent to Teams"),
        Outcome::Sent => {}
    }
}
