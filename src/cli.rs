use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default webhook request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug, Clone)]
#[command(name = "teams-ctrf")]
#[command(about = "Send CTRF test results to Microsoft Teams")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Teams incoming webhook URL
    #[arg(long, env = "TEAMS_WEBHOOK_URL", global = true, hide_env_values = true, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Webhook request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Print the message JSON to stdout instead of posting it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Send test results summary to Teams
    Results {
        #[command(flatten)]
        report: ReportArg,

        /// Send message only if there are failed tests
        #[arg(long = "on-fail-only", visible_alias = "onFailOnly", short = 'f')]
        on_fail_only: bool,

        /// Send message as adaptive card
        #[arg(long = "use-adaptive-card", visible_alias = "useAdaptiveCard", short = 'a')]
        use_adaptive_card: bool,
    },

    /// Print failed test details
    FailDetails {
        #[command(flatten)]
        report: ReportArg,
    },

    /// Send flaky test results to Teams
    Flaky {
        #[command(flatten)]
        report: ReportArg,
    },

    /// Send AI failure test summary to Teams
    Ai {
        #[command(flatten)]
        report: ReportArg,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReportArg {
    /// Path to the CTRF file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl Command {
    /// Path of the CTRF report this command reads
    pub fn report_path(&self) -> &PathBuf {
        match self {
            Command::Results { report, .. }
            | Command::FailDetails { report }
            | Command::Flaky { report }
            | Command::Ai { report } => &report.path,
        }
    }

    /// Whether the command posts to the webhook at all
    pub fn sends_messages(&self) -> bool {
        !matches!(self, Command::FailDetails { .. })
    }
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("--timeout must be at least 1 second".to_string());
        }

        if let Some(ref url) = self.webhook_url
            && !(url.starts_with("https://") || url.starts_with("http://"))
        {
            return Err(format!("Webhook URL must start with http:// or https://, got '{}'", url));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_results_flags() {
        let args = parse(&["teams-ctrf", "results", "ctrf/report.json", "-f", "-a"]);
        match args.command {
            Command::Results { report, on_fail_only, use_adaptive_card } => {
                assert_eq!(report.path, PathBuf::from("ctrf/report.json"));
                assert!(on_fail_only);
                assert!(use_adaptive_card);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_camel_case_aliases() {
        let args = parse(&["teams-ctrf", "results", "r.json", "--onFailOnly", "--useAdaptiveCard"]);
        assert!(matches!(args.command, Command::Results { on_fail_only: true, use_adaptive_card: true, .. }));
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let args = parse(&["teams-ctrf", "flaky", "r.json", "--dry-run", "--timeout", "5"]);
        assert!(args.dry_run);
        assert_eq!(args.timeout, 5);
        assert_eq!(args.command.report_path(), &PathBuf::from("r.json"));
    }

    #[test]
    fn test_fail_details_does_not_send() {
        let args = parse(&["teams-ctrf", "fail-details", "r.json"]);
        assert!(!args.command.sends_messages());
        assert!(parse(&["teams-ctrf", "ai", "r.json"]).command.sends_messages());
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(CliArgs::try_parse_from(["teams-ctrf", "results"]).is_err());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let mut args = parse(&["teams-ctrf", "results", "r.json"]);
        args.timeout = 0;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_webhook_scheme() {
        let mut args = parse(&["teams-ctrf", "results", "r.json"]);
        args.webhook_url = Some("ftp://example.com/hook".to_string());
        assert!(args.validate().is_err());

        args.webhook_url = Some("https://example.webhook.office.com/webhookb2/abc".to_string());
        assert!(args.validate().is_ok());
    }
}
