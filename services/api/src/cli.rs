use crate::calculate::{run_calculate, CalculateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use turnover_loss::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Turnover Revenue Loss",
    about = "Estimate the annual rental revenue lost to tenant turnover",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute the revenue loss for one building scenario
    Calculate(CalculateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculate(args) => run_calculate(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_subcommand_parses_churn_basis_flags() {
        let cli = Cli::try_parse_from([
            "turnover-loss-api",
            "calculate",
            "--units",
            "12",
            "--churn-rate",
            "40",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Calculate(args)) => {
                assert_eq!(args.units, Some(12));
                assert_eq!(args.churn_rate, Some(40.0));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn churn_basis_flags_are_mutually_exclusive() {
        let err = Cli::try_parse_from([
            "turnover-loss-api",
            "calculate",
            "--tenancy-months",
            "12",
            "--churn-rate",
            "40",
        ])
        .expect_err("conflicting bases rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["turnover-loss-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
