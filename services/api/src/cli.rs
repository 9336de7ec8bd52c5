use crate::catalog::{
    run_catalog_export, run_catalog_report, run_criteria, CatalogExportArgs, CatalogReportArgs,
    CriteriaArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use datanext::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DataNext Report Rationalization",
    about = "Score legacy reports against weighted criteria and recommend migration paths",
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
    /// Generate and classify a report catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Show the decision criteria and their active weights
    Criteria(CriteriaArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print the rationalization summary for a generated catalog
    Report(CatalogReportArgs),
    /// Write the classified catalog as CSV
    Export(CatalogExportArgs),
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
        Command::Catalog {
            command: CatalogCommand::Report(args),
        } => run_catalog_report(args),
        Command::Catalog {
            command: CatalogCommand::Export(args),
        } => run_catalog_export(args),
        Command::Criteria(args) => run_criteria(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_report_with_weight_overrides() {
        let cli = Cli::try_parse_from([
            "datanext",
            "catalog",
            "report",
            "--seed",
            "7",
            "--weight",
            "2=25",
            "--weight",
            "7=5",
            "--list-reports",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Catalog {
                command: CatalogCommand::Report(args),
            }) => {
                assert_eq!(args.source.seed, Some(7));
                assert_eq!(args.source.weights.len(), 2);
                assert!(args.list_reports);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_weight_override() {
        let result = Cli::try_parse_from(["datanext", "criteria", "--weight", "business=20"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["datanext"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
