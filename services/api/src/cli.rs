use crate::demo::{run_demo, run_rank, DemoArgs, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_rank::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Rank",
    about = "Rank candidate pools against job descriptions from the command line or over HTTP",
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
    /// Rank a candidate file (.json or .csv) against a job description
    Rank(RankArgs),
    /// Rank the built-in sample pool and print the explanations
    Demo(DemoArgs),
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
        Command::Rank(args) => run_rank(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["talent-rank-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn rank_accepts_comma_separated_overrides() {
        let cli = Cli::try_parse_from([
            "talent-rank-api",
            "rank",
            "--candidates",
            "pool.csv",
            "--job",
            "React developer",
            "--skills",
            "React,TypeScript",
            "--locations",
            "Pune",
            "--min-experience",
            "2",
            "--top",
            "3",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Rank(args)) => {
                assert_eq!(args.skills, vec!["React", "TypeScript"]);
                assert_eq!(args.locations, vec!["Pune"]);
                assert_eq!(args.min_experience, Some(2));
                assert_eq!(args.top, Some(3));
                assert!(!args.json);
            }
            other => panic!("expected rank command, got {other:?}"),
        }
    }

    #[test]
    fn job_text_and_job_file_are_exclusive() {
        let parsed = Cli::try_parse_from([
            "talent-rank-api",
            "rank",
            "--candidates",
            "pool.csv",
            "--job",
            "React developer",
            "--job-file",
            "job.txt",
        ]);
        assert!(parsed.is_err());
    }
}
