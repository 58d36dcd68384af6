use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;

use github_release_resource::config::log_path;
use github_release_resource::logging::{self, LogTarget};
use github_release_resource::release::github::GitHubClient;
use github_release_resource::resource::check::CheckCommand;
use github_release_resource::resource::fetch::InCommand;
use github_release_resource::resource::request::{CheckRequest, InRequest};

#[derive(Parser)]
#[command(name = "github-release-resource")]
#[command(version, about = "Pipeline resource tracking GitHub releases by semantic version")]
struct Cli {
    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a check request from stdin and print new versions
    Check,
    /// Read an in request from stdin, fetch the version into DESTINATION
    In { destination: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = log_path();
    let _guard = logging::init(if cli.log_file {
        LogTarget::File(&log_file)
    } else {
        LogTarget::Stderr
    })?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command))
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check => {
            let request: CheckRequest = read_request()?;
            let client =
                GitHubClient::new(&request.source).context("creating GitHub client")?;
            let versions = CheckCommand::new(Arc::new(client))
                .run(&request)
                .await
                .context("running check")?;
            write_response(&versions)
        }
        Command::In { destination } => {
            let request: InRequest = read_request()?;
            let client =
                GitHubClient::new(&request.source).context("creating GitHub client")?;
            let response = InCommand::new(Arc::new(client))
                .run(&destination, &request)
                .await
                .context("running in")?;
            write_response(&response)
        }
    }
}

fn read_request<T: DeserializeOwned>() -> anyhow::Result<T> {
    serde_json::from_reader(std::io::stdin().lock()).context("reading request from stdin")
}

fn write_response<T: Serialize>(response: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, response).context("writing response to stdout")?;
    writeln!(stdout)?;
    Ok(())
}
