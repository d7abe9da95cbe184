//! Command-line surface: `serve` runs the API, `ask` drives the upload
//! view-model against a running server.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::api::{HttpAnalyzeClient, SelectedFile};
use crate::client::session::{SessionState, UploadSession};
use crate::models::upload::Preferences;
use crate::questions::parser::QuestionSet;

#[derive(Debug, Parser)]
#[command(name = "chagok", version, about = "Interview questions from a résumé PDF")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Upload a résumé to a running server and print the questions
    Ask(AskArgs),
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Résumé PDF to upload
    pub file: PathBuf,

    /// Target role, e.g. "Backend Engineer"
    #[arg(long)]
    pub role: Option<String>,

    /// Experience level, e.g. "3 years"
    #[arg(long)]
    pub experience: Option<String>,

    /// Question style: technical, experience or balanced
    #[arg(long)]
    pub style: Option<String>,

    /// Base URL of the API
    #[arg(long, env = "CHAGOK_SERVER", default_value = "http://localhost:8080")]
    pub server: String,

    /// Also write the questions, numbered, to this file
    #[arg(long, value_name = "PATH")]
    pub copy_to: Option<PathBuf>,
}

pub async fn run_ask(args: AskArgs) -> Result<()> {
    let api = HttpAnalyzeClient::new(&args.server)?;
    let mut session = UploadSession::new(api);

    let file = SelectedFile::from_path(&args.file).await?;
    session.select_file(file)?;
    session.preferences = Preferences::from_form(args.role, args.experience, args.style);

    if let Some(file) = session.selected_file() {
        println!("Analyzing {} ...", file.name);
    }
    session.submit().await;

    loop {
        match session.state() {
            SessionState::Succeeded(set) => {
                print_questions(set);
                if let Some(path) = &args.copy_to {
                    let mut out = std::fs::File::create(path)?;
                    session.copy(&mut out)?;
                    if session.is_copied() {
                        println!("Copied to {}", path.display());
                    }
                }
                return Ok(());
            }
            SessionState::Failed(message) => {
                let message = message.clone();
                eprintln!("{message}");
                if !confirm("Retry? [y/N] ").await? {
                    return Err(anyhow!(message));
                }
                session.retry().await;
            }
            SessionState::Idle | SessionState::Submitting => {
                return Err(anyhow!("submission did not complete"));
            }
        }
    }
}

fn print_questions(set: &QuestionSet) {
    println!();
    for (i, question) in set.questions().iter().enumerate() {
        println!("Q{}  {}", i + 1, question);
        println!();
    }
}

async fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{prompt}");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
