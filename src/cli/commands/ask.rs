//! Implementation of the `docqa ask` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::load_service;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Answer, Config, PreparedPrompt, Source};
use crate::services::QaService;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Text document to answer from (pages separated by form feeds)
    pub document: PathBuf,

    /// Question to answer; read line by line from stdin when omitted
    pub question: Option<String>,

    /// Number of fragments to retrieve (defaults to retrieval.top_k)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Print the assembled prompt instead of calling the model
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AskOutput {
    Answer(Answer),
    DryRun(PreparedPrompt),
}

impl CommandOutput for AskOutput {
    fn to_human(&self) -> String {
        match self {
            Self::Answer(answer) => {
                let mut lines = vec![answer.text.trim().to_string()];
                if !answer.sources.is_empty() {
                    lines.push(String::new());
                    lines.push(console::style("Sources:").bold().to_string());
                    lines.extend(answer.sources.iter().map(source_line));
                }
                lines.join("\n")
            }
            Self::DryRun(prepared) => prepared.prompt.clone(),
        }
    }
}

fn source_line(source: &Source) -> String {
    format!(
        "  [{}] page {} (distance {:.4})",
        source.id, source.page, source.distance
    )
}

pub async fn execute(args: AskArgs, config: &Config, json_mode: bool) -> Result<()> {
    let (service, summary) = load_service(config, &args.document, json_mode).await?;
    tracing::info!(
        fragments = summary.fragments,
        dimension = summary.dimension,
        "ready for questions"
    );

    if let Some(question) = args.question.as_deref() {
        let result = ask_one(&service, question, args.top_k, args.dry_run).await?;
        output(&result, json_mode);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if !json_mode {
            eprint!("{} ", console::style("?").cyan().bold());
            std::io::stderr().flush().ok();
        }

        let Some(line) = lines.next_line().await.context("Failed to read question")? else {
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        let result = ask_one(&service, question, args.top_k, args.dry_run).await?;
        output(&result, json_mode);
    }

    Ok(())
}

async fn ask_one(
    service: &QaService,
    question: &str,
    top_k: Option<usize>,
    dry_run: bool,
) -> Result<AskOutput> {
    if dry_run {
        let prepared = service
            .prepare(question, top_k)
            .await
            .context("Failed to prepare prompt")?;
        return Ok(AskOutput::DryRun(prepared));
    }

    let answer = service
        .answer(question, top_k)
        .await
        .context("Failed to answer question")?;
    Ok(AskOutput::Answer(answer))
}
