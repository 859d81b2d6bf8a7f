// ABOUTME: Library side of the tokenvars command line tool
// ABOUTME: Wires argument parsing, configuration, input reading and report rendering together

pub mod cli;
pub mod config;
pub mod report;
pub mod source;

use anyhow::{Result, anyhow};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokenvars_core::ConvertError;
use tokenvars_logging::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::config::AppConfig;
use crate::report::{Report, render_issue_tree, render_issues_json};

/// Result of one successful invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Variable blocks were written
    Converted,
    /// The document failed validation and its issues were written
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Converted => 0,
            Outcome::Rejected => 2,
        }
    }
}

/// Read, convert and render according to `cli`, writing the report to `out`.
pub async fn run<W>(cli: &Cli, out: &mut W) -> Result<Outcome>
where
    W: AsyncWrite + Unpin,
{
    let config = AppConfig::load(cli.config.as_deref())?;
    let text = cli.input.read_to_string().await?;

    let (rendered, outcome) = match tokenvars_core::convert(&text) {
        Ok(tokens) => {
            let report = Report::new(&config.output, cli.section, cli.wrap);
            let rendered = match cli.format {
                OutputFormat::Text => report.render_text(&tokens),
                OutputFormat::Json => report.render_json(&tokens)?,
            };
            info!(source = %cli.input, section = ?cli.section, wrapped = report.wraps(), "Rendered variables");
            (rendered, Outcome::Converted)
        }
        Err(ConvertError::Validation(error)) => {
            info!(source = %cli.input, issues = error.issues().len(), "Token document rejected");
            let rendered = match cli.format {
                OutputFormat::Text => render_issue_tree(&error),
                OutputFormat::Json => render_issues_json(error.issues())?,
            };
            (rendered, Outcome::Rejected)
        }
        Err(ConvertError::MalformedJson(source)) => {
            debug!(error = %source, "JSON parse error");
            return Err(anyhow!("Failed to parse JSON file"));
        }
        Err(err) => return Err(err.into()),
    };

    out.write_all(rendered.as_bytes()).await?;
    out.flush().await?;
    Ok(outcome)
}
