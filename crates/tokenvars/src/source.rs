// ABOUTME: Asynchronous reading of the token document from a file or standard input
// ABOUTME: The only I/O boundary before the synchronous conversion pipeline runs

use anyhow::{Context, Result};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::AsyncReadExt;
use tokenvars_logging::debug;

/// Where the token document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        Ok(if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// Read the whole document as UTF-8 text
    pub async fn read_to_string(&self) -> Result<String> {
        let text = match self {
            Source::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read token document from stdin")?;
                text
            }
            Source::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read token document {}", path.display()))?,
        };

        debug!(source = %self, bytes = text.len(), "Read token document");
        Ok(text)
    }
}
