//! Display sinks: where rendered header markup ends up
//!
//! A notebook host renders rich output from whatever a cell writes in its
//! protocol. The evcxr kernel reads `EVCXR_BEGIN_CONTENT` blocks from stdout,
//! other front-ends take a Jupyter MIME bundle. `Capture` keeps the markup.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to write markup: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode display bundle: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Anything that can show a markup fragment
pub trait Display {
    fn display(&mut self, markup: &str) -> Result<(), DisplayError>;
}

/// Output protocol selectable from the CLI or config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// evcxr kernel rich-display block
    #[default]
    Evcxr,
    /// Raw HTML fragment
    Html,
    /// Jupyter display-data bundle, one JSON object per line
    Json,
}

impl OutputFormat {
    /// Build a sink for this format writing to stdout
    pub fn stdout_sink(self) -> Box<dyn Display> {
        match self {
            OutputFormat::Evcxr => Box::new(EvcxrSink::new(io::stdout())),
            OutputFormat::Html => Box::new(HtmlSink::new(io::stdout())),
            OutputFormat::Json => Box::new(BundleSink::new(io::stdout())),
        }
    }
}

/// evcxr rich output: the kernel swaps the delimited block for rendered HTML
pub struct EvcxrSink<W: Write> {
    out: W,
}

impl<W: Write> EvcxrSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for EvcxrSink<W> {
    fn display(&mut self, markup: &str) -> Result<(), DisplayError> {
        writeln!(self.out, "EVCXR_BEGIN_CONTENT text/html")?;
        writeln!(self.out, "{}", markup)?;
        writeln!(self.out, "EVCXR_END_CONTENT")?;
        self.out.flush()?;
        tracing::debug!(bytes = markup.len(), "Displayed header via evcxr");
        Ok(())
    }
}

/// Plain HTML, e.g. for piping into a file or another tool
pub struct HtmlSink<W: Write> {
    out: W,
}

impl<W: Write> HtmlSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for HtmlSink<W> {
    fn display(&mut self, markup: &str) -> Result<(), DisplayError> {
        writeln!(self.out, "{}", markup)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Jupyter `display_data` content: a MIME bundle with an HTML and a plain-text view
pub struct BundleSink<W: Write> {
    out: W,
}

impl<W: Write> BundleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for BundleSink<W> {
    fn display(&mut self, markup: &str) -> Result<(), DisplayError> {
        let bundle = serde_json::json!({
            "data": {
                "text/html": markup,
                "text/plain": "<HeaderCard>",
            },
            "metadata": {},
        });

        writeln!(self.out, "{}", serde_json::to_string(&bundle)?)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every fragment it is shown
#[derive(Debug, Default)]
pub struct Capture {
    pub fragments: Vec<String>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently displayed fragment
    pub fn last(&self) -> Option<&str> {
        self.fragments.last().map(String::as_str)
    }
}

impl Display for Capture {
    fn display(&mut self, markup: &str) -> Result<(), DisplayError> {
        self.fragments.push(markup.to_string());
        Ok(())
    }
}
