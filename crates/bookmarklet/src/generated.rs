//! The derived script for the current draft and its pending minification.
//!
//! Minification runs asynchronously, so several runs can be in flight while
//! the user types. Each run gets a [`Ticket`]; only the most recently issued
//! ticket may apply its result. Older completions are dropped, whatever
//! order they arrive in.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::minify::MinifyError;

pub const JAVASCRIPT_SCHEME: &str = "javascript:";

/// Build the link target for a minified script.
///
/// Browsers drop tab, LF and CR from a URL and percent-decode the payload
/// before running it, so those characters and `%` are percent-encoded here.
/// Without a script the bare scheme is returned: the link exists but does
/// nothing when clicked.
pub fn to_href(minified: Option<&str>) -> String {
    let mut href = String::from(JAVASCRIPT_SCHEME);
    let Some(code) = minified else {
        return href;
    };

    href.reserve(code.len());
    for ch in code.chars() {
        match ch {
            '%' => href.push_str("%25"),
            '\n' => href.push_str("%0A"),
            '\r' => href.push_str("%0D"),
            '\t' => href.push_str("%09"),
            c => href.push(c),
        }
    }
    href
}

/// Identifies one minification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

/// What happened to a finished minification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result stored; the href now points at it.
    Applied,
    /// A newer run was started since; result discarded.
    Stale,
    /// The current run failed; the href stays inert.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedScript {
    source: String,
    minified: Option<String>,
    issued: u64,
}

impl GeneratedScript {
    /// Source text of the latest run.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Minified text for [`Self::source`], once its run has finished.
    pub fn minified(&self) -> Option<&str> {
        self.minified.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.minified.is_none()
    }

    pub fn href(&self) -> String {
        to_href(self.minified())
    }

    /// Start a run for `source`. Supersedes every earlier ticket and clears
    /// the previous result so the href never describes an older draft.
    pub fn begin(&mut self, source: String) -> Ticket {
        self.issued += 1;
        self.source = source;
        self.minified = None;
        Ticket(self.issued)
    }

    /// Record the outcome of the run holding `ticket`.
    pub fn finish(&mut self, ticket: Ticket, result: Result<String, MinifyError>) -> Completion {
        if ticket.0 != self.issued {
            debug!(ticket = ticket.0, latest = self.issued, "discarding stale minification");
            return Completion::Stale;
        }
        match result {
            Ok(code) => {
                self.minified = Some(code);
                Completion::Applied
            }
            Err(e) => {
                warn!(ticket = ticket.0, "minification failed: {}", e);
                self.minified = None;
                Completion::Failed
            }
        }
    }
}
