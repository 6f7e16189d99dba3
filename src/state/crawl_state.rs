//! Walk state definitions
//!
//! This module defines every state a walk can be in, from the first request to
//! the verdict.

use crate::FetchError;
use std::fmt;

/// Represents the current state of a walk
#[derive(Debug)]
pub enum CrawlState {
    // ===== Active State =====
    /// The walk is still following links
    Running,

    // ===== Terminal Success State =====
    /// The target heading was reached; `iterations` is the 0-based index of the
    /// iteration that fetched it
    FoundPhilosophy { iterations: u32 },

    // ===== Terminal Diagnostic States =====
    /// The current page had no qualifying link that was not already visited
    DeadEnd { url: String },

    /// The page budget ran out
    Exhausted { pages: u32 },

    // ===== Terminal Error State =====
    /// A page could not be fetched or lacked the expected article structure
    Failed { url: String, error: FetchError },
}

impl CrawlState {
    /// Returns true if this is a terminal state (the walk is over)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Returns true if the walk reached its target
    pub fn is_success(&self) -> bool {
        matches!(self, Self::FoundPhilosophy { .. })
    }

    /// Returns true if the walk stopped because of an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Number of pages whose words went into the statistics when the walk
    /// ended here, or `None` for outcomes that report no statistics
    pub fn pages_for_statistics(&self) -> Option<u32> {
        match self {
            Self::FoundPhilosophy { iterations } => Some(iterations + 1),
            Self::Exhausted { pages } => Some(*pages),
            _ => None,
        }
    }

    /// Short lowercase label, used in logs and the markdown summary
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::FoundPhilosophy { .. } => "found_philosophy",
            Self::DeadEnd { .. } => "dead_end",
            Self::Exhausted { .. } => "exhausted",
            Self::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::FoundPhilosophy { iterations } => {
                write!(f, "reached the target in {} iterations", iterations)
            }
            Self::DeadEnd { url } => write!(f, "dead end at {}", url),
            Self::Exhausted { pages } => write!(f, "budget of {} pages exhausted", pages),
            Self::Failed { url, error } => write!(f, "failed at {}: {}", url, error),
        }
    }
}
