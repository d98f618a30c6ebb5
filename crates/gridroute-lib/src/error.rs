use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the gridroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Edge-list source could not be located at the resolved path.
    #[error("edge list not found at {path}")]
    SourceNotFound { path: PathBuf },

    /// Raised when a caller asks for a route from a vertex to itself.
    #[error("start and end are the same vertex: {vertex}")]
    SameStartEnd { vertex: String },

    /// Raised by strict callers when a vertex name is absent from the graph.
    #[error("unknown vertex: {name}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors that are not per-line noise.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
