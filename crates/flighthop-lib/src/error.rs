use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flighthop library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Flight data could not be located at the resolved path.
    #[error("flight data not found at {path}")]
    DataNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for flight data")]
    ProjectDirsUnavailable,

    /// Raised when a CSV file lacks one or more required columns.
    #[error("{file} missing required columns: {columns}")]
    MissingColumns { file: String, columns: String },

    /// Raised when a country name could not be found in the network.
    #[error("unknown country: {name}{}", format_suggestions(.suggestions))]
    UnknownCountry {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two countries.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when an exact-length request can never be satisfied because the
    /// shortest route between the endpoints already exceeds the target.
    #[error("no route of exactly {length} flights can exist between {start} and {goal}: the shortest route takes {shortest}")]
    ExactLengthInfeasible {
        start: String,
        goal: String,
        length: usize,
        shortest: usize,
    },

    /// Raised when the exact-length search exhausted every candidate walk.
    #[error("no route of exactly {length} flights found between {start} and {goal}")]
    ExactLengthNotFound {
        start: String,
        goal: String,
        length: usize,
    },

    /// Raised when an exact-length request is malformed before any search runs.
    #[error("invalid exact-length request: {message}")]
    InvalidPathRequest { message: String },

    /// Raised when no ordered country pair satisfies the minimum distance.
    #[error("no country pair is at least {min_length} flights apart")]
    NoQualifyingPair { min_length: usize },

    /// Raised when a computed route plan lacks any countries.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
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
