//! Error types for the expense ledger.

use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while driving the ledger.
///
/// Rejected input and calculating on an empty ledger are not errors; the
/// controller reports those through its return values and the view.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to read the script or write a view
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Script row that does not form a valid command
    #[error("Invalid command at row {row}: {message}")]
    InvalidCommand { row: usize, message: String },

    /// Delete referenced a position outside the ledger
    #[error("No expense at index {index} (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Missing script argument
    #[error("Missing script argument. Usage: expense-ledger <script.csv | -> [--csv]")]
    MissingArgument,

    /// Unrecognised command-line flag
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}
