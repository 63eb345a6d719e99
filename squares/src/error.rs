use core::fmt;

use crate::PendingId;

/// Errors that indicate a broken contract between the grid and its host.
///
/// Everything else (empty batches, clamped sizes, stale completions) is absorbed as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The item source answered a request with a pending handle that was not issued for it.
    ContractViolation {
        index: usize,
        expected: PendingId,
        returned: PendingId,
    },
    /// Automatic sizing was needed but no viewport measurement is available.
    MissingViewport,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContractViolation {
                index,
                expected,
                returned,
            } => write!(
                f,
                "item source returned pending handle {} for index {index} (expected {})",
                returned.index(),
                expected.index()
            ),
            Self::MissingViewport => f.write_str("no viewport available to measure"),
        }
    }
}

impl core::error::Error for GridError {}
