use thiserror::Error;

macro_rules! internal_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Internal {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Internal {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type covering every failure the engine can hit while
/// checking a construction site.
///
/// None of these variants escape to the host: the session boundary converts
/// them into an internal-error diagnostic at the offending site and keeps
/// processing the remaining sites. The enum exists so that boundary is an
/// explicit, testable result type rather than unstructured propagation.
#[derive(Error, Debug)]
pub enum Error {
    /// The verification pipeline hit a condition it has no handling for,
    /// such as an unanticipated symbol-model shape.
    ///
    /// The engine source location where the condition was detected is
    /// captured so the resulting diagnostic message can be traced back to
    /// the code that raised it.
    #[error("Internal - {file}:{line}: {message}")]
    Internal {
        /// Description of the unexpected condition
        message: String,
        /// The source file in which this error was raised
        file: &'static str,
        /// The source line in which this error was raised
        line: u32,
    },

    /// A host symbol-model query failed.
    ///
    /// Host adapters raise this when their underlying compiler machinery
    /// cannot answer a capability query, for example a type identity that no
    /// longer resolves. The adapter's message text is carried through to the
    /// internal-error diagnostic unchanged.
    #[error("{0}")]
    Model(String),
}
