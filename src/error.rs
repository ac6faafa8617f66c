use thiserror::Error;

/// Failures raised by the segment chain.
///
/// All of these are caller misuse (bad request data), not transient faults:
/// none are worth retrying, and the service layer maps each variant to a
/// user-facing response code unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("line has no sections")]
    EmptyChain,

    #[error("no path on this line covers both {from} and {to}")]
    SectionNotFound { from: String, to: String },

    #[error("section {up} -> {down} is already registered")]
    DuplicateSection { up: String, down: String },

    #[error("both {up} and {down} already belong to the line")]
    StationsAlreadyExist { up: String, down: String },

    #[error("neither {up} nor {down} belongs to the line")]
    StationsNotFound { up: String, down: String },

    #[error("section distance must stay positive (got {distance})")]
    InvalidDistance { distance: u32 },

    #[error("cannot remove {station} from this line")]
    RemovalNotAllowed { station: String },
}
