use thiserror::Error;

/// Custom error type for the arenagrad engine.
///
/// Variants fall in two groups. The first group describes structural bugs in a
/// fixed architecture (shape mismatches, division by zero, log domain, bad
/// target index, stale handles). Those are never returned: they are raised via
/// [`fatal`], which logs and panics. The second group (I/O, file format,
/// external renderer) is returned to the caller as an ordinary `Err`.
#[derive(Error, Debug)]
pub enum ArenagradError {
    #[error("Dimension mismatch in {operation}: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Division by zero: denominator data is 0")]
    DivisionByZero,

    #[error("Logarithm of non-positive value {value}")]
    LogDomain { value: f64 },

    #[error("Target index {index} out of range for {classes} classes")]
    TargetOutOfRange { index: usize, classes: usize },

    #[error("Stale value handle: {space:?} slot {index} from generation {handle_generation}, arena is at generation {arena_generation}")]
    StaleHandle {
        space: crate::value::Space,
        index: usize,
        handle_generation: u32,
        arena_generation: u32,
    },

    #[error("Value handle from the {actual:?} arena #{actual_arena} used with the {expected:?} arena #{expected_arena}")]
    ForeignHandle {
        expected: crate::value::Space,
        expected_arena: u32,
        actual: crate::value::Space,
        actual_arena: u32,
    },

    #[error("{actual:?} arena passed where a {expected:?} arena is required")]
    WrongSpace {
        expected: crate::value::Space,
        actual: crate::value::Space,
    },

    #[error("Arena used after release")]
    ArenaReleased,

    #[error("Invalid network configuration: {0}")]
    InvalidConfig(String),

    // --- Recoverable ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input while reading {context}")]
    Truncated { context: String },

    #[error("Invalid magic number in {path}: expected {expected}, got {actual}")]
    InvalidMagic {
        path: String,
        expected: u32,
        actual: u32,
    },

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Unknown activation code {0}")]
    UnknownActivation(u32),

    #[error("Corrupt model file: {0}")]
    CorruptModel(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("External renderer failed: {0}")]
    RenderFailed(String),
}

impl ArenagradError {
    /// Maps an `UnexpectedEof` I/O error onto [`ArenagradError::Truncated`],
    /// keeping every other I/O error as is.
    pub fn from_read(err: std::io::Error, context: &str) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            ArenagradError::Truncated {
                context: context.to_string(),
            }
        } else {
            ArenagradError::Io(err)
        }
    }
}

/// Raises a fatal precondition violation.
///
/// These conditions indicate a programming error in a fixed architecture, so
/// they terminate the current thread instead of surfacing as a `Result`.
#[track_caller]
pub fn fatal(err: ArenagradError) -> ! {
    log::error!("fatal precondition: {}", err);
    panic!("{}", err)
}
