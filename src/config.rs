/// Rows of the field shown when the front-end starts.
pub const DEFAULT_ROWS: usize = 10;
/// Columns of the field shown when the front-end starts.
pub const DEFAULT_COLUMNS: usize = 10;

/// Smallest dimension a random field may get (inclusive).
pub const RANDOM_DIMENSION_MIN: usize = 3;
/// Upper limit for random field dimensions (exclusive).
pub const RANDOM_DIMENSION_MAX: usize = 10;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
