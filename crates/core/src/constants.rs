//! Shared constants for carsales.
//!
//! Centralizes names and limits used by more than one crate.

/// Environment variable holding the database host.
pub const ENV_DB_HOST: &str = "DB_HOST";

/// Environment variable holding the database port.
pub const ENV_DB_PORT: &str = "DB_PORT";

/// Environment variable holding the database name.
pub const ENV_DB_NAME: &str = "DB_NAME";

/// Environment variable holding the database user.
pub const ENV_DB_USER: &str = "DB_USER";

/// Environment variable holding the database password.
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// Required connection variables, in the order they are returned.
pub const REQUIRED_DB_VARS: [&str; 5] =
    [ENV_DB_HOST, ENV_DB_PORT, ENV_DB_NAME, ENV_DB_USER, ENV_DB_PASSWORD];

/// Environment variable selecting the default log level.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable selecting the log format (`pretty` or `json`).
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// URL scheme used when composing the connection string.
pub const DB_URL_SCHEME: &str = "postgresql";

/// PostgreSQL connection pool: maximum connections.
///
/// Every command runs its statements one after another, so a small pool suffices.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 2;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Maximum bind parameters in a single PostgreSQL statement.
pub const PG_MAX_BIND_PARAMS: usize = 65_535;

/// Default CSV file for vehicle records.
pub const DEFAULT_CAR_CSV: &str = "car_data.csv";

/// Default CSV file for market observations.
pub const DEFAULT_CONSUMER_CSV: &str = "consumer_data.csv";

/// Default output path for the rendered sales report.
pub const DEFAULT_REPORT_PATH: &str = "report.svg";
