//! Constants used throughout bonjour

/// Directory scanned for application definitions when none is given
pub const DEFAULT_APPLICATIONS_DIR: &str = "applications/mandatory";

/// File name patterns a definition must match to be considered
pub const APPLICATION_GLOBS: &[&str] = &["*.yaml", "*.yml", "*.json"];

/// Definitions smaller than this many bytes are treated as empty and skipped
pub const MIN_DEFINITION_SIZE: u64 = 10;

/// Application kind used when a definition does not name one
pub const DEFAULT_APPLICATION_KIND: &str = "steps";

/// Default sshd configuration target of the setup application
pub const DEFAULT_SSHD_CONFIG: &str = "/sshd_config.txt";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Shell used to run application commands
pub const SHELL: &str = "sh";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
