/// Configuration file evaluated when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "MODS";

/// File identifier the bootstrap prelude is evaluated under.
pub const PRELUDE_FILE_ID: &str = "<prelude>";
