//! Default values for configuration options.

/// File written by `slackhook init` when no output path is given.
pub const CONFIG_FILE: &str = "slackhook.toml";

/// Whether `@names` and `#channels` are linked unless configured otherwise.
pub const LINK_NAMES: bool = false;
