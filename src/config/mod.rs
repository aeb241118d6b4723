//! Configuration module.

pub mod keybindings;
pub mod list;
pub mod loader;

pub use keybindings::KeyMap;
pub use list::{ListConfig, DEFAULT_SCROLL_STEP};
pub use loader::{
    apply_cli_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, CliOverrides, ConfigError, ConfigFile,
    ResolvedConfig, CONFIG_ENV_VAR,
};
