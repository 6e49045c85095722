use std::sync::OnceLock;

use shared_types::{AppConfig, ShellConfig};

/// Shell defaults baked in at build time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

static SHELL_CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Parse the bundled config.toml. Falls back to built-in defaults when it
/// does not parse.
fn load(source: &str) -> ShellConfig {
    match AppConfig::from_toml_str(source) {
        Ok(config) => {
            tracing::info!(
                language = config.shell.default_language.as_str(),
                dark = config.shell.default_dark,
                breakpoint_px = config.shell.breakpoint_px,
                persist = config.shell.persist_preferences,
                "shell config loaded"
            );
            config.shell
        }
        Err(err) => {
            tracing::warn!(error = %err, "config.toml rejected, using defaults");
            ShellConfig::default()
        }
    }
}

/// Get the global shell config, loading it on first use.
pub fn shell_config() -> &'static ShellConfig {
    SHELL_CONFIG.get_or_init(|| load(CONFIG_TOML))
}
