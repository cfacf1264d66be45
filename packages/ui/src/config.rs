//! Menu configuration loading for all platforms.
//!
//! - **Desktop / Mobile** (native): `<config_dir>/niceiconmenu/menu.toml`
//! - **Web**: built-in defaults
//!
//! A missing file means defaults. A file that fails to parse or validate is
//! logged and also falls back to defaults.

use motion::MenuConfig;

pub fn load_menu_config() -> MenuConfig {
    #[cfg(target_arch = "wasm32")]
    {
        MenuConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("niceiconmenu")
            .join(MenuConfig::filename());

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return MenuConfig::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}", path.display());
                return MenuConfig::default();
            }
        };

        match MenuConfig::from_toml(&text) {
            Ok(config) => {
                tracing::info!("Loaded menu config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {e}", path.display());
                MenuConfig::default()
            }
        }
    }
}
