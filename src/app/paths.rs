// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Both persisted files live under per-purpose directories resolved in
//! priority order:
//!
//! 1. Explicit override passed by the caller (tests)
//! 2. CLI flags (`--data-dir`, `--config-dir`), recorded via
//!    [`init_cli_overrides`] at startup
//! 3. Environment variables (`TAGVIEW_DATA_DIR`, `TAGVIEW_CONFIG_DIR`)
//! 4. The platform directory from the `dirs` crate, with the app name
//!    appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "TagView";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "TAGVIEW_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TAGVIEW_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the CLI directory overrides. Call once at startup, before any
/// path resolution.
///
/// # Panics
///
/// Panics when called a second time.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Walks the priority chain for one directory kind.
fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform_default: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => return Some(PathBuf::from(value)),
        _ => {}
    }

    platform_default.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Directory holding session state (`state.cbor`).
///
/// Returns `None` if no platform data directory can be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Like [`get_app_data_dir`], with a highest-priority explicit override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir())
}

/// Directory holding user preferences (`settings.toml`).
///
/// Returns `None` if no platform config directory can be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], with a highest-priority explicit override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        &CLI_CONFIG_DIR,
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests that
    // touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_dirs_end_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for dir in [get_app_data_dir(), get_app_config_dir()]
            .into_iter()
            .flatten()
        {
            assert!(dir.is_absolute());
            assert!(dir.ends_with(APP_NAME));
        }
        // `dirs` returning None (rare) leaves nothing to assert on.
    }

    #[test]
    fn explicit_override_wins() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let chosen = get_app_data_dir_with_override(Some(PathBuf::from("/override/path")));
        assert_eq!(chosen, Some(PathBuf::from("/override/path")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_beats_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(
            get_app_config_dir(),
            Some(PathBuf::from("/test/config/dir"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_treated_as_unset() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(dir) = get_app_data_dir() {
            assert!(dir.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
