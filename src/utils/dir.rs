use std::{env, ffi::OsString, path::PathBuf};

use anyhow::{Context, Result};

const APPLICATION_DIR: &str = "awdigest";

/// Directory awdigest keeps its own state in. Only logs live there, reports go wherever the user
/// points them.
pub fn state_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    let base = env::var_os("APPDATA")
        .map(PathBuf::from)
        .context("APPDATA should be present on Windows")?;
    #[cfg(not(windows))]
    let base = state_base(env::var_os("XDG_STATE_HOME"), env::var_os("HOME"))
        .context("Couldn't find neither XDG_STATE_HOME nor HOME")?;

    Ok(base.join(APPLICATION_DIR))
}

/// `XDG_STATE_HOME` wins when it is an absolute path, otherwise `$HOME/.local/state`.
#[cfg_attr(windows, allow(dead_code))]
fn state_base(xdg_state_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    xdg_state_home
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .or_else(|| home.map(|home| PathBuf::from(home).join(".local/state")))
}
