//! Shell configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Interactive shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Print the numbered menu before every prompt
    pub show_menu: bool,

    /// Wait for an extra line of input after each command before redrawing the menu
    pub pause_after_command: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_menu: true,
            pause_after_command: false,
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
