use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WindowError;
use crate::window::Window;

fn default_order() -> usize {
    1
}

/// Window settings read from TOML, e.g. `order = 2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Markov chain order. Higher orders give more coherent output but start
    /// parroting the corpus back.
    #[serde(default = "default_order")]
    pub order: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
        }
    }
}

impl WindowConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents).context("failed to parse window config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read window config {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("invalid window config {}", path.display()))?;
        debug!(path = %path.display(), order = config.order, "loaded window config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if self.order == 0 {
            return Err(WindowError::InvalidCapacity {
                capacity: self.order,
            });
        }
        Ok(())
    }

    // Empty window sized to the configured order
    pub fn window(&self) -> Result<Window, WindowError> {
        Window::try_new(self.order)
    }
}
