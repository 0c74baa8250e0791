use std::{fs::File, io::BufReader, path::Path, time::Duration};

use crate::{
    animation::morph::MorphOpts,
    foundation::error::{PixmorphError, PixmorphResult},
};

/// Morph settings loadable from JSON.
///
/// ```json
/// { "steps": 10, "frame_delay_ms": 250, "cell_size": 8 }
/// ```
///
/// Every field is optional; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MorphConfig {
    /// Number of blend steps (default 5).
    pub steps: u32,
    /// Pause after each frame, in milliseconds (default 500).
    pub frame_delay_ms: u64,
    /// Edge length, in output pixels, of one source pixel when writing PNG frames (default 1).
    pub cell_size: u32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            steps: 5,
            frame_delay_ms: 500,
            cell_size: 1,
        }
    }
}

impl MorphConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: &Path) -> PixmorphResult<Self> {
        let f = File::open(path)
            .map_err(|e| PixmorphError::io(format!("open config '{}'", path.display()), e))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            PixmorphError::serde(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(s: &str) -> PixmorphResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| PixmorphError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings no renderer can use.
    pub fn validate(&self) -> PixmorphResult<()> {
        if self.cell_size == 0 {
            return Err(PixmorphError::validation("cell_size must be non-zero"));
        }
        Ok(())
    }

    /// Settings for [`crate::morph`].
    pub fn to_opts(&self) -> MorphOpts {
        MorphOpts {
            steps: self.steps,
            frame_delay: Duration::from_millis(self.frame_delay_ms),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
