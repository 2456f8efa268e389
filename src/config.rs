use std::{fs, path};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{AspectRange, AspectRatio, Orientation};

/// The acceptable camera aspect ratios for each screen orientation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub landscape_min: AspectRatio,
    pub landscape_max: AspectRatio,
    pub portrait_min: AspectRatio,
    pub portrait_max: AspectRatio,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            landscape_min: AspectRatio::new(3., 2.),
            landscape_max: AspectRatio::new(16., 9.),
            portrait_min: AspectRatio::new(9., 16.),
            portrait_max: AspectRatio::new(2., 3.),
        }
    }
}

impl Config {
    pub fn new(landscape_min: AspectRatio, landscape_max: AspectRatio, portrait_min: AspectRatio, portrait_max: AspectRatio) -> Self {
        Self { landscape_min, landscape_max, portrait_min, portrait_max }.validated()
    }

    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;

        Ok(config.validated())
    }

    pub fn load(path: impl AsRef<path::Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| crate::Error::Io { path: path.to_path_buf(), source })?;

        Self::from_json_str(&json)
    }

    /// Raises every component below `AspectRatio::MIN_COMPONENT` to it.
    pub fn validated(self) -> Self {
        let config = Self {
            landscape_min: clamp_ratio("landscape_min", self.landscape_min),
            landscape_max: clamp_ratio("landscape_max", self.landscape_max),
            portrait_min: clamp_ratio("portrait_min", self.portrait_min),
            portrait_max: clamp_ratio("portrait_max", self.portrait_max),
        };

        for orientation in [Orientation::Landscape, Orientation::Portrait] {
            let range = config.range(orientation);

            if range.is_inverted() {
                warn!("{:?} min aspect {} exceeds max aspect {}, min will be used", orientation, range.min, range.max);
            }
        }

        config
    }

    pub fn range(&self, orientation: Orientation) -> AspectRange {
        if orientation.is_landscape() {
            AspectRange::new(self.landscape_min, self.landscape_max)
        } else {
            AspectRange::new(self.portrait_min, self.portrait_max)
        }
    }
}

fn clamp_ratio(name: &str, ratio: AspectRatio) -> AspectRatio {
    if ratio.is_clamped() { return ratio; }

    let clamped = ratio.clamped();
    debug!("{} clamped from {:?} to {:?}", name, ratio, clamped);

    clamped
}
