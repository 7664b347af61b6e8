use crate::config::Config;
use crate::engine::key_stats::KeyStat;

pub const DEFAULT_TARGET_CPM: f64 = 175.0;

/// The speed a letter must reach to count as practiced enough.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub target_cpm: f64,
}

impl Target {
    pub fn new(target_cpm: f64) -> Self {
        Self { target_cpm }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.target_cpm())
    }

    pub fn target_time_ms(&self) -> f64 {
        60000.0 / self.target_cpm
    }

    /// Ratio of target time to filtered time; 1.0 or more meets the target.
    pub fn confidence(&self, stat: &KeyStat) -> Option<f64> {
        stat.filtered_time_ms.map(|t| self.confidence_for(t))
    }

    pub fn best_confidence(&self, stat: &KeyStat) -> Option<f64> {
        stat.best_time_ms.map(|t| self.confidence_for(t))
    }

    fn confidence_for(&self, time_ms: f64) -> f64 {
        if time_ms <= 0.0 {
            return f64::INFINITY;
        }
        self.target_time_ms() / time_ms
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_CPM)
    }
}
