//! Report configuration.
//!
//! Controls which optional sections a result document carries. These flags
//! belong to the surrounding environment configuration, not to the fitness
//! record itself.
//!
//! ## Example `report.toml`
//!
//! ```toml
//! time_between_traces = 0.01
//! save_traces = true
//! normalize_dist_by_volume = true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Simulated seconds between center-of-mass trace samples. 0 disables the trace.
    pub time_between_traces: f64,
    pub save_traces: bool,
    pub normalize_dist_by_volume: bool,
}

impl ReportConfig {
    /// Whether the `CMTrace` section is written.
    #[must_use]
    pub fn trace_enabled(&self) -> bool {
        self.time_between_traces > 0.0
    }

    /// Whether the `VolumeTrace` section is written.
    #[must_use]
    pub fn volume_trace_enabled(&self) -> bool {
        self.normalize_dist_by_volume && self.save_traces
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.time_between_traces.is_finite(),
            "Time between traces must be finite"
        );
        anyhow::ensure!(
            self.time_between_traces >= 0.0,
            "Time between traces must be non-negative"
        );
        Ok(())
    }

    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }
}
