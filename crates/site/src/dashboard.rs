//! Simulated live operations dashboard.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

/// How often a visible dashboard receives a live update.
pub const LIVE_UPDATE_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Bakery,
    Dairy,
    Teff,
    Export,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Bakery,
        MetricKind::Dairy,
        MetricKind::Teff,
        MetricKind::Export,
    ];

    /// Figures shown when the dashboard first becomes visible.
    fn initial_value(&self) -> u32 {
        match self {
            MetricKind::Bakery => 12_450,
            MetricKind::Dairy => 8_620,
            MetricKind::Teff => 25_890,
            MetricKind::Export => 127,
        }
    }

    pub fn capacity(&self) -> u32 {
        match self {
            MetricKind::Bakery => 15_000,
            MetricKind::Dairy => 10_000,
            MetricKind::Teff => 33_334,
            MetricKind::Export => 200,
        }
    }

    fn target_percent(&self) -> u8 {
        match self {
            MetricKind::Bakery => 83,
            MetricKind::Dairy => 86,
            MetricKind::Teff => 78,
            MetricKind::Export => 64,
        }
    }

    /// Bounds of one live update.
    pub fn variation_range(&self) -> RangeInclusive<i32> {
        match self {
            MetricKind::Bakery => -100..=99,
            MetricKind::Dairy => -75..=74,
            MetricKind::Teff => -150..=149,
            MetricKind::Export => -5..=4,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            MetricKind::Bakery => "dashboard_bakery",
            MetricKind::Dairy => "dashboard_dairy",
            MetricKind::Teff => "dashboard_teff",
            MetricKind::Export => "dashboard_export",
        }
    }

    pub fn counter_id(&self) -> &'static str {
        match self {
            MetricKind::Bakery => "dashboardBakery",
            MetricKind::Dairy => "dashboardDairy",
            MetricKind::Teff => "dashboardTeff",
            MetricKind::Export => "dashboardExport",
        }
    }
}

/// Supplies the per-metric change of one live update.
pub trait VariationSource {
    fn delta(&mut self, kind: MetricKind) -> i32;
}

/// Uniform random deltas within each metric's range.
#[derive(Debug, Default)]
pub struct RandomVariation;

impl VariationSource for RandomVariation {
    fn delta(&mut self, kind: MetricKind) -> i32 {
        rand::rng().random_range(kind.variation_range())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: u32,
    pub percent: u8,
}

impl Metric {
    fn initial(kind: MetricKind) -> Self {
        Self {
            kind,
            value: kind.initial_value(),
            percent: kind.target_percent(),
        }
    }

    /// Counter text, e.g. `12,450`.
    pub fn counter_text(&self) -> String {
        format_thousands(self.value)
    }

    pub fn percent_text(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    metrics: Vec<Metric>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            metrics: MetricKind::ALL.iter().map(|k| Metric::initial(*k)).collect(),
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn metric(&self, kind: MetricKind) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.kind == kind)
    }

    /// Shift every counter (never below zero) and recompute progress.
    pub fn apply_variation(&mut self, source: &mut impl VariationSource) {
        for metric in &mut self.metrics {
            let delta = source.delta(metric.kind);
            metric.value = metric.value.saturating_add_signed(delta);
            metric.percent = progress_percent(metric.value, metric.kind.capacity());
        }
        tracing::debug!(metrics = ?self.metrics, "dashboard updated");
    }

    /// Apply a live update every [`LIVE_UPDATE_INTERVAL`], `ticks` times.
    ///
    /// A tick while `is_visible` reports false changes nothing. Returns the
    /// number of updates applied.
    pub async fn run_live(
        &mut self,
        source: &mut impl VariationSource,
        is_visible: impl Fn() -> bool,
        ticks: usize,
    ) -> usize {
        let mut interval = tokio::time::interval(LIVE_UPDATE_INTERVAL);
        // The first tick completes immediately; updates start one period in.
        interval.tick().await;

        let mut applied = 0;
        for _ in 0..ticks {
            interval.tick().await;
            if is_visible() {
                self.apply_variation(source);
                applied += 1;
            } else {
                tracing::trace!("dashboard hidden; live update skipped");
            }
        }
        applied
    }
}

/// `value / capacity` as a whole percentage, capped at 100.
pub fn progress_percent(value: u32, capacity: u32) -> u8 {
    if capacity == 0 {
        return 100;
    }
    let percent = (f64::from(value) / f64::from(capacity) * 100.0).round();
    percent.min(100.0) as u8
}

pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
