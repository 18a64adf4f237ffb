//! The indicator: one battery source plus the active display settings.
//!
//! Every refresh pulls fresh readings and rebuilds the snapshot from
//! scratch; nothing is carried over from the previous poll.

use dualbat_engine::{recompute, DisplayConfig, PresentationSnapshot};
use dualbat_platform::BatterySource;
use tracing::{debug, info};

pub struct Indicator<S> {
    source: S,
    display: DisplayConfig,
    snapshot: PresentationSnapshot,
    poll_count: u64,
}

impl<S: BatterySource> Indicator<S> {
    /// Starts with the placeholder snapshot until the first refresh.
    pub fn new(source: S, display: DisplayConfig) -> Self {
        Self {
            source,
            display,
            snapshot: PresentationSnapshot::placeholder(display),
            poll_count: 0,
        }
    }

    pub fn refresh(&mut self) -> &PresentationSnapshot {
        let readings = self.source.list_batteries();
        self.snapshot = recompute(&readings, self.display);
        self.poll_count += 1;

        debug!(
            poll = self.poll_count,
            source = self.source.name(),
            batteries = self.snapshot.lines.len(),
            label = %self.snapshot.summary_label,
            "Indicator refreshed"
        );

        &self.snapshot
    }

    /// Swap in new settings and recompute immediately.
    pub fn apply_settings(&mut self, display: DisplayConfig) -> &PresentationSnapshot {
        if display != self.display {
            let (show_name, show_icon) = (display.show_name, display.show_icon);
            info!(
                show_name = show_name,
                show_icon = show_icon,
                "Display settings changed"
            );
        }
        self.display = display;
        self.refresh()
    }

    pub fn snapshot(&self) -> &PresentationSnapshot {
        &self.snapshot
    }

    pub fn display(&self) -> DisplayConfig {
        self.display
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }
}
