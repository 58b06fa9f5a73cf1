//! Frame-loop counters for the editor shell.

use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Saturating counters updated by the editor facade as it routes input,
/// rebuilds the dock layout, solves the tree, and emits draw lists.
#[derive(Debug, Default, Clone)]
pub struct UiMetrics {
    input_events: u64,
    dock_rebuilds: u64,
    layout_passes: u64,
    draw_commands: u64,
}

impl UiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_input_event(&mut self) {
        self.input_events = self.input_events.saturating_add(1);
    }

    pub fn record_dock_rebuild(&mut self) {
        self.dock_rebuilds = self.dock_rebuilds.saturating_add(1);
    }

    pub fn record_layout_pass(&mut self) {
        self.layout_passes = self.layout_passes.saturating_add(1);
    }

    pub fn record_draw_commands(&mut self, count: usize) {
        if count > 0 {
            self.draw_commands = self.draw_commands.saturating_add(count as u64);
        }
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            input_events: self.input_events,
            dock_rebuilds: self.dock_rebuilds,
            layout_passes: self.layout_passes,
            draw_commands: self.draw_commands,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub input_events: u64,
    pub dock_rebuilds: u64,
    pub layout_passes: u64,
    pub draw_commands: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "ui_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("input_events".to_string(), json!(self.input_events));
        map.insert("dock_rebuilds".to_string(), json!(self.dock_rebuilds));
        map.insert("layout_passes".to_string(), json!(self.layout_passes));
        map.insert("draw_commands".to_string(), json!(self.draw_commands));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = UiMetrics::new();
        metrics.record_input_event();
        metrics.record_input_event();
        metrics.record_dock_rebuild();
        metrics.record_layout_pass();
        metrics.record_draw_commands(12);
        metrics.record_draw_commands(0);

        let snapshot = metrics.snapshot(Duration::from_millis(1500));
        assert_eq!(snapshot.uptime_ms, 1500);
        assert_eq!(snapshot.input_events, 2);
        assert_eq!(snapshot.dock_rebuilds, 1);
        assert_eq!(snapshot.layout_passes, 1);
        assert_eq!(snapshot.draw_commands, 12);
    }

    #[test]
    fn snapshot_serializes_as_fields() {
        let mut metrics = UiMetrics::new();
        metrics.record_layout_pass();

        let event = metrics
            .snapshot(Duration::from_secs(1))
            .to_log_event("editor");
        assert_eq!(event.message, "ui_metrics");
        assert_eq!(event.fields["layout_passes"], json!(1));
    }
}
