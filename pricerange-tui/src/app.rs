//! Application state — single-owner, main-thread only.
//!
//! The app plays the parent page: it owns the accepted `(low, high)` pair
//! through a [`PriceFilter`], feeds it back into the slider, and turns
//! settled changes into a search query.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::info;

use pricerange_core::{Handle, RangeSlider, RangeValue, SliderConfig, Track};
use pricerange_runner::{PriceFilter, PriceQuery};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Sent,
    Warning,
}

pub struct AppState {
    pub running: bool,
    pub slider: RangeSlider,
    pub filter: PriceFilter,
    /// Handle that keyboard input adjusts.
    pub focused: Handle,
    /// Screen row and column span of the track, set on every draw.
    pub track_row: u16,
    pub track: Track,
    pub status_message: Option<(String, StatusLevel)>,
    pub sent: Vec<PriceQuery>,
    initial: RangeValue,
}

impl AppState {
    pub fn new(config: &SliderConfig, debounce: Duration) -> anyhow::Result<Self> {
        let slider = config.build()?;
        let initial = slider.value();
        Ok(Self {
            running: true,
            filter: PriceFilter::new(initial, debounce),
            slider,
            focused: Handle::Low,
            track_row: 0,
            track: Track::new(0.0, 0.0),
            status_message: None,
            sent: Vec::new(),
            initial,
        })
    }

    /// Record where the track was drawn. Columns map onto `[0, 1]` so the
    /// last column is the right edge.
    pub fn set_track_area(&mut self, area: Rect) {
        self.track_row = area.y;
        self.track = Track::new(area.x as f64, area.width.saturating_sub(1) as f64);
    }

    /// Accept a value the slider emitted.
    pub fn apply_change(&mut self, value: RangeValue, now: Instant) {
        self.filter.apply(value, now);
        self.slider.set_value(self.filter.value());
    }

    /// Poll the debounced filter for a query to send.
    pub fn tick(&mut self, now: Instant) {
        if let Some(query) = self.filter.poll(now) {
            info!(query = %query.to_query_string(), "search query");
            self.set_sent(format!("GET /products?{}", query.to_query_string()));
            self.sent.push(query);
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.apply_change(self.initial, now);
        self.set_status("Range reset");
    }

    pub fn toggle_disabled(&mut self) {
        let disabled = !self.slider.props().disabled;
        self.slider.set_disabled(disabled);
        if disabled {
            self.set_warning("Slider disabled");
        } else {
            self.set_status("Slider enabled");
        }
    }

    /// Keyboard step: 1% of the travel, at least one unit.
    pub fn step(&self) -> i64 {
        let span = self.slider.effective_max() as f64 - self.slider.props().bounds.min as f64;
        ((span / 100.0) as i64).max(1)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_sent(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Sent));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        let config = SliderConfig {
            min: 0,
            max: 100,
            low: 20.0,
            high: 80.0,
            ..SliderConfig::default()
        };
        AppState::new(&config, Duration::from_millis(300)).unwrap()
    }

    #[test]
    fn change_flows_back_into_slider() {
        let mut app = app();
        let t0 = Instant::now();
        app.apply_change(RangeValue::new(30, 80), t0);
        assert_eq!(app.slider.value(), RangeValue::new(30, 80));
        app.tick(t0);
        assert!(app.sent.is_empty());
        app.tick(t0 + Duration::from_millis(300));
        assert_eq!(app.sent.len(), 1);
        assert_eq!(app.status_message.as_ref().map(|(_, l)| *l), Some(StatusLevel::Sent));
    }

    #[test]
    fn track_area_maps_last_column_to_edge() {
        let mut app = app();
        app.set_track_area(Rect::new(4, 7, 51, 1));
        assert_eq!(app.track_row, 7);
        assert_eq!(app.track.fraction_at(54.0), 1.0);
        assert_eq!(app.track.fraction_at(4.0), 0.0);
    }

    #[test]
    fn reset_restores_initial() {
        let mut app = app();
        let t0 = Instant::now();
        app.apply_change(RangeValue::new(50, 60), t0);
        app.reset(t0);
        assert_eq!(app.slider.value(), RangeValue::new(20, 80));
    }

    #[test]
    fn step_is_one_percent() {
        let app = app();
        assert_eq!(app.step(), 1);
    }
}
