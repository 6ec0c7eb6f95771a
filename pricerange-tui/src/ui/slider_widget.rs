//! Two-handle slider widget: floating labels, track with filled segment,
//! and a min/max scale underneath.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use pricerange_core::{Handle, LabelFormat, SliderLayout};

use crate::theme::Theme;

const TRACK: &str = "─";
const FILL: &str = "━";
const KNOB: &str = "●";

/// Columns kept free either side of the track so end labels fit.
pub const LABEL_MARGIN: u16 = 3;

/// Rows the widget needs: labels, track, scale.
pub const HEIGHT: u16 = 3;

pub struct SliderWidget<'a> {
    pub layout: &'a SliderLayout,
    pub min: i64,
    pub labels: &'a LabelFormat,
    pub focused: Handle,
    pub dragging: [bool; 2],
    pub disabled: bool,
    pub theme: Theme,
}

impl SliderWidget<'_> {
    /// The single-row rect the track occupies inside `area`.
    pub fn track_rect(area: Rect) -> Rect {
        let margin = LABEL_MARGIN.min(area.width / 4);
        Rect {
            x: area.x + margin,
            y: area.y + area.height.min(HEIGHT) / 2,
            width: area.width.saturating_sub(2 * margin),
            height: 1,
        }
    }

    /// Screen column of a percentage position, clamped onto the track.
    pub fn column(track: Rect, pct: f64) -> u16 {
        let last = track.width.saturating_sub(1) as f64;
        track.x + (pct.clamp(0.0, 100.0) / 100.0 * last).round() as u16
    }
}

impl Widget for SliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track = Self::track_rect(area);
        if track.width < 2 || area.height < HEIGHT {
            return;
        }
        let theme = self.theme;
        let y = track.y;

        for x in track.left()..track.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(TRACK).set_style(theme.track());
            }
        }

        let fill_start = Self::column(track, self.layout.fill_left_pct);
        let fill_end = Self::column(
            track,
            self.layout.fill_left_pct + self.layout.fill_width_pct,
        );
        for x in fill_start..=fill_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(FILL).set_style(theme.fill(self.disabled));
            }
        }

        let [low_col, high_col] =
            Handle::BOTH.map(|handle| Self::column(track, self.layout.handle_pct(handle)));
        for (handle, col) in [(Handle::Low, low_col), (Handle::High, high_col)] {
            let dragging = self.dragging[handle as usize];
            let style = theme.handle(self.focused == handle, dragging, self.disabled);
            if let Some(cell) = buf.cell_mut((col, y)) {
                cell.set_symbol(KNOB).set_style(style);
            }
        }

        // Floating labels: centred over each handle unless they would collide,
        // in which case they push apart from the gap between the handles.
        let low_label = self.layout.low_label.as_str();
        let high_label = self.layout.high_label.as_str();
        let low_w = low_label.chars().count() as u16;
        let high_w = high_label.chars().count() as u16;
        let mut low_x = low_col.saturating_sub(low_w / 2);
        let mut high_x = high_col.saturating_sub(high_w / 2);
        if low_x + low_w >= high_x {
            let mid = low_col + (high_col.saturating_sub(low_col)) / 2;
            low_x = mid.saturating_sub(low_w);
            high_x = mid + 1;
        }
        let label_y = y.saturating_sub(1).max(area.y);
        put(buf, area, low_x, label_y, low_label, theme.label_style());
        put(buf, area, high_x, label_y, high_label, theme.label_style());

        let scale_y = y + 1;
        if scale_y < area.bottom() {
            let min_label = self.labels.format(self.min);
            let max_label = self.labels.format(self.layout.effective_max);
            put(buf, area, track.x, scale_y, &min_label, theme.scale());
            let max_w = max_label.chars().count() as u16;
            let max_x = track.right().saturating_sub(max_w);
            put(buf, area, max_x, scale_y, &max_label, theme.scale());
        }
    }
}

/// Write `text` at `(x, y)`, shifted left if needed to stay inside `area`.
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: ratatui::style::Style) {
    let width = text.chars().count() as u16;
    let x = x.max(area.x).min(area.right().saturating_sub(width));
    buf.set_string(x, y, text, style);
}
