//! Top-level UI layout — slider panel with status bar.

pub mod slider_widget;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use pricerange_core::Handle;

use crate::app::AppState;
use crate::theme::Theme;
use slider_widget::SliderWidget;

/// Split the frame into the slider panel and the 1-line status bar, and
/// return the rect the slider widget is drawn in.
pub fn slider_area(frame: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame);
    let panel = chunks[0];
    let inner = Block::default().borders(Borders::ALL).inner(panel);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(slider_widget::HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);
    (panel, rows[1], chunks[1])
}

/// Draw the entire UI, recording where the track landed for mouse hit tests.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let theme = Theme::default();
    let (panel, slider, status) = slider_area(f.area());
    app.set_track_area(SliderWidget::track_rect(slider));

    let disabled = app.slider.props().disabled;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(!disabled))
        .title(" Price Range ");
    f.render_widget(block, panel);

    let layout = app.slider.layout();
    let labels = app.slider.labels().clone();
    let widget = SliderWidget {
        layout: &layout,
        min: app.slider.props().bounds.min,
        labels: &labels,
        focused: app.focused,
        dragging: [
            app.slider.is_dragging(Handle::Low),
            app.slider.is_dragging(Handle::High),
        ],
        disabled,
        theme,
    };
    f.render_widget(widget, slider);

    let details = Rect {
        y: slider.bottom(),
        height: panel.bottom().saturating_sub(slider.bottom() + 1),
        ..slider
    };
    let value = app.slider.value();
    let pending = if app.filter.is_pending() { " (pending)" } else { "" };
    let lines = vec![
        Line::from(vec![
            Span::styled("Selected: ", theme.scale()),
            Span::styled(
                format!("{} – {}", labels.format(value.low), labels.format(value.high)),
                theme.label_style(),
            ),
            Span::styled(pending, theme.status(crate::app::StatusLevel::Warning)),
        ]),
        Line::from(vec![
            Span::styled("Queries sent: ", theme.scale()),
            Span::styled(app.sent.len().to_string(), theme.label_style()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), details);

    status_bar::render(f, status, app, &theme);
}
