//! Bottom status bar — key hints and the last status or query.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " [h/l]nudge [H/L]x10 [Tab]handle [d]disable [r]reset [q]quit",
        theme.scale(),
    ));
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::styled(msg.as_str(), theme.status(*level)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
