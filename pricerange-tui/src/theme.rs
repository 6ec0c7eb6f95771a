//! Slider colours, parrot/neon palette.
//!
//! Cyan marks the selected segment and focus, green a sent query, orange a
//! pending one. The empty rail is steel blue and disabled parts go grey.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Selected segment, focused handle, active border.
    pub selection: Color,
    pub sent: Color,
    pub pending: Color,
    /// Empty part of the track and idle borders.
    pub rail: Color,
    pub label: Color,
    /// Scale, hints, and anything disabled.
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            selection: Color::Rgb(0, 255, 255),
            sent: Color::Rgb(0, 255, 128),
            pending: Color::Rgb(255, 140, 0),
            rail: Color::Rgb(100, 149, 237),
            label: Color::White,
            dim: Color::Rgb(170, 170, 170),
        }
    }

    /// Unfilled portion of the track.
    pub fn track(&self) -> Style {
        Style::default().fg(self.rail)
    }

    /// Segment between the handles.
    pub fn fill(&self, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.dim)
        } else {
            Style::default().fg(self.selection)
        }
    }

    pub fn handle(&self, focused: bool, dragging: bool, disabled: bool) -> Style {
        if disabled {
            return Style::default().fg(self.dim);
        }
        let style = self.label_style();
        match (focused, dragging) {
            (_, true) => style.fg(self.selection).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (true, false) => style.fg(self.selection).add_modifier(Modifier::BOLD),
            (false, false) => style,
        }
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label)
    }

    pub fn scale(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn panel_border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.selection)
        } else {
            Style::default().fg(self.rail)
        }
    }

    pub fn status(&self, level: crate::app::StatusLevel) -> Style {
        use crate::app::StatusLevel;
        match level {
            StatusLevel::Info => Style::default().fg(self.selection),
            StatusLevel::Sent => Style::default().fg(self.sent),
            StatusLevel::Warning => Style::default().fg(self.pending),
        }
    }
}
