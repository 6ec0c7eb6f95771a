//! Input dispatch — keyboard uses the direct-input path, the mouse drives
//! drag sessions.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use pricerange_core::{Handle, PointerEvent, PointerPhase, RangeValue};

use crate::app::AppState;

/// Columns either side of a handle that still grab it.
const HIT_TOLERANCE: f64 = 1.5;

/// Rows above and below the track that still count as the track.
const ROW_TOLERANCE: u16 = 1;

pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Tab | KeyCode::BackTab => {
            app.focused = app.focused.other();
            app.set_status(format!("Focus: {} handle", app.focused.label()));
        }
        KeyCode::Char('h') | KeyCode::Left => nudge(app, -app.step(), now),
        KeyCode::Char('l') | KeyCode::Right => nudge(app, app.step(), now),
        KeyCode::Char('H') => nudge(app, -10 * app.step(), now),
        KeyCode::Char('L') => nudge(app, 10 * app.step(), now),
        KeyCode::Home => {
            let min = app.slider.props().bounds.min;
            set_focused(app, min as f64, now);
        }
        KeyCode::End => {
            let max = app.slider.effective_max();
            set_focused(app, max as f64, now);
        }
        KeyCode::Char('d') => app.toggle_disabled(),
        KeyCode::Char('r') => app.reset(now),
        _ => {}
    }
}

fn nudge(app: &mut AppState, delta: i64, now: Instant) {
    let current = app.slider.value().get(app.focused);
    set_focused(app, current.saturating_add(delta) as f64, now);
}

fn set_focused(app: &mut AppState, raw: f64, now: Instant) {
    let mut emitted: Option<RangeValue> = None;
    app.slider.input(app.focused, raw, &mut |v| emitted = Some(v));
    if let Some(v) = emitted {
        app.apply_change(v, now);
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent, now: Instant) {
    let x = mouse.column as f64;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row.abs_diff(app.track_row) > ROW_TOLERANCE {
                return;
            }
            if let Some(handle) = app.slider.handle_at(x, app.track, HIT_TOLERANCE) {
                let event = PointerEvent::mouse(PointerPhase::Down, x);
                if app.slider.press(handle, event, app.track) {
                    app.focused = handle;
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            dispatch(app, PointerEvent::mouse(PointerPhase::Move, x), now);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            dispatch(app, PointerEvent::mouse(PointerPhase::Up, x), now);
        }
        _ => {}
    }
}

/// Send a global pointer event through the slider and apply what it emits.
fn dispatch(app: &mut AppState, event: PointerEvent, now: Instant) {
    let mut emitted = Vec::new();
    app.slider.dispatch(event, &mut |v| emitted.push(v));
    for v in emitted {
        app.apply_change(v, now);
    }
}

/// Terminal focus loss ends any drag: the release may never arrive.
pub fn handle_focus_lost(app: &mut AppState, now: Instant) {
    for handle in Handle::BOTH {
        if app.slider.is_dragging(handle) {
            dispatch(app, PointerEvent::mouse(PointerPhase::Cancel, 0.0), now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crossterm::event::{KeyModifiers, MouseEvent};
    use pricerange_core::SliderConfig;
    use ratatui::layout::Rect;

    fn app() -> AppState {
        let config = SliderConfig {
            min: 0,
            max: 100,
            low: 20.0,
            high: 80.0,
            ..SliderConfig::default()
        };
        let mut app = AppState::new(&config, Duration::from_millis(300)).unwrap();
        // Columns 0..=100 map one-to-one onto values.
        app.set_track_area(Rect::new(0, 5, 101, 1));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn mouse_drag_moves_high_to_edge() {
        let mut app = app();
        let now = Instant::now();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 80, 5), now);
        assert!(app.slider.is_dragging(Handle::High));
        assert_eq!(app.focused, Handle::High);

        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 100, 5), now);
        assert_eq!(app.slider.value(), RangeValue::new(20, 100));

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 100, 5), now);
        assert!(!app.slider.is_dragging(Handle::High));
        assert_eq!(app.slider.listeners().active_count(), 0);
    }

    #[test]
    fn press_off_track_row_is_ignored() {
        let mut app = app();
        let now = Instant::now();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 20, 9), now);
        assert!(!app.slider.is_dragging(Handle::Low));
    }

    #[test]
    fn drag_continues_off_track() {
        let mut app = app();
        let now = Instant::now();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 20, 4), now);
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 35, 12), now);
        assert_eq!(app.slider.value(), RangeValue::new(35, 80));
    }

    #[test]
    fn keys_nudge_focused_handle() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('l')), now);
        assert_eq!(app.slider.value(), RangeValue::new(21, 80));
        handle_key(&mut app, key(KeyCode::Tab), now);
        handle_key(&mut app, key(KeyCode::Char('H')), now);
        assert_eq!(app.slider.value(), RangeValue::new(21, 70));
        handle_key(&mut app, key(KeyCode::End), now);
        assert_eq!(app.slider.value(), RangeValue::new(21, 100));
    }

    #[test]
    fn keys_clamp_at_other_handle() {
        let mut app = app();
        let now = Instant::now();
        for _ in 0..20 {
            handle_key(&mut app, key(KeyCode::Char('L')), now);
        }
        assert_eq!(app.slider.value(), RangeValue::new(79, 80));
    }

    #[test]
    fn disabled_slider_ignores_input() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('d')), now);
        handle_key(&mut app, key(KeyCode::Char('l')), now);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 20, 5), now);
        assert_eq!(app.slider.value(), RangeValue::new(20, 80));
        assert!(!app.slider.is_dragging(Handle::Low));
    }

    #[test]
    fn focus_loss_cancels_drag() {
        let mut app = app();
        let now = Instant::now();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 20, 5), now);
        handle_focus_lost(&mut app, now);
        assert!(!app.slider.is_dragging(Handle::Low));
        assert_eq!(app.slider.listeners().active_count(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('q')), Instant::now());
        assert!(!app.running);
    }
}
