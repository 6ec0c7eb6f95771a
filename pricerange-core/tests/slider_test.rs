//! Slider behaviour scenarios: layout, drags, watermark, listener symmetry.

use pricerange_core::{
    Handle, PointerEvent, PointerPhase, PointerSource, RangeSlider, RangeValue, SliderBounds,
    SliderProps, Track,
};

fn slider(min: i64, max: i64, low: i64, high: i64) -> RangeSlider {
    RangeSlider::new(SliderProps::new(
        SliderBounds::new(min, max).unwrap(),
        RangeValue::new(low, high),
    ))
}

/// Drive one full drag with `source`, feeding accepted values back like a
/// controlled parent would. Returns every emitted value.
fn drag(
    s: &mut RangeSlider,
    handle: Handle,
    source: PointerSource,
    track: Track,
    start_x: f64,
    moves: &[f64],
) -> Vec<RangeValue> {
    let mut emitted = Vec::new();
    assert!(s.press(handle, PointerEvent::new(source, PointerPhase::Down, start_x), track));
    for &x in moves {
        let mut last = None;
        s.dispatch(PointerEvent::new(source, PointerPhase::Move, x), &mut |v| {
            last = Some(v)
        });
        if let Some(v) = last {
            emitted.push(v);
            s.set_value(v);
        }
    }
    let last_x = moves.last().copied().unwrap_or(start_x);
    s.dispatch(PointerEvent::new(source, PointerPhase::Up, last_x), &mut |_| {});
    emitted
}

// ── Layout ───────────────────────────────────────────────────────────

#[test]
fn scenario_layout_and_edge_drag() {
    let mut s = slider(0, 100, 20, 80);
    let layout = s.layout();
    assert_eq!(layout.low_pct, 20.0);
    assert_eq!(layout.high_pct, 80.0);
    assert_eq!(layout.fill_left_pct, 20.0);
    assert_eq!(layout.fill_width_pct, 60.0);

    let track = Track::new(0.0, 1000.0);
    let emitted = drag(&mut s, Handle::High, PointerSource::Mouse, track, 800.0, &[996.0]);
    assert_eq!(emitted, vec![RangeValue::new(20, 100)]);
}

#[test]
fn rerender_is_idempotent() {
    let s = slider(0, 500, 120, 340);
    assert_eq!(s.layout(), s.layout());
    let twin = slider(0, 500, 120, 340);
    assert_eq!(s.layout(), twin.layout());
}

// ── Drags ────────────────────────────────────────────────────────────

#[test]
fn low_delta_drag_stops_below_high() {
    let mut s = slider(0, 1000, 200, 800);
    let track = Track::new(0.0, 400.0);

    // +50% of the track: 200 + 500 = 700, still below high.
    let emitted = drag(&mut s, Handle::Low, PointerSource::Mouse, track, 80.0, &[280.0]);
    assert_eq!(emitted, vec![RangeValue::new(700, 800)]);

    // From 700, another +50% would pass high; it stops at high - 1.
    let emitted = drag(&mut s, Handle::Low, PointerSource::Mouse, track, 280.0, &[480.0]);
    assert_eq!(emitted, vec![RangeValue::new(799, 800)]);
}

#[test]
fn low_drag_clamps_at_min() {
    let mut s = slider(100, 200, 150, 180);
    let track = Track::new(0.0, 100.0);
    let emitted = drag(&mut s, Handle::Low, PointerSource::Mouse, track, 50.0, &[-500.0]);
    assert_eq!(emitted, vec![RangeValue::new(100, 180)]);
}

#[test]
fn every_move_emits() {
    let mut s = slider(0, 100, 0, 100);
    let track = Track::new(0.0, 100.0);
    let emitted = drag(
        &mut s,
        Handle::Low,
        PointerSource::Mouse,
        track,
        0.0,
        &[10.0, 20.0, 30.0, 40.0],
    );
    let lows: Vec<i64> = emitted.iter().map(|v| v.low).collect();
    assert_eq!(lows, vec![10, 20, 30, 40]);
}

#[test]
fn high_drag_below_low_clamps_above_it() {
    let mut s = slider(0, 100, 40, 80);
    let track = Track::new(0.0, 100.0);
    let emitted = drag(&mut s, Handle::High, PointerSource::Mouse, track, 80.0, &[10.0]);
    assert_eq!(emitted, vec![RangeValue::new(40, 41)]);
}

#[test]
fn touch_and_mouse_behave_identically() {
    let track = Track::new(5.0, 250.0);
    let moves = [30.0, 120.0, 400.0, 90.0];

    let mut mouse = slider(0, 1000, 100, 900);
    let mut touch = slider(0, 1000, 100, 900);

    let m = drag(&mut mouse, Handle::Low, PointerSource::Mouse, track, 30.0, &moves);
    let t = drag(&mut touch, Handle::Low, PointerSource::Touch { id: 0 }, track, 30.0, &moves);
    assert_eq!(m, t);

    let m = drag(&mut mouse, Handle::High, PointerSource::Mouse, track, 200.0, &moves);
    let t = drag(&mut touch, Handle::High, PointerSource::Touch { id: 0 }, track, 200.0, &moves);
    assert_eq!(m, t);
}

#[test]
fn moves_from_other_modality_are_ignored() {
    let mut s = slider(0, 100, 20, 80);
    let track = Track::new(0.0, 100.0);
    s.press(Handle::Low, PointerEvent::touch(1, PointerPhase::Down, 20.0), track);

    let mut out = Vec::new();
    let consumed = s.dispatch(PointerEvent::mouse(PointerPhase::Move, 50.0), &mut |v| out.push(v));
    assert!(!consumed);
    assert!(out.is_empty());

    // A mouse-up does not end a touch drag either.
    s.dispatch(PointerEvent::mouse(PointerPhase::Up, 50.0), &mut |_| {});
    assert!(s.is_dragging(Handle::Low));

    s.dispatch(PointerEvent::touch(1, PointerPhase::Cancel, 50.0), &mut |_| {});
    assert!(!s.is_dragging(Handle::Low));
}

#[test]
fn concurrent_touch_drags_emit_independently() {
    let mut s = slider(0, 100, 20, 80);
    let track = Track::new(0.0, 100.0);
    s.press(Handle::Low, PointerEvent::touch(1, PointerPhase::Down, 20.0), track);
    s.press(Handle::High, PointerEvent::touch(2, PointerPhase::Down, 80.0), track);
    assert_eq!(s.listeners().active_count(), 4);

    let mut out = Vec::new();
    s.dispatch(PointerEvent::touch(1, PointerPhase::Move, 30.0), &mut |v| out.push(v));
    s.dispatch(PointerEvent::touch(2, PointerPhase::Move, 60.0), &mut |v| out.push(v));
    // The parent has not fed anything back, so each change is relative to (20, 80).
    assert_eq!(out, vec![RangeValue::new(30, 80), RangeValue::new(20, 60)]);

    s.dispatch(PointerEvent::touch(1, PointerPhase::Up, 30.0), &mut |_| {});
    s.dispatch(PointerEvent::touch(2, PointerPhase::Up, 60.0), &mut |_| {});
    assert_eq!(s.listeners().active_count(), 0);
}

#[test]
fn no_move_after_release() {
    let mut s = slider(0, 100, 20, 80);
    let track = Track::new(0.0, 100.0);
    drag(&mut s, Handle::Low, PointerSource::Mouse, track, 20.0, &[25.0]);

    let mut out = Vec::new();
    let consumed = s.dispatch(PointerEvent::mouse(PointerPhase::Move, 60.0), &mut |v| out.push(v));
    assert!(!consumed);
    assert!(out.is_empty());
}

// ── Direct input ─────────────────────────────────────────────────────

#[test]
fn direct_input_clamps_and_rounds() {
    let mut s = slider(0, 100, 20, 80);
    let mut out = Vec::new();
    s.input(Handle::Low, 95.0, &mut |v| out.push(v));
    s.input(Handle::High, 3.0, &mut |v| out.push(v));
    s.input(Handle::Low, 33.6, &mut |v| out.push(v));
    s.input(Handle::High, 1e9, &mut |v| out.push(v));
    s.input(Handle::Low, f64::NAN, &mut |v| out.push(v));
    assert_eq!(
        out,
        vec![
            RangeValue::new(79, 80),
            RangeValue::new(20, 21),
            RangeValue::new(34, 80),
            RangeValue::new(20, 100),
            RangeValue::new(20, 80),
        ]
    );
}

// ── Effective max ────────────────────────────────────────────────────

#[test]
fn effective_max_grows_and_never_shrinks() {
    let mut s = slider(0, 100, 20, 80);
    assert_eq!(s.effective_max(), 100);

    s.set_value(RangeValue::new(20, 250));
    assert_eq!(s.effective_max(), 250);
    assert_eq!(s.layout().high_pct, 100.0);

    s.set_value(RangeValue::new(20, 50));
    assert_eq!(s.effective_max(), 250);
    assert_eq!(s.layout().high_pct, 20.0);

    // The grown ceiling is what the high handle snaps to.
    let track = Track::new(0.0, 100.0);
    let mut out = Vec::new();
    s.press(Handle::High, PointerEvent::mouse(PointerPhase::Down, 20.0), track);
    s.dispatch(PointerEvent::mouse(PointerPhase::Move, 100.0), &mut |v| out.push(v));
    assert_eq!(out, vec![RangeValue::new(20, 250)]);
}

#[test]
fn misbehaving_value_never_panics() {
    let mut s = slider(0, 100, 90, 10);
    let layout = s.layout();
    assert_eq!(layout.fill_width_pct, 0.0);

    let mut out = Vec::new();
    s.input(Handle::Low, 50.0, &mut |v| out.push(v));
    s.input(Handle::High, 50.0, &mut |v| out.push(v));
    assert!(out.iter().all(|v| v.is_ordered()));
}

// ── Listener symmetry ────────────────────────────────────────────────

#[test]
fn repeated_drags_leave_no_listeners() {
    let mut s = slider(0, 1000, 100, 900);
    let track = Track::new(0.0, 500.0);
    for i in 0..25 {
        let handle = if i % 2 == 0 { Handle::Low } else { Handle::High };
        let source = if i % 3 == 0 {
            PointerSource::Touch { id: i }
        } else {
            PointerSource::Mouse
        };
        drag(&mut s, handle, source, track, 250.0, &[100.0, 300.0, 200.0]);
        assert_eq!(s.listeners().active_count(), 0);
    }
    assert_eq!(s.listeners().attached_total(), 50);
    assert_eq!(s.listeners().released_total(), 50);
}

#[test]
fn dropping_slider_mid_drag_releases() {
    let mut s = slider(0, 100, 20, 80);
    let listeners = s.listeners().clone();
    s.press(Handle::High, PointerEvent::mouse(PointerPhase::Down, 80.0), Track::new(0.0, 100.0));
    assert_eq!(listeners.active_count(), 2);
    drop(s);
    assert_eq!(listeners.active_count(), 0);
}
