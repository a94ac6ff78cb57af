//! Input dispatch — overlays → global keys → focused-handle keys; mouse
//! press/drag/release → gesture begin/update/end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use hysteresis_core::{DragState, Handle, Orientation, TickLabels};

use crate::app::{AppState, Overlay};

/// Steps moved by PageUp / PageDown.
const PAGE_STEPS: i64 = 5;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Tab | KeyCode::BackTab => {
            app.focused = app.focused.other();
            app.set_status(format!("Focus: {} handle", app.focused.label()));
        }
        KeyCode::Char('r') => {
            if let Some(range) = app.control.reset() {
                app.report(range);
            }
        }
        KeyCode::Char('f') => {
            app.config.display.fill = !app.config.display.fill;
        }
        KeyCode::Char('i') => {
            app.config.display.orientation = match app.config.display.orientation {
                Orientation::Standard => Orientation::Inverted,
                Orientation::Inverted => Orientation::Standard,
            };
        }
        KeyCode::Char('v') => {
            app.config.axis.x.tick_labels = match app.config.axis.x.tick_labels {
                TickLabels::Hidden => TickLabels::Values,
                TickLabels::Values => TickLabels::Hidden,
            };
        }
        KeyCode::Char('p') => {
            let next = app.preset.map(|p| p.next()).unwrap_or_default();
            app.set_config(next.config(), Some(next));
            app.set_status(format!("Preset: {}", next.label()));
        }
        // 3. Keys for the focused handle.
        KeyCode::Left | KeyCode::Char('h') => nudge(app, -1),
        KeyCode::Right | KeyCode::Char('l') => nudge(app, 1),
        KeyCode::PageDown => nudge(app, -PAGE_STEPS),
        KeyCode::PageUp => nudge(app, PAGE_STEPS),
        KeyCode::Home => nudge(app, i64::MIN / 2),
        KeyCode::End => nudge(app, i64::MAX / 2),
        _ => {}
    }
}

fn nudge(app: &mut AppState, steps: i64) {
    let handle = app.focused;
    match app.control.nudge(handle, clamp_steps(app, handle, steps)) {
        Some(range) => app.report(range),
        None => debug!(handle = handle.label(), steps, "nudge rejected"),
    }
}

/// Limit a Home/End jump to the furthest step the handle may legally reach.
fn clamp_steps(app: &AppState, handle: Handle, steps: i64) -> i64 {
    let bounds = app.control.bounds();
    let Some(count) = bounds.step_count() else {
        return steps;
    };
    let range = app.control.range();
    let step = bounds.step;
    let position = ((range.get(handle) - bounds.min()) / step).round() as i64;
    let (lo, hi) = match handle {
        Handle::Min => {
            let other = ((range.max - bounds.min()) / step).round() as i64;
            (0, other - 1)
        }
        Handle::Max => {
            let other = ((range.min - bounds.min()) / step).round() as i64;
            (other + 1, count as i64)
        }
    };
    (position + steps).clamp(lo.min(hi), hi.max(lo)) - position
}

/// Handle a mouse event against the last drawn control area.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some((mapping, geometry)) = app.geometry() else {
                return;
            };
            if !mapping.contains(mouse.column, mouse.row) {
                return;
            }
            let point = mapping.to_canvas(mouse.column, mouse.row);
            let state = app.control.begin(&geometry, point);
            if let Some(handle) = state.handle() {
                app.focused = handle;
            }
            if state == DragState::Idle {
                debug!(x = point.x, y = point.y, "press missed both handles");
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !app.control.drag_state().is_active() {
                return;
            }
            let Some((mapping, geometry)) = app.geometry() else {
                return;
            };
            // Drags leaving the control keep tracking; the column is clamped
            // by the mapping and the value by the geometry.
            let point = mapping.to_canvas(mouse.column, mouse.row);
            if app.control.update(&geometry, point) {
                if let Some(handle) = app.control.active_handle() {
                    app.focused = handle;
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(range) = app.control.end() {
                app.report(range);
            }
        }
        _ => {}
    }
}
