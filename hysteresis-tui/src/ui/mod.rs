//! Top-level UI layout — control panel, reported range line, status bar.

pub mod help;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;
use crate::widget::HysteresisWidget;

/// Draw the entire UI and record where the control landed so mouse events
/// can be mapped back onto it.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: control panel + 1-line readout + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let control_area = chunks[0];
    let readout_area = chunks[1];
    let status_area = chunks[2];

    draw_control(f, control_area, app);
    draw_readout(f, readout_area, app);
    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Help {
        help::render(f, control_area);
    }
}

fn draw_control(f: &mut Frame, area: Rect, app: &mut AppState) {
    let dragging = app.control.drag_state().is_active();
    let title = match app.preset {
        Some(preset) => format!(" {} ", preset.label()),
        None => " Hysteresis ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(dragging))
        .title(title)
        .title_style(theme::panel_title(dragging));

    let widget = HysteresisWidget::new(&app.config, &app.control).block(block);
    let inner = widget.inner(area);
    f.render_widget(widget, area);
    app.control_area = Some(inner);
}

/// "Min: 10 Max: 40" line under the control, as last reported.
fn draw_readout(f: &mut Frame, area: Rect, app: &AppState) {
    let bounds = app.control.bounds();
    let unit = app.config.unit.as_str();
    let range = app.last_report().unwrap_or(app.control.range());
    let handle_span = |label: &str, value: f64, focused: bool| {
        let style = if focused {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        Span::styled(format!("{label}: {}{unit}", bounds.format_value(value)), style)
    };
    let line = Line::from(vec![
        Span::raw(" "),
        handle_span("Min", range.min, app.focused == hysteresis_core::Handle::Min),
        Span::raw("  "),
        handle_span("Max", range.max, app.focused == hysteresis_core::Handle::Max),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
