//! Bottom status bar — key hints, gesture state, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use hysteresis_core::DragState;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" ?:Help Tab:Focus ←/→:Step r:Reset q:Quit", theme::muted()));

    spans.push(Span::raw(" | "));

    let gesture = match app.control.drag_state() {
        DragState::Idle => format!("focus {}", app.focused.label()),
        DragState::DraggingMin => "dragging min".to_string(),
        DragState::DraggingMax => "dragging max".to_string(),
        DragState::Contested => "grabbing".to_string(),
    };
    spans.push(Span::styled(gesture, theme::accent()));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}
