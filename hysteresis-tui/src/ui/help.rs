//! Help overlay — keyboard and mouse shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Mouse");
    key(&mut lines, "drag knob", "Move a handle; release to report");
    lines.push(Line::from(""));

    section(&mut lines, "Keyboard");
    key(&mut lines, "Tab", "Switch focused handle");
    key(&mut lines, "h / l, ← / →", "Move focused handle one step");
    key(&mut lines, "PgDn / PgUp", "Move focused handle five steps");
    key(&mut lines, "Home / End", "Move focused handle to its limit");
    key(&mut lines, "r", "Reset to the initial range");
    lines.push(Line::from(""));

    section(&mut lines, "Display");
    key(&mut lines, "f", "Toggle band fill");
    key(&mut lines, "i", "Swap line orientation");
    key(&mut lines, "v", "Toggle tick values");
    key(&mut lines, "p", "Next preset");
    key(&mut lines, "q / Esc", "Quit");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>14}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
