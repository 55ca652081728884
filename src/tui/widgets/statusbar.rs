use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::View;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &View, message: Option<&str>) {
    if let Some(msg) = message {
        let paragraph = Paragraph::new(Line::from(Span::styled(msg, theme::red())))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let hints: &[(&str, &str)] = match view {
        View::Today => &[
            ("[↑↓]", " select  "),
            ("[+/-]", " offset  "),
            ("[0]", " reset  "),
            ("[t]", " 12/24h  "),
            ("[l]", " language  "),
            ("[Tab]", " week  "),
            ("[Esc]", " quit"),
        ],
        View::Week => &[("[Tab]", " month  "), ("[t]", " 12/24h  "), ("[Esc]", " quit")],
        View::Month => &[
            ("[↑↓]", " scroll  "),
            ("[Tab]", " today  "),
            ("[t]", " 12/24h  "),
            ("[Esc]", " quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme::gold()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
