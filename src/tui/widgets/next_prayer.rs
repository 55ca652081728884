use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use miqat::prayer_times::NextPrayer;
use miqat::utils::format_clock;
use miqat::UserProfile;

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, next: &NextPrayer, profile: &UserProfile) {
    let lang = profile.language;

    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let when = format_clock(next.when, profile.use_12_hour_format, lang);
    let day_note = if next.rolled_over { "  tomorrow" } else { "" };

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}", next.key.display_name(lang)),
                theme::gold().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}{}", when, day_note), theme::dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  in  ", theme::dim()),
            Span::styled(
                next.remaining.clock(true),
                theme::teal().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", profile.prayer_configs.get(next.key).sheikh),
            theme::dim(),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
