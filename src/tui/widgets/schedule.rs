use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use miqat::prayer_times::DaySchedule;
use miqat::utils::format_clock;
use miqat::{PrayerKey, UserProfile};

use crate::tui::theme;

/// Weekly or monthly table; one row per projected day.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    days: &[DaySchedule],
    today: NaiveDate,
    profile: &UserProfile,
    scroll: u16,
) {
    let lang = profile.language;

    let mut header = vec![Span::styled(format!("  {:<14}", ""), theme::dim())];
    for key in PrayerKey::ALL {
        header.push(Span::styled(format!("{:>10}", key.display_name(lang)), theme::gold()));
    }

    let mut lines = vec![Line::from(header), Line::from("")];
    for day in days {
        let is_today = day.date == today;
        let row_style = if is_today {
            theme::teal().add_modifier(Modifier::BOLD)
        } else {
            theme::bold()
        };
        let mut spans = vec![Span::styled(
            format!("{}{:<14}", if is_today { "▸ " } else { "  " }, day.date.format("%a %d %b")),
            row_style,
        )];
        for (_, at) in day.times.iter() {
            spans.push(Span::styled(
                format!("{:>10}", format_clock(*at, profile.use_12_hour_format, lang)),
                row_style,
            ));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
