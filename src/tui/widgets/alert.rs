use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use miqat::prayer_times::{Alert, AlertKind};
use miqat::utils::format_clock;
use miqat::UserProfile;

use crate::tui::theme;

/// Centered 8-row box, shrunk to fit short terminals.
fn popup_rect(area: Rect) -> Rect {
    let height = 8.min(area.height);
    Rect {
        x: area.x + area.width / 4,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width / 2,
        height,
    }
    .intersection(area)
}

/// Banner raised when a tick crosses an azan or reminder moment.
pub fn render(frame: &mut Frame, alert: &Alert, profile: &UserProfile) {
    let area = frame.area();
    let popup_area = popup_rect(area);

    frame.render_widget(Clear, popup_area);

    let lang = profile.language;
    let name = alert.key.display_name(lang);
    let headline = match alert.kind {
        AlertKind::Azan => format!("  {} — it is time to pray", name),
        AlertKind::Reminder { minutes_before } => {
            format!("  {} in {} minutes", name, minutes_before)
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(headline, theme::gold().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(
                format_clock(alert.prayer_at, profile.use_12_hour_format, lang),
                theme::teal(),
            ),
            Span::styled(
                format!("  ·  {}", profile.prayer_configs.get(alert.key).sheikh),
                theme::dim(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("  [any key] close", theme::dim())),
    ];

    let block = Block::default()
        .title(Span::styled(" Azan ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold())
        .style(theme::surface());

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
