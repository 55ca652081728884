use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use miqat::prayer_times::PrayerSlot;
use miqat::utils::{format_clock, format_offset};
use miqat::{PrayerStatus, UserProfile};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, board: &[PrayerSlot], profile: &UserProfile, focused_idx: usize) {
    let lang = profile.language;

    let block = Block::default()
        .title(Span::styled(" Today ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    let items: Vec<ListItem> = board
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let is_focused = i == focused_idx;
            let time_str = format_clock(slot.at, profile.use_12_hour_format, lang);
            let offset = *profile.prayer_offsets.get(slot.key);

            let (icon, status_style) = match slot.status {
                PrayerStatus::Passed => ("●", theme::dim()),
                PrayerStatus::Next => ("◆", theme::teal()),
                PrayerStatus::Upcoming => ("○", theme::green()),
            };

            let name_style = if is_focused {
                theme::gold().add_modifier(Modifier::BOLD)
            } else if slot.status == PrayerStatus::Passed {
                theme::dim()
            } else {
                theme::bold()
            };

            let offset_style = if offset == 0 { theme::dim() } else { theme::gold() };

            let line = Line::from(vec![
                Span::styled(if is_focused { " ▸" } else { "  " }, theme::gold()),
                Span::styled(format!("{:<9}", slot.key.display_name(lang)), name_style),
                Span::styled(format!("{:<10}", time_str), theme::bold()),
                Span::styled(icon, status_style),
                Span::styled(format!(" {:<9}", slot.status.as_str()), theme::dim()),
                Span::styled(format!("{:<9}", format_offset(offset)), offset_style),
                Span::styled(profile.prayer_configs.get(slot.key).sheikh.clone(), theme::dim()),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
