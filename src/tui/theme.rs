use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(16, 24, 22);
pub const SURFACE: Color = Color::Rgb(30, 58, 52);
pub const BORDER: Color = Color::Rgb(58, 88, 80);
pub const TEXT: Color = Color::Rgb(253, 251, 247);
pub const TEXT_DIM: Color = Color::Rgb(128, 146, 140);
pub const GOLD: Color = Color::Rgb(212, 175, 55);
pub const TEAL: Color = Color::Rgb(80, 169, 180);
pub const GREEN: Color = Color::Rgb(92, 168, 120);
pub const RED: Color = Color::Rgb(190, 86, 70);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused { gold() } else { Style::default().fg(BORDER) }
}
