use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PRICE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
