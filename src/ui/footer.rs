use crate::navigation::Route;
use crate::ui::theme::{BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn hints(route: &Route) -> &'static str {
        match route {
            Route::Main => " ↑↓: Move │ Enter: Open │ c: Categories │ r: Retry │ q: Quit",
            Route::Detail { .. } => " Esc: Back │ r: Retry │ c: Categories │ q: Quit",
            Route::Categories => " ←↑↓→: Move │ Enter: Select │ Esc: Back │ r: Retry │ q: Quit",
        }
    }

    pub fn widget(route: &Route, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(route);
        let version = format!("v{} ", VERSION);

        // char count, not bytes: the hints contain box-drawing characters
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
