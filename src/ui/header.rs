use crate::model::User;
use crate::navigation::Route;
use crate::ui::theme::{ACCENT, BORDER, MUTED, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: String,
    route: &'a Route,
    user: Option<&'a User>,
}

impl<'a> Header<'a> {
    pub fn new(title: impl Into<String>, route: &'a Route, user: Option<&'a User>) -> Self {
        Self {
            title: title.into(),
            route,
            user,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(MUTED);
        let user = self
            .user
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "guest".to_string());

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.to_string(), separator_style),
            Span::styled("  │  ", separator_style),
            Span::styled(user, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
