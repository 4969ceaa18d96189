use crate::model::{Category, Product};
use crate::ui::app::{App, Screen, GRID_COLUMNS};
use crate::ui::categories::CategoryManagerState;
use crate::ui::detail::DetailState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, grid_cells, layout_regions};
use crate::ui::mvi::LoadState;
use crate::ui::products::MainState;
use crate::ui::theme::{ACCENT, BORDER, ERROR, HIGHLIGHT, MUTED, PRICE, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const CELL_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let title = match app.screen() {
        Screen::Main(_) => "Product Catalog".to_string(),
        Screen::Detail(coordinator) => match coordinator.state() {
            LoadState::Loaded(Some(product)) => product.name,
            _ => "Product Detail".to_string(),
        },
        Screen::Categories(_) => "Product Categories".to_string(),
    };
    frame.render_widget(Header::new(title, app.route(), app.user()).widget(), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Main(coordinator) => draw_products(frame, body, &coordinator.state(), app.cursor()),
        Screen::Detail(coordinator) => draw_detail(frame, body, &coordinator.state()),
        Screen::Categories(coordinator) => {
            draw_categories(frame, body, &coordinator.state(), app.cursor())
        }
    }

    frame.render_widget(Footer::widget(app.route(), footer), footer);
}

/// Draws the loading/error placeholder; returns the data when loaded.
fn draw_load_state<'s, T>(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &'s LoadState<T>,
) -> Option<&'s T> {
    match state {
        LoadState::Loading => {
            draw_message(frame, area, vec![Line::from("Loading…")], TEXT);
            None
        }
        LoadState::Failed(message) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Error",
                    Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(message.clone()),
                Line::from(""),
                Line::from(Span::styled("Press r to retry", Style::default().fg(MUTED))),
            ];
            draw_message(frame, area, lines, TEXT);
            None
        }
        LoadState::Loaded(data) => Some(data),
    }
}

fn draw_message(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>, color: Color) {
    let height = lines.len() as u16;
    let rect = centered_rect(80, height, area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

fn draw_products(frame: &mut Frame<'_>, area: Rect, state: &MainState, cursor: usize) {
    let Some(products) = draw_load_state(frame, area, state) else {
        return;
    };
    if products.is_empty() {
        draw_message(frame, area, vec![Line::from("No products available")], MUTED);
        return;
    }

    let items: Vec<ListItem> = products.iter().map(product_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
        .highlight_style(Style::default().bg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");
    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn product_item(product: &Product) -> ListItem<'static> {
    let lines = vec![
        Line::from(vec![
            Span::styled(product.name.clone(), Style::default().fg(TEXT)),
            Span::raw("  "),
            Span::styled(product.price.to_string(), Style::default().fg(PRICE)),
        ]),
        Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(MUTED),
        )),
    ];
    ListItem::new(lines)
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, state: &DetailState) {
    let Some(product) = draw_load_state(frame, area, state) else {
        return;
    };
    let Some(product) = product else {
        draw_message(frame, area, vec![Line::from("Product not found")], MUTED);
        return;
    };

    let description = if product.description.is_empty() {
        "No description available.".to_string()
    } else {
        product.description.clone()
    };
    let lines = vec![
        Line::from(Span::styled(
            product.name.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            product.price.to_string(),
            Style::default().fg(PRICE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Description",
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(description),
        Line::from(""),
        // the cart is not implemented
        Line::from(Span::styled("[ Add to cart ]", Style::default().fg(MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            ),
        area,
    );
}

fn draw_categories(frame: &mut Frame<'_>, area: Rect, state: &CategoryManagerState, cursor: usize) {
    let Some(categories) = draw_load_state(frame, area, &state.categories) else {
        return;
    };
    if categories.is_empty() {
        draw_message(frame, area, vec![Line::from("No categories available")], MUTED);
        return;
    }

    let cells = grid_cells(area, categories.len(), GRID_COLUMNS, CELL_HEIGHT);
    for (index, (category, cell)) in categories.iter().zip(cells).enumerate() {
        let selected = state.is_selected(category);
        frame.render_widget(category_cell(category, selected, index == cursor), cell);
    }
}

fn category_cell(category: &Category, selected: bool, focused: bool) -> Paragraph<'static> {
    let border = if selected { ACCENT } else { BORDER };
    let marker = if selected { "★ " } else { "" };
    let image = category
        .image_url
        .clone()
        .unwrap_or_else(|| "(no image)".to_string());

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if focused {
        block = block.style(Style::default().bg(HIGHLIGHT));
    }

    Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}{}", marker, category.name),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(image, Style::default().fg(MUTED))),
    ])
    .alignment(Alignment::Center)
    .block(block)
}
