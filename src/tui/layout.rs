use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::{format_published, Article};
use crate::editorial::{partition, quick_filter, SECONDARY_GROUP_SIZE};
use crate::tui::app::{InputMode, Target, TuiApp, View};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(10),   // Current view
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_bar(frame, app, chunks[0], colors);
    match app.view {
        View::Home => render_home(frame, app, chunks[1], colors),
        View::Search => render_search(frame, app, chunks[1], colors),
        View::History => render_history(frame, app, chunks[1], colors),
    }
    render_status_bar(frame, app, chunks[2], colors);
}

fn border_style(active: bool, colors: &ColorConfig) -> Style {
    if active {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    }
}

fn render_search_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let editing = app.input_mode == InputMode::SearchBar;

    let mut tabs = vec![Span::raw(" ")];
    for view in [View::Home, View::Search, View::History] {
        let style = if view == app.view {
            Style::default()
                .fg(colors.active_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.inactive_border)
        };
        tabs.push(Span::styled(format!("{} ", view.title()), style));
    }

    let text = if editing || !app.search_bar.text().is_empty() {
        Line::from(app.search_bar.text().to_string())
    } else {
        Line::from(Span::styled(
            "Press / to search...",
            Style::default().fg(colors.inactive_border),
        ))
    };

    let block = Block::default()
        .title(Line::from(tabs))
        .borders(Borders::ALL)
        .border_style(if editing {
            Style::default().fg(colors.input_active)
        } else {
            border_style(false, colors)
        });

    frame.render_widget(Paragraph::new(text).block(block), area);

    if editing {
        let x = area.x + 1 + app.search_bar.text().chars().count() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_home(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let filtering = app.input_mode == InputMode::HomeFilter;
    let show_filter = filtering || !app.home_filter.text().is_empty();

    let area = if show_filter {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(8)])
            .split(area);

        let block = Block::default()
            .title(" Quick search ")
            .borders(Borders::ALL)
            .border_style(if filtering {
                Style::default().fg(colors.input_active)
            } else {
                border_style(false, colors)
            });
        frame.render_widget(
            Paragraph::new(app.home_filter.text().to_string()).block(block),
            chunks[0],
        );
        chunks[1]
    } else {
        area
    };

    let shown = quick_filter(&app.home_articles, app.home_filter.text());
    let layout = partition(&shown);

    if layout.is_empty() {
        let message = if app.is_loading(Target::Home) {
            "Loading...".to_string()
        } else {
            format!("No articles for \"{}\"", app.home_term)
        };
        let block = Block::default()
            .title(format!(" {} ", app.home_term))
            .borders(Borders::ALL)
            .border_style(border_style(false, colors));
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    // Selection indexes follow reading order: hero 1, grid 1, grid 2, hero 2.
    let second_start = 1 + layout.secondary1.len();
    let hero2_index = second_start + layout.secondary2.len();

    if let Some(article) = layout.hero1 {
        render_card(frame, top[0], article, app.selected == 0, true, colors);
    }
    render_grid(frame, top[1], layout.secondary1, 1, app.selected, colors);
    render_grid(
        frame,
        bottom[0],
        layout.secondary2,
        second_start,
        app.selected,
        colors,
    );
    if let Some(article) = layout.hero2 {
        render_card(
            frame,
            bottom[1],
            article,
            app.selected == hero2_index,
            true,
            colors,
        );
    }
}

/// Four small cards in a 2x2 grid.
fn render_grid(
    frame: &mut Frame,
    area: Rect,
    articles: &[&Article],
    first_index: usize,
    selected: usize,
    colors: &ColorConfig,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut cells = Vec::with_capacity(SECONDARY_GROUP_SIZE);
    for row in rows.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        cells.extend(cols.iter().copied());
    }

    for (i, (article, cell)) in articles.iter().zip(cells).enumerate() {
        render_card(
            frame,
            cell,
            article,
            selected == first_index + i,
            false,
            colors,
        );
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    article: &Article,
    is_selected: bool,
    hero: bool,
    colors: &ColorConfig,
) {
    let title_style = if hero {
        Style::default()
            .fg(colors.hero_title)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(colors.headline)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(Span::styled(article.title.clone(), title_style))];
    if !article.description.is_empty() {
        lines.push(Line::from(Span::styled(
            article.description.clone(),
            Style::default().fg(colors.description),
        )));
    }
    lines.push(Line::from(""));
    lines.push(metadata_line(article, colors));
    lines.push(Line::from(Span::styled(
        article.source_name().to_string(),
        Style::default().fg(colors.source),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_selected, colors));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn metadata_line(article: &Article, colors: &ColorConfig) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{} - {}",
            article.display_author(),
            format_published(&article.published_at)
        ),
        Style::default().fg(colors.metadata),
    ))
}

fn render_search(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let items: Vec<ListItem> = app
        .search_articles
        .iter()
        .map(|article| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default()
                        .fg(colors.headline)
                        .add_modifier(Modifier::BOLD),
                )),
                metadata_line(article, colors),
                Line::from(Span::styled(
                    article.source_name().to_string(),
                    Style::default().fg(colors.source),
                )),
                Line::from(""),
            ]))
        })
        .collect();

    let title = if app.search_query.is_empty() {
        " Search ".to_string()
    } else {
        format!(
            " Results for \"{}\" ({}) [sort: {}] ",
            app.search_query,
            app.search_articles.len(),
            app.sort_order
        )
    };

    render_list(frame, app, area, items, title, colors);
}

fn render_history(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|article| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    article.url.clone(),
                    Style::default().fg(colors.description),
                )),
            ]))
        })
        .collect();

    let title = format!(" History ({}) ", app.history.len());
    render_list(frame, app, area, items, title, colors);
}

fn render_list(
    frame: &mut Frame,
    app: &mut TuiApp,
    area: Rect,
    items: Vec<ListItem>,
    title: String,
    colors: &ColorConfig,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app.input_mode == InputMode::Normal, colors));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.view_loading() {
        "Loading...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        match (app.input_mode, app.view) {
            (InputMode::SearchBar, _) | (InputMode::HomeFilter, _) => {
                "Type to search  Enter/Esc:Done".to_string()
            }
            (InputMode::Normal, View::Search) => {
                "j/k:Nav  Tab:View  /:Search  s:Sort  Enter:Open  q:Quit".to_string()
            }
            (InputMode::Normal, _) => {
                "j/k:Nav  Tab:View  /:Search  f:Filter  Enter:Open  R:Refresh  q:Quit".to_string()
            }
        }
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
