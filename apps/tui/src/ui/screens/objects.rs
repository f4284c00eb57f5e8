use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::domain::classify;
use crate::ui::screens::key_hint_line;
use crate::ui::widgets::badge::{score_badge_spans, tier_color};
use crate::ui::widgets::tables::scroll_offset;

pub fn render_objects_view(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let show_search = app.search_active || !app.search_input.is_empty();
    let chunks = if show_search {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area)
            .to_vec()
    } else {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);
        vec![Rect::default(), split[0], split[1]]
    };

    if show_search {
        render_search_bar(app, f, chunks[0]);
    }
    render_table(app, f, chunks[1]);
    render_help_footer(app, f, chunks[2]);
}

fn render_search_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cursor = if app.search_active {
        let blink = (app.animation_counter * 2.0).sin() > 0.0;
        if blink {
            "█"
        } else {
            " "
        }
    } else {
        ""
    };

    let block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(TextLine::from(Span::styled(
        format!("> {}{cursor}", app.search_input),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block);

    f.render_widget(paragraph, area);
}

fn render_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows_indices = app.visible_rows();

    if rows_indices.is_empty() {
        let title = if app.search_input.is_empty() {
            "Objects Table"
        } else {
            "Objects Table (filtered)"
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No debris data available")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Name"),
        Cell::from("Type"),
        Cell::from("Orbit"),
        Cell::from("Altitude (km)"),
        Cell::from("Urgency Score"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = rows_indices.len();
    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_object_index);

    let rows = rows_indices
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .enumerate()
        .filter_map(|(i, &sorted_index)| {
            let obj = app.sorted.get(sorted_index)?;
            let is_selected = i + offset == app.selected_object_index;
            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                obj.urgency_score.map_or_else(Style::default, |score| {
                    Style::default().fg(tier_color(classify(score)))
                })
            };

            Some(
                Row::new(vec![
                    Cell::from(obj.id.to_string()),
                    Cell::from(obj.name.clone()),
                    Cell::from(
                        obj.object_type
                            .clone()
                            .unwrap_or_else(|| "N/A".to_string()),
                    ),
                    Cell::from(obj.orbit_type.clone().unwrap_or_else(|| "N/A".to_string())),
                    Cell::from(obj.altitude_text()),
                    Cell::from(TextLine::from(score_badge_spans(obj.urgency_score))),
                ])
                .style(style),
            )
        });

    let widths = [
        Constraint::Length(7),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let title = if app.search_input.is_empty() {
        format!(
            "Objects Table ({} of {})",
            app.selected_object_index + 1,
            total_rows
        )
    } else {
        format!(
            "Objects Table ({} of {} matching \"{}\")",
            app.selected_object_index + 1,
            total_rows,
            app.search_input
        )
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_help_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hints = if app.search_active {
        key_hint_line(&[
            ("Type", "Filter by name"),
            ("Enter", "Keep filter"),
            ("Esc", "Clear search"),
        ])
    } else {
        key_hint_line(&[
            ("ESC", "Back"),
            ("↑/↓", "Navigate"),
            ("PgUp/PgDn", "Jump 5 rows"),
            ("Home/End", "First/Last"),
            ("/", "Search"),
            ("Enter", "Details"),
            ("q", "Quit"),
        ])
    };

    let help_paragraph = Paragraph::new(hints)
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, area);
}
