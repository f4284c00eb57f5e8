use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Table, Wrap,
    },
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

mod globe;
mod urgency;

use globe::Camera;

#[derive(serde::Deserialize, Clone)]
struct DebrisObject {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    object_type: Option<String>,
    #[serde(default)]
    orbit_type: Option<String>,
    #[serde(default)]
    altitude: Option<f64>,
    #[serde(default)]
    urgency_score: Option<f64>,
}

/// One fetch per page load; both end states are terminal and recovery
/// is a page reload. The handler commits into this store, never into
/// view state, so a late completion has nothing stale to clobber.
enum LoadState {
    Loading,
    Ready(Vec<DebrisObject>),
    Failed(String),
}

const YAW_STEP: f64 = 6.0;
const PITCH_STEP: f64 = 4.0;

fn main() -> io::Result<()> {
    let data = Rc::new(RefCell::new(LoadState::Loading));
    let view_index = Rc::new(RefCell::new(0_usize));
    let row_offset = Rc::new(RefCell::new(0_usize));
    let camera = Rc::new(RefCell::new(Camera::default()));
    let selected_point = Rc::new(RefCell::new(None::<usize>));

    spawn_local(fetch_debris(data.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let data = data.clone();
        let view_index = view_index.clone();
        let row_offset = row_offset.clone();
        let camera = camera.clone();
        let selected_point = selected_point.clone();
        move |event| {
            let on_globe = *view_index.borrow() == 1;
            match event.code {
                ratzilla::event::KeyCode::Char('1') => {
                    *view_index.borrow_mut() = 0;
                    *row_offset.borrow_mut() = 0;
                }
                ratzilla::event::KeyCode::Char('2') => {
                    *view_index.borrow_mut() = 1;
                }
                ratzilla::event::KeyCode::Char('3') => {
                    *view_index.borrow_mut() = 2;
                }
                ratzilla::event::KeyCode::Left => {
                    if on_globe {
                        camera.borrow_mut().rotate(YAW_STEP, 0.0);
                    } else {
                        let mut index = view_index.borrow_mut();
                        *index = if *index == 0 { 2 } else { *index - 1 };
                        *row_offset.borrow_mut() = 0;
                    }
                }
                ratzilla::event::KeyCode::Right => {
                    if on_globe {
                        camera.borrow_mut().rotate(-YAW_STEP, 0.0);
                    } else {
                        let mut index = view_index.borrow_mut();
                        *index = (*index + 1) % 3;
                        *row_offset.borrow_mut() = 0;
                    }
                }
                ratzilla::event::KeyCode::Up => {
                    if on_globe {
                        camera.borrow_mut().rotate(0.0, PITCH_STEP);
                    } else {
                        let mut offset = row_offset.borrow_mut();
                        *offset = offset.saturating_sub(1);
                    }
                }
                ratzilla::event::KeyCode::Down => {
                    if on_globe {
                        camera.borrow_mut().rotate(0.0, -PITCH_STEP);
                    } else {
                        let mut offset = row_offset.borrow_mut();
                        *offset = (*offset + 1).min(2000);
                    }
                }
                ratzilla::event::KeyCode::Char('+' | '=') => {
                    if on_globe {
                        camera.borrow_mut().zoom_in();
                    }
                }
                ratzilla::event::KeyCode::Char('-') => {
                    if on_globe {
                        camera.borrow_mut().zoom_out();
                    }
                }
                ratzilla::event::KeyCode::Char('n') => {
                    if on_globe {
                        let count = point_count(&data.borrow());
                        if count > 0 {
                            let mut selected = selected_point.borrow_mut();
                            *selected = Some(selected.map_or(0, |index| (index + 1) % count));
                        }
                    }
                }
                ratzilla::event::KeyCode::Char('p') => {
                    if on_globe {
                        let count = point_count(&data.borrow());
                        if count > 0 {
                            let mut selected = selected_point.borrow_mut();
                            *selected = Some(
                                selected.map_or(0, |index| (index + count - 1) % count),
                            );
                        }
                    }
                }
                _ => {}
            }
        }
    });

    terminal.draw_web(move |f| {
        let frame_area = f.area();
        let block = Block::default()
            .title("ClearOrbit")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(frame_area).inner(Margin::new(1, 1));
        f.render_widget(block, frame_area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(3)])
            .split(inner);

        let view = *view_index.borrow();
        if view == 2 {
            // The about page renders regardless of load state.
            render_about(f, layout[0]);
        } else {
            let state = data.borrow();
            match &*state {
                LoadState::Loading => render_loading(f, layout[0]),
                LoadState::Failed(message) => render_error(message, f, layout[0]),
                LoadState::Ready(debris) => {
                    if view == 0 {
                        render_dashboard(debris, *row_offset.borrow(), f, layout[0]);
                    } else {
                        render_visualization(
                            debris,
                            &camera.borrow(),
                            *selected_point.borrow(),
                            frame_area,
                            f,
                            layout[0],
                        );
                    }
                }
            }
        }

        render_footer(view, f, layout[1]);
    });

    Ok(())
}

fn point_count(state: &LoadState) -> usize {
    match state {
        LoadState::Ready(debris) => globe::rendered_count(debris.len()),
        _ => 0,
    }
}

fn render_loading(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Text::from(TextLine::from("Loading debris data...")))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_error(message: &str, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let banner = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        TextLine::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Reload the page to try again.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(banner)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_dashboard(
    debris: &[DebrisObject],
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_stats(debris, f, main_layout[0]);
    render_urgency_table(debris, row_offset, f, main_layout[1]);
}

fn render_stats(debris: &[DebrisObject], f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let total = debris.len();
    let critical = debris
        .iter()
        .filter(|obj| obj.urgency_score.is_some_and(|score| score >= 100.0))
        .count();
    let high_risk = debris
        .iter()
        .filter(|obj| obj.urgency_score.is_some_and(|score| score >= 80.0))
        .count();

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_stat_card(f, cards[0], "Total Objects", total, "Currently tracked", Color::Cyan);
    render_stat_card(f, cards[1], "Critical Risk", critical, "Urgency >= 100", Color::Red);
    render_stat_card(
        f,
        cards[2],
        "High Risk",
        high_risk,
        "Urgency >= 80",
        Color::Rgb(255, 165, 0),
    );
}

fn render_stat_card(
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    value: usize,
    caption: &str,
    color: Color,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        TextLine::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_urgency_table(
    debris: &[DebrisObject],
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    if debris.is_empty() {
        let paragraph = Paragraph::new("No debris data available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let mut sorted = debris.to_vec();
    sorted.sort_by(|a, b| {
        let a_score = a.urgency_score.unwrap_or(f64::NEG_INFINITY);
        let b_score = b.urgency_score.unwrap_or(f64::NEG_INFINITY);
        b_score
            .partial_cmp(&a_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

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
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let max_rows = area.height.saturating_sub(2) as usize;
    let rows = sorted.iter().skip(row_offset).take(max_rows).map(|obj| {
        let badge = obj.urgency_score.map_or_else(
            || {
                TextLine::from(Span::styled(
                    "N/A",
                    Style::default().fg(Color::DarkGray),
                ))
            },
            |score| {
                let color = color_from_name(urgency::badge_color_name(score));
                TextLine::from(vec![
                    Span::styled(
                        format!("{score:.1} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(urgency::badge_tier(score), Style::default().fg(color)),
                ])
            },
        );

        Row::new(vec![
            Cell::from(obj.id.to_string()),
            Cell::from(obj.name.clone()).style(Style::default().fg(Color::White)),
            Cell::from(obj.object_type.clone().unwrap_or_else(|| "N/A".to_string()))
                .style(Style::default().fg(object_type_color(obj.object_type.as_deref()))),
            Cell::from(obj.orbit_type.clone().unwrap_or_else(|| "N/A".to_string()))
                .style(Style::default().fg(orbit_color(obj.orbit_type.as_deref()))),
            Cell::from(
                obj.altitude
                    .map_or_else(|| "N/A".to_string(), |altitude| format!("{altitude:.0}")),
            ),
            Cell::from(badge),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(14),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("High Urgency Debris")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    )
    .column_spacing(1);

    f.render_widget(table, area);

    let mut scrollbar_state = ScrollbarState::new(sorted.len())
        .position(row_offset)
        .viewport_content_length(max_rows.min(area.height.saturating_sub(1) as usize));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(Color::Cyan));
    let scroll_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    f.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);
}

fn render_visualization(
    debris: &[DebrisObject],
    camera: &Camera,
    selected: Option<usize>,
    frame_area: Rect,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(8)])
        .split(area);

    let shown = globe::rendered_count(debris.len());
    let header = TextLine::from(vec![
        Span::styled("Total objects: ", Style::default().fg(Color::Gray)),
        Span::styled(
            debris.len().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  •  Displaying: ", Style::default().fg(Color::Gray)),
        Span::styled(
            shown.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        main_layout[0],
    );

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(main_layout[1]);

    render_globe_panel(debris, camera, selected, frame_area, f, content[0]);
    render_viz_side_panel(debris, selected, f, content[1]);
}

fn render_globe_panel(
    debris: &[DebrisObject],
    camera: &Camera,
    selected: Option<usize>,
    frame_area: Rect,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Earth View")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if debris.is_empty() {
        let paragraph = Paragraph::new("No debris objects to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    // Pixel viewport from the browser window, mapped back onto the
    // cell grid so the globe box honors the 900x650 cap and the 3:4
    // aspect regardless of window size. Re-measured every frame, so
    // resizes are picked up at the render loop's native cadence.
    let (window_width, window_height) = window_px_size();
    let (viewport_width, viewport_height) = globe::viewport_size(window_width);
    let cells_w = globe::cells_for_px(viewport_width, window_width, frame_area.width)
        .min(inner.width);
    let cells_h = globe::cells_for_px(viewport_height, window_height, frame_area.height)
        .min(inner.height);

    let globe_area = Rect {
        x: inner.x + (inner.width.saturating_sub(cells_w)) / 2,
        y: inner.y + (inner.height.saturating_sub(cells_h)) / 2,
        width: cells_w,
        height: cells_h,
    };

    let points: Vec<(f64, f64, Option<f64>, &str)> = debris
        .iter()
        .take(globe::MAX_RENDER_POINTS)
        .map(|obj| {
            let (lat, lng) = globe::synthesize_position(obj.id, obj.orbit_type.as_deref());
            (lat, lng, obj.urgency_score, obj.name.as_str())
        })
        .collect();

    let yaw = camera.yaw;
    let pitch = camera.pitch;
    let zoom = camera.zoom;

    f.render_widget(
        ratzilla::ratatui::widgets::canvas::Canvas::default()
            .paint(|ctx| {
                let width = f64::from(globe_area.width);
                let height = f64::from(globe_area.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let radius = width.min(height) / 2.0 * 0.9 * zoom;

                ctx.draw(&ratzilla::ratatui::widgets::canvas::Circle {
                    x: center_x,
                    y: center_y,
                    radius,
                    color: Color::DarkGray,
                });

                for lat_deg in [-60_i32, -30, 0, 30, 60] {
                    let color = if lat_deg == 0 {
                        Color::Gray
                    } else {
                        Color::DarkGray
                    };
                    let samples: Vec<(f64, f64, f64)> = (-180..=180)
                        .step_by(10)
                        .map(|lng| {
                            globe::project_point(f64::from(lat_deg), f64::from(lng), yaw, pitch)
                        })
                        .collect();
                    stroke_front_segments(ctx, &samples, center_x, center_y, radius, color);
                }

                for lng in (-180..180).step_by(60) {
                    let samples: Vec<(f64, f64, f64)> = (-90..=90)
                        .step_by(10)
                        .map(|lat| {
                            globe::project_point(f64::from(lat), f64::from(lng), yaw, pitch)
                        })
                        .collect();
                    stroke_front_segments(
                        ctx,
                        &samples,
                        center_x,
                        center_y,
                        radius,
                        Color::DarkGray,
                    );
                }

                for (index, (lat, lng, score, name)) in points.iter().enumerate() {
                    let (x, y, depth) = globe::project_point(*lat, *lng, yaw, pitch);
                    if depth < 0.0 {
                        continue;
                    }

                    let px = x.mul_add(radius, center_x);
                    let py = y.mul_add(radius, center_y);

                    ctx.draw(&ratzilla::ratatui::widgets::canvas::Circle {
                        x: px,
                        y: py,
                        radius: radius * 0.035,
                        color: color_from_option(urgency::point_color_name(*score)),
                    });

                    if selected == Some(index) {
                        ctx.draw(&ratzilla::ratatui::widgets::canvas::Circle {
                            x: px,
                            y: py,
                            radius: radius * 0.07,
                            color: Color::White,
                        });
                        ctx.print(
                            px,
                            py + radius * 0.12,
                            TextLine::from(Span::styled(
                                (*name).to_string(),
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            )),
                        );
                    }
                }
            })
            .x_bounds([0.0, f64::from(globe_area.width)])
            .y_bounds([0.0, f64::from(globe_area.height)]),
        globe_area,
    );
}

fn stroke_front_segments(
    ctx: &mut ratzilla::ratatui::widgets::canvas::Context<'_>,
    samples: &[(f64, f64, f64)],
    center_x: f64,
    center_y: f64,
    radius: f64,
    color: Color,
) {
    for pair in samples.windows(2) {
        let (x1, y1, d1) = pair[0];
        let (x2, y2, d2) = pair[1];
        if d1 < 0.0 || d2 < 0.0 {
            continue;
        }

        ctx.draw(&ratzilla::ratatui::widgets::canvas::Line {
            x1: x1.mul_add(radius, center_x),
            y1: y1.mul_add(radius, center_y),
            x2: x2.mul_add(radius, center_x),
            y2: y2.mul_add(radius, center_y),
            color,
        });
    }
}

fn render_viz_side_panel(
    debris: &[DebrisObject],
    selected: Option<usize>,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(7),
        ])
        .split(area);

    render_legend(f, panels[0]);
    render_orbit_counts(debris, f, panels[1]);
    render_selected_panel(debris, selected, f, panels[2]);
}

fn render_legend(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Risk Level Legend")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let entries = [
        ("High Risk", "Score > 70", Color::Red),
        ("Medium Risk", "Score 40-70", Color::Rgb(255, 165, 0)),
        ("Low Risk", "Score < 40", Color::Green),
    ];

    let lines: Vec<TextLine<'_>> = entries
        .iter()
        .map(|(label, bounds, color)| {
            TextLine::from(vec![
                Span::styled("● ", Style::default().fg(*color)),
                Span::styled(*label, Style::default().fg(Color::White)),
                Span::styled(format!("  {bounds}"), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

fn render_orbit_counts(debris: &[DebrisObject], f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Orbit Distribution")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let entries = [
        ("LEO (Low Earth Orbit)", "LEO", Color::Blue),
        ("MEO (Medium Earth Orbit)", "MEO", Color::Magenta),
        ("GEO (Geostationary Orbit)", "GEO", Color::LightMagenta),
    ];

    let lines: Vec<TextLine<'_>> = entries
        .iter()
        .map(|(label, key, color)| {
            let count = debris
                .iter()
                .filter(|obj| obj.orbit_type.as_deref() == Some(*key))
                .count();
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(*color)),
                Span::styled(*label, Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("  {count}"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

/// Non-blocking replacement for the old click alert: point details
/// live in a side panel driven by the selection keys.
fn render_selected_panel(
    debris: &[DebrisObject],
    selected: Option<usize>,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Selected Object")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let obj = selected.and_then(|index| {
        debris
            .iter()
            .take(globe::MAX_RENDER_POINTS)
            .nth(index)
    });

    let Some(obj) = obj else {
        let paragraph = Paragraph::new("Press n/p to cycle through globe points")
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    };

    let altitude = obj
        .altitude
        .map_or_else(|| "N/A".to_string(), |altitude| format!("{altitude:.0} km"));
    let urgency = obj
        .urgency_score
        .map_or_else(|| "N/A".to_string(), |score| format!("{score:.1}"));

    let lines = vec![
        TextLine::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Gray)),
            Span::styled(
                obj.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("ID: ", Style::default().fg(Color::Gray)),
            Span::styled(obj.id.to_string(), Style::default().fg(Color::White)),
        ]),
        TextLine::from(vec![
            Span::styled("Orbit: ", Style::default().fg(Color::Gray)),
            Span::styled(
                obj.orbit_type.clone().unwrap_or_else(|| "N/A".to_string()),
                Style::default().fg(Color::White),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Altitude: ", Style::default().fg(Color::Gray)),
            Span::styled(altitude, Style::default().fg(Color::White)),
        ]),
        TextLine::from(vec![
            Span::styled("Urgency: ", Style::default().fg(Color::Gray)),
            Span::styled(
                urgency,
                Style::default().fg(color_from_option(urgency::point_color_name(
                    obj.urgency_score,
                ))),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_about(f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("About ClearOrbit")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let heading = |text: &'static str| {
        TextLine::from(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        heading("Our Mission"),
        TextLine::from(
            "ClearOrbit tracks and monitors space debris to support the safety of \
             active satellites and future missions.",
        ),
        TextLine::from(""),
        heading("What We Track"),
        TextLine::from("● Active satellites, space debris, rocket bodies and mission objects"),
        TextLine::from(""),
        heading("Data Sources"),
        TextLine::from("● CelesTrak TLE data, SGP4 propagation, agency reports, ground radar"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "This dashboard renders a pre-computed snapshot; scoring and propagation \
             happen in the upstream pipeline.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_footer(view_index: usize, f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let tabs = ["Dashboard", "Visualization", "About"];
    let tab_titles = tabs
        .iter()
        .map(|title| TextLine::from(*title))
        .collect::<Vec<_>>();

    let info = TextLine::from(vec![
        Span::styled("1-3/←→", Style::default().fg(Color::Gray)),
        Span::raw(" switch views  "),
        Span::styled("arrows", Style::default().fg(Color::Gray)),
        Span::raw(" rotate/scroll  "),
        Span::styled("+/-", Style::default().fg(Color::Gray)),
        Span::raw(" zoom  "),
        Span::styled("n/p", Style::default().fg(Color::Gray)),
        Span::raw(" select point"),
    ]);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let tabs = ratzilla::ratatui::widgets::Tabs::new(tab_titles)
        .select(view_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    let info_paragraph = Paragraph::new(Text::from(info)).alignment(Alignment::Center);
    f.render_widget(info_paragraph, layout[0]);
    f.render_widget(tabs, layout[1]);
}

fn window_px_size() -> (f64, f64) {
    web_sys::window()
        .and_then(|window| {
            let width = window.inner_width().ok()?.as_f64()?;
            let height = window.inner_height().ok()?.as_f64()?;
            Some((width, height))
        })
        .unwrap_or((1280.0, 720.0))
}

fn color_from_name(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "orange" => Color::Rgb(255, 165, 0),
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        _ => Color::Gray,
    }
}

fn color_from_option(name: Option<&str>) -> Color {
    name.map_or(Color::Gray, color_from_name)
}

fn object_type_color(object_type: Option<&str>) -> Color {
    match object_type {
        Some("Debris") => Color::Red,
        Some("Rocket Body") => Color::Rgb(255, 165, 0),
        _ => Color::Blue,
    }
}

fn orbit_color(orbit_type: Option<&str>) -> Color {
    match orbit_type {
        Some("LEO") => Color::Green,
        Some("MEO") => Color::Yellow,
        _ => Color::Magenta,
    }
}

async fn fetch_debris(store: Rc<RefCell<LoadState>>) {
    match fetch_debris_inner().await {
        Ok(objects) => {
            *store.borrow_mut() = LoadState::Ready(objects);
        }
        Err(message) => {
            web_sys::console::error_1(&message.clone().into());
            *store.borrow_mut() = LoadState::Failed(message);
        }
    }
}

async fn fetch_debris_inner() -> Result<Vec<DebrisObject>, String> {
    let Some(window) = web_sys::window() else {
        return Err("No window available".to_string());
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let Ok(request) = Request::new_with_str_and_init("debris.json", &opts) else {
        return Err("Failed to build debris.json request".to_string());
    };

    let Ok(response_value) =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await
    else {
        return Err("Failed to fetch debris data".to_string());
    };

    let Ok(response) = response_value.dyn_into::<Response>() else {
        return Err("Failed to read response".to_string());
    };

    if !response.ok() {
        return Err(format!(
            "Failed to fetch debris data (HTTP {})",
            response.status()
        ));
    }

    let Ok(json_promise) = response.json() else {
        return Err("Failed to read debris.json body".to_string());
    };

    let Ok(json) = wasm_bindgen_futures::JsFuture::from(json_promise).await else {
        return Err("Failed to read debris.json body".to_string());
    };

    serde_wasm_bindgen::from_value::<Vec<DebrisObject>>(json)
        .map_err(|error| format!("Failed to parse debris.json: {error}"))
}
