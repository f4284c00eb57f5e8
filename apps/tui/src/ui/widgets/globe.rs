use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::Frame;

use crate::app::state::GlobeView;
use crate::domain::{risk_band, RiskBand};
use crate::geo::{project_point, RenderPoint};

/// Marker size relative to the globe radius; not data-driven.
const POINT_RADIUS_FACTOR: f64 = 0.035;
const SELECTION_RING_FACTOR: f64 = 0.07;

pub const fn band_color(band: RiskBand) -> Color {
    match band {
        RiskBand::High => Color::Red,
        RiskBand::Medium => Color::Rgb(255, 165, 0),
        RiskBand::Low => Color::Green,
    }
}

/// Globe point color, on the coarse scale. Distinct from the badge
/// tiers: 75 is red here but only High/orange on the badge.
pub fn point_color(score: Option<f64>) -> Color {
    score.map_or(Color::Gray, |score| band_color(risk_band(score)))
}

pub fn render_globe(f: &mut Frame<'_>, area: Rect, points: &[RenderPoint], view: &GlobeView) {
    if area.width < 8 || area.height < 6 {
        return;
    }

    let size = area.width.min(area.height);
    let square = Rect {
        x: area.x + (area.width - size) / 2,
        y: area.y + (area.height - size) / 2,
        width: size,
        height: size,
    };

    let yaw = view.yaw;
    let pitch = view.pitch;
    let zoom = view.zoom;
    let selected = view.selected;

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                let width = f64::from(square.width);
                let height = f64::from(square.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let radius = width.min(height) / 2.0 * 0.9 * zoom;

                ctx.draw(&Circle {
                    x: center_x,
                    y: center_y,
                    radius,
                    color: Color::DarkGray,
                });

                stroke_graticule(ctx, center_x, center_y, radius, yaw, pitch);

                for (index, point) in points.iter().enumerate() {
                    let (x, y, depth) = project_point(point.lat, point.lng, yaw, pitch);
                    if depth < 0.0 {
                        continue;
                    }

                    let px = x.mul_add(radius, center_x);
                    let py = y.mul_add(radius, center_y);

                    ctx.draw(&Circle {
                        x: px,
                        y: py,
                        radius: radius * POINT_RADIUS_FACTOR,
                        color: point_color(point.urgency_score),
                    });

                    if selected == Some(index) {
                        ctx.draw(&Circle {
                            x: px,
                            y: py,
                            radius: radius * SELECTION_RING_FACTOR,
                            color: Color::White,
                        });
                        ctx.print(
                            px,
                            py + radius * 0.12,
                            TextLine::from(Span::styled(
                                point.name.clone(),
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            )),
                        );
                    }
                }
            })
            .x_bounds([0.0, f64::from(square.width)])
            .y_bounds([0.0, f64::from(square.height)]),
        square,
    );
}

/// Equator, parallels and meridians, front hemisphere only.
fn stroke_graticule(
    ctx: &mut Context<'_>,
    center_x: f64,
    center_y: f64,
    radius: f64,
    yaw: f64,
    pitch: f64,
) {
    for lat_deg in [-60_i32, -30, 0, 30, 60] {
        // The equator gets a brighter stroke than the other parallels.
        let color = if lat_deg == 0 {
            Color::Gray
        } else {
            Color::DarkGray
        };
        let samples: Vec<(f64, f64, f64)> = (-180..=180)
            .step_by(10)
            .map(|lng| project_point(f64::from(lat_deg), f64::from(lng), yaw, pitch))
            .collect();
        stroke_front_segments(ctx, &samples, center_x, center_y, radius, color);
    }

    for lng in (-180..180).step_by(60) {
        let samples: Vec<(f64, f64, f64)> = (-90..=90)
            .step_by(10)
            .map(|lat| project_point(f64::from(lat), f64::from(lng), yaw, pitch))
            .collect();
        stroke_front_segments(ctx, &samples, center_x, center_y, radius, Color::DarkGray);
    }
}

fn stroke_front_segments(
    ctx: &mut Context<'_>,
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

        ctx.draw(&CanvasLine {
            x1: x1.mul_add(radius, center_x),
            y1: y1.mul_add(radius, center_y),
            x2: x2.mul_add(radius, center_x),
            y2: y2.mul_add(radius, center_y),
            color,
        });
    }
}

/// Small decorative globe for the dashboard title block: outline,
/// equator and a meridian sweeping with the animation counter.
pub fn render_mini_globe(f: &mut Frame<'_>, area: Rect, animation: f64) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let size = area.width.min(area.height);
    let square = Rect {
        x: area.x + (area.width - size) / 2,
        y: area.y + (area.height - size) / 2,
        width: size,
        height: size,
    };

    let yaw = animation.to_degrees() * 2.0;

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                let width = f64::from(square.width);
                let height = f64::from(square.height);
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let radius = width.min(height) / 2.0 * 0.8;

                ctx.draw(&Circle {
                    x: center_x,
                    y: center_y,
                    radius,
                    color: Color::DarkGray,
                });

                let equator: Vec<(f64, f64, f64)> = (-180..=180)
                    .step_by(15)
                    .map(|lng| project_point(0.0, f64::from(lng), yaw, -15.0))
                    .collect();
                stroke_front_segments(ctx, &equator, center_x, center_y, radius, Color::DarkGray);

                let meridian: Vec<(f64, f64, f64)> = (-90..=90)
                    .step_by(15)
                    .map(|lat| project_point(f64::from(lat), 0.0, yaw, -15.0))
                    .collect();
                stroke_front_segments(ctx, &meridian, center_x, center_y, radius, Color::Cyan);

                ctx.draw(&Circle {
                    x: center_x,
                    y: center_y,
                    radius: radius * 0.06,
                    color: Color::Cyan,
                });
            })
            .x_bounds([0.0, f64::from(square.width)])
            .y_bounds([0.0, f64::from(square.height)]),
        square,
    );
}

#[cfg(test)]
mod tests {
    use super::point_color;
    use crate::domain::classify;
    use crate::ui::widgets::badge::tier_color;
    use ratatui::style::Color;

    #[test]
    fn point_colors_follow_the_coarse_scale() {
        assert_eq!(point_color(Some(75.0)), Color::Red);
        assert_eq!(point_color(Some(70.0)), Color::Rgb(255, 165, 0));
        assert_eq!(point_color(Some(40.0)), Color::Rgb(255, 165, 0));
        assert_eq!(point_color(Some(39.9)), Color::Green);
        assert_eq!(point_color(None), Color::Gray);
    }

    #[test]
    fn globe_and_badge_scales_disagree_at_seventy_five() {
        // The same score is red on the globe but orange on the badge.
        let globe = point_color(Some(75.0));
        let badge = tier_color(classify(75.0));
        assert_eq!(globe, Color::Red);
        assert_eq!(badge, Color::Rgb(255, 165, 0));
        assert_ne!(globe, badge);
    }
}
