use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::data::DebrisStats;

const ORBIT_LABELS: [&str; 3] = ["LEO", "MEO", "GEO"];
const ORBIT_COLORS: [Color; 3] = [Color::Blue, Color::Magenta, Color::LightMagenta];

pub fn render_orbit_distribution(stats: &DebrisStats, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Orbit Distribution")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chart_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let counts = [stats.leo as u64, stats.meo as u64, stats.geo as u64];

    let bars: Vec<Bar<'_>> = counts
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Bar::default()
                .value(*value)
                .label(TextLine::from(ORBIT_LABELS[index]))
                .style(Style::default().fg(ORBIT_COLORS[index]))
                .value_style(Style::default().fg(Color::White))
        })
        .collect();

    let max_value = counts.iter().copied().max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(Block::default())
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(5);

    f.render_widget(chart, chart_split[0]);

    let total = counts.iter().sum::<u64>().max(1);
    let mut legend_lines = vec![
        TextLine::from(Span::styled("Legend", Style::default().fg(Color::Gray))),
        TextLine::from(""),
    ];

    for (index, label) in ORBIT_LABELS.iter().enumerate() {
        let count = counts[index];
        #[allow(clippy::cast_precision_loss)]
        let percent = (count as f64 / total as f64) * 100.0;
        legend_lines.push(TextLine::from(vec![
            Span::styled(
                "■ ",
                Style::default()
                    .fg(ORBIT_COLORS[index])
                    .add_modifier(Modifier::DIM),
            ),
            Span::styled(
                *label,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::DIM),
            ),
            Span::styled(
                format!("  {count} ({percent:.1}%)"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::DIM),
            ),
        ]));
    }

    let legend = Paragraph::new(Text::from(legend_lines))
        .alignment(ratatui::layout::Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(legend, chart_split[1]);
}
