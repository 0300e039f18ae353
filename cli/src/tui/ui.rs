use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph},
    Frame,
};
use roi_ledger_core::{DataPoint, SeriesRepository};
use unicode_width::UnicodeWidthStr;

use crate::format::format_number;
use crate::listing::summary_lines;
use crate::tui::app::{App, Field, InputMode, TextInput};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    tests: Color,
    hours: Color,
    error: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    tests: Color::Magenta,
    hours: Color::Green,
    error: Color::Red,
};

const BAR_WIDTH: u16 = 5;

pub fn draw<R: SeriesRepository>(f: &mut Frame, app: &App<R>) {
    let size = f.area();
    let adding = matches!(app.input_mode, InputMode::Adding(_));

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Length(4),                          // Summary cards
            Constraint::Min(8),                             // Charts
            Constraint::Length(if adding { 3 } else { 0 }), // Form
            Constraint::Length(1),                          // Status
            Constraint::Length(1),                          // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("TESTING ROI DASHBOARD")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_cards(f, app, main_chunks[1]);

    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[2]);

    let series = app.ledger.series();
    draw_chart(
        f,
        chart_chunks[0],
        " Automated Tests Growth ",
        series.iter().map(|p| (p, p.tests, p.tests.to_string())),
        THEME.tests,
    );
    draw_chart(
        f,
        chart_chunks[1],
        " Hours Saved Through Automation ",
        // Scaled by ten so fractional hours still get visible bar height.
        series.iter().map(|p| {
            let scaled = (p.hours_saved.max(0.0) * 10.0).round() as u64;
            (p, scaled, format_number(p.hours_saved))
        }),
        THEME.hours,
    );

    if adding {
        draw_form(f, app, main_chunks[3]);
    }

    if let Some(status) = &app.status {
        let color = if status.is_error { THEME.error } else { THEME.hours };
        let line = Paragraph::new(Span::styled(status.text.as_str(), Style::default().fg(color)))
            .alignment(Alignment::Center);
        f.render_widget(line, main_chunks[4]);
    }

    let help = if adding {
        "Tab: Next field | Enter: Submit | Esc: Cancel"
    } else {
        "a: Add data | e: Export | q: Quit"
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[5]);
}

fn draw_cards<R: SeriesRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let cards = summary_lines(&app.ledger.derive_summary());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value), chunk) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        );
        f.render_widget(card, *chunk);
    }
}

fn draw_chart<'a>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    points: impl Iterator<Item = (&'a DataPoint, u64, String)>,
    color: Color,
) {
    let bar_items: Vec<Bar> = points
        .map(|(point, value, text)| {
            Bar::default()
                .label(point.month.as_str())
                .value(value)
                .style(Style::default().fg(color))
                .text_value(text)
        })
        .collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title.to_string());

    // Keep the most recent months when the series is wider than the chart.
    let fits = (area.width.saturating_sub(2) / (BAR_WIDTH + 1)).max(1) as usize;
    let skip = bar_items.len().saturating_sub(fits);

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items[skip..]));

    f.render_widget(chart, area);
}

fn draw_form<R: SeriesRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let fields = [
        (Field::Tests, " Number of Automated Tests ", &app.tests_input, chunks[0]),
        (Field::Time, " Manual Test Time (hours per test) ", &app.time_input, chunks[1]),
    ];

    for (field, title, input, chunk) in fields {
        let active = app.input_mode == InputMode::Adding(field);
        let border = if active { THEME.primary } else { THEME.muted };
        let widget = Paragraph::new(input.value.as_str()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(widget, chunk);

        if active {
            place_cursor(f, input, chunk);
        }
    }
}

fn place_cursor(f: &mut Frame, input: &TextInput, area: Rect) {
    let offset = input.before_cursor().width() as u16;
    let x = (area.x + 1 + offset).min(area.x + area.width.saturating_sub(2));
    f.set_cursor_position((x, area.y + 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use roi_ledger_core::{InMemoryStore, Ledger, StoreSeriesRepository};
    use std::path::PathBuf;

    fn render(app: &App<StoreSeriesRepository<InMemoryStore>>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_dashboard_shows_cards_and_charts() {
        let ledger = Ledger::initialize(StoreSeriesRepository::new(InMemoryStore::new()));
        let app = App::new(ledger, PathBuf::from("unused.json"));
        let screen = render(&app);

        assert!(screen.contains("Current Tests"));
        assert!(screen.contains("$45,000"));
        assert!(screen.contains("Automated Tests Growth"));
        assert!(screen.contains("Hours Saved Through Automation"));
    }

    #[test]
    fn test_form_visible_while_adding() {
        let ledger = Ledger::initialize(StoreSeriesRepository::new(InMemoryStore::new()));
        let mut app = App::new(ledger, PathBuf::from("unused.json"));
        app.enter_add_mode();
        let screen = render(&app);

        assert!(screen.contains("Number of Automated Tests"));
        assert!(screen.contains("Esc: Cancel"));
    }
}
