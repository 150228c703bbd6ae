//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::features::pomodoro::{Mode, Snapshot};
use crate::input::HELP;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let snapshot = app.snapshot();

    // Create layout: mode tabs, clock, progress, alarm, durations, controls, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode tabs
            Constraint::Min(3),    // Clock
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Alarm banner
            Constraint::Length(1), // Durations
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, &snapshot, chunks[0]);
    render_clock(frame, &snapshot, chunks[1]);
    render_progress(frame, &snapshot, chunks[2]);
    render_alarm(frame, &snapshot, chunks[3]);
    render_durations(frame, &snapshot, app.entry(), chunks[4]);
    render_controls(frame, &snapshot, chunks[5]);
    render_status_bar(frame, app, chunks[6]);
}

const fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Red,
        Mode::Break => Color::Green,
    }
}

/// Render the work/break selector.
fn render_tabs(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let selected = match snapshot.mode {
        Mode::Work => 0,
        Mode::Break => 1,
    };

    let tabs = Tabs::new(vec![Mode::Work.display_name(), Mode::Break.display_name()])
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(mode_color(snapshot.mode))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Focus Flow ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

/// Render the remaining time.
fn render_clock(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    // Vertically center the single line
    let top = area.height.saturating_sub(1) / 2;
    let line_area = Rect {
        y: area.y + top,
        height: area.height.min(1),
        ..area
    };

    let style = if snapshot.running {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let clock = Paragraph::new(snapshot.formatted_time.clone())
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(clock, line_area);
}

/// Render session progress.
fn render_progress(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let progress = snapshot.progress();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(mode_color(snapshot.mode)))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the alarm banner while the alarm sounds.
fn render_alarm(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    if !snapshot.alarm_active {
        return;
    }

    let banner = Paragraph::new("⏰ Time's up!  [a] STOP")
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    frame.render_widget(banner, area);
}

/// Render configured durations and the custom entry field.
fn render_durations(frame: &mut Frame<'_>, snapshot: &Snapshot, entry: Option<&str>, area: Rect) {
    let mut spans = vec![
        Span::styled("Work ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}m", snapshot.work_minutes)),
        Span::styled("  Break ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}m", snapshot.break_minutes)),
        Span::styled("  Set: ", Style::default().fg(Color::DarkGray)),
        Span::raw("[1]25m [2]45m [3]60m "),
    ];

    match entry {
        Some(text) => spans.push(Span::styled(
            format!("[{text}_] min"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        None => spans.push(Span::styled("[c]ustom", Style::default().fg(Color::DarkGray))),
    }

    let durations = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(durations, area);
}

/// Render the control hints.
fn render_controls(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let primary = if snapshot.running { "[s] Pause" } else { "[s] Start" };

    let controls = Paragraph::new(Line::from(vec![
        Span::styled(
            primary,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   [r] Reset   [Tab] Switch mode"),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(controls, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentPlayer;
    use crate::features::pomodoro::{DurationSettings, Engine};
    use crate::session::Session;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn app(work: u32) -> App {
        let durations = DurationSettings::new(work, 5).unwrap();
        let engine = Engine::new(durations, Mode::Work, Box::new(SilentPlayer));
        App::new(Session::new(engine), false)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_initial_state() {
        let screen = draw(&app(25));
        assert!(screen.contains("Focus Flow"));
        assert!(screen.contains("25:00"));
        assert!(screen.contains("[s] Start"));
        assert!(screen.contains("Work 25m"));
        assert!(!screen.contains("Time's up"));
    }

    #[test]
    fn test_renders_running_and_alarm() {
        let mut app = app(1);
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        app.handle_key(press(KeyCode::Char('s'))).unwrap();
        app.advance(Duration::from_secs(10));
        let screen = draw(&app);
        assert!(screen.contains("00:50"));
        assert!(screen.contains("[s] Pause"));

        app.advance(Duration::from_secs(50));
        let screen = draw(&app);
        assert!(screen.contains("Time's up"));
        assert!(screen.contains("01:00"));
    }

    #[test]
    fn test_renders_custom_entry() {
        let mut app = app(25);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE)).unwrap();

        let screen = draw(&app);
        assert!(screen.contains("[4_] min"));
    }
}
