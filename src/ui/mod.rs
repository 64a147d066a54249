mod input;
mod render;
mod state;

use crate::app::AppState;
use crate::common::time::{Clock, SystemClock};
use crate::storage::{self, PersistedConfig};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{QueueableCommand, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use input::{
    handle_confirm_delete_key, handle_help_key, handle_normal_key, handle_prompt_key,
    handle_search_key,
};
use render::{
    draw_confirm_delete_popup, draw_footer, draw_header, draw_help_popup, draw_main,
    draw_terminal_too_small,
};
use state::{InputMode, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

pub fn run_ui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let clock = SystemClock;
    let mut input_mode = InputMode::Normal;
    let mut input_buffer = String::new();
    let mut should_quit = false;
    let mut last_tick = Instant::now();

    while !should_quit {
        let now = clock.now();

        terminal.draw(|frame| {
            let size = frame.area();

            // Check minimum terminal size
            if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
                draw_terminal_too_small(frame, size);
                return;
            }

            // Main layout: Header, Content, Input (optional), Footer
            let mut constraints = vec![
                Constraint::Length(1), // Header
                Constraint::Min(10),   // Content
            ];
            if input_mode.uses_input_bar() {
                constraints.push(Constraint::Length(3)); // Input bar
            }
            constraints.push(Constraint::Length(1)); // Footer

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(size);

            draw_header(frame, chunks[0], &app);

            draw_main(frame, chunks[1], &app, now);

            let footer_idx = if input_mode.uses_input_bar() {
                let input = Paragraph::new(Line::from(vec![
                    Span::styled(input_mode.prompt(), Style::default().fg(Color::Yellow)),
                    Span::raw(&input_buffer),
                    Span::styled("█", Style::default().fg(Color::Gray)),
                ]))
                .style(Style::default().bg(Color::DarkGray));
                frame.render_widget(input, chunks[2]);
                3
            } else {
                2
            };

            draw_footer(frame, chunks[footer_idx], input_mode, app.view_mode);

            match input_mode {
                InputMode::Help => draw_help_popup(frame, size),
                InputMode::ConfirmDelete => draw_confirm_delete_popup(frame, size, &app),
                _ => {}
            }
        })?;

        // Every ticked redraw recomputes the elapsed and cost readouts; at
        // the default 1 Hz the timers advance once per second, and stopping
        // the loop stops all periodic work.
        let tick_rate = Duration::from_secs_f64(1.0 / f64::from(app.global.ui_refresh_hz));
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            match input_mode {
                InputMode::Normal => {
                    if handle_normal_key(key, &mut app, &mut input_mode, &mut input_buffer) {
                        should_quit = true;
                    }
                }
                InputMode::Help => handle_help_key(key, &mut input_mode),
                InputMode::Search => handle_search_key(key, &mut app, &mut input_mode),
                InputMode::ConfirmDelete => {
                    handle_confirm_delete_key(key, &mut app, &mut input_mode)
                }
                InputMode::EditField(_) | InputMode::Company => {
                    handle_prompt_key(key, &mut app, &mut input_mode, &mut input_buffer);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    // Rates and company name survive restarts; plug records do not.
    let _ = storage::save(&PersistedConfig::new(app.global.clone()));

    cleanup_terminal(&mut terminal)?;
    Ok(())
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().queue(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    terminal.backend_mut().flush()?;
    Ok(())
}
