use crate::{
    country::DisplayEntry,
    time::now,
    ui::{consts::*, state::ProtectedState, types::Phase},
};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{prelude::*, widgets::*};
use std::io::Stdout;
use std::time::Duration;

pub async fn draw_loop(
    state: ProtectedState,
    refresh: chrono::Duration,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), anyhow::Error> {
    let (s, mut r) = tokio::sync::mpsc::channel(1);

    std::thread::spawn(move || read_input(s));

    let mut last_draw = now() - refresh;

    loop {
        let mut lock = state.lock().await;
        let redraw = lock.redraw;

        if redraw {
            lock.redraw = false;
        }

        let phase = lock.phase.clone();
        drop(lock);

        // Redraw on the fixed cadence whether or not anything changed, plus
        // immediately after the cache loads.
        if redraw || last_draw + refresh <= now() {
            let groups = state.groups().await;
            let (past, next) = (groups.past_hour(), groups.next_hour());

            terminal.draw(|f| {
                render_app(&phase, past, next, f);
            })?;

            last_draw = now();
        }

        if r.try_recv().is_ok() {
            break;
        }

        tokio::time::sleep(Duration::new(0, 100)).await;
    }

    Ok(())
}

fn read_input(s: tokio::sync::mpsc::Sender<()>) -> Result<(), anyhow::Error> {
    loop {
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    s.blocking_send(())?;
                    return Ok(());
                }
            }
        }
    }
}

pub fn render_app(
    phase: &Phase,
    past: Vec<DisplayEntry>,
    next: Vec<DisplayEntry>,
    frame: &mut ratatui::Frame<'_, CrosstermBackend<Stdout>>,
) {
    let layout = Layout::default()
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Percentage(50),
                Constraint::Percentage(50),
            ]
            .as_ref(),
        )
        .split(frame.size());

    match phase {
        Phase::Loading => {
            frame.render_widget(
                Paragraph::new(LOADING_MESSAGE).style(*STATUS_STYLE),
                layout[0],
            );
        }
        Phase::Error(message) => {
            frame.render_widget(
                Paragraph::new(message.clone()).style(*ERROR_STYLE),
                layout[0],
            );
        }
        Phase::Ready => {
            frame.render_widget(
                Paragraph::new(format!(" UTC {} — q quits", now().format("%H:%M:%S")))
                    .style(*STATUS_STYLE),
                layout[0],
            );
            frame.render_widget(build_group(PAST_TITLE, past), layout[1]);
            frame.render_widget(build_group(NEXT_TITLE, next), layout[2]);
        }
    }
}

pub fn build_group(title: &str, entries: Vec<DisplayEntry>) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.to_string(), *TITLE_STYLE));

    if entries.is_empty() {
        return Paragraph::new(EMPTY_GROUP)
            .block(block)
            .wrap(Wrap { trim: true });
    }

    let featured = &entries[0];
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} {}", featured.flag(), featured.country()),
                *FEATURED_STYLE,
            ),
            Span::raw("  "),
            Span::styled(featured.time(), *FEATURED_STYLE),
        ]),
        Line::from(""),
    ];

    let others = entries[1..]
        .iter()
        .map(|entry| entry.line())
        .collect::<Vec<String>>()
        .join(" · ");

    if !others.is_empty() {
        lines.push(Line::from(others));
    }

    Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
}
