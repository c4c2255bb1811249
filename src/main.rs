//! chronos-landing: the Chronos landing page in the terminal.
#![allow(clippy::multiple_crate_versions)]

use chronos_landing::{app_state, config, formats, input, ui};
use clap::Parser;
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "chronos-landing")]
#[command(about = "The Chronos landing page, in your terminal", long_about = None)]
struct Args {
    /// Markdown page to render instead of the embedded copy
    #[arg(value_name = "PATH")]
    page: Option<PathBuf>,

    /// Print the parsed section outline as JSON and exit
    #[arg(long)]
    outline: bool,
}

fn main() -> Result<(), input::PageError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let cfg = config::Config::load();

    let source = input::load_page(args.page.as_deref())?;
    let format = formats::markdown::MarkdownFormat;
    let sections = input::extract_sections(&source, &format)?;

    if args.outline {
        let json = serde_json::to_string_pretty(&sections).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let app = app_state::AppState::new(&source, sections, &cfg, 0);
    run_tui(app, &cfg)?;
    Ok(())
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    // Release both pipelines before giving the screen back, whatever the
    // loop's outcome.
    app.dispose();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    let tick = Duration::from_millis(cfg.frame_interval_ms);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                // The next draw re-measures the content area.
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
