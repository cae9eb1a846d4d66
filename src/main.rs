use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use formations_tui::app::{App, InputMode, ViewMode};
use formations_tui::config::Config;
use formations_tui::{components, event, theme, tui};

/// Browse the formations catalog as a filtered list or a month calendar.
#[derive(Parser)]
#[command(name = "formations-tui")]
#[command(version)]
struct Args {
    /// Dataset to load (JSON array of formations)
    #[arg(long, env = "FORMATIONS_DATA")]
    data: Option<PathBuf>,

    /// Config file (defaults to the per-user config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log file (the terminal belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    init_logging(&config.log_path(args.log_file.clone()), &args.log_level)?;
    theme::init(config.theme.clone().into_theme());

    let data_path = config.data_path(args.data.clone());
    info!(data = %data_path.display(), "starting formations-tui v{}", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(data_path);
    app.load_dataset().await;

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn init_logging(path: &std::path::Path, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("formations_tui={}", level.to_lowercase())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| components::draw(frame, app))?;

        if let Some(key) = event::next_key_press(Duration::from_millis(250))? {
            // Clear status message on any key
            app.status_message = None;

            // Help overlay takes priority
            if app.show_help {
                if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                    app.show_help = false;
                }
                continue;
            }

            match app.input_mode {
                InputMode::Search => handle_search_input(app, key.code),
                InputMode::Filters => handle_filter_input(app, key.code),
                InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
            }
        }
    }

    debug!("leaving");
    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Esc, _) => {
            if app.day_detail.is_some() {
                app.close_day_detail();
            } else {
                app.running = false;
            }
        }
        (KeyCode::Char('1'), _) => app.on_view_switch(ViewMode::List),
        (KeyCode::Char('2'), _) => app.on_view_switch(ViewMode::Calendar),
        (KeyCode::Tab, _) => app.on_view_switch(app.view_mode.toggled()),
        (KeyCode::Char('f'), _) => app.input_mode = InputMode::Filters,
        (KeyCode::Char('/'), _) => {
            app.active_filter = formations_tui::filter::FilterField::Search;
            app.input_mode = InputMode::Search;
        }
        (KeyCode::Char('x'), _) => app.reset_filters(),
        (KeyCode::Char('o'), _) => app.open_selected_link(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => match app.view_mode {
            ViewMode::List => handle_list_input(app, code),
            ViewMode::Calendar => handle_calendar_input(app, code),
        },
    }
}

fn handle_list_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.next_item(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_item(),
        KeyCode::Enter => app.open_selected_link(),
        _ => {}
    }
}

fn handle_calendar_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.move_selected_day(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selected_day(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selected_day(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_selected_day(7),
        KeyCode::Char('[') => app.on_month_change(-1),
        KeyCode::Char(']') => app.on_month_change(1),
        KeyCode::Char('t') => app.go_to_today(),
        KeyCode::Char('n') => app.next_item(),
        KeyCode::Char('p') => app.prev_item(),
        KeyCode::Enter => {
            let date = app.selected_date;
            if !app.on_day_click(date) {
                app.status_message = Some("Aucun événement ce jour".to_string());
            }
        }
        _ => {}
    }
}

fn handle_filter_input(app: &mut App, code: KeyCode) {
    use formations_tui::filter::FilterField;

    match code {
        KeyCode::Esc | KeyCode::Char('f') => app.input_mode = InputMode::Normal,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            app.active_filter = app.active_filter.prev()
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            app.active_filter = app.active_filter.next()
        }
        KeyCode::Down | KeyCode::Char('j') => app.cycle_filter(1),
        KeyCode::Up | KeyCode::Char('k') => app.cycle_filter(-1),
        KeyCode::Char('x') => app.reset_filters(),
        KeyCode::Enter | KeyCode::Char('/') => {
            app.active_filter = FilterField::Search;
            app.input_mode = InputMode::Search;
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_input(c),
        _ => {}
    }
}
