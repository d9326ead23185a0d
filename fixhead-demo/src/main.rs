mod paths;
mod register;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use fixhead::{ConfigError, FixedHeaderError, Markers};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{Declarations, Document, Element, Size, Style, Terminal};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "fixhead-demo", about = "Scroll an attendance register under a pinned header")]
struct Args {
    /// Number of students
    #[arg(long, default_value_t = 60)]
    rows: usize,

    /// Number of weekly attendance columns
    #[arg(long, default_value_t = 20)]
    weeks: usize,

    /// Marker class overrides (TOML). Defaults to markers.toml in the config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file. Defaults to latest.log in the cache dir.
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    FixedHeader(#[from] FixedHeaderError),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Ids the event loop scrolls and syncs.
struct Register {
    table: String,
    content: String,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), DemoError> {
    init_logging(args.log.clone())?;
    let markers = load_markers(args.config.clone())?;
    log::info!(
        "[demo] {} students x {} weeks, markers {:?}",
        args.rows,
        args.weeks,
        markers
    );

    let mut terminal = Terminal::new()?;
    let (width, height) = terminal.size()?;
    let mut doc = Document::with_stylesheet(
        page(&args, &markers),
        width,
        height,
        stylesheet(&markers),
    );

    let wrapped = fixhead::wrap_all(&mut doc, &markers)?;
    let mirrors = fixhead::mirror_all(&mut doc, &markers)?;
    log::debug!("[demo] wrapped {} tables, mirrored {}", wrapped.len(), mirrors.len());

    let Some(ids) = wrapped
        .into_iter()
        .find(|w| w.table == register::TABLE_ID)
        .map(|w| Register {
            table: w.table,
            content: w.content,
        })
    else {
        return Err(FixedHeaderError::TableNotFound(register::TABLE_ID.to_string()).into());
    };

    event_loop(&mut terminal, &mut doc, &ids, &markers)
}

fn event_loop(
    terminal: &mut Terminal,
    doc: &mut Document,
    register: &Register,
    markers: &Markers,
) -> Result<(), DemoError> {
    loop {
        terminal.draw(doc)?;

        for event in terminal.poll(Duration::from_millis(250))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(&key) {
                        log::info!("[demo] quit");
                        return Ok(());
                    }
                    let (dx, dy) = scroll_delta(key.code, page_height(doc, register));
                    if (dx, dy) != (0, 0) && doc.scroll_by(&register.content, dx, dy) {
                        fixhead::sync_scroll(doc, &register.table, markers)?;
                    }
                }
                Event::Resize(width, height) => {
                    doc.resize(width, height);
                    fixhead::resync_widths(doc, &register.table, markers)?;
                    doc.clamp_scroll(&register.content);
                    fixhead::sync_scroll(doc, &register.table, markers)?;
                }
                _ => {}
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}

/// Visible rows of the content region, less one for the pinned header.
fn page_height(doc: &Document, register: &Register) -> i16 {
    let rows = doc
        .layout()
        .viewport_size(&register.content)
        .map_or(1, |(_, height)| height.saturating_sub(1).max(1));
    i16::try_from(rows).unwrap_or(i16::MAX)
}

fn scroll_delta(code: KeyCode, page: i16) -> (i16, i16) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => (0, -1),
        KeyCode::Down | KeyCode::Char('j') => (0, 1),
        KeyCode::Left | KeyCode::Char('h') => (-4, 0),
        KeyCode::Right | KeyCode::Char('l') => (4, 0),
        KeyCode::PageUp => (0, -page),
        KeyCode::PageDown => (0, page),
        KeyCode::Home => (-i16::MAX, -i16::MAX),
        KeyCode::End => (0, i16::MAX),
        _ => (0, 0),
    }
}

fn page(args: &Args, markers: &Markers) -> Element {
    Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(Element::text("Attendance register").class("title"))
        .child(register::build(args.rows, args.weeks, markers))
        .child(
            Element::text("arrows/hjkl scroll  PgUp/PgDn page  Home/End jump  q quit")
                .class("hint"),
        )
}

fn stylesheet(markers: &Markers) -> tabledom::Stylesheet {
    fixhead::default_stylesheet(markers)
        .rule("title", Declarations::new().style(Style::new().bold()))
        .rule("hint", Declarations::new().style(Style::new().dim()))
}

fn init_logging(path: Option<PathBuf>) -> Result<(), DemoError> {
    let Some(path) = path.or_else(paths::log_file) else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

fn load_markers(path: Option<PathBuf>) -> Result<Markers, ConfigError> {
    if let Some(path) = path {
        return Markers::load(path);
    }
    match paths::markers_file() {
        Some(path) if path.exists() => {
            log::debug!("[demo] markers from {}", path.display());
            Markers::load(path)
        }
        _ => Ok(Markers::default()),
    }
}
