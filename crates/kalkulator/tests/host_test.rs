//! Integration test: config file -> page -> REPL lines.

use std::time::Duration;

use kalkulator::{app, parse_line, AppConfig, AppError, Command, Overrides, Page};
use kalkulator_core::{CalcMode, Precision};
use kalkulator_ui::MemoryClipboard;

fn temp_config_path() -> std::path::PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("kalkulator_test_{id}.toml"))
}

/// Feeds one REPL line; returns false on `quit`.
fn feed(page: &mut Page, line: &str) -> bool {
    for command in parse_line(line).commands {
        match command {
            Command::Quit => return false,
            Command::Action(action) => {
                page.dispatch(action);
            }
        }
    }
    true
}

fn ready_page(config: &AppConfig, clipboard: MemoryClipboard) -> Page {
    let mut page = Page::new(None);
    page.on_loaded(app::build_calculator(config, clipboard));
    page
}

#[test]
fn test_config_file_drives_calculator() {
    let path = temp_config_path();
    std::fs::write(
        &path,
        "precision = 4\nmode = \"scientific\"\n[preloader]\nenabled = false\n",
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(app::build_preloader(&config).is_none());
    let mut page = ready_page(&config, MemoryClipboard::new());
    assert!(feed(&mut page, "1 / 3 ="));

    let calculator = page.calculator().unwrap();
    assert_eq!(calculator.mode(), CalcMode::Scientific);
    assert_eq!(calculator.engine().display(), "0.3333");
}

#[test]
fn test_missing_config_file() {
    let err = AppConfig::load(&temp_config_path()).unwrap_err();
    assert!(matches!(err, AppError::ConfigRead { .. }));
}

#[test]
fn test_repl_session() {
    let clipboard = MemoryClipboard::new();
    let mut page = ready_page(&AppConfig::default(), clipboard.clone());

    assert!(feed(&mut page, "12 x 0.5 ="));
    assert!(feed(&mut page, "copy history"));
    assert_eq!(clipboard.contents().as_deref(), Some("6"));

    let screen = page.render(false);
    assert!(screen.contains("12 × 0.5 = 6"));
    assert!(screen.contains("Action completed successfully"));

    assert!(feed(&mut page, "c"));
    let calculator = page.calculator().unwrap();
    assert_eq!(calculator.engine().display(), "0");
    assert_eq!(calculator.engine().history().len(), 1);

    assert!(!feed(&mut page, "quit 5"));
}

#[test]
fn test_scientific_tokens_need_scientific_mode() {
    let mut page = ready_page(&AppConfig::default(), MemoryClipboard::new());
    feed(&mut page, "16 sqrt");
    assert_eq!(page.calculator().unwrap().engine().display(), "16");

    feed(&mut page, "mode scientific sqrt");
    assert_eq!(page.calculator().unwrap().engine().display(), "4.00");

    feed(&mut page, "c precision 0 2 ^ 10 =");
    assert_eq!(page.calculator().unwrap().engine().display(), "1024");
}

#[test]
fn test_preloader_page_with_overrides() {
    let mut config = AppConfig::default();
    config.apply(&Overrides {
        precision: Some(Precision::Six),
        min_duration_ms: Some(300),
        reduced_motion: true,
        ..Overrides::default()
    });

    let mut page = Page::new(app::build_preloader(&config));
    assert!(page.render(false).contains("Ridhwan Zakki"));

    page.on_loaded(app::build_calculator(&config, MemoryClipboard::new()));
    page.advance(Duration::from_millis(200));
    assert!(!page.is_ready());
    page.advance(Duration::from_millis(100));
    assert!(page.is_ready());
    assert_eq!(
        page.calculator().unwrap().precision(),
        Precision::Six
    );
}

#[test]
fn test_skip_before_min_duration() {
    let config = AppConfig::default();
    let mut page = Page::new(app::build_preloader(&config));
    page.on_loaded(app::build_calculator(&config, MemoryClipboard::new()));

    let lines = app::spawn_line_reader(std::io::Cursor::new("3 x 3\nS\n=\n")).unwrap();
    page.advance(Duration::from_millis(100));

    let mut fed = 0;
    while !page.is_ready() {
        let line = lines.recv().unwrap().unwrap();
        assert!(feed(&mut page, &line));
        fed += 1;
    }
    // Well inside the 2200 ms minimum, after the second line.
    assert_eq!(fed, 2);
    assert!(page.preloader().is_none());

    for line in &lines {
        assert!(feed(&mut page, &line.unwrap()));
    }
    let calculator = page.calculator().unwrap();
    assert_eq!(calculator.engine().display(), "9");
    assert_eq!(calculator.engine().history().latest(), Some("3 × 3 = 9"));
}
