//! # Kalkulator
//!
//! Terminal host for the calculator widget: configuration, logging, the
//! REPL lexer and the page that swaps the preloader for the calculator.
//!
//! ```
//! use kalkulator::{app, command, AppConfig, Command, Page};
//! use kalkulator_ui::MemoryClipboard;
//!
//! let config = AppConfig::from_toml_str("precision = 0").unwrap();
//! let mut page = Page::new(None);
//! page.on_loaded(app::build_calculator(&config, MemoryClipboard::new()));
//!
//! for command in command::parse_line("10 / 4 =").commands {
//!     if let Command::Action(action) = command {
//!         page.dispatch(action);
//!     }
//! }
//! assert_eq!(page.calculator().map(|c| c.engine().display()), Some("3"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;

pub use app::Page;
pub use command::{parse_line, Command, ParsedLine};
pub use config::{AppConfig, DisplaySettings, Overrides, PreloaderSettings, ThemeName};
pub use error::{AppError, AppResult};
