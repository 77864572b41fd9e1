//! # Kalkulator UI
//!
//! Widgets for the calculator page, drawn on a character grid:
//! - A calculator card with keypad, display, history panel and notices
//! - A loading screen with an eased progress bar and typewriter caption
//! - Keyboard shortcuts and mouse hit testing
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     UI PIPELINE                        │
//! ├────────────────────────────────────────────────────────┤
//! │  Input Events → Widget → Layout → Render Commands      │
//! │       ↓            ↓        ↓            ↓             │
//! │    Keymap      Engine   Hit Testing   TextCanvas       │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use kalkulator_ui::{CalculatorWidget, MemoryClipboard, TextCanvas, UIRenderer, Widget};
//!
//! let calculator = CalculatorWidget::new(MemoryClipboard::new());
//! let mut renderer = UIRenderer::new();
//! let mut commands = Vec::new();
//! calculator.render(&mut commands);
//!
//! renderer.begin_frame();
//! renderer.extend(commands);
//! let (width, height) = calculator.min_size();
//! let mut canvas = TextCanvas::new(width as usize, height as usize);
//! canvas.paint_batches(renderer.end_frame());
//! assert!(canvas.to_plain_string().contains("Zakrenz Simple Calculator"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod action;
pub mod animation;
pub mod canvas;
pub mod clipboard;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use action::Action;
pub use animation::{Animation, Easing};
pub use canvas::TextCanvas;
pub use clipboard::{Clipboard, MemoryClipboard};
pub use input::{InputState, Key, Keymap, MouseButton};
pub use layout::{Grid, Layout, Rect};
pub use render::{RenderCommand, UIBatch, UIRenderer};
pub use style::{Color, Theme};
pub use widget::{CalculatorWidget, Preloader, PreloaderConfig, Widget, WidgetResponse};
