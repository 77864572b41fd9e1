//! Widget system for UI components.
//!
//! Two top-level widgets make up the page: the [`Preloader`] shown while
//! loading and the [`CalculatorWidget`] shown afterwards.

mod calculator;
mod core;
mod dialog;
mod notice;
mod preloader;

pub use calculator::{CalculatorWidget, DEFAULT_WIDTH, MIN_WIDTH};
pub use core::{Widget, WidgetId, WidgetResponse, WidgetState};
pub use dialog::{AboutDialog, ABOUT_TITLE};
pub use notice::{Notice, NoticeManager, CLEAR_NOTICE_SECS, COPY_NOTICE_SECS};
pub use preloader::{
    Preloader, PreloaderConfig, COMPLETE_DELAY, COMPLETE_LEAD, DEFAULT_MIN_DURATION,
};
