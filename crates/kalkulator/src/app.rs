//! # Page Host
//!
//! The page shows the preloader until it completes, then the calculator.
//! The calculator is built off the frame loop by a loader thread and
//! handed over on a channel; its arrival is the "page loaded" signal.
//! Input lines are read on their own thread so the preloader can be
//! skipped while it is up.

use std::io::{self, BufRead};
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use kalkulator_ui::{
    Action, CalculatorWidget, Clipboard, InputState, Preloader, Rect, TextCanvas, UIRenderer,
    Widget, WidgetResponse,
};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Frame time of the preloader loop (60 fps).
pub const FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Builds the calculator described by `config`.
#[must_use]
pub fn build_calculator(config: &AppConfig, clipboard: impl Clipboard + 'static) -> CalculatorWidget {
    CalculatorWidget::new(clipboard)
        .with_mode(config.mode)
        .with_precision(config.precision)
        .with_theme(config.display.theme.theme())
        .with_width(f32::from(config.display.width))
}

/// Builds the preloader described by `config`, if enabled.
#[must_use]
pub fn build_preloader(config: &AppConfig) -> Option<Preloader> {
    config.preloader.enabled.then(|| {
        Preloader::new(config.preloader.to_preloader_config())
            .with_theme(config.display.theme.theme())
            .with_width(f32::from(config.display.width))
    })
}

/// Runs `build` on a loader thread and returns the channel it reports on.
///
/// # Errors
///
/// Returns [`AppError::Terminal`] if the thread cannot be spawned.
pub fn spawn_loader<F>(build: F) -> AppResult<Receiver<CalculatorWidget>>
where
    F: FnOnce() -> CalculatorWidget + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded(1);
    std::thread::Builder::new()
        .name("kalkulator-loader".into())
        .spawn(move || {
            let calculator = build();
            if tx.send(calculator).is_err() {
                tracing::debug!("page closed before loading finished");
            }
        })?;
    Ok(rx)
}

/// Reads lines from `reader` on a thread and forwards them.
///
/// The channel disconnects after EOF or the first read error, which is
/// forwarded as the last item.
///
/// # Errors
///
/// Returns [`AppError::Terminal`] if the thread cannot be spawned.
pub fn spawn_line_reader<R>(reader: R) -> AppResult<Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::unbounded();
    std::thread::Builder::new()
        .name("kalkulator-input".into())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Paints `widget` onto a fresh canvas and serializes it.
#[must_use]
pub fn render_widget(widget: &dyn Widget, color: bool) -> String {
    let mut commands = Vec::new();
    widget.render(&mut commands);

    let (width, height) = widget.min_size();

    let mut renderer = UIRenderer::new();
    renderer.begin_frame();
    renderer.push_clip(Rect::new(0.0, 0.0, width, height));
    renderer.extend(commands);
    renderer.pop_clip();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut canvas = TextCanvas::new(width.max(0.0) as usize, height.max(0.0) as usize);
    canvas.paint_batches(renderer.end_frame());

    if color {
        canvas.to_ansi_string()
    } else {
        canvas.to_plain_string()
    }
}

/// The landing page: preloader, then calculator.
pub struct Page {
    preloader: Option<Preloader>,
    calculator: Option<CalculatorWidget>,
    /// Actions received before the calculator was shown.
    backlog: Vec<Action>,
}

impl Page {
    /// Creates a page that is still loading.
    ///
    /// Without a preloader the page becomes ready as soon as the
    /// calculator arrives.
    #[must_use]
    pub fn new(preloader: Option<Preloader>) -> Self {
        Self {
            preloader,
            calculator: None,
            backlog: Vec::new(),
        }
    }

    /// Returns true once the calculator is shown.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.calculator.is_some() && self.preloader.is_none()
    }

    /// Returns the calculator, once loaded.
    #[must_use]
    pub fn calculator(&self) -> Option<&CalculatorWidget> {
        self.calculator.as_ref()
    }

    /// Returns the preloader while it is shown.
    #[must_use]
    pub fn preloader(&self) -> Option<&Preloader> {
        self.preloader.as_ref()
    }

    /// Hands over the loaded calculator.
    pub fn on_loaded(&mut self, calculator: CalculatorWidget) {
        tracing::debug!("calculator loaded");
        self.calculator = Some(calculator);
        if let Some(preloader) = self.preloader.as_mut() {
            preloader.notify_loaded();
        }
        self.release_preloader();
    }

    /// Takes the calculator from the loader if it has arrived.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LoaderGone`] if the loader exited without
    /// sending.
    pub fn poll_loader(&mut self, loader: &Receiver<CalculatorWidget>) -> AppResult<()> {
        if self.calculator.is_some() {
            return Ok(());
        }
        match loader.try_recv() {
            Ok(calculator) => {
                self.on_loaded(calculator);
                Ok(())
            }
            Err(TryRecvError::Empty) => Ok(()),
            Err(TryRecvError::Disconnected) => Err(AppError::LoaderGone),
        }
    }

    /// Routes one action.
    ///
    /// While the preloader is up [`Action::Skip`] skips it. Any other
    /// action received before the calculator is shown is queued and
    /// replayed once it is; those calls return false.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if let Some(preloader) = self.preloader.as_mut() {
            if action == Action::Skip {
                let skipped = preloader.skip();
                self.release_preloader();
                return skipped;
            }
        }
        let ready = self.preloader.is_none();
        match self.calculator.as_mut() {
            Some(calculator) if ready => calculator.dispatch(action),
            _ => {
                if action != Action::Skip {
                    tracing::debug!(?action, "queued until ready");
                    self.backlog.push(action);
                }
                false
            }
        }
    }

    /// Advances the preloader clock without input.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(preloader) = self.preloader.as_mut() {
            preloader.advance(dt);
        }
        self.release_preloader();
    }

    /// Feeds one frame of input to whichever widget is shown.
    pub fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let response = if let Some(preloader) = self.preloader.as_mut() {
            preloader.update(input, dt)
        } else if let Some(calculator) = self.calculator.as_mut() {
            calculator.update(input, dt)
        } else {
            WidgetResponse::default()
        };
        self.release_preloader();
        response
    }

    /// Renders whichever widget is shown.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        if let Some(preloader) = &self.preloader {
            render_widget(preloader, color)
        } else if let Some(calculator) = &self.calculator {
            render_widget(calculator, color)
        } else {
            String::new()
        }
    }

    /// Drops the preloader once it is done and the calculator is here,
    /// then replays the backlog.
    fn release_preloader(&mut self) {
        let done = self.preloader.as_ref().map_or(true, Preloader::is_done);
        let Some(calculator) = self.calculator.as_mut() else {
            return;
        };
        if !done {
            return;
        }
        if self.preloader.take().is_some() {
            tracing::info!("page ready");
        }
        for action in self.backlog.drain(..) {
            calculator.dispatch(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalkulator_core::Digit;
    use kalkulator_ui::{MemoryClipboard, PreloaderConfig};

    fn calculator() -> CalculatorWidget {
        CalculatorWidget::new(MemoryClipboard::new())
    }

    fn quick_preloader() -> Preloader {
        Preloader::new(PreloaderConfig {
            min_duration: Duration::from_millis(400),
            ..PreloaderConfig::default()
        })
    }

    #[test]
    fn test_ready_without_preloader() {
        let mut page = Page::new(None);
        assert!(!page.is_ready());
        page.on_loaded(calculator());
        assert!(page.is_ready());
    }

    #[test]
    fn test_waits_for_min_duration() {
        let mut page = Page::new(Some(quick_preloader()));
        page.on_loaded(calculator());

        page.advance(Duration::from_millis(300));
        assert!(!page.is_ready());
        // max(0, 400 - 200) + 180
        page.advance(Duration::from_millis(80));
        assert!(page.is_ready());
    }

    #[test]
    fn test_actions_queued_until_ready() {
        let mut page = Page::new(Some(quick_preloader()));
        page.on_loaded(calculator());

        assert!(!page.dispatch(Action::Digit(Digit::new(4).unwrap())));
        assert!(page.dispatch(Action::Skip));
        assert!(page.is_ready());
        assert_eq!(page.calculator().unwrap().engine().display(), "4");

        assert!(page.dispatch(Action::Clear));
        assert!(!page.dispatch(Action::Skip));
    }

    #[test]
    fn test_skip_before_calculator_arrives() {
        let mut page = Page::new(Some(quick_preloader()));
        assert!(page.dispatch(Action::Skip));
        assert!(!page.dispatch(Action::Digit(Digit::new(9).unwrap())));
        assert!(!page.is_ready());

        page.on_loaded(calculator());
        assert!(page.is_ready());
        assert_eq!(page.calculator().unwrap().engine().display(), "9");
    }

    #[test]
    fn test_line_reader_forwards_until_eof() {
        let input = std::io::Cursor::new("1 + 2\nskip\n");
        let lines: Vec<String> = spawn_line_reader(input)
            .unwrap()
            .iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines, ["1 + 2", "skip"]);
    }

    #[test]
    fn test_loader_channel() {
        let mut page = Page::new(None);
        let loader = spawn_loader(calculator).unwrap();

        for _ in 0..1000 {
            page.poll_loader(&loader).unwrap();
            if page.is_ready() {
                break;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(page.is_ready());
        assert!(page.render(false).contains("Zakrenz Simple Calculator"));
    }
}
