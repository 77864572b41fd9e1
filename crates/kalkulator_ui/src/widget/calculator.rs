//! The calculator card.
//!
//! Owns an [`Engine`] plus the presentation state around it: mode,
//! history panel, notices and the about dialog. Layout is a pure function
//! of that state, so hit testing and rendering always agree.

use kalkulator_core::{number, CalcMode, Digit, Engine, Operator, Precision, ScientificFn};

use super::core::{Widget, WidgetId, WidgetResponse, WidgetState};
use super::dialog::AboutDialog;
use super::notice::{NoticeManager, CLEAR_NOTICE_SECS, COPY_NOTICE_SECS, NOTICE_HEIGHT};
use crate::action::Action;
use crate::clipboard::Clipboard;
use crate::input::{InputState, Key, Keymap, MouseButton};
use crate::layout::{Alignment, Grid, Layout, Rect};
use crate::render::{RenderCommand, TextAlign};
use crate::style::Theme;

/// Default card width in cells.
pub const DEFAULT_WIDTH: f32 = 44.0;
/// Narrowest usable card.
pub const MIN_WIDTH: f32 = 42.0;

const TITLE: &str = "Zakrenz Simple Calculator";
const BADGE: &str = "[Modern UI]";
const SUBTITLE: &str = "For simple everyday calculations";
const EMPTY_HISTORY: &str = "No calculations yet";

const BUTTON_HEIGHT: f32 = 3.0;

/// Keypad rows: label, action, column span.
const KEYPAD: [&[(&str, KeypadKey, u16)]; 5] = [
    &[
        ("C", KeypadKey::Clear, 1),
        ("+/-", KeypadKey::Sign, 1),
        ("%", KeypadKey::Percent, 1),
        ("÷", KeypadKey::Op(Operator::Divide), 1),
    ],
    &[
        ("7", KeypadKey::Digit(7), 1),
        ("8", KeypadKey::Digit(8), 1),
        ("9", KeypadKey::Digit(9), 1),
        ("×", KeypadKey::Op(Operator::Multiply), 1),
    ],
    &[
        ("4", KeypadKey::Digit(4), 1),
        ("5", KeypadKey::Digit(5), 1),
        ("6", KeypadKey::Digit(6), 1),
        ("-", KeypadKey::Op(Operator::Subtract), 1),
    ],
    &[
        ("1", KeypadKey::Digit(1), 1),
        ("2", KeypadKey::Digit(2), 1),
        ("3", KeypadKey::Digit(3), 1),
        ("+", KeypadKey::Op(Operator::Add), 1),
    ],
    &[
        ("0", KeypadKey::Digit(0), 2),
        (".", KeypadKey::Decimal, 1),
        ("=", KeypadKey::Equals, 1),
    ],
];

/// Scientific rows, shown in scientific mode only.
const SCIENTIFIC: [[(&str, KeypadKey); 4]; 2] = [
    [
        ("sin", KeypadKey::Func(ScientificFn::Sin)),
        ("cos", KeypadKey::Func(ScientificFn::Cos)),
        ("tan", KeypadKey::Func(ScientificFn::Tan)),
        ("√", KeypadKey::Func(ScientificFn::Sqrt)),
    ],
    [
        ("log", KeypadKey::Func(ScientificFn::Log10)),
        ("ln", KeypadKey::Func(ScientificFn::Ln)),
        ("x²", KeypadKey::Func(ScientificFn::Square)),
        ("xʸ", KeypadKey::Op(Operator::Power)),
    ],
];

/// Const-friendly stand-in for [`Action`] in the keypad tables.
#[derive(Debug, Clone, Copy)]
enum KeypadKey {
    Digit(u8),
    Decimal,
    Op(Operator),
    Func(ScientificFn),
    Equals,
    Clear,
    Sign,
    Percent,
}

impl KeypadKey {
    fn action(self) -> Option<Action> {
        Some(match self {
            Self::Digit(value) => Action::Digit(Digit::new(value)?),
            Self::Decimal => Action::Decimal,
            Self::Op(operator) => Action::Operator(operator),
            Self::Func(function) => Action::Function(function),
            Self::Equals => Action::Calculate,
            Self::Clear => Action::Clear,
            Self::Sign => Action::ToggleSign,
            Self::Percent => Action::Percent,
        })
    }

    fn kind(self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonKind::Outline,
            Self::Equals => ButtonKind::Primary,
            _ => ButtonKind::Secondary,
        }
    }
}

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonKind {
    /// Filled with the foreground color.
    Primary,
    /// Filled with the panel color.
    Secondary,
    /// Bordered, surface background.
    Outline,
    /// Bracketed text, no box.
    Link,
}

/// A clickable region.
#[derive(Debug, Clone)]
struct Button {
    rect: Rect,
    label: String,
    action: Action,
    kind: ButtonKind,
}

/// Where every section of the card sits for the current state.
#[derive(Debug, Clone)]
struct Frame {
    bounds: Rect,
    header: Rect,
    notice: Option<Rect>,
    last_result_card: Rect,
    history_card: Rect,
    mode_selector: Rect,
    precision_selector: Rect,
    history_panel: Option<Rect>,
    display: Rect,
    buttons: Vec<Button>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Notice,
    Cards,
    Selectors,
    Toolbar,
    HistoryPanel,
    Display,
    Scientific,
    Keypad,
    About,
}

/// Interactive calculator widget.
pub struct CalculatorWidget {
    state: WidgetState,
    engine: Engine,
    mode: CalcMode,
    show_history: bool,
    notices: NoticeManager,
    about: AboutDialog,
    clipboard: Box<dyn Clipboard>,
    keymap: Keymap,
    theme: Theme,
    width: f32,
}

impl CalculatorWidget {
    /// Creates a calculator in standard mode that copies into `clipboard`.
    #[must_use]
    pub fn new(clipboard: impl Clipboard + 'static) -> Self {
        Self {
            state: WidgetState::new(WidgetId::new(1)),
            engine: Engine::new(),
            mode: CalcMode::default(),
            show_history: false,
            notices: NoticeManager::new(),
            about: AboutDialog::new(),
            clipboard: Box::new(clipboard),
            keymap: Keymap,
            theme: Theme::default(),
            width: DEFAULT_WIDTH,
        }
    }

    /// Sets the starting mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CalcMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the starting precision.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.engine.set_precision(precision);
        self
    }

    /// Sets the color theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the card width in cells (at least [`MIN_WIDTH`]).
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(MIN_WIDTH).floor();
        self
    }

    /// Returns the engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> CalcMode {
        self.mode
    }

    /// Returns the active precision.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.engine.precision()
    }

    /// Returns true while the history panel is shown.
    #[must_use]
    pub fn history_visible(&self) -> bool {
        self.show_history
    }

    /// Returns the notices.
    #[must_use]
    pub fn notices(&self) -> &NoticeManager {
        &self.notices
    }

    /// Returns true while the about dialog is shown.
    #[must_use]
    pub fn about_open(&self) -> bool {
        self.about.is_open()
    }

    /// Applies one action.
    ///
    /// Returns false if the action was rejected or does not apply here.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if action.requires_scientific() && !self.mode.allows_scientific() {
            tracing::warn!(?action, mode = %self.mode, "scientific key outside scientific mode");
            return false;
        }
        tracing::debug!(?action, "dispatch");

        match action {
            Action::Digit(digit) => self.engine.append_digit(digit),
            Action::Decimal => self.engine.append_decimal(),
            Action::Operator(operator) => self.engine.choose_operator(operator),
            Action::Calculate => {
                self.engine.calculate();
            }
            Action::Clear => self.engine.clear(),
            Action::ToggleSign => self.engine.toggle_sign(),
            Action::Percent => self.engine.percentage(),
            Action::Function(function) => self.engine.apply_function(function),
            Action::SetMode(mode) => {
                tracing::info!(%mode, "mode changed");
                self.mode = mode;
            }
            Action::SetPrecision(precision) => {
                tracing::info!(%precision, "precision changed");
                self.engine.set_precision(precision);
            }
            Action::ToggleHistory => self.show_history = !self.show_history,
            Action::ClearHistory => {
                self.engine.clear_history();
                self.notices.show_success(CLEAR_NOTICE_SECS);
            }
            Action::CopyResult => {
                self.clipboard.set_text(self.engine.display());
                self.notices.show_success(COPY_NOTICE_SECS);
            }
            Action::OpenAbout => self.about.open(),
            Action::DismissAbout => self.about.dismiss(),
            Action::Skip => return false,
        }

        true
    }

    /// Returns the action under (`x`, `y`), if any.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<Action> {
        let frame = self.frame();
        if self.about.is_open() {
            return AboutDialog::close_button(frame.bounds)
                .contains(x, y)
                .then_some(Action::DismissAbout);
        }
        frame
            .buttons
            .iter()
            .find(|button| button.rect.contains(x, y))
            .map(|button| button.action)
    }

    /// Returns the center of the button labelled `label`.
    ///
    /// Lets hosts and tests click buttons without hard-coding positions.
    #[must_use]
    pub fn button_center(&self, label: &str) -> Option<(f32, f32)> {
        self.frame()
            .buttons
            .iter()
            .find(|button| button.label == label)
            .map(|button| button.rect.center())
    }

    fn next_mode(&self) -> CalcMode {
        let index = CalcMode::ALL
            .iter()
            .position(|&mode| mode == self.mode)
            .unwrap_or(0);
        CalcMode::ALL[(index + 1) % CalcMode::ALL.len()]
    }

    fn next_precision(&self) -> Precision {
        let current = self.engine.precision();
        let index = Precision::ALL
            .iter()
            .position(|&precision| precision == current)
            .unwrap_or(0);
        Precision::ALL[(index + 1) % Precision::ALL.len()]
    }

    fn history_height(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let rows = self.engine.history().len().max(1) as f32;
        rows + 2.0
    }

    fn frame(&self) -> Frame {
        let width = self.width;
        let scientific = self.mode.allows_scientific();

        let mut sections = vec![(Section::Header, 2.0)];
        if self.notices.is_active() {
            sections.push((Section::Notice, NOTICE_HEIGHT));
        }
        sections.push((Section::Cards, 3.0));
        sections.push((Section::Selectors, 3.0));
        sections.push((Section::Toolbar, 1.0));
        if self.show_history {
            sections.push((Section::HistoryPanel, self.history_height()));
        }
        sections.push((Section::Display, 4.0));
        if scientific {
            sections.push((Section::Scientific, BUTTON_HEIGHT * 2.0));
        }
        sections.push((Section::Keypad, BUTTON_HEIGHT * 5.0));
        sections.push((Section::About, 1.0));

        let sizes: Vec<(f32, f32)> = sections.iter().map(|&(_, h)| (0.0, h)).collect();
        let content = Rect::new(2.0, 1.0, width - 4.0, 0.0);
        let rects = Layout::vertical()
            .with_gap(1.0)
            .align_cross(Alignment::Stretch)
            .arrange(content, &sizes);

        let mut frame = Frame {
            bounds: Rect::ZERO,
            header: Rect::ZERO,
            notice: None,
            last_result_card: Rect::ZERO,
            history_card: Rect::ZERO,
            mode_selector: Rect::ZERO,
            precision_selector: Rect::ZERO,
            history_panel: None,
            display: Rect::ZERO,
            buttons: Vec::with_capacity(32),
        };

        let mut bottom = content.y;
        for (&(section, _), &rect) in sections.iter().zip(&rects) {
            bottom = rect.bottom();
            match section {
                Section::Header => frame.header = rect,
                Section::Notice => frame.notice = Some(rect),
                Section::Cards => {
                    let (left, right) = rect.split_horizontal(0.5, 1.0);
                    frame.last_result_card = left;
                    frame.history_card = right;
                    frame.buttons.push(Button {
                        rect: right,
                        label: "History card".to_owned(),
                        action: Action::ToggleHistory,
                        kind: ButtonKind::Link,
                    });
                }
                Section::Selectors => {
                    let (left, right) = rect.split_horizontal(0.5, 1.0);
                    frame.mode_selector = left;
                    frame.precision_selector = right;
                    frame.buttons.push(Button {
                        rect: left,
                        label: "Mode".to_owned(),
                        action: Action::SetMode(self.next_mode()),
                        kind: ButtonKind::Link,
                    });
                    frame.buttons.push(Button {
                        rect: right,
                        label: "Precision".to_owned(),
                        action: Action::SetPrecision(self.next_precision()),
                        kind: ButtonKind::Link,
                    });
                }
                Section::Toolbar => Self::toolbar(rect, &mut frame.buttons),
                Section::HistoryPanel => frame.history_panel = Some(rect),
                Section::Display => frame.display = rect,
                Section::Scientific => {
                    let grid = Grid::new(rect, 4, BUTTON_HEIGHT);
                    for (row, keys) in (0u16..).zip(SCIENTIFIC.iter()) {
                        for (column, &(label, key)) in (0u16..).zip(keys.iter()) {
                            push_key(&mut frame.buttons, grid.cell(column, row, 1), label, key);
                        }
                    }
                }
                Section::Keypad => {
                    let grid = Grid::new(rect, 4, BUTTON_HEIGHT);
                    for (row, keys) in (0u16..).zip(KEYPAD.iter()) {
                        let mut column = 0;
                        for &(label, key, span) in keys.iter() {
                            push_key(&mut frame.buttons, grid.cell(column, row, span), label, key);
                            column += span;
                        }
                    }
                }
                Section::About => {
                    frame.buttons.push(Button {
                        rect: rect.centered(20.0, 1.0),
                        label: "About Calculator".to_owned(),
                        action: Action::OpenAbout,
                        kind: ButtonKind::Link,
                    });
                }
            }
        }

        frame.bounds = Rect::new(0.0, 0.0, width, bottom + 1.0);
        frame
    }

    fn toolbar(rect: Rect, buttons: &mut Vec<Button>) {
        let items = [
            ("History", Action::ToggleHistory),
            ("Clear History", Action::ClearHistory),
            ("Copy", Action::CopyResult),
        ];
        #[allow(clippy::cast_precision_loss)]
        let sizes: Vec<(f32, f32)> = items
            .iter()
            .map(|(label, _)| (label.chars().count() as f32 + 4.0, 1.0))
            .collect();
        let rects = Layout::horizontal().with_gap(1.0).arrange(rect, &sizes);
        for ((label, action), rect) in items.into_iter().zip(rects) {
            buttons.push(Button {
                rect,
                label: label.to_owned(),
                action,
                kind: ButtonKind::Link,
            });
        }
    }

    fn render_header(&self, rect: Rect, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let top = Rect::new(rect.x, rect.y, rect.width, 1.0);
        commands.push(RenderCommand::text_in(top, TITLE, TextAlign::Left, theme.foreground).bold());
        commands.push(RenderCommand::text_in(top, BADGE, TextAlign::Right, theme.muted));
        commands.push(RenderCommand::text_in(
            Rect::new(rect.x, rect.y + 1.0, rect.width, 1.0),
            SUBTITLE,
            TextAlign::Left,
            theme.muted,
        ));
    }

    /// Bordered box with `title` set into its top edge and `value` inside.
    fn render_labelled_box(
        &self,
        rect: Rect,
        title: &str,
        value: &str,
        commands: &mut Vec<RenderCommand>,
    ) {
        let theme = &self.theme;
        commands.push(RenderCommand::RectOutline {
            bounds: rect,
            color: theme.border,
            rounded: true,
        });
        commands.push(RenderCommand::text_in(
            Rect::new(rect.x + 2.0, rect.y, rect.width - 4.0, 1.0),
            &format!(" {title} "),
            TextAlign::Left,
            theme.muted,
        ));
        commands.push(
            RenderCommand::text_in(
                Rect::new(rect.x + 2.0, rect.y + 1.0, rect.width - 4.0, 1.0),
                value,
                TextAlign::Left,
                theme.foreground,
            )
            .bold(),
        );
    }

    fn render_history_panel(&self, rect: Rect, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: theme.panel,
        });
        commands.push(RenderCommand::RectOutline {
            bounds: rect,
            color: theme.border,
            rounded: true,
        });
        commands.push(RenderCommand::text_in(
            Rect::new(rect.x + 2.0, rect.y, rect.width - 4.0, 1.0),
            " History ",
            TextAlign::Left,
            theme.muted,
        ));

        let line = |offset: f32| Rect::new(rect.x + 2.0, rect.y + 1.0 + offset, rect.width - 4.0, 1.0);
        let history = self.engine.history();
        if history.is_empty() {
            commands.push(RenderCommand::text_in(
                line(0.0),
                EMPTY_HISTORY,
                TextAlign::Center,
                theme.muted,
            ));
            return;
        }
        let mut offset = 0.0;
        for entry in history.iter() {
            commands.push(RenderCommand::text_in(
                line(offset),
                entry,
                TextAlign::Right,
                theme.foreground,
            ));
            offset += 1.0;
        }
    }

    fn render_display(&self, rect: Rect, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: theme.panel,
        });
        commands.push(RenderCommand::RectOutline {
            bounds: rect,
            color: theme.border,
            rounded: true,
        });
        let inner = Rect::new(rect.x + 2.0, rect.y + 1.0, rect.width - 4.0, 1.0);
        if let Some(expression) = self.engine.pending_expression() {
            commands.push(RenderCommand::text_in(
                inner,
                &expression,
                TextAlign::Right,
                theme.muted,
            ));
        }
        commands.push(
            RenderCommand::text_in(
                Rect::new(inner.x, inner.y + 1.0, inner.width, 1.0),
                self.engine.display(),
                TextAlign::Right,
                theme.foreground,
            )
            .bold(),
        );
    }

    fn render_button(&self, button: &Button, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let (fill, text) = match button.kind {
            ButtonKind::Primary => (theme.foreground, theme.on_foreground),
            ButtonKind::Secondary => (theme.panel, theme.foreground),
            ButtonKind::Outline => (theme.surface, theme.foreground),
            ButtonKind::Link => {
                commands.push(RenderCommand::text_in(
                    button.rect,
                    &format!("[ {} ]", button.label),
                    TextAlign::Center,
                    theme.foreground,
                ));
                return;
            }
        };
        commands.push(RenderCommand::Rect {
            bounds: button.rect,
            color: fill,
        });
        commands.push(RenderCommand::RectOutline {
            bounds: button.rect,
            color: theme.border,
            rounded: true,
        });
        let label_row = Rect::new(
            button.rect.x + 1.0,
            button.rect.y + 1.0,
            button.rect.width - 2.0,
            1.0,
        );
        commands.push(
            RenderCommand::text_in(label_row, &button.label, TextAlign::Center, text).bold(),
        );
    }
}

fn push_key(buttons: &mut Vec<Button>, rect: Rect, label: &str, key: KeypadKey) {
    if let Some(action) = key.action() {
        buttons.push(Button {
            rect,
            label: label.to_owned(),
            action,
            kind: key.kind(),
        });
    }
}

impl Widget for CalculatorWidget {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        if self.notices.update(dt) {
            response.changed = true;
        }

        for &key in input.keys_pressed() {
            // The about dialog is modal: only Escape gets through.
            let action = if self.about.is_open() {
                (key == Key::Escape).then_some(Action::DismissAbout)
            } else {
                self.keymap.action_for(key)
            };
            if let Some(action) = action {
                response.changed |= self.dispatch(action);
            }
        }

        if input.mouse_clicked(MouseButton::Left) {
            if let Some(action) = self.hit_test(input.mouse_x, input.mouse_y) {
                response.clicked = true;
                response.changed |= self.dispatch(action);
            }
        }

        let bounds = self.frame().bounds;
        self.state.rect = bounds;
        response.hovered = bounds.contains(input.mouse_x, input.mouse_y);
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let frame = self.frame();
        let theme = &self.theme;

        commands.push(RenderCommand::Rect {
            bounds: frame.bounds,
            color: theme.surface,
        });
        commands.push(RenderCommand::RectOutline {
            bounds: frame.bounds,
            color: theme.border,
            rounded: true,
        });

        self.render_header(frame.header, commands);
        if let Some(rect) = frame.notice {
            self.notices.render(rect, theme, commands);
        }

        self.render_labelled_box(
            frame.last_result_card,
            "Last Result",
            &number::format(self.engine.last_result()),
            commands,
        );
        let arrow = if self.show_history { "▴" } else { "▾" };
        self.render_labelled_box(
            frame.history_card,
            "History",
            &format!("{} ops {arrow}", self.engine.history().len()),
            commands,
        );
        self.render_labelled_box(
            frame.mode_selector,
            "Mode",
            &format!("{} ▾", self.mode),
            commands,
        );
        self.render_labelled_box(
            frame.precision_selector,
            "Precision",
            &format!("{} ▾", self.engine.precision()),
            commands,
        );

        if let Some(rect) = frame.history_panel {
            self.render_history_panel(rect, commands);
        }
        self.render_display(frame.display, commands);

        for button in &frame.buttons {
            // Cards and selectors draw themselves above.
            let drawn_as_box = [
                frame.history_card,
                frame.mode_selector,
                frame.precision_selector,
            ]
            .contains(&button.rect);
            if !drawn_as_box {
                self.render_button(button, commands);
            }
        }

        self.about.render(frame.bounds, theme, commands);
    }

    fn min_size(&self) -> (f32, f32) {
        let bounds = self.frame().bounds;
        (bounds.width, bounds.height)
    }
}
