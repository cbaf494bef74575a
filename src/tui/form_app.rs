//! Surprise form view
//!
//! Collects the recipient name and the message. The "Create Surprise"
//! control stays inert until both fields are non-empty after trimming.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::greeting::Greeting;

use super::app::App;
use super::frames::HEARTS_ROW;
use super::theme::Theme;
use super::ui::centered_rect;

/// Which form control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Message,
    Submit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Message,
            Focus::Message => Focus::Submit,
            Focus::Submit => Focus::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Submit,
            Focus::Message => Focus::Name,
            Focus::Submit => Focus::Message,
        }
    }
}

/// Form field state, separated from the terminal for testability.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub greeting: Greeting,
    pub focus: Focus,
}

/// Control flow signal produced by one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSignal {
    /// Keep editing
    Continue,
    /// Both fields valid, user triggered the surprise
    Submitted,
    /// User quit from the form
    Cancelled,
}

/// Apply one key event to the form state.
///
/// Submission is inert unless the greeting is valid; Enter inside the
/// message field inserts a literal newline.
pub fn handle_key(state: &mut FormState, key: KeyEvent) -> FormSignal {
    if key.kind != KeyEventKind::Press {
        return FormSignal::Continue;
    }

    // Ctrl+C / Esc quit, Ctrl+S submits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return FormSignal::Cancelled,
            KeyCode::Char('s') => {
                return if state.greeting.is_valid() {
                    FormSignal::Submitted
                } else {
                    FormSignal::Continue
                };
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => FormSignal::Cancelled,
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            FormSignal::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            FormSignal::Continue
        }
        KeyCode::Enter => match state.focus {
            Focus::Name => {
                state.focus = Focus::Message;
                FormSignal::Continue
            }
            Focus::Message => {
                state.greeting.message.push('\n');
                FormSignal::Continue
            }
            Focus::Submit => {
                if state.greeting.is_valid() {
                    FormSignal::Submitted
                } else {
                    FormSignal::Continue
                }
            }
        },
        KeyCode::Backspace => {
            match state.focus {
                Focus::Name => {
                    state.greeting.name.pop();
                }
                Focus::Message => {
                    state.greeting.message.pop();
                }
                Focus::Submit => {}
            }
            FormSignal::Continue
        }
        KeyCode::Char(c) => {
            match state.focus {
                Focus::Name => state.greeting.name.push(c),
                Focus::Message => state.greeting.message.push(c),
                Focus::Submit => {}
            }
            FormSignal::Continue
        }
        _ => FormSignal::Continue,
    }
}

/// Outcome of running the form view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Submit(Greeting),
    Quit,
}

/// The form application: terminal plus form state.
pub struct FormApp {
    app: App,
    theme: Theme,
    state: FormState,
}

impl FormApp {
    /// Open the form, prefilled with any previously entered greeting.
    pub fn new(greeting: Greeting, theme: Theme) -> Result<Self> {
        let app = App::new(Duration::from_millis(250))?;
        Ok(Self {
            app,
            theme,
            state: FormState {
                greeting,
                focus: Focus::Name,
            },
        })
    }

    /// Run the form until the user submits or quits.
    pub fn run(mut self) -> Result<FormOutcome> {
        loop {
            let theme = self.theme.clone();
            let state = self.state.clone();
            self.app.draw(|frame| render(frame, &theme, &state))?;

            if let Some(Event::Key(key)) = self.app.next_event()? {
                match handle_key(&mut self.state, key) {
                    FormSignal::Continue => {}
                    FormSignal::Submitted => return Ok(FormOutcome::Submit(self.state.greeting)),
                    FormSignal::Cancelled => return Ok(FormOutcome::Quit),
                }
            }
        }
    }
}

/// Render the form view.
pub fn render(frame: &mut Frame, theme: &Theme, state: &FormState) {
    let area = centered_rect(70, 85, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // hearts + title
            Constraint::Length(3), // name input
            Constraint::Min(6),    // message input
            Constraint::Length(3), // submit
            Constraint::Length(1), // hint
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0], theme);
    render_name_input(frame, chunks[1], theme, state);
    render_message_input(frame, chunks[2], theme, state);
    render_submit(frame, chunks[3], theme, state);
    render_hint(frame, chunks[4], theme, state);
    render_footer(frame, chunks[5], theme);
}

fn focus_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if focused {
        theme.accent_style()
    } else {
        theme.text_secondary_style()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(HEARTS_ROW, theme.accent_style())),
        Line::from(Span::styled(
            "Sweet Surprise - create a magical moment",
            theme.accent_bold_style(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_name_input(frame: &mut Frame, area: Rect, theme: &Theme, state: &FormState) {
    let focused = state.focus == Focus::Name;
    let value = if focused {
        format!("{}_", state.greeting.name)
    } else {
        state.greeting.name.clone()
    };
    let input = Paragraph::new(value)
        .style(theme.text_style())
        .block(focus_block(" Her Name * ", focused, theme));
    frame.render_widget(input, area);
}

fn render_message_input(frame: &mut Frame, area: Rect, theme: &Theme, state: &FormState) {
    let focused = state.focus == Focus::Message;
    let value = if focused {
        format!("{}_", state.greeting.message)
    } else {
        state.greeting.message.clone()
    };
    let input = Paragraph::new(Text::raw(value))
        .style(theme.text_style())
        .wrap(Wrap { trim: false })
        .block(focus_block(" Your Message * ", focused, theme));
    frame.render_widget(input, area);
}

fn render_submit(frame: &mut Frame, area: Rect, theme: &Theme, state: &FormState) {
    let focused = state.focus == Focus::Submit;
    let style = if state.greeting.is_valid() {
        theme.accent_bold_style()
    } else {
        theme.text_secondary_style()
    };
    let button = Paragraph::new(Span::styled("\u{2665} Create Surprise", style))
        .alignment(Alignment::Center)
        .block(focus_block("", focused, theme));
    frame.render_widget(button, area);
}

fn render_hint(frame: &mut Frame, area: Rect, theme: &Theme, state: &FormState) {
    if !state.greeting.is_valid() && state.greeting.is_partially_filled() {
        let hint = Paragraph::new(Span::styled(
            "Please fill in both fields to continue",
            theme.error_style(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, area);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Span::styled(
        "Tab: next field | Enter: newline in message | Ctrl+S: create | Esc: quit",
        theme.text_secondary_style(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
