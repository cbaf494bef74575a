//! Card view
//!
//! Hosts one sequencer run: advances the timeline every tick, swaps the
//! sprites, plays the gated sound cues, and reveals the personalized
//! message. Replay restarts the run; edit returns to the form.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::audio::SoundBank;
use crate::greeting::Greeting;
use crate::sequencer::{Cue, Phase, Sequencer, VisualFlags};

use super::app::App;
use super::frames::{frame_lines, HEARTS_ROW};
use super::theme::Theme;

/// Animation tick cadence (~30 fps keeps step latency well under the
/// smallest 50ms gap in the script).
const TICK_RATE: Duration = Duration::from_millis(33);

/// Outcome of the card view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    /// Back to the form, fields preserved
    Edit,
    /// Leave the application
    Quit,
}

/// Sound availability for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundStatus {
    On,
    Muted,
    Unavailable,
}

/// The card application: terminal, sequencer run, and audio handles.
pub struct CardApp {
    app: App,
    theme: Theme,
    greeting: Greeting,
    sequencer: Sequencer,
    sounds: Option<SoundBank>,
    muted: bool,
    needs_render: bool,
}

impl CardApp {
    /// Open the card view and arm the first run.
    ///
    /// Audio resources are acquired here, eagerly, and skipped entirely
    /// under reduced motion. An unavailable audio device downgrades the run
    /// to silent instead of failing it.
    pub fn new(
        greeting: Greeting,
        theme: Theme,
        muted: bool,
        reduced_motion: bool,
    ) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        let sounds = if reduced_motion {
            None
        } else {
            match SoundBank::new() {
                Ok(bank) => Some(bank),
                Err(e) => {
                    tracing::warn!(error = %e, "audio unavailable, running silent");
                    None
                }
            }
        };

        let mut sequencer = Sequencer::new(reduced_motion);
        sequencer.start(true);

        Ok(Self {
            app,
            theme,
            greeting,
            sequencer,
            sounds,
            muted,
            needs_render: true,
        })
    }

    /// Current mute state (persists across edit round-trips via the caller).
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Run the card view until the user edits or quits.
    ///
    /// Every pending step is discarded before returning, and dropping the
    /// view releases the audio handles.
    pub fn run(&mut self) -> Result<CardOutcome> {
        loop {
            let tick = self.sequencer.tick(self.muted);
            for cue in &tick.cues {
                self.play(*cue);
            }
            if tick.changed || self.needs_render {
                self.draw()?;
                self.needs_render = false;
            }

            match self.app.next_event()? {
                Some(Event::Key(key)) => {
                    if let Some(outcome) = self.handle_key(key) {
                        self.sequencer.stop();
                        return Ok(outcome);
                    }
                }
                Some(Event::Resize(..)) => self.needs_render = true,
                _ => {}
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<CardOutcome> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(CardOutcome::Quit);
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(CardOutcome::Quit),
            KeyCode::Char('e') => Some(CardOutcome::Edit),
            KeyCode::Char('r') => {
                // Replay re-arms sound, exactly like the initial start
                self.sequencer.start(true);
                self.needs_render = true;
                None
            }
            KeyCode::Char('m') => {
                self.muted = !self.muted;
                self.needs_render = true;
                None
            }
            _ => None,
        }
    }

    /// Fire-and-forget playback; cues arrive already gated by the sequencer.
    fn play(&self, cue: Cue) {
        if let Some(bank) = &self.sounds {
            bank.play(cue);
        }
    }

    fn sound_status(&self) -> SoundStatus {
        if self.sounds.is_none() {
            SoundStatus::Unavailable
        } else if self.muted {
            SoundStatus::Muted
        } else {
            SoundStatus::On
        }
    }

    fn draw(&mut self) -> Result<()> {
        let theme = self.theme.clone();
        let greeting = self.greeting.clone();
        let phase = self.sequencer.phase();
        let flags = self.sequencer.flags();
        let status = self.sound_status();

        self.app.draw(|frame| {
            render(frame, &theme, &greeting, phase, flags, status);
        })?;
        Ok(())
    }
}

/// Render the complete card view.
pub fn render(
    frame: &mut Frame,
    theme: &Theme,
    greeting: &Greeting,
    phase: Phase,
    flags: VisualFlags,
    status: SoundStatus,
) {
    let animation = frame_lines(phase, flags);
    let animation_height = animation.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // hearts
            Constraint::Length(animation_height), // animation
            Constraint::Length(2),                // "Dear {name}"
            Constraint::Min(3),                   // message
            Constraint::Length(1),                // status
            Constraint::Length(1),                // footer
        ])
        .split(frame.area());

    render_hearts(frame, chunks[0], theme);
    render_animation(frame, chunks[1], theme, phase, animation);
    render_salutation(frame, chunks[2], theme, greeting);
    render_message(frame, chunks[3], theme, greeting);
    render_status(frame, chunks[4], theme, status);
    render_footer(frame, chunks[5], theme);
}

fn render_hearts(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hearts =
        Paragraph::new(Span::styled(HEARTS_ROW, theme.accent_style())).alignment(Alignment::Center);
    frame.render_widget(hearts, area);
}

fn render_animation(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    phase: Phase,
    animation: Vec<String>,
) {
    // The bite moment gets the accent color, everything else primary
    let style = if phase == Phase::Bite {
        theme.accent_style()
    } else {
        theme.text_style()
    };
    let lines: Vec<Line> = animation
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect();
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_salutation(frame: &mut Frame, area: Rect, theme: &Theme, greeting: &Greeting) {
    let salutation = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Dear {} \u{2665}", greeting.name),
            theme.accent_bold_style(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(salutation, area);
}

fn render_message(frame: &mut Frame, area: Rect, theme: &Theme, greeting: &Greeting) {
    // Text::raw splits on '\n', preserving the message's own line breaks
    let message = Paragraph::new(Text::raw(greeting.message.as_str()))
        .style(theme.text_style())
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.text_secondary_style()),
        );
    frame.render_widget(message, area);
}

fn render_status(frame: &mut Frame, area: Rect, theme: &Theme, status: SoundStatus) {
    let text = match status {
        SoundStatus::On => "sound: on",
        SoundStatus::Muted => "sound: muted",
        SoundStatus::Unavailable => "sound: unavailable",
    };
    let widget =
        Paragraph::new(Span::styled(text, theme.text_secondary_style())).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Paragraph::new(Span::styled(
        "r: replay | e: edit message | m: mute | q: quit",
        theme.text_secondary_style(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
