//! Timed animation sequencer
//!
//! Drives the teddy-and-chocolate choreography: a fixed script of
//! millisecond-offset steps, each mutating the animation phase, toggling one
//! visual overlay, or requesting a sound cue.
//!
//! # Architecture
//!
//! The sequencer is poll-driven, like a playback loop: the UI calls
//! [`Sequencer::tick`] on every iteration and the sequencer applies every
//! not-yet-applied step whose offset has elapsed, in script order. There are
//! no OS timers and no callbacks, so cancellation is structural - restarting
//! resets the step cursor and bumps the run token, leaving nothing from the
//! superseded run that could still fire.
//!
//! # Usage
//!
//! ```no_run
//! use sweet_surprise::sequencer::Sequencer;
//!
//! let mut seq = Sequencer::new(false);
//! seq.start(true);
//! loop {
//!     let tick = seq.tick(false);
//!     if tick.changed { /* redraw */ }
//!     for cue in tick.cues { /* play sound */ }
//!     if seq.is_finished() { break; }
//! }
//! ```

pub mod script;

use std::time::{Duration, Instant};

pub use script::{Step, FULL_SCRIPT, REDUCED_DELAY_MS, REDUCED_SCRIPT};

/// Coarse stage of the animation.
///
/// Exactly one phase is active at a time and transitions only move forward;
/// the only way back to an earlier phase is a full restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Phase {
    /// Before the first scheduled step fires
    #[default]
    Idle,
    /// Eyes widen, slight lean back
    Anticipation,
    /// The bite itself (speed lines, impact, crumbs)
    Bite,
    /// Three open/close chew cycles
    Chew,
    /// Terminal phase until an external restart
    Satisfied,
}

/// One decorative overlay or pose, orthogonal to [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Mouth open (pose swap, not a decoration)
    MouthOpen,
    /// Anime speed lines during the bite
    SpeedLines,
    /// Sparkle overlay
    Sparkles,
    /// Chocolate crumbs
    Crumbs,
    /// Bite impact flash
    BiteImpact,
    /// Chew motion lines
    ChewLines,
    /// Eye blink
    Blink,
}

/// Independent visual flags, each toggled by individual scheduled steps.
///
/// Flags are not mutually exclusive with the phase or with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualFlags {
    pub mouth_open: bool,
    pub speed_lines: bool,
    pub sparkles: bool,
    pub crumbs: bool,
    pub bite_impact: bool,
    pub chew_lines: bool,
    pub blink: bool,
}

impl VisualFlags {
    /// Set a single overlay flag.
    pub fn set(&mut self, overlay: Overlay, on: bool) {
        match overlay {
            Overlay::MouthOpen => self.mouth_open = on,
            Overlay::SpeedLines => self.speed_lines = on,
            Overlay::Sparkles => self.sparkles = on,
            Overlay::Crumbs => self.crumbs = on,
            Overlay::BiteImpact => self.bite_impact = on,
            Overlay::ChewLines => self.chew_lines = on,
            Overlay::Blink => self.blink = on,
        }
    }
}

/// A named sound cue requested by a scheduled step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Bite,
    Chew,
}

/// A single state mutation performed by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Advance to the given phase
    Phase(Phase),
    /// Toggle one visual overlay on or off
    Overlay(Overlay, bool),
    /// Request a sound cue (subject to armed/muted/reduced-motion gating)
    Sound(Cue),
}

/// Result of one [`Sequencer::tick`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tick {
    /// True when phase or any flag changed (screen needs redraw)
    pub changed: bool,
    /// Sound cues to play, already gated by armed/muted/reduced-motion
    pub cues: Vec<Cue>,
    /// Token of the run these effects belong to
    pub run: u64,
}

/// The timed animation sequencer.
///
/// Owns the phase and visual flags for the lifetime of one run. A fresh
/// phase/flag state is created on every (re)start, identified by a run token
/// incremented each time.
#[derive(Debug)]
pub struct Sequencer {
    /// Active script (full choreography, or the reduced-motion short-circuit)
    script: &'static [Step],
    /// Sampled once at construction; selects the script and gates sound
    reduced_motion: bool,
    /// Whether the current run may produce audio
    armed: bool,
    /// Monotonically increasing run token
    run: u64,
    /// Wall clock time of the current run's start
    started_at: Instant,
    /// Index of the next not-yet-applied step
    next: usize,
    phase: Phase,
    flags: VisualFlags,
}

impl Sequencer {
    /// Create a sequencer. Reduced motion is sampled once, here: it selects
    /// the reduced script and suppresses all sound for every run.
    pub fn new(reduced_motion: bool) -> Self {
        let script = if reduced_motion {
            REDUCED_SCRIPT
        } else {
            FULL_SCRIPT
        };
        Self {
            script,
            reduced_motion,
            armed: false,
            run: 0,
            started_at: Instant::now(),
            next: script.len(), // nothing pending until start()
            phase: Phase::Idle,
            flags: VisualFlags::default(),
        }
    }

    /// Start (or restart) a run.
    ///
    /// Discards every pending step of any prior run, bumps the run token,
    /// resets phase and flags, and schedules the script from offset zero.
    /// Restart behaves identically to an initial start.
    pub fn start(&mut self, armed: bool) {
        self.run += 1;
        self.armed = armed;
        self.started_at = Instant::now();
        self.next = 0;
        self.phase = Phase::Idle;
        self.flags = VisualFlags::default();
        tracing::debug!(run = self.run, armed, reduced = self.reduced_motion, "sequencer start");
    }

    /// Discard all pending steps without starting a new run.
    ///
    /// Used when the card view exits mid-run; afterwards no step can fire
    /// until the next [`start`](Self::start).
    pub fn stop(&mut self) {
        self.next = self.script.len();
    }

    /// Advance the timeline using the wall clock.
    pub fn tick(&mut self, muted: bool) -> Tick {
        self.tick_at(self.started_at.elapsed(), muted)
    }

    /// Advance the timeline to the given elapsed time since run start.
    ///
    /// Applies every pending step with `offset_ms <= elapsed`, in script
    /// order. Steps sharing an offset execute in script order. Sound cues are
    /// dropped (not queued) when the run is unarmed, muted, or reduced
    /// motion is active.
    pub fn tick_at(&mut self, elapsed: Duration, muted: bool) -> Tick {
        let elapsed_ms = elapsed.as_millis() as u64;
        let mut tick = Tick {
            run: self.run,
            ..Tick::default()
        };

        while let Some(step) = self.script.get(self.next) {
            if step.offset_ms > elapsed_ms {
                break;
            }
            self.next += 1;
            for effect in step.effects {
                match *effect {
                    Effect::Phase(phase) => {
                        self.phase = phase;
                        tick.changed = true;
                    }
                    Effect::Overlay(overlay, on) => {
                        self.flags.set(overlay, on);
                        tick.changed = true;
                    }
                    Effect::Sound(cue) => {
                        if self.armed && !muted && !self.reduced_motion {
                            tick.cues.push(cue);
                        }
                    }
                }
            }
        }

        tick
    }

    /// Current animation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current visual flags.
    pub fn flags(&self) -> VisualFlags {
        self.flags
    }

    /// Token of the current run.
    pub fn run(&self) -> u64 {
        self.run
    }

    /// Whether reduced motion was sampled at construction.
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// True once every scheduled step has fired (no pending steps).
    pub fn is_finished(&self) -> bool {
        self.next >= self.script.len()
    }
}
