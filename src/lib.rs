//! Sweet Surprise - a terminal greeting card.
//!
//! A user enters a recipient name and a message, then watches a timed
//! sprite/audio animation (a teddy bear biting and chewing a chocolate bar)
//! followed by a personalized message reveal.
//!
//! # Modules
//!
//! - [`sequencer`]: the timed animation sequencer (the core state machine)
//! - [`audio`]: sound cue playback via rodio
//! - [`tui`]: form and card views built on ratatui/crossterm
//! - [`greeting`]: the card content and its validation rule
//! - [`config`]: TOML configuration under the platform config directory

pub mod audio;
pub mod config;
pub mod greeting;
pub mod sequencer;
pub mod tui;

pub use config::Config;
pub use greeting::Greeting;
