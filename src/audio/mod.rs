//! Sound cue playback
//!
//! Two named cues, "bite" and "chew", synthesized as short sine blips and
//! played through rodio. The output stream and one sink per cue are acquired
//! eagerly when the card view opens and released when the [`SoundBank`] is
//! dropped; playback is fire-and-forget and never interrupts the animation.

mod error;

pub use error::AudioError;

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::sequencer::Cue;

/// Tone segments (frequency in Hz, duration in ms) for each cue.
///
/// The bite is a sharp descending pair, the chew a softer low pair.
fn cue_tones(cue: Cue) -> &'static [(f32, u64)] {
    match cue {
        Cue::Bite => &[(880.0, 70), (587.0, 90)],
        Cue::Chew => &[(330.0, 60), (262.0, 80)],
    }
}

/// Playback gain per cue (the bite is the loud moment).
fn cue_gain(cue: Cue) -> f32 {
    match cue {
        Cue::Bite => 0.30,
        Cue::Chew => 0.18,
    }
}

/// Preloaded sound cues bound to an open audio output stream.
///
/// Dropping the bank stops playback and releases the device. Holds the
/// stream handle alive for the lifetime of the sinks.
pub struct SoundBank {
    _stream: OutputStream,
    bite: Sink,
    chew: Sink,
}

impl SoundBank {
    /// Open the default output device and create one sink per cue.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let bite = Self::make_sink(&handle)?;
        let chew = Self::make_sink(&handle)?;
        Ok(Self {
            _stream: stream,
            bite,
            chew,
        })
    }

    fn make_sink(handle: &OutputStreamHandle) -> Result<Sink, AudioError> {
        Ok(Sink::try_new(handle)?)
    }

    /// Play a cue from the start.
    ///
    /// Any still-playing instance of the same cue is cut off first, which
    /// resets the playback position to zero.
    pub fn play(&self, cue: Cue) {
        let sink = match cue {
            Cue::Bite => &self.bite,
            Cue::Chew => &self.chew,
        };
        sink.stop();
        let gain = cue_gain(cue);
        for &(freq, ms) in cue_tones(cue) {
            sink.append(
                SineWave::new(freq)
                    .take_duration(Duration::from_millis(ms))
                    .amplify(gain),
            );
        }
        sink.play();
    }
}

impl std::fmt::Debug for SoundBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBank").finish_non_exhaustive()
    }
}
