//! Audio playback errors.

/// Errors that can occur while acquiring audio resources.
///
/// Playback itself is fire-and-forget and infallible once the sinks exist;
/// only acquisition can fail (no output device, sink creation refused).
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("No audio output device available: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("Failed to create audio sink: {0}")]
    Sink(#[from] rodio::PlayError),
}
