//! Speech synthesizer abstraction
//!
//! The read-aloud state machine talks to speech output through the
//! `SpeechSynth` trait so it can be driven by a scripted fake in tests.
//! The native backend queues one utterance per word and reports progress
//! through `SpeechEvent`s delivered to an `EventSink`; the sink is expected
//! to marshal events back onto the UI event loop.

use std::sync::Arc;

use crate::app::error::Result;

pub mod native;

/// Progress events emitted by a backend while a word queue plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEvent {
    /// The engine started speaking the next word in the queue.
    WordBoundary,
    /// The last queued word finished naturally.
    Finished,
}

/// Where backends deliver their events. Callbacks arrive on the engine's
/// own thread, so the sink must be safe to call from there.
pub type EventSink = Arc<dyn Fn(SpeechEvent) + Send + Sync>;

/// Speech synthesizer trait
///
/// Backends queue words for playback and cancel the queue on demand.
/// Pause/resume is built on top of these two operations by the caller.
pub trait SpeechSynth {
    /// Append `words` to the playback queue, one utterance per word.
    fn enqueue(&mut self, words: &[String]) -> Result<()>;

    /// Silence playback and drop everything still queued.
    fn cancel(&mut self) -> Result<()>;
}

/// Create the platform speech synthesizer.
///
/// Fails when no engine is available or the engine cannot report utterance
/// progress; the caller is expected to degrade to a no-speech UI.
pub fn create_synth(events: EventSink) -> Result<Box<dyn SpeechSynth>> {
    let synth = native::NativeSynth::new(events)?;
    Ok(Box::new(synth))
}
