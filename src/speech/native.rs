//! Native TTS backend using the tts crate
//!
//! The `tts` crate fronts Speech Dispatcher on Linux, AVFoundation on macOS
//! and SAPI on Windows. None of those expose word-boundary callbacks through
//! it, so this backend submits one utterance per word: every utterance-begin
//! callback is a word boundary, and the end of the last live utterance is
//! the end of the session.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use tts::{Tts, UtteranceId};

use crate::app::error::{AppError, Result};
use crate::speech::{EventSink, SpeechEvent, SpeechSynth};

pub struct NativeSynth {
    tts: Tts,

    /// Ids of the utterances queued or speaking. Cleared on cancel, so
    /// callbacks for an abandoned queue no longer match and are ignored.
    live: Arc<Mutex<Vec<UtteranceId>>>,
}

impl NativeSynth {
    /// Initialize the platform engine and wire its utterance callbacks to
    /// `events`.
    pub fn new(events: EventSink) -> Result<Self> {
        debug!("creating native TTS backend");

        let mut tts = Tts::default()
            .map_err(|e| AppError::Speech(format!("failed to initialize TTS: {}", e)))?;

        let features = tts.supported_features();
        if !features.utterance_callbacks {
            return Err(AppError::Speech(
                "TTS engine does not report utterance progress".to_string(),
            ));
        }

        let live: Arc<Mutex<Vec<UtteranceId>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&events);
        let queue = Arc::clone(&live);
        tts.on_utterance_begin(Some(Box::new(move |id| {
            if queue.lock().unwrap().contains(&id) {
                sink(SpeechEvent::WordBoundary);
            }
        })))
        .map_err(|e| AppError::Speech(format!("failed to register begin callback: {}", e)))?;

        let sink = Arc::clone(&events);
        let queue = Arc::clone(&live);
        tts.on_utterance_end(Some(Box::new(move |id| {
            let mut queue = queue.lock().unwrap();
            if let Some(pos) = queue.iter().position(|live_id| *live_id == id) {
                queue.remove(pos);
                if queue.is_empty() {
                    sink(SpeechEvent::Finished);
                }
            }
        })))
        .map_err(|e| AppError::Speech(format!("failed to register end callback: {}", e)))?;

        debug!("native TTS backend created");

        Ok(Self { tts, live })
    }
}

impl SpeechSynth for NativeSynth {
    fn enqueue(&mut self, words: &[String]) -> Result<()> {
        if words.is_empty() {
            return Ok(());
        }
        debug!("queueing {} words", words.len());

        // Hold the lock across the whole submission so a begin callback for
        // the first word cannot observe a half-filled queue
        let mut live = self.live.lock().unwrap();
        for word in words {
            match self.tts.speak(word.clone(), false) {
                Ok(Some(id)) => live.push(id),
                Ok(None) => {}
                Err(e) => {
                    error!("failed to queue utterance: {}", e);
                    live.clear();
                    drop(live);
                    let _ = self.tts.stop();
                    return Err(AppError::Speech(format!("speak failed: {}", e)));
                }
            }
        }

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("canceling speech");
        self.live.lock().unwrap().clear();

        self.tts
            .stop()
            .map_err(|e| AppError::Speech(format!("cancel failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_synth() {
        // May fail without speech-dispatcher or audio, e.g. in CI
        let sink: EventSink = Arc::new(|_| {});
        match NativeSynth::new(sink) {
            Ok(_) => println!("native TTS backend initialized"),
            Err(e) => println!("TTS initialization failed (may be expected in CI): {}", e),
        }
    }
}
