//! Read-aloud session state machine.
//!
//! Owns the word queue for the utterance in flight and the spoken-word
//! index that drives the preview highlight. The speech engine is injected
//! as a `SpeechSynth`, so every transition here is testable without audio.
//!
//! The engine has no pause of its own: pausing cancels the queue and
//! remembers the word that was interrupted, resuming re-queues from there.

use crate::app::error::Result;
use crate::app::text_ops;
use crate::speech::SpeechSynth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Idle,
    Speaking,
    Paused,
}

pub struct ReadAloud {
    synth: Box<dyn SpeechSynth>,
    playback: Playback,

    /// Words of the utterance in flight. Indices here match the preview's
    /// token indices because both come from `text_ops::words`.
    words: Vec<String>,

    /// Index the next word-boundary event corresponds to.
    next_word: usize,

    /// Currently highlighted word. `None` whenever no session is active.
    spoken: Option<usize>,
}

impl ReadAloud {
    pub fn new(synth: Box<dyn SpeechSynth>) -> Self {
        Self {
            synth,
            playback: Playback::Idle,
            words: Vec::new(),
            next_word: 0,
            spoken: None,
        }
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_active(&self) -> bool {
        self.playback != Playback::Idle
    }

    pub fn spoken_index(&self) -> Option<usize> {
        self.spoken
    }

    /// Start speaking `text`. Any session already active is cancelled first,
    /// so there is never more than one word queue in the engine.
    pub fn start(&mut self, text: &str) -> Result<()> {
        if self.is_active() {
            self.synth.cancel()?;
            self.reset();
        }

        let words = text_ops::words(text);
        if words.is_empty() {
            return Ok(());
        }

        if let Err(e) = self.synth.enqueue(&words) {
            // Silence anything that made it into the queue before the failure
            let _ = self.synth.cancel();
            self.reset();
            return Err(e);
        }

        self.words = words;
        self.playback = Playback::Speaking;
        Ok(())
    }

    /// Pause or resume. Returns the new paused state, or `None` when no
    /// session is active (the caller decides whether that warrants an
    /// alert).
    pub fn toggle_pause(&mut self) -> Result<Option<bool>> {
        match self.playback {
            Playback::Idle => Ok(None),
            Playback::Speaking => {
                self.synth.cancel()?;
                // Replay the interrupted word on resume
                self.next_word = self.spoken.unwrap_or(0);
                self.playback = Playback::Paused;
                Ok(Some(true))
            }
            Playback::Paused => {
                let rest = self.words[self.next_word..].to_vec();
                self.synth.enqueue(&rest)?;
                self.playback = Playback::Speaking;
                Ok(Some(false))
            }
        }
    }

    /// Cancel the session, if any, and clear highlight state.
    pub fn cancel(&mut self) -> Result<()> {
        if self.is_active() {
            self.synth.cancel()?;
        }
        self.reset();
        Ok(())
    }

    /// Word-boundary event from the engine. Returns the new spoken index,
    /// or `None` for stale events arriving after a pause or cancel.
    pub fn on_word_boundary(&mut self) -> Option<usize> {
        if self.playback != Playback::Speaking || self.next_word >= self.words.len() {
            return None;
        }
        self.spoken = Some(self.next_word);
        self.next_word += 1;
        self.spoken
    }

    /// The queue finished naturally. Returns true if a session ended.
    pub fn on_finished(&mut self) -> bool {
        if self.playback == Playback::Speaking {
            self.reset();
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.playback = Playback::Idle;
        self.words.clear();
        self.next_word = 0;
        self.spoken = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::Result;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct SynthLog {
        enqueued: Vec<Vec<String>>,
        cancels: usize,
    }

    struct FakeSynth(Rc<RefCell<SynthLog>>);

    impl SpeechSynth for FakeSynth {
        fn enqueue(&mut self, words: &[String]) -> Result<()> {
            self.0.borrow_mut().enqueued.push(words.to_vec());
            Ok(())
        }

        fn cancel(&mut self) -> Result<()> {
            self.0.borrow_mut().cancels += 1;
            Ok(())
        }
    }

    fn harness() -> (ReadAloud, Rc<RefCell<SynthLog>>) {
        let log = Rc::new(RefCell::new(SynthLog::default()));
        let session = ReadAloud::new(Box::new(FakeSynth(Rc::clone(&log))));
        (session, log)
    }

    #[test]
    fn test_start_queues_every_word() {
        let (mut session, log) = harness();
        session.start("hello  brave world").unwrap();

        assert_eq!(session.playback(), Playback::Speaking);
        assert_eq!(session.spoken_index(), None);
        assert_eq!(log.borrow().enqueued, vec![vec!["hello", "brave", "world"]]);
    }

    #[test]
    fn test_start_with_blank_text_stays_idle() {
        let (mut session, log) = harness();
        session.start("   ").unwrap();

        assert_eq!(session.playback(), Playback::Idle);
        assert!(log.borrow().enqueued.is_empty());
    }

    #[test]
    fn test_word_boundaries_advance_highlight() {
        let (mut session, _log) = harness();
        session.start("one two three").unwrap();

        assert_eq!(session.on_word_boundary(), Some(0));
        assert_eq!(session.on_word_boundary(), Some(1));
        assert_eq!(session.spoken_index(), Some(1));
    }

    #[test]
    fn test_boundary_past_end_is_ignored() {
        let (mut session, _log) = harness();
        session.start("one").unwrap();

        assert_eq!(session.on_word_boundary(), Some(0));
        assert_eq!(session.on_word_boundary(), None);
    }

    #[test]
    fn test_cancel_resets_session() {
        let (mut session, log) = harness();
        session.start("one two").unwrap();
        session.on_word_boundary();

        session.cancel().unwrap();

        assert_eq!(session.playback(), Playback::Idle);
        assert_eq!(session.spoken_index(), None);
        assert_eq!(log.borrow().cancels, 1);
    }

    #[test]
    fn test_cancel_when_idle_skips_engine() {
        let (mut session, log) = harness();
        session.cancel().unwrap();
        assert_eq!(log.borrow().cancels, 0);
    }

    #[test]
    fn test_pause_resume_replays_interrupted_word() {
        let (mut session, log) = harness();
        session.start("one two three").unwrap();
        session.on_word_boundary();
        session.on_word_boundary(); // "two" is being spoken

        assert_eq!(session.toggle_pause().unwrap(), Some(true));
        assert_eq!(session.playback(), Playback::Paused);
        assert_eq!(log.borrow().cancels, 1);

        assert_eq!(session.toggle_pause().unwrap(), Some(false));
        assert_eq!(session.playback(), Playback::Speaking);
        assert_eq!(log.borrow().enqueued.last().unwrap(), &vec!["two", "three"]);

        // The replayed word maps back to its original index
        assert_eq!(session.on_word_boundary(), Some(1));
    }

    #[test]
    fn test_pause_before_first_boundary_resumes_from_start() {
        let (mut session, log) = harness();
        session.start("one two").unwrap();

        session.toggle_pause().unwrap();
        session.toggle_pause().unwrap();

        assert_eq!(log.borrow().enqueued.last().unwrap(), &vec!["one", "two"]);
    }

    #[test]
    fn test_toggle_when_idle_reports_none() {
        let (mut session, _log) = harness();
        assert_eq!(session.toggle_pause().unwrap(), None);
        assert_eq!(session.playback(), Playback::Idle);
    }

    #[test]
    fn test_boundary_while_paused_is_stale() {
        let (mut session, _log) = harness();
        session.start("one two").unwrap();
        session.toggle_pause().unwrap();

        assert_eq!(session.on_word_boundary(), None);
    }

    #[test]
    fn test_finished_resets_to_idle() {
        let (mut session, _log) = harness();
        session.start("one").unwrap();
        session.on_word_boundary();

        assert!(session.on_finished());
        assert_eq!(session.playback(), Playback::Idle);
        assert_eq!(session.spoken_index(), None);
    }

    #[test]
    fn test_finished_when_idle_is_stale() {
        let (mut session, _log) = harness();
        assert!(!session.on_finished());
    }

    #[test]
    fn test_restart_cancels_previous_session() {
        let (mut session, log) = harness();
        session.start("first text").unwrap();
        session.start("second").unwrap();

        assert_eq!(log.borrow().cancels, 1);
        assert_eq!(log.borrow().enqueued.last().unwrap(), &vec!["second"]);
        assert_eq!(session.spoken_index(), None);
    }
}
