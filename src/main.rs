use std::sync::Arc;

use fltk::{app, prelude::*};
use log::{info, warn};

use speak_pad::app::messages::Message;
use speak_pad::app::read_aloud::ReadAloud;
use speak_pad::app::state::AppState;
use speak_pad::speech::{self, EventSink, SpeechEvent};
use speak_pad::ui::main_window::build_main_window;

fn main() {
    env_logger::init();

    let a = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    widgets.wind.show();

    // Engine callbacks arrive on the TTS thread; forward them into the
    // channel so every transition runs on the dispatch loop.
    let sink: EventSink = Arc::new({
        let s = sender;
        move |event| match event {
            SpeechEvent::WordBoundary => s.send(Message::SpeechWordBoundary),
            SpeechEvent::Finished => s.send(Message::SpeechFinished),
        }
    });
    let read_aloud = match speech::create_synth(sink) {
        Ok(synth) => {
            info!("speech synthesizer created");
            Some(ReadAloud::new(synth))
        }
        Err(e) => {
            warn!("speech unavailable, read-aloud disabled: {}", e);
            None
        }
    };

    let mut state = AppState::new(widgets, sender, read_aloud);

    while a.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::Uppercase => state.convert_uppercase(),
                Message::Lowercase => state.convert_lowercase(),
                Message::Titlecase => state.convert_titlecase(),
                Message::SentenceCase => state.convert_sentence_case(),
                Message::RemoveExtraSpaces => state.remove_extra_spaces(),
                Message::ClearText => state.clear_text(),

                Message::CopyText => state.copy_text(),
                Message::DownloadFile => state.download_file(),
                Message::TextChanged => state.text_changed(),
                Message::EditorFocused => state.editor_focused(),

                Message::Speak => state.speak(),
                Message::TogglePause => state.toggle_speech_pause(),
                Message::PauseShortcut => state.toggle_speech_pause_from_keyboard(),
                Message::SpeechWordBoundary => state.on_word_boundary(),
                Message::SpeechFinished => state.on_speech_finished(),

                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::AlertExpired(generation) => state.expire_alert(generation),
                Message::WindowClose => {
                    state.shutdown();
                    a.quit();
                }
            }
        }
    }
}
