use fltk::{
    app::{self, Sender},
    button::Button,
    frame::Frame,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};
use log::{debug, info, warn};

use super::alerts::{AlertController, AlertKind, ALERT_SECONDS};
use super::messages::Message;
use super::read_aloud::{Playback, ReadAloud};
use super::text_ops;
use super::{clipboard, export};
use crate::ui::theme::{self, ThemeWidgets};

pub struct AppState {
    pub window: Window,
    pub flex: Flex,
    pub title_frame: Frame,
    pub mode_button: Button,
    pub alert_frame: Frame,
    pub heading_frame: Frame,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub action_buttons: Vec<Button>,
    pub pause_button: Button,
    pub summary_frame: Frame,
    pub preview_heading: Frame,
    pub preview: TextDisplay,
    pub preview_buffer: TextBuffer,
    pub preview_style_buffer: TextBuffer,
    pub sender: Sender<Message>,
    pub dark_mode: bool,
    pub alerts: AlertController,
    /// `None` when no speech engine could be initialized; read-aloud then
    /// degrades to a danger alert.
    pub read_aloud: Option<ReadAloud>,
}

impl AppState {
    pub fn new(
        widgets: crate::ui::main_window::MainWidgets,
        sender: Sender<Message>,
        read_aloud: Option<ReadAloud>,
    ) -> Self {
        let mut state = Self {
            window: widgets.wind,
            flex: widgets.flex,
            title_frame: widgets.title_frame,
            mode_button: widgets.mode_button,
            alert_frame: widgets.alert_frame,
            heading_frame: widgets.heading_frame,
            editor: widgets.editor,
            buffer: widgets.buffer,
            action_buttons: widgets.action_buttons,
            pause_button: widgets.pause_button,
            summary_frame: widgets.summary_frame,
            preview_heading: widgets.preview_heading,
            preview: widgets.preview,
            preview_buffer: widgets.preview_buffer,
            preview_style_buffer: widgets.preview_style_buffer,
            sender,
            dark_mode: false,
            alerts: AlertController::new(),
            read_aloud,
        };
        state.apply_theme();
        state.refresh_text_views();
        state
    }

    fn buffer_text(&self) -> String {
        self.buffer.text()
    }

    // --- Alerts ---

    fn show_alert(&mut self, message: &str, kind: AlertKind) {
        let generation = self.alerts.show(message, kind);
        self.render_alert();

        let s = self.sender;
        app::add_timeout3(ALERT_SECONDS, move |_| {
            s.send(Message::AlertExpired(generation));
        });
    }

    pub fn expire_alert(&mut self, generation: u64) {
        if self.alerts.expire(generation) {
            self.render_alert();
        }
    }

    fn render_alert(&mut self) {
        match self.alerts.current() {
            Some(alert) => {
                let (bg, fg) = theme::alert_colors(alert.kind);
                self.alert_frame.set_label(&format!("  {}", alert.message));
                self.alert_frame.set_color(bg);
                self.alert_frame.set_label_color(fg);
                self.alert_frame.show();
                self.flex.fixed(&self.alert_frame, 30);
            }
            None => {
                self.alert_frame.hide();
                self.flex.fixed(&self.alert_frame, 0);
            }
        }
        self.window.redraw();
    }

    // --- Theme ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.apply_theme();
        info!("switched to {} mode", if self.dark_mode { "dark" } else { "light" });
        let message = if self.dark_mode {
            "Dark mode has been enabled"
        } else {
            "Light mode has been enabled"
        };
        self.show_alert(message, AlertKind::Success);
    }

    fn apply_theme(&mut self) {
        theme::apply_theme(
            &mut ThemeWidgets {
                window: &mut self.window,
                title: &mut self.title_frame,
                heading: &mut self.heading_frame,
                mode_button: &mut self.mode_button,
                buttons: &mut self.action_buttons,
                editor: &mut self.editor,
                summary: &mut self.summary_frame,
                preview_heading: &mut self.preview_heading,
                preview: &mut self.preview,
            },
            self.dark_mode,
        );
        // The style table colors are theme-dependent, so rebind it
        self.preview.set_highlight_data_ext(
            self.preview_style_buffer.clone(),
            theme::preview_style_table(self.dark_mode),
        );
    }

    // --- Transformations ---

    pub fn convert_uppercase(&mut self) {
        self.apply_transform(text_ops::uppercase, "Converted to Uppercase!");
    }

    pub fn convert_lowercase(&mut self) {
        self.apply_transform(text_ops::lowercase, "Converted to Lowercase!");
    }

    pub fn convert_titlecase(&mut self) {
        self.apply_transform(text_ops::title_case, "Converted to Titlecase!");
    }

    pub fn convert_sentence_case(&mut self) {
        self.apply_transform(text_ops::sentence_case, "Converted to Sentence Case!");
    }

    pub fn remove_extra_spaces(&mut self) {
        self.apply_transform(text_ops::collapse_spaces, "Extra Spaces Removed!");
    }

    fn apply_transform(&mut self, op: fn(&str) -> String, done: &str) {
        let text = self.buffer_text();
        if text.trim().is_empty() {
            self.show_alert("Text is empty. Please enter some text.", AlertKind::Warning);
            return;
        }
        self.buffer.set_text(&op(&text));
        self.show_alert(done, AlertKind::Success);
    }

    pub fn clear_text(&mut self) {
        if self.buffer_text().trim().is_empty() {
            self.show_alert("Text is already empty!", AlertKind::Info);
            return;
        }
        self.buffer.set_text("");
        self.show_alert("Text Cleared!", AlertKind::Success);
    }

    pub fn copy_text(&mut self) {
        let text = self.buffer_text();
        if text.trim().is_empty() {
            self.show_alert("Text is empty. Please enter some text.", AlertKind::Warning);
            return;
        }
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.show_alert("Copied to Clipboard!", AlertKind::Success),
            Err(e) => {
                warn!("clipboard copy failed: {}", e);
                self.show_alert("Could not copy to clipboard.", AlertKind::Danger);
            }
        }
    }

    pub fn download_file(&mut self) {
        let text = self.buffer_text();
        if text.trim().is_empty() {
            self.show_alert("Cannot download file. Text is empty!", AlertKind::Danger);
            return;
        }
        match export::save_to_downloads(&text) {
            Ok(_) => self.show_alert("File Downloaded!", AlertKind::Success),
            Err(e) => {
                warn!("export failed: {}", e);
                self.show_alert("Could not save the file.", AlertKind::Danger);
            }
        }
    }

    // --- Read-aloud ---

    pub fn speak(&mut self) {
        let text = self.buffer_text();
        if text.trim().is_empty() {
            self.show_alert("Text is empty. Please enter some text.", AlertKind::Warning);
            return;
        }

        let started = match self.read_aloud.as_mut() {
            None => None,
            Some(session) => Some(session.start(&text)),
        };

        match started {
            None => self.show_alert("Speech is not available on this system.", AlertKind::Danger),
            Some(Ok(())) => {
                debug!("speaking {} words", text_ops::word_count(&text));
                self.highlight_word(None);
                self.update_pause_button();
                self.show_alert("Speaking!", AlertKind::Success);
            }
            Some(Err(e)) => {
                warn!("failed to start speech: {}", e);
                self.update_pause_button();
                self.show_alert("Could not start speaking.", AlertKind::Danger);
            }
        }
    }

    /// Pause/resume from the toolbar button. Guards the empty buffer with
    /// a warning, like every other action.
    pub fn toggle_speech_pause(&mut self) {
        if self.buffer_text().trim().is_empty() {
            self.show_alert("No text to stop speaking!", AlertKind::Warning);
            return;
        }
        self.toggle_pause_inner(false);
    }

    /// Pause/resume from the spacebar. Only acts while a session is
    /// active; otherwise the key is ignored without an alert.
    pub fn toggle_speech_pause_from_keyboard(&mut self) {
        let active = self
            .read_aloud
            .as_ref()
            .is_some_and(|session| session.is_active());
        if active {
            self.toggle_pause_inner(true);
        }
    }

    fn toggle_pause_inner(&mut self, from_keyboard: bool) {
        let toggled = match self.read_aloud.as_mut() {
            None => None,
            Some(session) => Some(session.toggle_pause()),
        };

        match toggled {
            None => self.show_alert("Speech is not available on this system.", AlertKind::Danger),
            Some(Ok(Some(true))) => {
                self.update_pause_button();
                self.show_alert("Paused Speaking!", AlertKind::Success);
            }
            Some(Ok(Some(false))) => {
                self.update_pause_button();
                self.show_alert("Resumed Speaking!", AlertKind::Success);
            }
            Some(Ok(None)) => {
                if !from_keyboard {
                    self.show_alert("Nothing is being spoken.", AlertKind::Warning);
                }
            }
            Some(Err(e)) => {
                warn!("pause toggle failed: {}", e);
                self.show_alert("Speech engine error.", AlertKind::Danger);
            }
        }
    }

    /// Focus returned to the editor: cancel any active session silently.
    pub fn editor_focused(&mut self) {
        self.cancel_speech();
    }

    pub fn on_word_boundary(&mut self) {
        let spoken = self
            .read_aloud
            .as_mut()
            .and_then(|session| session.on_word_boundary());
        if let Some(index) = spoken {
            self.highlight_word(Some(index));
        }
    }

    pub fn on_speech_finished(&mut self) {
        let ended = self
            .read_aloud
            .as_mut()
            .is_some_and(|session| session.on_finished());
        if ended {
            debug!("speech finished");
            self.highlight_word(None);
            self.update_pause_button();
        }
    }

    fn cancel_speech(&mut self) {
        let was_active = self
            .read_aloud
            .as_ref()
            .is_some_and(|session| session.is_active());
        if !was_active {
            return;
        }
        if let Some(session) = self.read_aloud.as_mut() {
            if let Err(e) = session.cancel() {
                warn!("failed to cancel speech: {}", e);
            }
        }
        self.highlight_word(None);
        self.update_pause_button();
    }

    /// Best-effort teardown on window close: never leave the engine
    /// speaking after the app is gone.
    pub fn shutdown(&mut self) {
        info!("shutting down");
        self.cancel_speech();
    }

    fn update_pause_button(&mut self) {
        let paused = self
            .read_aloud
            .as_ref()
            .is_some_and(|session| session.playback() == Playback::Paused);
        self.pause_button
            .set_label(if paused { "Resume" } else { "Pause" });
    }

    // --- Summary & preview ---

    /// The buffer changed: any active session is stale, and the summary
    /// and preview need recomputing.
    pub fn text_changed(&mut self) {
        self.cancel_speech();
        self.refresh_text_views();
    }

    fn refresh_text_views(&mut self) {
        let text = self.buffer_text();

        let words = text_ops::word_count(&text);
        let chars = text_ops::char_count(&text);
        let minutes = text_ops::reading_minutes(&text);
        self.summary_frame.set_label(&format!(
            "{} words and {} characters\n{} Minutes to Read",
            words, chars, minutes
        ));

        let tokens = text_ops::words(&text);
        self.preview_buffer.set_text(&tokens.join(" "));
        self.highlight_word(self.current_spoken_index());
    }

    fn current_spoken_index(&self) -> Option<usize> {
        self.read_aloud
            .as_ref()
            .and_then(|session| session.spoken_index())
    }

    /// Restyle the preview so `index` is the highlighted token, and scroll
    /// it into view.
    fn highlight_word(&mut self, index: Option<usize>) {
        let tokens = text_ops::words(&self.buffer_text());
        self.preview_style_buffer
            .set_text(&preview_style(&tokens, index));

        if let Some(i) = index {
            let offset = word_offset(&tokens, i);
            self.preview.set_insert_position(offset as i32);
            self.preview.show_insert_position();
        }
        self.preview.redraw();
    }
}

/// Style-buffer contents for a preview of `words` joined by single spaces:
/// 'B' over the highlighted word, 'A' everywhere else. Style characters
/// cover bytes, so each word contributes its byte length.
fn preview_style(words: &[String], highlighted: Option<usize>) -> String {
    let mut style = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            style.push('A');
        }
        let ch = if Some(i) == highlighted { 'B' } else { 'A' };
        for _ in 0..word.len() {
            style.push(ch);
        }
    }
    style
}

/// Byte offset of `words[index]` in the single-spaced preview text.
fn word_offset(words: &[String], index: usize) -> usize {
    words.iter().take(index).map(|w| w.len() + 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_preview_style_no_highlight() {
        let style = preview_style(&owned(&["ab", "c"]), None);
        assert_eq!(style, "AAAA");
    }

    #[test]
    fn test_preview_style_highlights_one_word() {
        let style = preview_style(&owned(&["ab", "c", "de"]), Some(1));
        //         text: "ab c de"
        assert_eq!(style, "AAABAAA");
    }

    #[test]
    fn test_preview_style_multibyte_words() {
        let words = owned(&["héllo", "wörld"]);
        let style = preview_style(&words, Some(0));
        let text = words.join(" ");
        assert_eq!(style.len(), text.len());
        assert!(style.starts_with("BBBBBB"));
    }

    #[test]
    fn test_word_offset() {
        let words = owned(&["ab", "c", "de"]);
        assert_eq!(word_offset(&words, 0), 0);
        assert_eq!(word_offset(&words, 1), 3);
        assert_eq!(word_offset(&words, 2), 5);
    }
}
