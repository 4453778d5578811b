use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Event, Font, FrameType, Key},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor, WrapMode},
    window::Window,
};

use crate::app::messages::Message;

pub const EDITOR_TEXT_SIZE: i32 = 16;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub title_frame: Frame,
    pub mode_button: Button,
    pub alert_frame: Frame,
    pub heading_frame: Frame,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    /// Every transformation/action button, for theming.
    pub action_buttons: Vec<Button>,
    /// Clone of the pause/resume button, for relabeling.
    pub pause_button: Button,
    pub summary_frame: Frame,
    pub preview_heading: Frame,
    pub preview: TextDisplay,
    pub preview_buffer: TextBuffer,
    pub preview_style_buffer: TextBuffer,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 920, 720, "SpeakPad");
    wind.set_xclass("SpeakPad");

    let mut flex = Flex::new(0, 0, 920, 720, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(8);

    // Header: title + theme toggle
    let mut header = Flex::new(0, 0, 0, 0, None);
    header.set_type(FlexType::Row);
    let mut title_frame = Frame::new(0, 0, 0, 0, "SpeakPad");
    title_frame.set_label_font(Font::HelveticaBold);
    title_frame.set_label_size(20);
    title_frame.set_align(Align::Inside | Align::Left);
    let mut mode_button = Button::new(0, 0, 0, 0, "Dark Mode");
    mode_button.clear_visible_focus();
    mode_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::ToggleDarkMode)
    });
    header.fixed(&mode_button, 120);
    header.end();
    flex.fixed(&header, 40);

    // Transient alert banner (initially hidden)
    let mut alert_frame = Frame::default().with_size(0, 0);
    alert_frame.set_frame(FrameType::FlatBox);
    alert_frame.set_align(Align::Inside | Align::Left);
    alert_frame.set_label_size(13);
    alert_frame.hide();
    flex.fixed(&alert_frame, 0);

    let mut heading_frame = Frame::new(0, 0, 0, 0, "Enter Text To Analyze");
    heading_frame.set_label_size(17);
    flex.fixed(&heading_frame, 32);

    let mut buffer = TextBuffer::default();
    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(buffer.clone());
    editor.set_text_size(EDITOR_TEXT_SIZE);
    editor.wrap_mode(WrapMode::AtBounds, 0);

    // Transformation and action buttons. Created inside an open Flex row,
    // so each is parented automatically.
    let add_button = |label: &str, msg: Message| -> Button {
        let mut button = Button::new(0, 0, 0, 0, None).with_label(label);
        button.clear_visible_focus();
        button.set_callback({
            let s = *sender;
            move |_| s.send(msg.clone())
        });
        button
    };

    let mut action_buttons = Vec::new();

    let mut row1 = Flex::new(0, 0, 0, 0, None);
    row1.set_type(FlexType::Row);
    row1.set_pad(6);
    action_buttons.push(add_button("Uppercase", Message::Uppercase));
    action_buttons.push(add_button("Lowercase", Message::Lowercase));
    action_buttons.push(add_button("Titlecase", Message::Titlecase));
    action_buttons.push(add_button("Sentence Case", Message::SentenceCase));
    action_buttons.push(add_button("Remove Extra Spaces", Message::RemoveExtraSpaces));
    row1.end();
    flex.fixed(&row1, 36);

    let mut row2 = Flex::new(0, 0, 0, 0, None);
    row2.set_type(FlexType::Row);
    row2.set_pad(6);
    action_buttons.push(add_button("Copy Text", Message::CopyText));
    action_buttons.push(add_button("Speak", Message::Speak));
    let pause_button = add_button("Pause", Message::TogglePause);
    action_buttons.push(pause_button.clone());
    action_buttons.push(add_button("Download File", Message::DownloadFile));
    action_buttons.push(add_button("Clear", Message::ClearText));
    row2.end();
    flex.fixed(&row2, 36);

    // Summary
    let mut summary_frame = Frame::new(0, 0, 0, 0, "0 words and 0 characters\n0 Minutes to Read");
    summary_frame.set_label_size(14);
    flex.fixed(&summary_frame, 48);

    let mut preview_heading = Frame::new(0, 0, 0, 0, "Preview");
    preview_heading.set_label_font(Font::HelveticaBold);
    preview_heading.set_label_size(16);
    flex.fixed(&preview_heading, 28);

    // Word-by-word preview with a parallel style buffer for the
    // spoken-word highlight
    let preview_buffer = TextBuffer::default();
    let preview_style_buffer = TextBuffer::default();
    let mut preview = TextDisplay::new(0, 0, 0, 0, "");
    preview.set_buffer(preview_buffer.clone());
    preview.wrap_mode(WrapMode::AtBounds, 0);
    flex.fixed(&preview, 170);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Editing requires focusing the editor first, so this is where an
    // active read-aloud session gets cancelled
    editor.handle({
        let s = *sender;
        move |_, ev| {
            if ev == Event::Focus {
                s.send(Message::EditorFocused);
            }
            false
        }
    });

    buffer.add_modify_callback({
        let s = *sender;
        move |_, inserted, deleted, _, _| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::TextChanged);
            }
        }
    });

    // Spacebar toggles pause/resume unless the editor is being typed in.
    // The action buttons never take keyboard focus, so an unfocused window
    // routes the key here.
    wind.handle({
        let s = *sender;
        let editor = editor.clone();
        move |_, ev| {
            if ev == Event::KeyDown && app::event_key() == Key::from_char(' ') {
                let editor_has_focus = app::focus()
                    .map(|w| w.as_widget_ptr() == editor.as_widget_ptr())
                    .unwrap_or(false);
                if !editor_has_focus {
                    s.send(Message::PauseShortcut);
                    return true;
                }
            }
            false
        }
    });

    wind.set_callback({
        let s = *sender;
        move |_| s.send(Message::WindowClose)
    });

    MainWidgets {
        wind,
        flex,
        title_frame,
        mode_button,
        alert_frame,
        heading_frame,
        editor,
        buffer,
        action_buttons,
        pause_button,
        summary_frame,
        preview_heading,
        preview,
        preview_buffer,
        preview_style_buffer,
    }
}
