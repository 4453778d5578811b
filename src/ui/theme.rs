use fltk::{
    button::Button,
    enums::Color,
    frame::Frame,
    prelude::*,
    text::{StyleTableEntryExt, TextAttr, TextDisplay, TextEditor},
    window::Window,
};

use crate::app::alerts::AlertKind;

/// Font size of the preview tokens.
pub const PREVIEW_TEXT_SIZE: i32 = 30;

/// Borrowed widgets recolored on every theme switch.
pub struct ThemeWidgets<'a> {
    pub window: &'a mut Window,
    pub title: &'a mut Frame,
    pub heading: &'a mut Frame,
    pub mode_button: &'a mut Button,
    pub buttons: &'a mut [Button],
    pub editor: &'a mut TextEditor,
    pub summary: &'a mut Frame,
    pub preview_heading: &'a mut Frame,
    pub preview: &'a mut TextDisplay,
}

pub fn apply_theme(w: &mut ThemeWidgets, is_dark: bool) {
    if is_dark {
        // Dark mode colors
        let bg = Color::from_rgb(33, 37, 41);
        let fg = Color::from_rgb(255, 255, 255);
        w.window.set_color(bg);
        w.title.set_label_color(fg);
        w.heading.set_label_color(fg);
        w.editor.set_color(bg);
        w.editor.set_text_color(fg);
        w.editor.set_cursor_color(fg);
        w.editor.set_selection_color(Color::from_rgb(70, 70, 100));
        w.summary.set_label_color(fg);
        w.preview_heading.set_label_color(fg);
        w.preview.set_color(bg);
        w.mode_button.set_label("Light Mode");
        w.mode_button.set_color(Color::from_rgb(55, 60, 66));
        w.mode_button.set_label_color(fg);
        for button in w.buttons.iter_mut() {
            button.set_color(Color::from_rgb(55, 60, 66));
            button.set_label_color(fg);
        }
    } else {
        // Light mode colors
        let fg = Color::from_rgb(4, 39, 67);
        w.window.set_color(Color::White);
        w.title.set_label_color(fg);
        w.heading.set_label_color(fg);
        w.editor.set_color(Color::White);
        w.editor.set_text_color(Color::Black);
        w.editor.set_cursor_color(Color::Black);
        w.editor.set_selection_color(Color::from_rgb(173, 216, 230));
        w.summary.set_label_color(fg);
        w.preview_heading.set_label_color(fg);
        w.preview.set_color(Color::White);
        w.mode_button.set_label("Dark Mode");
        w.mode_button.set_color(Color::from_rgb(225, 229, 233));
        w.mode_button.set_label_color(fg);
        for button in w.buttons.iter_mut() {
            button.set_color(Color::from_rgb(225, 229, 233));
            button.set_label_color(fg);
        }
    }

    w.editor.redraw();
    w.preview.redraw();
    w.window.redraw();
}

/// Style table for the preview: 'A' is a plain token, 'B' the word being
/// spoken. The highlight keeps its yellow background in both themes; the
/// highlighted text flips to black in dark mode so it stays readable.
pub fn preview_style_table(is_dark: bool) -> Vec<StyleTableEntryExt> {
    let plain = if is_dark {
        Color::from_rgb(255, 255, 255)
    } else {
        Color::from_rgb(4, 39, 67)
    };
    let spoken = if is_dark {
        Color::Black
    } else {
        Color::from_rgb(4, 39, 67)
    };

    vec![
        StyleTableEntryExt {
            color: plain,
            size: PREVIEW_TEXT_SIZE,
            ..StyleTableEntryExt::default()
        },
        StyleTableEntryExt {
            color: spoken,
            size: PREVIEW_TEXT_SIZE,
            attr: TextAttr::BgColor,
            bgcolor: Color::Yellow,
            ..StyleTableEntryExt::default()
        },
    ]
}

/// Banner colors per alert kind, independent of the theme.
pub fn alert_colors(kind: AlertKind) -> (Color, Color) {
    match kind {
        AlertKind::Success => (Color::from_rgb(209, 231, 221), Color::from_rgb(15, 81, 50)),
        AlertKind::Warning => (Color::from_rgb(255, 243, 205), Color::from_rgb(102, 77, 3)),
        AlertKind::Danger => (Color::from_rgb(248, 215, 218), Color::from_rgb(88, 21, 28)),
        AlertKind::Info => (Color::from_rgb(207, 244, 252), Color::from_rgb(5, 81, 96)),
    }
}
