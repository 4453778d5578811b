/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them. Speech-engine callbacks are forwarded here too, so every
/// state transition happens on the UI thread.
#[derive(Debug, Clone)]
pub enum Message {
    // Transformations
    Uppercase,
    Lowercase,
    Titlecase,
    SentenceCase,
    RemoveExtraSpaces,
    ClearText,

    // Buffer actions
    CopyText,
    DownloadFile,
    TextChanged,
    EditorFocused,

    // Read-aloud
    Speak,
    TogglePause,
    PauseShortcut,
    SpeechWordBoundary,
    SpeechFinished,

    // Shell
    ToggleDarkMode,
    AlertExpired(u64),
    WindowClose,
}
