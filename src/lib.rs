//! SpeakPad - a text workbench with read-aloud.
//!
//! The crate is split into three layers:
//! - `app` - application state, pure text operations, alert and read-aloud
//!   controllers
//! - `speech` - the speech synthesizer abstraction and its native backend
//! - `ui` - FLTK widget construction and theming

pub mod app;
pub mod speech;
pub mod ui;
