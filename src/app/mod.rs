//! Application layer.
//!
//! - `text_ops` - pure transformations and summary figures
//! - `alerts` / `read_aloud` - the two stateful controllers
//! - `state` - main application coordinator
//! - `clipboard` / `export` - system integrations
//! - `messages` / `error` - channel messages and the error type

pub mod alerts;
pub mod clipboard;
pub mod error;
pub mod export;
pub mod messages;
pub mod read_aloud;
pub mod state;
pub mod text_ops;

pub use alerts::{Alert, AlertController, AlertKind};
pub use error::{AppError, Result};
pub use messages::Message;
pub use read_aloud::{Playback, ReadAloud};
