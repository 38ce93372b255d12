mod application;
mod clipboard;
pub mod data;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use runtime_config::RuntimeConfig;
