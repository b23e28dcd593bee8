mod clipboard_arboard;
mod clipboard_command;
mod clipboard_exporter;
mod form_file;

pub use clipboard_arboard::ArboardClipboard;
pub use clipboard_command::CommandClipboard;
pub use clipboard_exporter::{ClipboardExporter, CopyOutcome, CopyPath};
pub use form_file::{FormFileFormat, load_form, parse_form};
