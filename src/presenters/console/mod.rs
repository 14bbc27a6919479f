//! Console renditions of the shell's view ports, used by the headless
//! binary.

mod status_line;
mod stroke_printer;

pub use status_line::ConsoleStatusView;
pub use stroke_printer::ConsoleRawDisplay;
