mod display;
mod script;
mod terminal;

pub use display::{DisplayError, SvgDisplay, TerminalDisplay};
pub use script::{ParseError, ScriptedClicks};
pub use terminal::run_interactive_terminal;
