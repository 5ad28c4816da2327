pub mod app;
pub mod args;
pub mod logging;
pub mod render;

pub use app::AppError;
pub use args::{ArgsError, Invocation, Options, parse_args};
pub use render::{LineRenderer, TerminalRenderer, format_elapsed};
