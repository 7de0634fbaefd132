//! Shell-first streaming primitives for server-rendered pages.
//!
//! - `Shell` / `HeadContent` - Document skeleton sent before any section
//! - `StreamingSink` - Enforces shell, then sections, then completion

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
