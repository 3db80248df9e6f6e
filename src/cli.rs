//! CLI domain: parse, route, and output only.
//! No domain orchestration; the route table dispatches to domain services.

mod output;
mod parse;
mod route;

pub use output::{format_show, map_error};
pub use parse::{Cli, Commands};
pub use route::{PropertyRow, RunContext};
