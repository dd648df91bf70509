//! CLI domain: parse, route, output, and presentation only.
//! No pipeline logic; the route table dispatches to `SolutionApi`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_questions_text, format_solution_text, format_validation_text, format_variants_text,
};
pub use route::RunContext;
