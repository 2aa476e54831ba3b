//! Built-in commands.
//!
//! Each command implements the [`CliCommand`](crate::command::CliCommand)
//! trait and writes its result to the output handed in by the registry.

pub mod check;
pub mod render;
pub mod submit;

pub use check::CheckCommand;
pub use render::RenderCommand;
pub use submit::SubmitCommand;

use crate::command::CommandRegistry;

/// Registers all built-in commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(RenderCommand));
    registry.register(Box::new(SubmitCommand));
    registry.register(Box::new(CheckCommand));
}
