/// GLprimer Terminal - matrix inspection from the command line
///
/// Prints the per-frame uniforms of the lab scene, evaluates transform
/// expressions and summarizes mesh buffers, using crossterm for styling.

pub mod cli;
pub mod printer;

pub use cli::{run, Cli, Command};
pub use printer::MatrixPrinter;
