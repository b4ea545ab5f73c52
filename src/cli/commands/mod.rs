//! One module per subcommand, each exposing an `execute` function.

pub mod add;
pub mod create;
pub mod generate_key;
pub mod get;
pub mod list;
pub mod update;
