mod commands;
mod logging;
mod prompt;
mod render;
mod setup;

pub use commands::run;
