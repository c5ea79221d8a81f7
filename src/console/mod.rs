mod input;
pub mod menu;

pub use input::{ConsoleInput, InputError};
