pub mod diff;
pub mod extract;
pub mod init;
pub mod merge;

mod command_result;

pub use command_result::*;
