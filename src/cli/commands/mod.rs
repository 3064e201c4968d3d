pub mod check;
mod command_result;
pub mod context;
pub mod init;
pub mod prune;
pub mod scan;
pub mod unused;

pub use command_result::*;
