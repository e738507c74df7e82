pub mod check;
pub mod collect;
pub mod init;

mod command_result;
mod shared;

pub use command_result::{
    CheckSummary, CollectSummary, CommandResult, CommandSummary, InitSummary,
};
