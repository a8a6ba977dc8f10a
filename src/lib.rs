pub mod accumulator;
pub mod constant;
pub mod diagnostic;
pub mod error;
pub mod execute_ok;
pub mod handler;
mod opts;
pub mod protocol;

pub use accumulator::NoticeAccumulator;
pub use execute_ok::ExecuteOk;
pub use opts::{Opts, Utf8Policy};

#[cfg(test)]
mod opts_test;
