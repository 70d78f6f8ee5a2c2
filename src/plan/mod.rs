pub mod instruction;
pub mod task;

pub use instruction::*;
pub use task::*;
