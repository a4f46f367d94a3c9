mod actor_process;
mod process_registry;

pub use self::{actor_process::*, process_registry::*};
