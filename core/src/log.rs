mod actor_logger;
mod log_config;
mod tracing_init;

pub use self::{actor_logger::*, log_config::*, tracing_init::*};
