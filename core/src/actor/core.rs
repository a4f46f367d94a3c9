mod actor;
mod actor_config;
mod actor_error;
mod actor_handle;
mod error_reason;
mod lifecycle;
mod pid;
mod props;


pub use self::{
  actor::*, actor_config::*, actor_error::*, actor_handle::*, error_reason::*, lifecycle::*, pid::*, props::*,
};
