pub mod actor_system;
mod actor_system_error;
mod config;
mod config_option;
pub mod context;
pub mod core;
pub mod dispatch;
pub mod guardian;
pub mod message;
pub mod observable;
pub mod process;
pub mod util;


pub use self::{
  actor_system::ActorSystem, actor_system_error::*, config::*, config_option::*, context::*, core::*, dispatch::*,
  guardian::RootActor, message::*, observable::*,
};
