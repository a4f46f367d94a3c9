mod actor_cell;
mod dispatch_error;
mod dispatched;
mod dispatcher;
mod mailbox;

pub(crate) use self::actor_cell::ActorCell;
pub use self::{dispatch_error::*, dispatched::*, dispatcher::*, mailbox::*};
