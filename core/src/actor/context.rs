mod actor_context;

pub use self::actor_context::*;
