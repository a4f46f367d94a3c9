mod base_message;
mod dispatch_context;
mod message;
mod message_envelope;
mod message_handle;
mod payload;
mod publish;
mod signal;
mod signal_message;

#[cfg(test)]
mod tests;

pub use self::{
  base_message::*, dispatch_context::*, message::*, message_envelope::*, message_handle::*, payload::*, publish::*,
  signal::*, signal_message::*,
};
