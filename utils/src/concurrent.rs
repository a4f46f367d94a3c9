mod count_down_latch;
mod wait_group;

pub use self::{count_down_latch::*, wait_group::*};
