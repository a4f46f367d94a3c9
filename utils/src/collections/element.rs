use std::fmt::Debug;

/// Marker for values that can travel through the queues in this crate.
pub trait Element: Debug + Send + Sync + 'static {}

impl Element for i32 {}
impl Element for u64 {}
impl Element for String {}
