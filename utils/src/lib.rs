pub mod collections;
pub mod concurrent;
