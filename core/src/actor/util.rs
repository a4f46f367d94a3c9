mod case;

pub use self::case::*;
