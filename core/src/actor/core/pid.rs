use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Process-unique address of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pid(u64);

impl Pid {
  /// The root actor. Always resolvable while the system is alive.
  pub const ROOT: Pid = Pid(0);

  pub const fn new(id: u64) -> Self {
    Pid(id)
  }

  pub const fn id(&self) -> u64 {
    self.0
  }

  pub const fn is_root(&self) -> bool {
    self.0 == 0
  }
}

impl Display for Pid {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<u64> for Pid {
  fn from(id: u64) -> Self {
    Pid(id)
  }
}
