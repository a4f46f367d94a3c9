use std::any::Any;
use std::fmt::Debug;

/// Anything that can be carried through a mailbox.
///
/// Usually implemented with `#[derive(Message)]`, which requires the type to be
/// `PartialEq` so that `eq_message` compares by value.
pub trait Message: Debug + Send + Sync + 'static {
  fn eq_message(&self, other: &dyn Message) -> bool;
  fn as_any(&self) -> &(dyn Any + Send + Sync + 'static);

  fn get_type_name(&self) -> String;
}

macro_rules! impl_message_for_value {
  ($($t:ty),* $(,)?) => {
    $(
      impl Message for $t {
        fn eq_message(&self, other: &dyn Message) -> bool {
          match other.as_any().downcast_ref::<$t>() {
            Some(other) => self == other,
            _ => false,
          }
        }

        fn as_any(&self) -> &(dyn Any + Send + Sync + 'static) {
          self
        }

        fn get_type_name(&self) -> String {
          std::any::type_name_of_val(self).to_string()
        }
      }
    )*
  };
}

impl_message_for_value!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, bool, String);
