mod observable_properties;
mod observable_property;

pub use self::{observable_properties::*, observable_property::*};
