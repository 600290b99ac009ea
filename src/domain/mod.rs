pub mod member;
pub mod value_objects;

pub use member::*;
pub use value_objects::*;
