pub mod field;
pub mod person;
pub mod place;
pub mod work;

pub use field::{FieldUpdate, WorkField};
pub use person::Person;
pub use place::Place;
pub use work::Work;
