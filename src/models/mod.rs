pub mod location;
pub mod person;
pub mod record;

pub use location::{LocationPoint, Rgb};
pub use person::Person;
pub use record::AttendanceRecord;
