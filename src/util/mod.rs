mod meta_data;
mod mode;

pub use self::meta_data::{Availability, MetaData};
pub use self::mode::{Format, Mode};
