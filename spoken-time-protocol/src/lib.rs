pub mod dto;
pub mod time;

pub use dto::{ErrorResponse, TimeRequest, TimeResponse};
pub use time::Time;

pub mod prelude {
    pub use crate::dto::{ErrorResponse, TimeRequest, TimeResponse};
    pub use crate::time::{Time, MAX_HOUR, MAX_MINUTE, MIN_HOUR, MIN_MINUTE};
}
