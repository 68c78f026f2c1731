pub mod availability;
pub mod errors;
pub mod ids;
pub mod slot;
pub mod time;
