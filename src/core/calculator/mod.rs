pub mod pairing;
pub mod rounding;
pub mod summary;
