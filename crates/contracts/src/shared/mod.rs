pub mod number_format;
pub mod palette;
pub mod period;
