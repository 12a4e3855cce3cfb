pub mod decimals;

pub use decimals::to_non_divisible_number;
