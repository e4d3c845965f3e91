pub mod rounding;

pub use rounding::{round_to, CLOSURE_DECIMALS, PROPORTION_DECIMALS};
