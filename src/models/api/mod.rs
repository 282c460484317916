pub mod params;

pub use params::{SeoParams, SpeedParams};
