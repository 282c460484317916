// src/services/speed_service/mod.rs

pub mod classify;
pub mod pagespeed;
pub mod resolve;

pub use classify::{classify, thresholds};
pub use pagespeed::{PageSpeedClient, PerformanceApi};
pub use resolve::{basic_report, normalize_pagespeed, resolve_speed};
