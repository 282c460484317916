pub mod seo_audit_service;
pub mod speed_service;

pub use seo_audit_service::{analyze_seo, assess, extract_facts};
pub use speed_service::{classify, resolve_speed};
