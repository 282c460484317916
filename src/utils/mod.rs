pub mod fetch_utils;
pub mod log_utils;
pub mod url_utils;

pub use fetch_utils::{FetchOptions, FetchedPage, HttpFetcher, PageFetcher};
pub use log_utils::init_logging;
pub use url_utils::{is_https, normalize_url};
