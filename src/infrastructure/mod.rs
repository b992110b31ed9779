mod fetch;
mod source;

pub use fetch::{FetchError, HttpPageFetcher, PageFetcher};
pub use source::{read_html_file, read_pasted_html};
