pub mod export;
pub mod extraction;
pub mod filtering;
pub mod harvest;
pub mod ranking;

pub use extraction::{extract, Extractor};
pub use harvest::{HarvestReport, HarvestService};
pub use ranking::rank;
