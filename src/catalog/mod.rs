pub mod error;
pub mod formation;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::LoadFailure;
pub use formation::{Format, Formation, Kind};
pub use store::{Catalog, DEFAULT_DATA_PATH};
