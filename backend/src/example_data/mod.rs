//! Sample marketplace data for demos and local development.
//!
//! Nothing is seeded implicitly. The server calls [`seed_example_data`] only
//! when configured to.

mod samples;
mod startup;

pub use samples::{SampleData, SampleDataError, sample_data};
pub use startup::{ExampleDataPorts, SeedSummary, StartupSeedingError, seed_example_data};
