pub mod error;
pub mod snapshot;
pub mod validation;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use error::SeriesError;
pub use snapshot::*;
pub use validation::*;
