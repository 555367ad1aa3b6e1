//! Case-insensitive item tally for the Corner Grocer tracker.
//!
//! A [`FrequencyTable`] is filled once from a whitespace-separated item list
//! (see [`loader`]), persisted with [`backup`], and then queried through
//! point lookups, the sorted listing and the histogram in [`reporter`].

pub mod backup;
pub mod error;
pub mod loader;
pub mod reporter;
pub mod table;
pub mod util;

pub use error::{BackupError, LoadError};
pub use loader::Loader;
pub use reporter::Reporter;
pub use table::{normalize, FrequencyTable};
