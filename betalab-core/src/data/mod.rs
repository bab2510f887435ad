//! Data acquisition: providers, canonicalization, and date alignment.

pub mod align;
pub mod canonicalize;
pub mod csv_import;
pub mod provider;
pub mod static_provider;
pub mod yahoo;

pub use align::{align_closes, AlignedPair};
pub use canonicalize::canonicalize;
pub use csv_import::CsvProvider;
pub use provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
pub use static_provider::StaticProvider;
pub use yahoo::YahooProvider;
