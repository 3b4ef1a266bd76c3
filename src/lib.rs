#![forbid(unsafe_code)]
//! A pilot logbook and the FAA currency computed from it.
pub mod calendar;
pub mod csv;
pub mod currency;
mod error;
pub mod fs;
mod logbook;
mod model;
mod summary;

pub use currency::{CurrencyResult, Status};
pub use error::Error;
pub use fs::{BlobStorageProvider, InMemory, LocalDisk};
pub use logbook::*;
pub use model::*;
pub use summary::*;
