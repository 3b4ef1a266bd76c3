use std::sync::Arc;

/// Errors raised while reading, writing or editing a [`crate::Logbook`]
#[derive(Debug)]
pub enum Error {
    /// An error originating from reading or writing the storage backend
    Io(std::io::Error),
    /// A stored table could not be read or written as CSV
    Csv(csv::Error),
    /// An aircraft with this tail number already exists
    DuplicateAircraft(Arc<str>),
    /// No aircraft with this tail number exists
    UnknownAircraft(Arc<str>),
    /// The aircraft cannot be removed since flights reference it
    AircraftInUse(Arc<str>),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => std::fmt::Display::fmt(&e, f),
            Self::Csv(e) => std::fmt::Display::fmt(&e, f),
            Self::DuplicateAircraft(tail) => write!(f, "aircraft {tail} already exists"),
            Self::UnknownAircraft(tail) => write!(f, "aircraft {tail} not found"),
            Self::AircraftInUse(tail) => write!(f, "aircraft {tail} has logged flights"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
