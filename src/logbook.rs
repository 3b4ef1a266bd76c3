//! The pilot's logbook: the aircraft flown and the flights logged in them.
use std::sync::Arc;

use itertools::Itertools;
use serde::de::DeserializeOwned;

use crate::fs::BlobStorageProvider;
use crate::{
    csv, Aircraft, AircraftGroup, Aircrafts, Category, Classification, Error, FlightRecord,
};

static AIRCRAFT: &'static str = "aircraft.csv";
static FLIGHTS: &'static str = "flights.csv";

fn blob_name(directory: &str, table: &str) -> String {
    if directory.is_empty() {
        table.to_string()
    } else {
        format!("{}/{table}", directory.trim_end_matches('/'))
    }
}

async fn read_table<D: DeserializeOwned>(
    blob_name: &str,
    client: &dyn BlobStorageProvider,
) -> Result<Vec<D>, Error> {
    match client.maybe_get(blob_name).await? {
        Some(content) => Ok(csv::deserialize(&content)?),
        None => {
            log::info!("{blob_name} - not found, starting empty");
            Ok(vec![])
        }
    }
}

/// In-memory representation of a pilot logbook
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Logbook {
    aircrafts: Aircrafts,
    /// in insertion order
    flights: Vec<FlightRecord>,
}

impl Logbook {
    /// Reads the logbook stored in `directory`. Missing tables are treated as empty.
    /// # Error
    /// Errors if a table cannot be read or if a flight references an unknown aircraft.
    pub async fn load(directory: &str, client: &dyn BlobStorageProvider) -> Result<Self, Error> {
        let aircraft_blob = blob_name(directory, AIRCRAFT);
        let flights_blob = blob_name(directory, FLIGHTS);
        let (aircrafts, flights) = futures::try_join!(
            read_table::<Aircraft>(&aircraft_blob, client),
            read_table::<FlightRecord>(&flights_blob, client),
        )?;

        let mut logbook = Self::default();
        for aircraft in aircrafts {
            logbook.add_aircraft(aircraft)?;
        }
        for flight in flights {
            logbook.log_flight(flight)?;
        }
        log::info!(
            "Loaded {} aircraft and {} flights from {directory}",
            logbook.aircrafts.len(),
            logbook.flights.len()
        );
        Ok(logbook)
    }

    /// Writes the logbook to `directory`
    pub async fn save(
        &self,
        directory: &str,
        client: &dyn BlobStorageProvider,
    ) -> Result<(), Error> {
        let aircrafts = self
            .aircrafts
            .values()
            .sorted_by(|a, b| a.tail_number.cmp(&b.tail_number));
        client
            .put(&blob_name(directory, AIRCRAFT), csv::serialize(aircrafts)?)
            .await?;
        client
            .put(&blob_name(directory, FLIGHTS), csv::serialize(self.flights.iter())?)
            .await?;
        log::info!(
            "Saved {} aircraft and {} flights to {directory}",
            self.aircrafts.len(),
            self.flights.len()
        );
        Ok(())
    }

    pub fn aircraft(&self, tail: &str) -> Option<&Aircraft> {
        self.aircrafts.get(&tail_number(tail))
    }

    pub fn aircrafts(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircrafts.values()
    }

    /// Adds an aircraft, normalizing its tail number with [`tail_number`]
    /// # Error
    /// Errors if an aircraft with the same tail number exists
    pub fn add_aircraft(&mut self, mut aircraft: Aircraft) -> Result<(), Error> {
        aircraft.tail_number = tail_number(&aircraft.tail_number);
        if self.aircrafts.contains_key(&aircraft.tail_number) {
            return Err(Error::DuplicateAircraft(aircraft.tail_number));
        }
        self.aircrafts.insert(aircraft.tail_number.clone(), aircraft);
        Ok(())
    }

    /// Removes an aircraft that has no logged flights
    pub fn remove_aircraft(&mut self, tail: &str) -> Result<Aircraft, Error> {
        let tail = tail_number(tail);
        if self.flights.iter().any(|f| f.tail_number == tail) {
            return Err(Error::AircraftInUse(tail));
        }
        self.aircrafts
            .remove(&tail)
            .ok_or(Error::UnknownAircraft(tail))
    }

    /// Logs a flight, normalizing its tail number with [`tail_number`]
    /// # Error
    /// Errors if the flight's aircraft is not in the logbook
    pub fn log_flight(&mut self, mut flight: FlightRecord) -> Result<(), Error> {
        flight.tail_number = tail_number(&flight.tail_number);
        if !self.aircrafts.contains_key(&flight.tail_number) {
            return Err(Error::UnknownAircraft(flight.tail_number));
        }
        self.flights.push(flight);
        Ok(())
    }

    /// All flights, most recent first
    pub fn all_flights(&self) -> Vec<&FlightRecord> {
        most_recent_first(self.flights.iter())
    }

    /// Returns the flights flown in aircraft of `group`, most recent first.
    /// This is the order expected by [`crate::currency`].
    pub fn flights(&self, group: &AircraftGroup) -> Vec<&FlightRecord> {
        most_recent_first(self.flights.iter().filter(|flight| {
            self.aircrafts
                .get(&flight.tail_number)
                .is_some_and(|aircraft| group.contains(aircraft))
        }))
    }

    /// The classifications of the aircraft in the logbook
    pub fn classifications(&self) -> impl Iterator<Item = Classification> + '_ {
        Classification::ALL
            .into_iter()
            .filter(|c| self.aircrafts.values().any(|a| a.classification == *c))
    }

    /// The categories of the aircraft in the logbook
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|c| self.aircrafts.values().any(|a| a.category() == *c))
    }

    /// Whether any aircraft of `classification` is a tail-dragger
    pub fn has_tailwheel(&self, classification: Classification) -> bool {
        self.aircrafts
            .values()
            .any(|a| a.classification == classification && a.tailwheel)
    }
}

/// Orders by date, descending. Flights on the same date are ordered last logged first.
fn most_recent_first<'a>(
    flights: impl DoubleEndedIterator<Item = &'a FlightRecord>,
) -> Vec<&'a FlightRecord> {
    flights
        .rev()
        .sorted_by(|a, b| b.date.cmp(&a.date))
        .collect()
}

/// Normalizes a tail number to the key used by [`Logbook`] (e.g. ` n12345` -> `N12345`)
pub fn tail_number(tail: &str) -> Arc<str> {
    tail.trim().to_ascii_uppercase().into()
}
