use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

/// Aircraft category, as used for instrument currency
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Airplane,
    Rotorcraft,
    PoweredLift,
    Glider,
    LighterThanAir,
}

impl Category {
    /// All categories, in the order they are presented
    pub const ALL: [Category; 5] = [
        Category::Airplane,
        Category::Rotorcraft,
        Category::PoweredLift,
        Category::Glider,
        Category::LighterThanAir,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Airplane => "Airplane",
            Self::Rotorcraft => "Rotorcraft",
            Self::PoweredLift => "Powered Lift",
            Self::Glider => "Glider",
            Self::LighterThanAir => "Lighter-Than-Air",
        }
    }
}

/// Aircraft class within a [`Category`], as used for landing currency
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    AirplaneSingleEngineLand,
    AirplaneMultiEngineLand,
    AirplaneSingleEngineSea,
    AirplaneMultiEngineSea,
    Helicopter,
    Gyroplane,
    PoweredLift,
    Glider,
    Airship,
    Balloon,
}

impl Classification {
    /// All classifications, in the order they are presented
    pub const ALL: [Classification; 10] = [
        Classification::AirplaneSingleEngineLand,
        Classification::AirplaneMultiEngineLand,
        Classification::AirplaneSingleEngineSea,
        Classification::AirplaneMultiEngineSea,
        Classification::Helicopter,
        Classification::Gyroplane,
        Classification::PoweredLift,
        Classification::Glider,
        Classification::Airship,
        Classification::Balloon,
    ];

    pub fn category(&self) -> Category {
        match self {
            Self::AirplaneSingleEngineLand
            | Self::AirplaneMultiEngineLand
            | Self::AirplaneSingleEngineSea
            | Self::AirplaneMultiEngineSea => Category::Airplane,
            Self::Helicopter | Self::Gyroplane => Category::Rotorcraft,
            Self::PoweredLift => Category::PoweredLift,
            Self::Glider => Category::Glider,
            Self::Airship | Self::Balloon => Category::LighterThanAir,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AirplaneSingleEngineLand => "Airplane Single-Engine Land",
            Self::AirplaneMultiEngineLand => "Airplane Multi-Engine Land",
            Self::AirplaneSingleEngineSea => "Airplane Single-Engine Sea",
            Self::AirplaneMultiEngineSea => "Airplane Multi-Engine Sea",
            Self::Helicopter => "Rotorcraft Helicopter",
            Self::Gyroplane => "Rotorcraft Gyroplane",
            Self::PoweredLift => "Powered Lift",
            Self::Glider => "Glider",
            Self::Airship => "Lighter-Than-Air Airship",
            Self::Balloon => "Lighter-Than-Air Balloon",
        }
    }

    /// The abbreviation used on pilot certificates (e.g. `ASEL`)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::AirplaneSingleEngineLand => "ASEL",
            Self::AirplaneMultiEngineLand => "AMEL",
            Self::AirplaneSingleEngineSea => "ASES",
            Self::AirplaneMultiEngineSea => "AMES",
            Self::Helicopter => "RH",
            Self::Gyroplane => "RG",
            Self::PoweredLift => "PL",
            Self::Glider => "GL",
            Self::Airship => "LA",
            Self::Balloon => "LB",
        }
    }
}

/// [`HashMap`] between tail number (e.g. "N12345") and an [`Aircraft`]
pub type Aircrafts = HashMap<Arc<str>, Aircraft>;

/// An aircraft flown by the pilot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    /// The tail number of the aircraft (e.g. `N12345`)
    pub tail_number: Arc<str>,
    /// The manufacturer (e.g. `Piper`)
    pub make: String,
    /// The model (e.g. `PA-18 Super Cub`)
    pub model: String,
    pub classification: Classification,
    /// Whether the aircraft has conventional (tailwheel) landing gear
    pub tailwheel: bool,
}

impl Aircraft {
    pub fn category(&self) -> Category {
        self.classification.category()
    }
}

/// A logbook entry: one flight in one aircraft
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlightRecord {
    #[serde(with = "time::serde::rfc3339")]
    pub date: time::OffsetDateTime,
    /// The tail number of the [`Aircraft`] flown
    pub tail_number: Arc<str>,
    pub day_landings: u32,
    pub night_landings: u32,
    pub instrument_approaches: u32,
    /// Departure airport identifier
    #[serde(default)]
    pub from: Option<String>,
    /// Arrival airport identifier
    #[serde(default)]
    pub to: Option<String>,
    /// Flight time in hours
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub remarks: String,
}

impl FlightRecord {
    /// A flight with no landings, approaches nor metadata
    pub fn new(date: time::OffsetDateTime, tail_number: impl Into<Arc<str>>) -> Self {
        Self {
            date,
            tail_number: tail_number.into(),
            day_landings: 0,
            night_landings: 0,
            instrument_approaches: 0,
            from: None,
            to: None,
            duration: 0.0,
            remarks: String::new(),
        }
    }

    pub fn landings(&self) -> u32 {
        self.day_landings.saturating_add(self.night_landings)
    }
}

/// A set of aircraft whose flights count towards the same currency requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftGroup {
    /// The aircraft of a classification that are tail-draggers (`tailwheel: true`)
    /// or that are not (`tailwheel: false`)
    Classification {
        classification: Classification,
        tailwheel: bool,
    },
    /// All aircraft of a category
    Category(Category),
}

impl AircraftGroup {
    pub fn contains(&self, aircraft: &Aircraft) -> bool {
        match *self {
            Self::Classification {
                classification,
                tailwheel,
            } => aircraft.classification == classification && aircraft.tailwheel == tailwheel,
            Self::Category(category) => aircraft.category() == category,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn aircraft(classification: Classification, tailwheel: bool) -> Aircraft {
        Aircraft {
            tail_number: "N1".into(),
            make: "Piper".into(),
            model: "PA-18".into(),
            classification,
            tailwheel,
        }
    }

    #[test]
    fn every_classification_has_a_category() {
        for classification in Classification::ALL {
            assert!(Category::ALL.contains(&classification.category()));
        }
    }

    #[test]
    fn group_membership() {
        let cub = aircraft(Classification::AirplaneSingleEngineLand, true);
        let skyhawk = aircraft(Classification::AirplaneSingleEngineLand, false);
        let seneca = aircraft(Classification::AirplaneMultiEngineLand, false);

        let asel_nosewheel = AircraftGroup::Classification {
            classification: Classification::AirplaneSingleEngineLand,
            tailwheel: false,
        };
        let asel_tailwheel = AircraftGroup::Classification {
            classification: Classification::AirplaneSingleEngineLand,
            tailwheel: true,
        };
        let airplanes = AircraftGroup::Category(Category::Airplane);

        assert!(asel_nosewheel.contains(&skyhawk));
        assert!(!asel_nosewheel.contains(&cub) && !asel_nosewheel.contains(&seneca));
        assert!(asel_tailwheel.contains(&cub) && !asel_tailwheel.contains(&skyhawk));
        assert!(airplanes.contains(&cub) && airplanes.contains(&seneca));
        assert!(!airplanes.contains(&aircraft(Classification::Helicopter, false)));
    }

    #[test]
    fn landings_include_night() {
        let mut flight = FlightRecord::new(time::OffsetDateTime::UNIX_EPOCH, "N1");
        flight.day_landings = 2;
        flight.night_landings = 1;
        assert_eq!(flight.landings(), 3);
    }
}
