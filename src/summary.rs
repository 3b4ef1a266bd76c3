use serde::Serialize;
use time::OffsetDateTime;

use crate::currency::{instrument_currency, landing_currency, CurrencyResult};
use crate::{AircraftGroup, Logbook};

/// A group of related currency requirements (e.g. all landing requirements in `ASEL`)
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub results: Vec<CurrencyResult>,
}

/// The currency of every requirement that applies to the aircraft in a [`Logbook`]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Summary {
    #[serde(with = "time::serde::rfc3339")]
    pub computed_at: OffsetDateTime,
    pub sections: Vec<Section>,
}

/// Computes the currency of every requirement applicable to `logbook` at `now`.
///
/// Returns one landing section per classification flown, followed by one instrument
/// section per category flown. Landings in tail-draggers and in other aircraft are
/// evaluated separately. The tail-dragger requirements are only listed when the
/// classification has a tail-dragger.
///
/// The result is a snapshot: call again after `logbook` changes.
pub fn summarize(logbook: &Logbook, now: OffsetDateTime) -> Summary {
    let landings = logbook.classifications().map(|classification| {
        let mut groups = vec![(false, "")];
        if logbook.has_tailwheel(classification) {
            groups.push((true, " tailwheel"));
        }

        let results = groups
            .into_iter()
            .flat_map(|(tailwheel, qualifier)| {
                let flights = logbook.flights(&AircraftGroup::Classification {
                    classification,
                    tailwheel,
                });
                let abbreviation = classification.abbreviation();
                [
                    landing_currency(
                        format!("{abbreviation}{qualifier} day landings"),
                        flights.iter().copied(),
                        false,
                        now,
                    ),
                    landing_currency(
                        format!("{abbreviation}{qualifier} night landings"),
                        flights.iter().copied(),
                        true,
                        now,
                    ),
                ]
            })
            .collect();

        Section {
            title: classification.label().to_string(),
            results,
        }
    });

    let instrument = logbook.categories().map(|category| {
        let flights = logbook.flights(&AircraftGroup::Category(category));
        Section {
            title: format!("{} instrument", category.label()),
            results: vec![instrument_currency(
                format!("{} approaches", category.label()),
                flights,
                now,
            )],
        }
    });

    let sections = landings.chain(instrument).collect::<Vec<_>>();
    log::info!("Computed currency of {} sections", sections.len());
    Summary {
        computed_at: now,
        sections,
    }
}
