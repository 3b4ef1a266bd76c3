use std::error::Error;

use logbook::{
    summarize, Aircraft, Classification, FlightRecord, InMemory, LocalDisk, Logbook, Status,
};
use time::macros::datetime;

fn cub() -> Aircraft {
    Aircraft {
        tail_number: "N1938C".into(),
        make: "Piper".into(),
        model: "J-3 Cub".into(),
        classification: Classification::AirplaneSingleEngineLand,
        tailwheel: true,
    }
}

fn skyhawk() -> Aircraft {
    Aircraft {
        tail_number: "N172SP".into(),
        make: "Cessna".into(),
        model: "172S Skyhawk".into(),
        classification: Classification::AirplaneSingleEngineLand,
        tailwheel: false,
    }
}

fn flight(
    date: time::OffsetDateTime,
    aircraft: &Aircraft,
    day: u32,
    night: u32,
    approaches: u32,
) -> FlightRecord {
    let mut flight = FlightRecord::new(date, aircraft.tail_number.clone());
    flight.day_landings = day;
    flight.night_landings = night;
    flight.instrument_approaches = approaches;
    flight.from = Some("KPAO".into());
    flight.to = Some("KSQL".into());
    flight.duration = 1.2;
    flight
}

/// Verifies that a logbook written to disk yields the same currency once read back,
/// including flights logged out of chronological order.
#[tokio::test]
async fn currency_from_disk() -> Result<(), Box<dyn Error>> {
    let directory = std::env::temp_dir().join(format!("logbook-it-{}", std::process::id()));
    let directory = directory.to_str().ok_or("temporary directory is not utf-8")?;

    let mut logbook = Logbook::default();
    logbook.add_aircraft(cub())?;
    logbook.add_aircraft(skyhawk())?;
    logbook.log_flight(flight(datetime!(2024-03-01 20:00 UTC), &skyhawk(), 0, 2, 0))?;
    logbook.log_flight(flight(datetime!(2024-03-10 21:00 UTC), &skyhawk(), 0, 2, 0))?;
    logbook.log_flight(flight(datetime!(2024-01-15 15:00 UTC), &skyhawk(), 0, 0, 6))?;
    logbook.log_flight(flight(datetime!(2024-02-20 10:00 UTC), &cub(), 1, 0, 0))?;
    logbook.save(directory, &LocalDisk).await?;

    let loaded = Logbook::load(directory, &LocalDisk).await?;
    std::fs::remove_dir_all(directory)?;
    assert_eq!(loaded, logbook);

    let now = datetime!(2024-04-01 0:00 UTC);
    let summary = summarize(&loaded, now);
    assert_eq!(summary.sections.len(), 2);

    let asel = &summary.sections[0].results;
    assert_eq!(asel[0].label, "ASEL day landings");
    assert_eq!(asel[0].expiration, datetime!(2024-05-30 20:00 UTC));
    assert_eq!(asel[1].label, "ASEL night landings");
    assert_eq!(asel[1].expiration, datetime!(2024-05-30 20:00 UTC));
    // a single day landing in the tail-dragger
    assert_eq!(asel[2].expiration, now);
    assert_eq!(asel[3].expiration, now);

    let instrument = &summary.sections[1].results[0];
    assert_eq!(instrument.label, "Airplane approaches");
    assert_eq!(instrument.expiration, datetime!(2024-08-01 0:00 UTC));
    assert_eq!(instrument.current_until(), time::macros::date!(2024 - 07 - 31));
    assert!(instrument.is_current(datetime!(2024-07-31 12:00 UTC)));
    assert_eq!(
        instrument.status(now, time::Duration::days(30)),
        Status::Current
    );
    Ok(())
}

/// Verifies that currency is recomputed from the records present when asked
#[tokio::test]
async fn recompute_on_demand() -> Result<(), Box<dyn Error>> {
    let storage = InMemory::default();
    let now = datetime!(2024-04-01 0:00 UTC);

    let mut logbook = Logbook::default();
    logbook.add_aircraft(cub())?;
    logbook.log_flight(flight(datetime!(2024-03-01 0:00 UTC), &cub(), 2, 0, 0))?;
    logbook.save("pilot", &storage).await?;

    let before = summarize(&Logbook::load("pilot", &storage).await?, now);
    assert!(!before.sections[0].results[0].is_current(now));

    let mut logbook = Logbook::load("pilot", &storage).await?;
    logbook.log_flight(flight(datetime!(2024-03-15 0:00 UTC), &cub(), 1, 0, 0))?;
    logbook.save("pilot", &storage).await?;

    let after = summarize(&Logbook::load("pilot", &storage).await?, now);
    let day = &after.sections[0].results[0];
    assert!(day.is_current(now));
    assert_eq!(day.expiration, datetime!(2024-05-30 0:00 UTC));
    Ok(())
}
