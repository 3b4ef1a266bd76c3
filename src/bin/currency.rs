use std::error::Error;

use clap::{Parser, Subcommand};
use simple_logger::SimpleLogger;

use logbook::calendar::{format_date, parse_date};
use logbook::{
    summarize, tail_number, Aircraft, Classification, FlightRecord, LocalDisk, Logbook, Status,
    Summary,
};

static TEMPLATE_NAME: &'static str = "t";
static TEMPLATE: &'static str = include_str!("currency_template.md");

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
enum ClassificationArg {
    Asel,
    Amel,
    Ases,
    Ames,
    Helicopter,
    Gyroplane,
    PoweredLift,
    Glider,
    Airship,
    Balloon,
}

impl From<ClassificationArg> for Classification {
    fn from(value: ClassificationArg) -> Self {
        match value {
            ClassificationArg::Asel => Classification::AirplaneSingleEngineLand,
            ClassificationArg::Amel => Classification::AirplaneMultiEngineLand,
            ClassificationArg::Ases => Classification::AirplaneSingleEngineSea,
            ClassificationArg::Ames => Classification::AirplaneMultiEngineSea,
            ClassificationArg::Helicopter => Classification::Helicopter,
            ClassificationArg::Gyroplane => Classification::Gyroplane,
            ClassificationArg::PoweredLift => Classification::PoweredLift,
            ClassificationArg::Glider => Classification::Glider,
            ClassificationArg::Airship => Classification::Airship,
            ClassificationArg::Balloon => Classification::Balloon,
        }
    }
}

const ABOUT: &'static str = r#"Reports FAA landing and instrument currency from a pilot logbook.
The logbook is a directory with `aircraft.csv` and `flights.csv`, created on first write.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// Directory of the logbook
    #[arg(long, default_value = "logbook")]
    logbook: String,
    /// Evaluate currency at this date in format `yyyy-mm-dd` (else now)
    #[arg(long, value_parser = parse_date)]
    now: Option<time::Date>,
    /// Days before expiration a requirement is reported as expiring
    #[arg(long, default_value_t = 30)]
    warning_days: u16,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Log debug information
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shows the currency of every requirement
    Summary,
    /// Lists logged flights, most recent first
    Flights,
    /// Adds an aircraft to the logbook
    AddAircraft {
        /// The tail number (e.g. `N12345`)
        #[arg(long)]
        tail_number: String,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        #[arg(long, value_enum)]
        classification: ClassificationArg,
        /// The aircraft has conventional (tailwheel) landing gear
        #[arg(long)]
        tailwheel: bool,
    },
    /// Logs a flight
    LogFlight {
        #[arg(long)]
        tail_number: String,
        /// A date in format `yyyy-mm-dd`
        #[arg(long, value_parser = parse_date)]
        date: time::Date,
        #[arg(long, default_value_t = 0)]
        day_landings: u32,
        #[arg(long, default_value_t = 0)]
        night_landings: u32,
        #[arg(long, default_value_t = 0)]
        approaches: u32,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        /// Flight time in hours
        #[arg(long, default_value_t = 0.0)]
        duration: f64,
        #[arg(long, default_value = "")]
        remarks: String,
    },
}

#[derive(serde::Serialize)]
struct Row {
    label: String,
    until: String,
    current: bool,
    expiring: bool,
}

#[derive(serde::Serialize)]
struct SectionContext {
    title: String,
    rows: Vec<Row>,
}

#[derive(serde::Serialize)]
struct Context {
    date: String,
    sections: Vec<SectionContext>,
}

fn render(summary: &Summary, warning: time::Duration) -> Result<String, Box<dyn Error>> {
    let now = summary.computed_at;
    let context = Context {
        date: format_date(now.date()),
        sections: summary
            .sections
            .iter()
            .map(|section| SectionContext {
                title: section.title.clone(),
                rows: section
                    .results
                    .iter()
                    .map(|result| {
                        let status = result.status(now, warning);
                        Row {
                            label: result.label.clone(),
                            until: format_date(result.current_until()),
                            current: status != Status::Expired,
                            expiring: status == Status::ExpiringSoon,
                        }
                    })
                    .collect(),
            })
            .collect(),
    };

    let mut tt = tinytemplate::TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(tt.render(TEMPLATE_NAME, &context)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()?;

    let now = match cli.now {
        Some(date) => date.midnight().assume_utc(),
        None => time::OffsetDateTime::now_utc(),
    };

    let mut logbook = Logbook::load(&cli.logbook, &LocalDisk).await?;

    match cli.command {
        Command::Summary => {
            let summary = summarize(&logbook, now);
            let warning = time::Duration::days(cli.warning_days.into());
            match cli.format {
                Format::Text => println!("{}", render(&summary, warning)?),
                Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
        Command::Flights => {
            let flights = logbook.all_flights();
            match cli.format {
                Format::Text => {
                    for flight in flights {
                        println!(
                            "{} {:<8} {:>4}-{:<4} {:>5.1}h day {} night {} app {} {}",
                            format_date(flight.date.date()),
                            flight.tail_number,
                            flight.from.as_deref().unwrap_or(""),
                            flight.to.as_deref().unwrap_or(""),
                            flight.duration,
                            flight.day_landings,
                            flight.night_landings,
                            flight.instrument_approaches,
                            flight.remarks
                        )
                    }
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&flights)?),
            }
        }
        Command::AddAircraft {
            tail_number: tail,
            make,
            model,
            classification,
            tailwheel,
        } => {
            logbook.add_aircraft(Aircraft {
                tail_number: tail_number(&tail),
                make,
                model,
                classification: classification.into(),
                tailwheel,
            })?;
            logbook.save(&cli.logbook, &LocalDisk).await?;
            log::info!("Aircraft {tail} added");
        }
        Command::LogFlight {
            tail_number: tail,
            date,
            day_landings,
            night_landings,
            approaches,
            from,
            to,
            duration,
            remarks,
        } => {
            let mut flight = FlightRecord::new(date.midnight().assume_utc(), tail_number(&tail));
            flight.day_landings = day_landings;
            flight.night_landings = night_landings;
            flight.instrument_approaches = approaches;
            flight.from = from;
            flight.to = to;
            flight.duration = duration;
            flight.remarks = remarks;
            logbook.log_flight(flight)?;
            logbook.save(&cli.logbook, &LocalDisk).await?;
            log::info!("Flight in {tail} on {} logged", format_date(date));
        }
    }

    Ok(())
}
