use serde::{de::DeserializeOwned, Serialize};

/// Serializes `items` to CSV with a header row
pub fn serialize<S: Serialize>(items: impl Iterator<Item = S>) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for item in items {
        wtr.serialize(item)?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// Deserializes CSV with a header row into records
/// # Error
/// Errors on the first row that does not match `D`
pub fn deserialize<D: DeserializeOwned>(data: &[u8]) -> Result<Vec<D>, csv::Error> {
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(std::io::Cursor::new(data))
        .into_deserialize()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Aircraft, Classification};

    #[test]
    fn aircraft_table() {
        let cub = Aircraft {
            tail_number: "N1938C".into(),
            make: "Piper".into(),
            model: "J-3 Cub".into(),
            classification: Classification::AirplaneSingleEngineLand,
            tailwheel: true,
        };
        let data = serialize([cub.clone()].into_iter()).unwrap();
        assert_eq!(
            std::str::from_utf8(&data).unwrap(),
            concat!(
                "tail_number,make,model,classification,tailwheel\n",
                "N1938C,Piper,J-3 Cub,airplane_single_engine_land,true\n"
            )
        );
        assert_eq!(deserialize::<Aircraft>(&data).unwrap(), vec![cub]);
    }

    #[test]
    fn malformed_row() {
        let data = concat!(
            "tail_number,make,model,classification,tailwheel\n",
            "N1,Piper,J-3,submarine,true\n"
        );
        assert!(deserialize::<Aircraft>(data.as_bytes()).is_err());
    }
}
