//! On-disk shape of an archive.
//!
//! Field names follow the file format exactly, including the spaces in
//! `"film type"`, `"develop date"` and friends. Films embed a full copy of
//! their camera rather than a reference.

use crate::domain::{Archive, Camera, CameraCollection, Film, FilmCollection};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Every record is read from a JSON object; arrays and scalars are rejected
/// instead of being matched to fields by position.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct ArchiveRecord {
    #[serde(rename = "Cameras")]
    pub cameras: Vec<CameraRecord>,
    #[serde(rename = "Film")]
    pub films: Vec<FilmRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct CameraRecord {
    pub name: String,
    #[serde(rename = "film type")]
    pub film_type: String,
    pub manufacturer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "JsonObject")]
pub struct FilmRecord {
    pub name: String,
    pub iso: u32,
    #[serde(rename = "type")]
    pub film_type: String,
    pub camera: CameraRecord,
    pub brand: String,
    #[serde(serialize_with = "date_object::serialize")]
    pub expiry: Option<NaiveDate>,
    #[serde(rename = "develop date", serialize_with = "date_object::serialize")]
    pub develop_date: Option<NaiveDate>,
    #[serde(rename = "develop location", skip_serializing_if = "Option::is_none")]
    pub develop_location: Option<String>,
    #[serde(rename = "images path", skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

fn required<T: DeserializeOwned>(object: &mut JsonObject, key: &str) -> Result<T, String> {
    let value = object
        .remove(key)
        .ok_or_else(|| format!("missing key '{}'", key))?;
    serde_json::from_value(value).map_err(|e| format!("invalid '{}': {}", key, e))
}

/// Absent and `null` both read as unset.
fn optional<T: DeserializeOwned>(object: &mut JsonObject, key: &str) -> Result<Option<T>, String> {
    match object.remove(key) {
        Some(value) => {
            serde_json::from_value(value).map_err(|e| format!("invalid '{}': {}", key, e))
        }
        None => Ok(None),
    }
}

fn required_date(object: &mut JsonObject, key: &str) -> Result<Option<NaiveDate>, String> {
    let value = object
        .remove(key)
        .ok_or_else(|| format!("missing key '{}'", key))?;
    date_object::deserialize(value).map_err(|e| format!("invalid '{}': {}", key, e))
}

impl TryFrom<JsonObject> for ArchiveRecord {
    type Error = String;

    fn try_from(mut object: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            cameras: required(&mut object, "Cameras")?,
            films: required(&mut object, "Film")?,
        })
    }
}

impl TryFrom<JsonObject> for CameraRecord {
    type Error = String;

    fn try_from(mut object: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(&mut object, "name")?,
            film_type: required(&mut object, "film type")?,
            manufacturer: required(&mut object, "manufacturer")?,
        })
    }
}

impl TryFrom<JsonObject> for FilmRecord {
    type Error = String;

    fn try_from(mut object: JsonObject) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(&mut object, "name")?,
            iso: required(&mut object, "iso")?,
            film_type: required(&mut object, "type")?,
            camera: required(&mut object, "camera")?,
            brand: required(&mut object, "brand")?,
            expiry: required_date(&mut object, "expiry")?,
            develop_date: required_date(&mut object, "develop date")?,
            develop_location: optional(&mut object, "develop location")?,
            directory: optional(&mut object, "images path")?,
        })
    }
}

impl From<&Camera> for CameraRecord {
    fn from(camera: &Camera) -> Self {
        Self {
            name: camera.name().to_string(),
            film_type: camera.film_type().to_string(),
            manufacturer: camera.manufacturer().to_string(),
        }
    }
}

impl From<CameraRecord> for Camera {
    fn from(record: CameraRecord) -> Self {
        Camera::new(record.name, record.film_type, record.manufacturer)
    }
}

impl From<&Film> for FilmRecord {
    fn from(film: &Film) -> Self {
        Self {
            name: film.name().to_string(),
            iso: film.iso(),
            film_type: film.film_type().to_string(),
            camera: CameraRecord::from(film.camera()),
            brand: film.brand().to_string(),
            expiry: film.expiry(),
            develop_date: film.develop_date(),
            develop_location: film.develop_location().map(str::to_string),
            directory: film.directory().map(str::to_string),
        }
    }
}

impl From<FilmRecord> for Film {
    fn from(record: FilmRecord) -> Self {
        // The embedded camera becomes its own entity, unrelated to the
        // archive's camera collection.
        let mut film = Film::new(
            record.name,
            record.iso,
            record.film_type,
            Camera::from(record.camera),
            record.brand,
        );
        if let Some(date) = record.expiry {
            film.set_expiry(date);
        }
        if let Some(date) = record.develop_date {
            film.set_develop_date(date);
        }
        if let Some(location) = record.develop_location {
            film.set_develop_location(location);
        }
        if let Some(directory) = record.directory {
            film.set_directory(directory);
        }
        film
    }
}

impl From<&Archive> for ArchiveRecord {
    fn from(archive: &Archive) -> Self {
        Self {
            cameras: archive.cameras().iter().map(CameraRecord::from).collect(),
            films: archive.films().iter().map(FilmRecord::from).collect(),
        }
    }
}

impl From<ArchiveRecord> for Archive {
    fn from(record: ArchiveRecord) -> Self {
        let cameras: CameraCollection = record.cameras.into_iter().map(Camera::from).collect();
        let films: FilmCollection = record.films.into_iter().map(Film::from).collect();
        Archive::new(cameras, films)
    }
}

/// Optional dates as `{"year": "2020", "month": "12", "day": "30"}`, with `{}`
/// standing for "no date".
pub mod date_object {
    use super::JsonObject;
    use chrono::{Datelike, NaiveDate};
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("year", &date.year().to_string())?;
                map.serialize_entry("month", &date.month().to_string())?;
                map.serialize_entry("day", &date.day().to_string())?;
                map.end()
            }
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = JsonObject::deserialize(deserializer)?;
        let parts = DateParts {
            year: part(&mut object, "year").map_err(D::Error::custom)?,
            month: part(&mut object, "month").map_err(D::Error::custom)?,
            day: part(&mut object, "day").map_err(D::Error::custom)?,
        };
        parts.into_date().map_err(D::Error::custom)
    }

    fn part(object: &mut JsonObject, key: &str) -> Result<Option<DatePart>, String> {
        object
            .remove(key)
            .map(|value| {
                serde_json::from_value(value).map_err(|e| format!("date {}: {}", key, e))
            })
            .transpose()
    }

    struct DateParts {
        year: Option<DatePart>,
        month: Option<DatePart>,
        day: Option<DatePart>,
    }

    // Written as strings, but hand-edited files sometimes carry plain numbers.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DatePart {
        Text(String),
        Number(i64),
    }

    impl DatePart {
        fn parse<T: std::str::FromStr + TryFrom<i64>>(&self, key: &str) -> Result<T, String> {
            match self {
                DatePart::Text(text) => text
                    .trim()
                    .parse()
                    .map_err(|_| format!("date {} '{}' is not a number", key, text)),
                DatePart::Number(n) => {
                    T::try_from(*n).map_err(|_| format!("date {} {} is out of range", key, n))
                }
            }
        }
    }

    impl DateParts {
        fn into_date(self) -> Result<Option<NaiveDate>, String> {
            match (self.year, self.month, self.day) {
                (None, None, None) => Ok(None),
                (Some(year), Some(month), Some(day)) => {
                    let year: i32 = year.parse("year")?;
                    let month: u32 = month.parse("month")?;
                    let day: u32 = day.parse("day")?;
                    NaiveDate::from_ymd_opt(year, month, day)
                        .map(Some)
                        .ok_or_else(|| format!("{}-{}-{} is not a calendar date", year, month, day))
                }
                _ => Err("date object needs all of year, month and day, or none".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn film_json(expiry: serde_json::Value) -> serde_json::Value {
        json!({
            "name": "UltraMax",
            "iso": 400,
            "type": "35mm",
            "camera": {"name": "Program Plus", "film type": "35mm", "manufacturer": "Pentax"},
            "brand": "Kodak",
            "expiry": expiry,
            "develop date": {}
        })
    }

    #[test]
    fn test_dates_serialize_as_string_parts() {
        let camera = Camera::new("Program Plus", "35mm", "Pentax");
        let mut film = Film::new("UltraMax", 400, "35mm", camera, "Kodak");
        film.set_expiry(date(2020, 12, 30));

        let value = serde_json::to_value(FilmRecord::from(&film)).unwrap();
        assert_eq!(value["expiry"], json!({"year": "2020", "month": "12", "day": "30"}));
        assert_eq!(value["develop date"], json!({}));
        assert!(value.get("develop location").is_none());
        assert!(value.get("images path").is_none());
        assert_eq!(value["camera"]["film type"], "35mm");
    }

    #[test]
    fn test_date_parts_accept_numbers() {
        let record: FilmRecord =
            serde_json::from_value(film_json(json!({"year": 2020, "month": "7", "day": 12})))
                .unwrap();
        assert_eq!(record.expiry, Some(date(2020, 7, 12)));
        assert_eq!(record.develop_date, None);
    }

    #[test]
    fn test_partial_date_is_rejected() {
        let result: Result<FilmRecord, _> =
            serde_json::from_value(film_json(json!({"year": "2020", "month": "7"})));
        assert!(result.is_err());
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        let result: Result<FilmRecord, _> =
            serde_json::from_value(film_json(json!({"year": "2021", "month": "2", "day": "30"})));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not a calendar date"), "{}", err);
    }

    #[test]
    fn test_missing_expiry_key_is_rejected() {
        let mut value = film_json(json!({}));
        value.as_object_mut().unwrap().remove("expiry");
        let result: Result<FilmRecord, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_array_forms_are_rejected() {
        let camera: Result<CameraRecord, _> =
            serde_json::from_value(json!(["FM2", "35mm", "Nikon"]));
        assert!(camera.is_err());

        let err = serde_json::from_value::<FilmRecord>(film_json(json!(["2020", "12", "30"])))
            .unwrap_err()
            .to_string();
        assert!(err.contains("expiry"), "{}", err);
    }

    #[test]
    fn test_null_optional_strings_are_unset() {
        let mut value = film_json(json!({}));
        value["develop location"] = serde_json::Value::Null;
        let record: FilmRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.develop_location, None);
        assert_eq!(record.directory, None);
    }
}
