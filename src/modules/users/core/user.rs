// The user record and its factory.
//
// A user built by `User::new` is not persisted yet and carries `NEW_USER_ID`.
// The repository replaces it with a real id on add; the id never changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NEW_USER_ID: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(with = "iso8601_millis")]
    pub dob: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, dob: DateTime<Utc>) -> Self {
        Self {
            id: NEW_USER_ID,
            name: name.into(),
            email: email.into(),
            dob,
        }
    }

    /// Returns an independent copy that keeps the id.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

// `2020-01-01T00:00:00.000Z`
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dob: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dob.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
