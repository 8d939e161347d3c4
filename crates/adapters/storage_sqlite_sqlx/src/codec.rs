//! Text encodings shared by the repositories.
//!
//! Identifiers, timestamps (RFC 3339), bed types and prices are all stored
//! as `TEXT`. Any value that fails to parse back surfaces as
//! [`sqlx::Error::Decode`].

use std::str::FromStr;

use innkeep_domain::time::Timestamp;

pub(crate) fn decode<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&chrono::Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn encode_timestamp(value: Timestamp) -> String {
    value.to_rfc3339()
}
