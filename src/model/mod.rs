//! Football domain records
//!
//! Two aggregates own everything else:
//! - `GeneralFixtureData`, keyed by `fixture_id`, in the `fixtures` collection
//! - `League`, keyed by (`id`, `season`), in the `leagues` collection
//!
//! The remaining types are nested records or request/response envelopes.

mod fixture;
mod kind;
mod league;

pub use fixture::{
    Event, FixtureData, FixtureRequest, GeneralFixtureData, GetFixturesByDateAndLeagueRequest,
    GoalsData, Lineup, PlayedData, StandingsData, TeamStanding, TeamStatistics,
};
pub use kind::RecordKind;
pub use league::{League, LeagueAddResponse, LeagueRequest, RoundFixture, Standings, TeamPath};

use bson::{Bson, Document};

use crate::schema::{Projection, Record};

/// An aggregate stored as its own document.
///
/// Describes the key only. Lookup and upsert belong to the persistence
/// engine.
pub trait Keyed: Record {
    /// Collection the aggregate is stored in
    const COLLECTION: &'static str;

    /// Logical names of the key fields, in key order
    const KEY_FIELDS: &'static [&'static str];

    /// Key values, in `KEY_FIELDS` order
    fn key_values(&self) -> Vec<&str>;

    /// Composite key string, parts joined with ':'
    fn document_key(&self) -> String {
        self.key_values().join(":")
    }

    /// Filter document matching this aggregate, using document field names
    fn key_filter(&self) -> Document {
        let schema = Self::schema();
        Self::KEY_FIELDS
            .iter()
            .zip(self.key_values())
            .filter_map(|(logical, value)| {
                schema
                    .field(logical)
                    .map(|f| (f.name(Projection::Document).to_string(), Bson::from(value)))
            })
            .collect()
    }
}

impl Keyed for GeneralFixtureData {
    const COLLECTION: &'static str = "fixtures";
    const KEY_FIELDS: &'static [&'static str] = &["fixture_id"];

    fn key_values(&self) -> Vec<&str> {
        vec![self.fixture_id.as_str()]
    }
}

impl Keyed for League {
    const COLLECTION: &'static str = "leagues";
    const KEY_FIELDS: &'static [&'static str] = &["id", "season"];

    fn key_values(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.season.as_str()]
    }
}
