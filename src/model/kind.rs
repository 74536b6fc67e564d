//! Record kinds
//!
//! Names every record type at runtime so callers holding only a string (the
//! CLI, a route parameter) can reach the right schema and typed codec.

use std::fmt;

use crate::schema::{Record, RecordSchema};

use super::{
    Event, FixtureData, FixtureRequest, GeneralFixtureData, GetFixturesByDateAndLeagueRequest,
    GoalsData, League, LeagueAddResponse, LeagueRequest, Lineup, PlayedData, RoundFixture,
    Standings, StandingsData, TeamPath, TeamStanding, TeamStatistics,
};

/// Every record type in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum RecordKind {
    GeneralFixtureData,
    FixtureData,
    Event,
    StandingsData,
    TeamStanding,
    PlayedData,
    GoalsData,
    TeamStatistics,
    Lineup,
    League,
    Standings,
    TeamPath,
    RoundFixture,
    GetFixturesByDateAndLeagueRequest,
    FixtureRequest,
    LeagueRequest,
    LeagueAddResponse,
}

/// Runs `$body` with `$t` bound to the Rust type of a `RecordKind`.
#[macro_export]
macro_rules! with_record_type {
    ($kind:expr, $t:ident => $body:expr) => {
        match $kind {
            $crate::model::RecordKind::GeneralFixtureData => {
                type $t = $crate::model::GeneralFixtureData;
                $body
            }
            $crate::model::RecordKind::FixtureData => {
                type $t = $crate::model::FixtureData;
                $body
            }
            $crate::model::RecordKind::Event => {
                type $t = $crate::model::Event;
                $body
            }
            $crate::model::RecordKind::StandingsData => {
                type $t = $crate::model::StandingsData;
                $body
            }
            $crate::model::RecordKind::TeamStanding => {
                type $t = $crate::model::TeamStanding;
                $body
            }
            $crate::model::RecordKind::PlayedData => {
                type $t = $crate::model::PlayedData;
                $body
            }
            $crate::model::RecordKind::GoalsData => {
                type $t = $crate::model::GoalsData;
                $body
            }
            $crate::model::RecordKind::TeamStatistics => {
                type $t = $crate::model::TeamStatistics;
                $body
            }
            $crate::model::RecordKind::Lineup => {
                type $t = $crate::model::Lineup;
                $body
            }
            $crate::model::RecordKind::League => {
                type $t = $crate::model::League;
                $body
            }
            $crate::model::RecordKind::Standings => {
                type $t = $crate::model::Standings;
                $body
            }
            $crate::model::RecordKind::TeamPath => {
                type $t = $crate::model::TeamPath;
                $body
            }
            $crate::model::RecordKind::RoundFixture => {
                type $t = $crate::model::RoundFixture;
                $body
            }
            $crate::model::RecordKind::GetFixturesByDateAndLeagueRequest => {
                type $t = $crate::model::GetFixturesByDateAndLeagueRequest;
                $body
            }
            $crate::model::RecordKind::FixtureRequest => {
                type $t = $crate::model::FixtureRequest;
                $body
            }
            $crate::model::RecordKind::LeagueRequest => {
                type $t = $crate::model::LeagueRequest;
                $body
            }
            $crate::model::RecordKind::LeagueAddResponse => {
                type $t = $crate::model::LeagueAddResponse;
                $body
            }
        }
    };
}

impl RecordKind {
    /// All kinds, fixture group first
    pub const ALL: [RecordKind; 17] = [
        RecordKind::GeneralFixtureData,
        RecordKind::FixtureData,
        RecordKind::Event,
        RecordKind::StandingsData,
        RecordKind::TeamStanding,
        RecordKind::PlayedData,
        RecordKind::GoalsData,
        RecordKind::TeamStatistics,
        RecordKind::Lineup,
        RecordKind::League,
        RecordKind::Standings,
        RecordKind::TeamPath,
        RecordKind::RoundFixture,
        RecordKind::GetFixturesByDateAndLeagueRequest,
        RecordKind::FixtureRequest,
        RecordKind::LeagueRequest,
        RecordKind::LeagueAddResponse,
    ];

    /// Returns the field table for this kind
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            RecordKind::GeneralFixtureData => GeneralFixtureData::schema(),
            RecordKind::FixtureData => FixtureData::schema(),
            RecordKind::Event => Event::schema(),
            RecordKind::StandingsData => StandingsData::schema(),
            RecordKind::TeamStanding => TeamStanding::schema(),
            RecordKind::PlayedData => PlayedData::schema(),
            RecordKind::GoalsData => GoalsData::schema(),
            RecordKind::TeamStatistics => TeamStatistics::schema(),
            RecordKind::Lineup => Lineup::schema(),
            RecordKind::League => League::schema(),
            RecordKind::Standings => Standings::schema(),
            RecordKind::TeamPath => TeamPath::schema(),
            RecordKind::RoundFixture => RoundFixture::schema(),
            RecordKind::GetFixturesByDateAndLeagueRequest => {
                GetFixturesByDateAndLeagueRequest::schema()
            }
            RecordKind::FixtureRequest => FixtureRequest::schema(),
            RecordKind::LeagueRequest => LeagueRequest::schema(),
            RecordKind::LeagueAddResponse => LeagueAddResponse::schema(),
        }
    }

    /// Returns the record type name
    pub fn name(&self) -> &'static str {
        self.schema().name
    }

    /// Finds a kind by record type name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Whether records of this kind are stored as their own documents
    pub fn is_aggregate(&self) -> bool {
        matches!(self, RecordKind::GeneralFixtureData | RecordKind::League)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
