//! League records
//!
//! A `League` is stored per (id, season). Besides the table it carries each
//! team's path through the season, round by round.

use crate::record;

record! {
    /// Request for a league's data in one season
    pub struct LeagueRequest as LEAGUE_REQUEST_SCHEMA {
        pub league_id: String => "league_id", "league_id";
        pub season: String => "season", "season";
    }
}

record! {
    /// Acknowledgment returned after adding a league
    pub struct LeagueAddResponse as LEAGUE_ADD_RESPONSE_SCHEMA {
        pub message: String => "message", "message";
    }
}

record! {
    /// A league season: details, table and per-team paths
    pub struct League as LEAGUE_SCHEMA {
        pub id: String => "id", "id";
        pub name: String => "name", "name";
        pub season: String => "season", "season";
        pub season_number: i64 => "season_number", "season_number";
        pub country: String => "country", "country";
        /// Flag image reference
        pub flag: String => "flag", "flag";
        pub finished: bool => "finished", "finished";
        /// Table rows in rank order
        pub standings: Vec<Standings> => "standings", "standings";
        /// One entry per team
        pub teams_path: Vec<TeamPath> => "teams_path", "teams_path";
    }
}

record! {
    /// A team's rounds through the season, in chronological order
    pub struct TeamPath as TEAM_PATH_SCHEMA {
        pub team_id: String => "team_id", "team_id";
        pub team_name: String => "team_name", "team_name";
        pub team_logo: String => "team_logo", "team_logo";
        pub round_fixtures: Vec<RoundFixture> => "round_fixtures", "round_fixtures";
    }
}

record! {
    /// One round of a team's season.
    ///
    /// `total_goal` and `total_goal_against` are running totals up to and
    /// including this round.
    pub struct RoundFixture as ROUND_FIXTURE_SCHEMA {
        pub round: String => "round", "round";
        pub round_num: i64 => "round_number", "round_number";
        pub fixture_id: String => "fixture_id", "fixture_id";
        pub home_game: bool => "home_game", "home_game";
        pub against_team: String => "against_team", "against_team";
        pub against_team_id: String => "against_team_id", "against_team_id";
        pub result_for_team: String => "result_for_team", "result_for_team";
        pub points: i64 => "points", "points";
        pub goals: i64 => "goals", "goals";
        pub goals_against: i64 => "goals_against", "goals_against";
        pub total_goal: i64 => "total_goal", "total_goal";
        pub total_goal_against: i64 => "total_goal_against", "total_goal_against";
    }
}

record! {
    /// A team's league table row, split overall/home/away
    pub struct Standings as STANDINGS_SCHEMA {
        pub rank: i64 => "rank", "rank";
        pub team: String => "team", "team";
        pub team_id: i64 => "team_id", "team_id";
        pub team_logo: String => "team_logo", "team_logo";
        pub points: i64 => "points", "points";
        pub goals_diff: i64 => "goal_diff", "goals_diff";
        /// Recent results, e.g. "WWDLW"
        pub form: String => "form", "form";
        pub played: i64 => "played", "played";
        pub wins: i64 => "wins", "wins";
        pub draws: i64 => "draws", "draws";
        pub losses: i64 => "losses", "losses";
        pub goals_for: i64 => "goals_for", "goals_for";
        pub goals_against: i64 => "goals_against", "goals_against";
        pub home_played: i64 => "home_played", "home_played";
        pub home_wins: i64 => "home_wins", "home_wins";
        pub home_draws: i64 => "home_draws", "home_draws";
        pub home_losses: i64 => "home_losses", "home_losses";
        pub home_goals_for: i64 => "home_goals_for", "home_goals_for";
        pub home_goals_against: i64 => "home_goals_against", "home_goals_against";
        pub away_played: i64 => "away_played", "away_played";
        pub away_wins: i64 => "away_wins", "away_wins";
        pub away_draws: i64 => "away_draws", "away_draws";
        pub away_losses: i64 => "away_losses", "away_losses";
        pub away_goals_for: i64 => "away_goals_for", "away_goals_for";
        pub away_goals_against: i64 => "away_goals_against", "away_goals_against";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Projection, Record};

    #[test]
    fn test_standings_goal_difference_names() {
        let field = Standings::schema().field("goals_diff").unwrap();
        assert_eq!(field.name(Projection::Wire), "goal_diff");
        assert_eq!(field.name(Projection::Document), "goals_diff");
    }

    #[test]
    fn test_round_number_name() {
        let field = RoundFixture::schema().field("round_num").unwrap();
        assert_eq!(field.wire, "round_number");
        assert_eq!(field.document, "round_number");
    }

    #[test]
    fn test_league_sequences() {
        let schema = League::schema();
        assert_eq!(
            schema.field("standings").unwrap().field_type.describe(),
            "sequence<Standings>"
        );
        assert_eq!(
            schema.field("teams_path").unwrap().field_type.describe(),
            "sequence<TeamPath>"
        );
    }
}
