//! Fixture records
//!
//! A `GeneralFixtureData` is the stored aggregate for one match: the match
//! facts, a standings snapshot for context, and form statistics for both
//! teams. Field names follow the upstream provider on the wire and the
//! fixtures collection in the document store.

use crate::record;
use crate::schema::Timestamp;

record! {
    /// Request body for fetching fixtures on a date within a league
    pub struct GetFixturesByDateAndLeagueRequest as GET_FIXTURES_BY_DATE_AND_LEAGUE_REQUEST_SCHEMA {
        pub date: String => "date", "date";
        pub league: String => "league", "league";
    }
}

record! {
    /// Request body for a single fixture
    pub struct FixtureRequest as FIXTURE_REQUEST_SCHEMA {
        pub fixture_id: String => "fixture_id", "fixture_id";
    }
}

record! {
    /// Stored aggregate for one fixture, keyed by `fixture_id`.
    ///
    /// Owns every nested record; nothing is shared between aggregates.
    pub struct GeneralFixtureData as GENERAL_FIXTURE_DATA_SCHEMA {
        pub standings_data: StandingsData => "standings_data", "standings";
        pub fixture_id: String => "fixture_id", "fixture_id";
        pub fixture_data: FixtureData => "fixture_data", "current_data";
        pub home_team_stats: TeamStatistics => "home_team_stats", "home_form_data";
        pub away_team_stats: TeamStatistics => "away_team_stats", "away_form_data";
    }
}

record! {
    /// Match-level facts: participants, venue, timing, scorelines and events.
    ///
    /// `finished == true` implies the full-time scores are populated, and
    /// `game_time` only grows while the match is running. Producers uphold
    /// both; nothing here checks them.
    pub struct FixtureData as FIXTURE_DATA_SCHEMA {
        pub referee: String => "referee", "referee";
        pub timezone: String => "timezone", "timezone";
        pub date: Timestamp => "date", "date";
        pub venue: String => "venue", "venue";
        pub venue_city: String => "venue_city", "venue_city";
        pub game_status: String => "game_status", "game_status";
        /// Minutes elapsed
        pub game_time: i64 => "game_time", "game_time";
        pub league_name: String => "league_name", "league_name";
        pub league_country: String => "league_country", "league_country";
        pub league_round: String => "league_round", "league_round";
        pub home_team: String => "home_team", "home_team";
        pub away_team: String => "away_team", "away_team";
        pub home_team_logo: String => "home_team_logo", "home_team_logo";
        pub away_team_logo: String => "away_team_logo", "away_team_logo";
        pub home_team_id: i64 => "home_team_id", "home_team_id";
        pub away_team_id: i64 => "away_team_id", "away_team_id";
        pub winner: String => "winner", "winner";
        pub goals_home: i64 => "goals_home", "goals_home";
        pub goals_away: i64 => "goals_away", "goals_away";
        pub score_halftime_home: i64 => "score_halftime_home", "score_halftime_home";
        pub score_halftime_away: i64 => "score_halftime_away", "score_halftime_away";
        pub score_fulltime_home: i64 => "score_fulltime_home", "score_fulltime_home";
        pub score_fulltime_away: i64 => "score_fulltime_away", "score_fulltime_away";
        pub score_extra_time: i64 => "score_extra_time", "score_extra_time";
        pub score_penalty_home: i64 => "score_penalty_home", "score_penalty_home";
        pub score_penalty_away: i64 => "score_penalty_away", "score_penalty_away";
        /// In source order
        pub events: Vec<Event> => "events", "events";
        pub finished: bool => "finished", "finished";
        pub update_at: Timestamp => "update_at", "update_at";
    }
}

record! {
    /// A goal, card or substitution within a fixture
    pub struct Event as EVENT_SCHEMA {
        pub time_elapsed: i64 => "time_elapsed", "time_elapsed";
        pub team: String => "team", "team";
        pub player: String => "player", "player";
        pub assist: String => "assist", "assist";
        pub event_type: String => "type", "type";
        pub detail: String => "detail", "detail";
        pub comments: String => "comments", "comments";
    }
}

record! {
    /// League table snapshot attached to a fixture
    pub struct StandingsData as STANDINGS_DATA_SCHEMA {
        pub league_name: String => "league_name", "name";
        pub standings: Vec<TeamStanding> => "standings", "standings";
    }
}

record! {
    /// One team's row in a `StandingsData` snapshot
    pub struct TeamStanding as TEAM_STANDING_SCHEMA {
        pub rank: i64 => "rank", "rank";
        pub team_name: String => "team_name", "team";
        pub points: i64 => "points", "points";
        pub goals_diff: i64 => "goals_diff", "goalsdiff";
        pub group: String => "group", "group";
        pub form: String => "form", "form";
        pub status: String => "status", "status";
        pub description: String => "description", "description";
        pub all: PlayedData => "all", "all";
        pub home: PlayedData => "home", "home";
        pub away: PlayedData => "away", "away";
    }
}

record! {
    /// Results over a set of matches.
    ///
    /// `played` is expected to equal `win + draw + lose`.
    pub struct PlayedData as PLAYED_DATA_SCHEMA {
        pub played: i64 => "played", "played";
        pub win: i64 => "win", "win";
        pub draw: i64 => "draw", "draw";
        pub lose: i64 => "lose", "lose";
        pub goals: GoalsData => "goals", "goals";
    }
}

record! {
    /// Goals scored and conceded
    pub struct GoalsData as GOALS_DATA_SCHEMA {
        pub goals_for: i64 => "for", "for";
        pub against: i64 => "against", "against";
    }
}

record! {
    /// Form metrics for one team.
    ///
    /// Percentages and averages are text, exactly as the upstream provider
    /// formats them (e.g. `"12.50%"`, `"1.4"`). Banded fields cover eight
    /// 15-minute intervals, extra time included. In the document projection
    /// card fields drop the `_to_` infix and win/draw/lose counters use the
    /// singular form.
    pub struct TeamStatistics as TEAM_STATISTICS_SCHEMA {
        pub team_name: String => "team_name", "team";
        pub form: String => "form", "form";
        pub played_home: i64 => "played_home", "played_home";
        pub played_away: i64 => "played_away", "played_away";
        pub total: i64 => "total", "total";
        pub wins_home: i64 => "wins_home", "win_home";
        pub wins_away: i64 => "wins_away", "win_away";
        pub wins_total: i64 => "wins_total", "win_total";
        pub draws_home: i64 => "draws_home", "draw_home";
        pub draws_away: i64 => "draws_away", "draw_away";
        pub draws_total: i64 => "draws_total", "draw_total";
        pub loses_home: i64 => "loses_home", "lose_home";
        pub loses_away: i64 => "loses_away", "lose_away";
        pub loses_total: i64 => "loses_total", "lose_total";
        pub goals_total: i64 => "goals_total", "goals_total";
        pub goals_home: i64 => "goals_home", "goals_home";
        pub goals_away: i64 => "goals_away", "goals_away";
        pub goal_avg_total: String => "goal_avg_total", "goal_avg_total";
        pub goal_avg_home: String => "goal_avg_home", "goal_avg_home";
        pub goal_avg_away: String => "goal_avg_away", "goal_avg_away";

        pub goals_0_to_15: i64 => "goals_0_to_15", "goals_0_to_15";
        pub goals_0_to_15_percentage: String => "goals_0_to_15_percentage", "goals_0_to_15_percentage";
        pub goals_16_to_30: i64 => "goals_16_to_30", "goals_16_to_30";
        pub goals_16_to_30_percentage: String => "goals_16_to_30_percentage", "goals_16_to_30_percentage";
        pub goals_31_to_45: i64 => "goals_31_to_45", "goals_31_to_45";
        pub goals_31_to_45_percentage: String => "goals_31_to_45_percentage", "goals_31_to_45_percentage";
        pub goals_46_to_60: i64 => "goals_46_to_60", "goals_46_to_60";
        pub goals_46_to_60_percentage: String => "goals_46_to_60_percentage", "goals_46_to_60_percentage";
        pub goals_61_to_75: i64 => "goals_61_to_75", "goals_61_to_75";
        pub goals_61_to_75_percentage: String => "goals_61_to_75_percentage", "goals_61_to_75_percentage";
        pub goals_76_to_90: i64 => "goals_76_to_90", "goals_76_to_90";
        pub goals_76_to_90_percentage: String => "goals_76_to_90_percentage", "goals_76_to_90_percentage";
        pub goals_91_to_105: i64 => "goals_91_to_105", "goals_91_to_105";
        pub goals_91_to_105_percentage: String => "goals_91_to_105_percentage", "goals_91_to_105_percentage";
        pub goals_106_to_120: i64 => "goals_106_to_120", "goals_106_to_120";
        pub goals_106_to_120_percentage: String => "goals_106_to_120_percentage", "goals_106_to_120_percentage";

        pub against_goal_total: i64 => "against_goal_total", "against_goal_total";
        pub against_goal_home: i64 => "against_goal_home", "against_goal_home";
        pub against_goal_away: i64 => "against_goal_away", "against_goal_away";
        pub against_goal_avg_total: String => "against_goal_avg_total", "against_goal_avg_total";
        pub against_goal_avg_home: String => "against_goal_avg_home", "against_goal_avg_home";
        pub against_goal_avg_away: String => "against_goal_avg_away", "against_goal_avg_away";

        pub against_goals_0_to_15: i64 => "against_goals_0_to_15", "against_goals_0_to_15";
        pub against_goals_0_to_15_percentage: String => "against_goals_0_to_15_percentage", "against_goals_0_to_15_percentage";
        pub against_goals_16_to_30: i64 => "against_goals_16_to_30", "against_goals_16_to_30";
        pub against_goals_16_to_30_percentage: String => "against_goals_16_to_30_percentage", "against_goals_16_to_30_percentage";
        pub against_goals_31_to_45: i64 => "against_goals_31_to_45", "against_goals_31_to_45";
        pub against_goals_31_to_45_percentage: String => "against_goals_31_to_45_percentage", "against_goals_31_to_45_percentage";
        pub against_goals_46_to_60: i64 => "against_goals_46_to_60", "against_goals_46_to_60";
        pub against_goals_46_to_60_percentage: String => "against_goals_46_to_60_percentage", "against_goals_46_to_60_percentage";
        pub against_goals_61_to_75: i64 => "against_goals_61_to_75", "against_goals_61_to_75";
        pub against_goals_61_to_75_percentage: String => "against_goals_61_to_75_percentage", "against_goals_61_to_75_percentage";
        pub against_goals_76_to_90: i64 => "against_goals_76_to_90", "against_goals_76_to_90";
        pub against_goals_76_to_90_percentage: String => "against_goals_76_to_90_percentage", "against_goals_76_to_90_percentage";
        pub against_goals_91_to_105: i64 => "against_goals_91_to_105", "against_goals_91_to_105";
        pub against_goals_91_to_105_percentage: String => "against_goals_91_to_105_percentage", "against_goals_91_to_105_percentage";
        pub against_goals_106_to_120: i64 => "against_goals_106_to_120", "against_goals_106_to_120";
        pub against_goals_106_to_120_percentage: String => "against_goals_106_to_120_percentage", "against_goals_106_to_120_percentage";

        // Upstream spells "streak" as "steak"; kept for compatibility.
        pub biggest_streak_wins: i64 => "biggest_steak_wins", "biggest_steak_wins";
        pub biggest_streak_draws: i64 => "biggest_steak_draws", "biggest_steak_draws";
        pub biggest_streak_loses: i64 => "biggest_steak_loses", "biggest_steak_loses";
        pub biggest_wins_home: String => "biggest_wins_home", "biggest_wins_home";
        pub biggest_wins_away: String => "biggest_wins_away", "biggest_wins_away";
        pub biggest_loses_home: String => "biggest_loses_home", "biggest_loses_home";
        pub biggest_loses_away: String => "biggest_loses_away", "biggest_loses_away";
        pub biggest_goals_for_home: i64 => "biggest_goals_for_home", "biggest_goals_for_home";
        pub biggest_goals_for_away: i64 => "biggest_goals_for_away", "biggest_goals_for_away";
        pub biggest_goals_against_home: i64 => "biggest_goals_against_home", "biggest_goals_against_home";
        pub biggest_goals_against_away: i64 => "biggest_goals_against_away", "biggest_goals_against_away";
        pub clean_sheets_home: i64 => "clean_sheets_home", "clean_sheets_home";
        pub clean_sheets_away: i64 => "clean_sheets_away", "clean_sheets_away";
        pub clean_sheets_total: i64 => "clean_sheets_total", "clean_sheets_total";
        pub failed_to_score_home: i64 => "failed_to_score_home", "failed_to_score_home";
        pub failed_to_score_away: i64 => "failed_to_score_away", "failed_to_score_away";
        pub failed_to_score_total: i64 => "failed_to_score_total", "failed_to_score_total";
        pub penalty_scored_total: i64 => "penalty_scored_total", "penalty_scored_total";
        pub penalty_scored_percentage: String => "penalty_scored_percentage", "penalty_scored_percentage";
        pub penalty_missed_total: i64 => "penalty_missed_total", "penalty_missed_total";
        pub penalty_missed_percentage: String => "penalty_missed_percentage", "penalty_missed_percentage";
        pub penalty_total: i64 => "penalty_total", "penalty_total";
        /// Most used formation first, as the provider lists them
        pub lineups: Vec<Lineup> => "lineups", "lineups";

        pub cards_yellow_0_to_15_total: i64 => "cards_yellow_0_to_15_total", "cards_yellow_0_15_total";
        pub cards_yellow_0_to_15_percentage: String => "cards_yellow_0_to_15_percentage", "cards_yellow_0_15_percentage";
        pub cards_yellow_16_to_30_total: i64 => "cards_yellow_16_to_30_total", "cards_yellow_16_30_total";
        pub cards_yellow_16_to_30_percentage: String => "cards_yellow_16_to_30_percentage", "cards_yellow_16_30_percentage";
        pub cards_yellow_31_to_45_total: i64 => "cards_yellow_31_to_45_total", "cards_yellow_31_45_total";
        pub cards_yellow_31_to_45_percentage: String => "cards_yellow_31_to_45_percentage", "cards_yellow_31_45_percentage";
        pub cards_yellow_46_to_60_total: i64 => "cards_yellow_46_to_60_total", "cards_yellow_46_60_total";
        pub cards_yellow_46_to_60_percentage: String => "cards_yellow_46_to_60_percentage", "cards_yellow_46_60_percentage";
        pub cards_yellow_61_to_75_total: i64 => "cards_yellow_61_to_75_total", "cards_yellow_61_75_total";
        pub cards_yellow_61_to_75_percentage: String => "cards_yellow_61_to_75_percentage", "cards_yellow_61_75_percentage";
        pub cards_yellow_76_to_90_total: i64 => "cards_yellow_76_to_90_total", "cards_yellow_76_90_total";
        pub cards_yellow_76_to_90_percentage: String => "cards_yellow_76_to_90_percentage", "cards_yellow_76_90_percentage";
        pub cards_yellow_91_to_105_total: i64 => "cards_yellow_91_to_105_total", "cards_yellow_91_105_total";
        pub cards_yellow_91_to_105_percentage: String => "cards_yellow_91_to_105_percentage", "cards_yellow_91_105_percentage";
        pub cards_yellow_106_to_120_total: i64 => "cards_yellow_106_to_120_total", "cards_yellow_106_120_total";
        pub cards_yellow_106_to_120_percentage: String => "cards_yellow_106_to_120_percentage", "cards_yellow_106_120_percentage";

        pub cards_red_0_to_15_total: i64 => "cards_red_0_to_15_total", "cards_red_0_15_total";
        pub cards_red_0_to_15_percentage: String => "cards_red_0_to_15_percentage", "cards_red_0_15_percentage";
        pub cards_red_16_to_30_total: i64 => "cards_red_16_to_30_total", "cards_red_16_30_total";
        pub cards_red_16_to_30_percentage: String => "cards_red_16_to_30_percentage", "cards_red_16_30_percentage";
        pub cards_red_31_to_45_total: i64 => "cards_red_31_to_45_total", "cards_red_31_45_total";
        pub cards_red_31_to_45_percentage: String => "cards_red_31_to_45_percentage", "cards_red_31_45_percentage";
        pub cards_red_46_to_60_total: i64 => "cards_red_46_to_60_total", "cards_red_46_60_total";
        pub cards_red_46_to_60_percentage: String => "cards_red_46_to_60_percentage", "cards_red_46_60_percentage";
        pub cards_red_61_to_75_total: i64 => "cards_red_61_to_75_total", "cards_red_61_75_total";
        pub cards_red_61_to_75_percentage: String => "cards_red_61_to_75_percentage", "cards_red_61_75_percentage";
        pub cards_red_76_to_90_total: i64 => "cards_red_76_to_90_total", "cards_red_76_90_total";
        pub cards_red_76_to_90_percentage: String => "cards_red_76_to_90_percentage", "cards_red_76_90_percentage";
        pub cards_red_91_to_105_total: i64 => "cards_red_91_to_105_total", "cards_red_91_105_total";
        pub cards_red_91_to_105_percentage: String => "cards_red_91_to_105_percentage", "cards_red_91_105_percentage";
        pub cards_red_106_to_120_total: i64 => "cards_red_106_to_120_total", "cards_red_106_120_total";
        pub cards_red_106_to_120_percentage: String => "cards_red_106_to_120_percentage", "cards_red_106_120_percentage";
    }
}

record! {
    /// A formation and the number of matches played with it
    pub struct Lineup as LINEUP_SCHEMA {
        pub formation: String => "formation", "formation";
        pub played: i64 => "played", "played";
    }
}
