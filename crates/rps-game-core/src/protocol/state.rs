//! Match state owned by the runner and updated after each resolved round.

use super::{Outcome, RoundRecord};
use crate::games::MoveSet;
use serde::{Deserialize, Serialize};

/// Scores and history of one match.
///
/// The history is the only record of play; scores and the round count are
/// always read back from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    moves: MoveSet,
    max_rounds: u32,
    history: Vec<RoundRecord>,
}

/// End-of-match report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub human_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
    /// Match result for the human
    pub verdict: Outcome,
}

impl MatchState {
    pub fn new(moves: MoveSet, max_rounds: u32) -> Self {
        Self {
            moves,
            max_rounds,
            history: Vec::new(),
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// (human, computer) points over the recorded rounds
    pub fn scores(&self) -> (u32, u32) {
        self.history
            .iter()
            .map(|r| r.outcome.points())
            .fold((0, 0), |(h, c), (dh, dc)| (h + dh, c + dc))
    }

    pub fn human_score(&self) -> u32 {
        self.scores().0
    }

    pub fn computer_score(&self) -> u32 {
        self.scores().1
    }

    pub fn rounds_played(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Number the next round will carry
    pub fn next_round_index(&self) -> u32 {
        self.rounds_played() + 1
    }

    /// All rounds have been played
    pub fn is_complete(&self) -> bool {
        self.rounds_played() >= self.max_rounds
    }

    /// Fold a resolved round into the scores and history
    pub fn record(&mut self, record: RoundRecord) {
        self.history.push(record);
    }

    /// Summarize the match from the recorded outcomes
    pub fn end_match(&self) -> MatchSummary {
        let (human_score, computer_score) = self.scores();

        MatchSummary {
            human_score,
            computer_score,
            rounds_played: self.rounds_played(),
            verdict: Outcome::from_scores(human_score, computer_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: u32, outcome: Outcome) -> RoundRecord {
        RoundRecord {
            index,
            human_move: "Rock".into(),
            computer_move: "Paper".into(),
            outcome,
            revealed_key: String::new(),
            code: String::new(),
        }
    }

    #[test]
    fn test_new_match() {
        let state = MatchState::new(MoveSet::default(), 7);

        assert_eq!(state.rounds_played(), 0);
        assert_eq!(state.next_round_index(), 1);
        assert!(!state.is_complete());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_scores_follow_outcomes() {
        let mut state = MatchState::new(MoveSet::default(), 3);
        state.record(record(1, Outcome::Win));
        state.record(record(2, Outcome::Draw));
        state.record(record(3, Outcome::Lose));

        assert_eq!(state.human_score(), 1);
        assert_eq!(state.computer_score(), 1);
        assert_eq!(state.rounds_played(), 3);
        assert!(state.is_complete());

        let summary = state.end_match();
        assert_eq!(summary.verdict, Outcome::Draw);
        assert_eq!(summary.rounds_played, 3);
    }

    #[test]
    fn test_human_wins_match() {
        let mut state = MatchState::new(MoveSet::default(), 7);
        for i in 1..=7 {
            state.record(record(i, Outcome::Win));
        }

        let summary = state.end_match();
        assert_eq!(summary.human_score, 7);
        assert_eq!(summary.computer_score, 0);
        assert_eq!(summary.verdict, Outcome::Win);
    }

    #[test]
    fn test_computer_wins_match() {
        let mut state = MatchState::new(MoveSet::default(), 7);
        state.record(record(1, Outcome::Lose));
        state.record(record(2, Outcome::Lose));
        state.record(record(3, Outcome::Win));

        assert_eq!(state.end_match().verdict, Outcome::Lose);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_loaded_state_scores_come_from_history() {
        let json = serde_json::json!({
            "moves": ["Rock", "Paper", "Scissors"],
            "max_rounds": 7,
            "history": [record(1, Outcome::Lose), record(2, Outcome::Lose)],
        });
        let state: MatchState = serde_json::from_value(json).unwrap();

        assert_eq!(state.rounds_played(), 2);
        assert_eq!(state.scores(), (0, 2));
        assert_eq!(state.next_round_index(), 3);

        let summary = state.end_match();
        assert_eq!(summary.computer_score, 2);
        assert_eq!(summary.verdict, Outcome::Lose);
    }

    #[test]
    fn test_state_survives_serde() {
        let mut state = MatchState::new(MoveSet::default(), 3);
        state.record(record(1, Outcome::Win));
        state.record(record(2, Outcome::Draw));

        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();

        assert_eq!(back.end_match(), state.end_match());
        assert_eq!(back.history(), state.history());
    }

    #[test]
    fn test_empty_match_is_a_draw() {
        let state = MatchState::new(MoveSet::default(), 7);

        assert_eq!(state.end_match().verdict, Outcome::Draw);
    }
}
