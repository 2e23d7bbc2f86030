//! Match runner: drives rounds as an explicit state machine.
//!
//! ```text
//! Commit ──> AwaitingChoice ──(valid move)──> Commit ──(rounds done)──> Finished
//!               │   ^
//!               └───┘ help / invalid input
//!               └──────(exit / end of input)──────────────────────────> Finished
//! ```
//!
//! Every transition that changes what the human can see is written and
//! flushed before the next prompt.

use super::{Choice, MatchState, MatchSummary, PendingRound};
use crate::config::MatchConfig;
use crate::error::{GameError, Result};
use crate::games::{GameJudge, RuleEngine};
use crate::io::LineSource;
use crate::render;
use rand::{CryptoRng, RngCore};
use std::io::Write;
use tracing::{debug, info, warn};

/// Why a match stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEnd {
    /// All rounds were played
    Completed,
    /// The human entered `0`
    Exited,
    /// Input ended while a choice was pending
    InputClosed,
}

/// Final state of a match
#[derive(Clone, Debug)]
pub struct MatchReport {
    pub end: MatchEnd,
    pub state: MatchState,
}

impl MatchReport {
    pub fn summary(&self) -> MatchSummary {
        self.state.end_match()
    }
}

enum Phase {
    Commit,
    AwaitingChoice(PendingRound),
    Finished(MatchEnd),
}

/// Owns the match state and runs it against an input source and an output sink
pub struct MatchRunner<R, I, W> {
    rules: RuleEngine,
    state: MatchState,
    rng: R,
    input: I,
    output: W,
}

impl<R, I, W> MatchRunner<R, I, W>
where
    R: RngCore + CryptoRng,
    I: LineSource,
    W: Write,
{
    pub fn new(config: MatchConfig, rng: R, input: I, output: W) -> Self {
        let state = MatchState::new(config.moves.clone(), config.max_rounds);
        Self {
            rules: RuleEngine::build(config.moves),
            state,
            rng,
            input,
            output,
        }
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Play until the match completes, the human exits or input ends
    pub fn run(mut self) -> Result<MatchReport> {
        info!(
            moves = self.rules.moves().len(),
            rounds = self.state.max_rounds(),
            "Match started"
        );
        writeln!(self.output, "{}", render::banner(self.state.max_rounds()))?;

        let mut phase = Phase::Commit;
        let end = loop {
            phase = match phase {
                Phase::Finished(end) => break end,
                other => self.step(other)?,
            };
            self.output.flush()?;
        };

        info!(
            ?end,
            rounds = self.state.rounds_played(),
            human = self.state.human_score(),
            computer = self.state.computer_score(),
            "Match finished"
        );

        Ok(MatchReport {
            end,
            state: self.state,
        })
    }

    fn step(&mut self, phase: Phase) -> Result<Phase> {
        match phase {
            Phase::Commit => self.commit(),
            Phase::AwaitingChoice(round) => self.prompt(round),
            Phase::Finished(end) => Ok(Phase::Finished(end)),
        }
    }

    fn commit(&mut self) -> Result<Phase> {
        if self.state.is_complete() {
            let summary = self.state.end_match();
            writeln!(self.output, "{}", render::summary(&summary))?;
            return Ok(Phase::Finished(MatchEnd::Completed));
        }

        let round = PendingRound::start(self.state.next_round_index(), &self.rules, &mut self.rng)?;
        writeln!(self.output, "{}", render::commitment(round.code()))?;
        Ok(Phase::AwaitingChoice(round))
    }

    fn prompt(&mut self, round: PendingRound) -> Result<Phase> {
        write!(self.output, "{}", render::menu(self.rules.moves()))?;
        write!(self.output, "{}", render::PROMPT)?;
        self.output.flush()?;

        let line = match self.input.read_line()? {
            Some(line) => line,
            None => {
                warn!(round = round.index(), "Input closed before a choice was made");
                writeln!(self.output)?;
                writeln!(self.output, "{}", render::FAREWELL)?;
                return Ok(Phase::Finished(MatchEnd::InputClosed));
            }
        };

        match Choice::parse(&line, self.rules.moves().len()) {
            Choice::Help => {
                write!(self.output, "{}", render::help_table(&self.rules))?;
                Ok(Phase::AwaitingChoice(round))
            }
            Choice::Invalid => {
                debug!(round = round.index(), input = %line, "Invalid choice");
                writeln!(self.output, "{}", render::INVALID_CHOICE)?;
                Ok(Phase::AwaitingChoice(round))
            }
            Choice::Exit => {
                info!(round = round.index(), "Human left the match");
                writeln!(self.output, "{}", render::FAREWELL)?;
                Ok(Phase::Finished(MatchEnd::Exited))
            }
            Choice::Move(index) => {
                let human_move = self
                    .rules
                    .moves()
                    .get(index)
                    .ok_or_else(|| GameError::UnknownMove(index.to_string()))?;
                let record = round.resolve(human_move, &self.rules)?;
                self.state.record(record);
                write!(self.output, "{}", render::history_table(self.state.history()))?;
                Ok(Phase::Commit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::MoveSet;
    use crate::io::ReaderSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;
    use std::io::Cursor;

    fn script(lines: &[&str]) -> VecDeque<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn run(lines: &[&str], max_rounds: u32) -> (MatchReport, String) {
        let config = MatchConfig::default().with_max_rounds(max_rounds);
        let mut out = Vec::new();
        let report = MatchRunner::new(config, StdRng::seed_from_u64(11), script(lines), &mut out)
            .run()
            .unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_completes_all_rounds() {
        let (report, out) = run(&["1", "2", "3"], 3);

        assert_eq!(report.end, MatchEnd::Completed);
        assert_eq!(report.state.rounds_played(), 3);
        assert_eq!(report.state.history().len(), 3);
        assert_eq!(out.matches("HMAC: ").count(), 3);
        assert!(out.starts_with("Game started! Total rounds: 3\n"));
        assert!(out.contains("Game over!"));
    }

    #[test]
    fn test_exit_records_nothing() {
        let (report, out) = run(&["0"], 7);

        assert_eq!(report.end, MatchEnd::Exited);
        assert_eq!(report.state.rounds_played(), 0);
        assert!(out.contains(render::FAREWELL));
        assert!(!out.contains("Game history:"));
    }

    #[test]
    fn test_end_of_input_ends_match() {
        let (report, _) = run(&["1"], 7);

        assert_eq!(report.end, MatchEnd::InputClosed);
        assert_eq!(report.state.rounds_played(), 1);
    }

    #[test]
    fn test_help_and_invalid_keep_the_round() {
        let (report, out) = run(&["?", "abc", "9", "2"], 1);

        assert_eq!(report.end, MatchEnd::Completed);
        assert_eq!(report.state.rounds_played(), 1);
        assert_eq!(out.matches("HMAC: ").count(), 1);
        assert_eq!(out.matches(render::INVALID_CHOICE).count(), 2);
        assert_eq!(out.matches("Results table:").count(), 1);
        assert_eq!(out.matches(render::PROMPT).count(), 4);
    }

    #[test]
    fn test_invalid_utf8_line_reprompts_same_round() {
        let config = MatchConfig::default().with_max_rounds(1);
        let mut out = Vec::new();
        let input = ReaderSource::new(Cursor::new(&b"\xff\xfe\n1\n"[..]));

        let report = MatchRunner::new(config, StdRng::seed_from_u64(11), input, &mut out)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let (direct, _) = run(&["1"], 1);

        assert_eq!(report.end, MatchEnd::Completed);
        assert_eq!(report.state.rounds_played(), 1);
        assert_eq!(out.matches("HMAC: ").count(), 1);
        assert_eq!(out.matches(render::INVALID_CHOICE).count(), 1);
        assert_eq!(report.state.history()[0].code, direct.state.history()[0].code);
        assert_eq!(
            report.state.history()[0].revealed_key,
            direct.state.history()[0].revealed_key
        );
    }

    #[test]
    fn test_runner_exposes_rules() {
        let runner = MatchRunner::new(
            MatchConfig::default(),
            StdRng::seed_from_u64(0),
            script(&[]),
            Vec::<u8>::new(),
        );

        assert_eq!(runner.rules().moves(), &MoveSet::default());
        assert_eq!(runner.state().max_rounds(), 7);
    }
}
