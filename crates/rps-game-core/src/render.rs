//! Text rendering for the terminal front end.
//!
//! Everything here is a pure function of its arguments so the output can be
//! tested without a terminal.

use crate::games::{GameJudge, MoveSet, RuleEngine};
use crate::protocol::{MatchSummary, Outcome, RoundRecord};

pub const PROMPT: &str = "Your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const FAREWELL: &str = "Thanks for playing!";

/// Simple boxed text table
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }

    fn separator(out: &mut String, widths: &[usize]) {
        out.push('+');
        for w in widths {
            out.push_str(&"-".repeat(w + 2));
            out.push('+');
        }
        out.push('\n');
    }

    fn line(out: &mut String, cells: &[String], widths: &[usize]) {
        out.push('|');
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = w - cell.chars().count();
            out.push_str(&format!(" {}{} |", cell, " ".repeat(pad)));
        }
        out.push('\n');
    }

    fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();
        Self::separator(&mut out, &widths);
        Self::line(&mut out, &self.headers, &widths);
        Self::separator(&mut out, &widths);
        for row in &self.rows {
            Self::line(&mut out, row, &widths);
        }
        Self::separator(&mut out, &widths);
        out
    }
}

/// Announcement at the start of a match
pub fn banner(max_rounds: u32) -> String {
    format!("Game started! Total rounds: {}", max_rounds)
}

/// The commitment shown before the human chooses
pub fn commitment(code: impl std::fmt::Display) -> String {
    format!("HMAC: {}", code)
}

/// Numbered move menu with exit and help entries
pub fn menu(moves: &MoveSet) -> String {
    let mut out = String::from("Menu:\n");
    for mv in moves.iter() {
        out.push_str(&format!("{} - {}\n", mv.index() + 1, mv.label()));
    }
    out.push_str("0 - Exit\n");
    out.push_str("? - Help\n");
    out
}

/// N×N outcome table: rows are the human's move, columns the computer's
pub fn help_table(rules: &RuleEngine) -> String {
    let moves = rules.moves();
    let mut table = Table::new(
        std::iter::once("You \\ PC".to_string()).chain(moves.labels().iter().cloned()),
    );
    for (label, row) in moves.labels().iter().zip(rules.results()) {
        table.push(
            std::iter::once(label.clone()).chain(row.iter().map(|o| o.as_str().to_string())),
        );
    }
    format!("Results table:\n{}", table.render())
}

/// Round-by-round history with revealed keys
pub fn history_table(history: &[RoundRecord]) -> String {
    let mut table = Table::new(["#", "Your move", "Computer move", "Outcome", "Key"]);
    for record in history {
        table.push([
            record.index.to_string(),
            record.human_move.clone(),
            record.computer_move.clone(),
            record.outcome.as_str().to_string(),
            record.revealed_key.clone(),
        ]);
    }
    format!("Game history:\n{}", table.render())
}

/// Final scores and verdict
pub fn summary(report: &MatchSummary) -> String {
    let verdict = match report.verdict {
        Outcome::Win => "You win!",
        Outcome::Lose => "You lose.",
        Outcome::Draw => "It's a draw!",
    };
    format!(
        "Game over!\nYour score: {}\nComputer score: {}\n{}",
        report.human_score, report.computer_score, verdict
    )
}
