use std::fmt;
use std::fmt::Write as _;

use crate::operator::Operator;
use crate::statistics::core::{OperatorTally, Statistics};

const TITLE_UNDERLINE: char = '-';

/// A title followed by an underline of the same length
fn title(text: &str) -> String {
    let underline = TITLE_UNDERLINE.to_string().repeat(text.chars().count());
    format!("\n{}\n{}\n\n", text, underline)
}

impl Statistics {
    /// Tracked operators ordered by their display name
    fn operators_by_name(&self) -> Vec<Operator> {
        let mut operators = self.tracked_operators();
        operators.sort_by_key(|op| op.name());
        operators
    }

    fn table(&self, heading: &str, count: impl Fn(&OperatorTally) -> u32) -> String {
        let mut out = title(heading);
        for op in self.operators_by_name() {
            let value = self.tally(op).map(|t| count(&t)).unwrap_or(0);
            let _ = writeln!(out, "    {:<8}: {:>4}", op.name(), value);
        }
        out
    }

    fn expressions(&self) -> String {
        let mut out = String::new();
        for expr in &self.history {
            out.push_str(&expr.report_line(&self.markers));
            out.push('\n');
        }
        out
    }

    /// Renders the end-of-session report.
    ///
    /// The output depends only on the recorded state, so repeated calls give
    /// identical text.
    pub fn render_report(&self) -> String {
        let kind = if self.is_finite() { "finite" } else { "infinite" };

        let mut out = format!(
            "You had {} right result from {} expressions. The game was {}.\n\n",
            self.total_right(),
            self.total_turns(),
            kind
        );
        out.push_str(&self.table("Number of your results per operator:", OperatorTally::total));
        out.push('\n');
        out.push_str(&self.table("Number of your right results per operator:", |t| t.right));
        out.push('\n');
        out.push_str(&self.table("Number of your wrong results per operator:", |t| t.wrong));
        out.push('\n');
        out.push_str(&title("Expressions of the game:"));
        out.push_str(&self.expressions());

        if !self.discarded.is_empty() {
            let _ = writeln!(out, "\nDiscarded records: {}", self.discarded.len());
        }
        out
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_report())
    }
}
