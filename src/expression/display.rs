use std::fmt;

use crate::expression::ast::{Expression, UserResult};

/// Markers appended to report lines for right and wrong answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMarkers {
    pub right: String,
    pub wrong: String,
}

impl Default for ReportMarkers {
    fn default() -> Self {
        Self {
            right: String::from("Right"),
            wrong: String::new(),
        }
    }
}

impl ReportMarkers {
    pub fn new(right: impl Into<String>, wrong: impl Into<String>) -> Self {
        Self {
            right: right.into(),
            wrong: wrong.into(),
        }
    }
}

impl Expression {
    /// The in-game form, e.g. `" 7 / 1  = "`
    pub fn prompt(&self) -> String {
        format!(
            "{:>2} {} {:<2} = ",
            self.left,
            self.operator.glyph(),
            self.right.to_string()
        )
    }

    /// Character width of [`Expression::prompt`]
    pub fn display_width(&self) -> usize {
        self.prompt().chars().count()
    }

    /// The report form: prompt, expected result, user's result and a marker.
    pub fn report_line(&self, markers: &ReportMarkers) -> String {
        let user = match self.user_result {
            UserResult::Answered(value) => format!("{:<10.2}", value),
            UserResult::Unanswered => format!("{:<10}", "-"),
        };
        let marker = if self.is_correct() {
            &markers.right
        } else {
            &markers.wrong
        };

        format!(
            "{}{:<10.2} user's result: {} {}",
            self.prompt(),
            self.expected.as_f64(),
            user,
            marker
        )
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.user_result {
            UserResult::Unanswered => f.write_str(&self.prompt()),
            UserResult::Answered(_) => {
                f.write_str(&self.report_line(&ReportMarkers::default()))
            }
        }
    }
}
