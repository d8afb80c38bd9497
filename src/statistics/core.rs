use std::collections::BTreeMap;

use log::{debug, warn};

use crate::expression::{Expression, ReportMarkers};
use crate::operator::Operator;

/// Right and wrong answer counts of one operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorTally {
    pub right: u32,
    pub wrong: u32,
}

impl OperatorTally {
    pub fn total(&self) -> u32 {
        self.right + self.wrong
    }
}

/// Aggregates the turns of one session.
///
/// The tracked operators are fixed at construction. Every tracked operator
/// satisfies `total == right + wrong`, and the history holds exactly as many
/// expressions as all totals together.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub(crate) planned_games: u32,
    pub(crate) tallies: BTreeMap<Operator, OperatorTally>,
    pub(crate) history: Vec<Expression>,
    pub(crate) discarded: Vec<Expression>,
    pub(crate) markers: ReportMarkers,
}

impl Statistics {
    /// `planned_games` of 0 means an infinite session. `Nothing` is never tracked.
    pub fn new(planned_games: u32, operators: &[Operator]) -> Self {
        let tallies: BTreeMap<Operator, OperatorTally> = operators
            .iter()
            .filter(|op| !op.is_no_op())
            .map(|op| (*op, OperatorTally::default()))
            .collect();
        debug!(
            "Tracking {} operators for {} planned games",
            tallies.len(),
            planned_games
        );

        Self {
            planned_games,
            tallies,
            history: Vec::new(),
            discarded: Vec::new(),
            markers: ReportMarkers::default(),
        }
    }

    pub fn with_markers(mut self, markers: ReportMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Records one finished turn.
    ///
    /// Expressions with an untracked operator, the sentinel included, are
    /// set aside as discarded and leave the counters untouched.
    pub fn record_turn(&mut self, expression: Expression) {
        let operator = expression.operator();
        let correct = expression.is_correct();

        let Some(tally) = self.tallies.get_mut(&operator) else {
            warn!(
                "Discarding record with untracked operator '{}': {}",
                operator.name(),
                expression.prompt()
            );
            self.discarded.push(expression);
            return;
        };

        if correct {
            tally.right += 1;
        } else {
            tally.wrong += 1;
        }
        debug!(
            "Recorded {} turn for '{}' ({} so far)",
            if correct { "right" } else { "wrong" },
            operator.name(),
            tally.total()
        );
        self.history.push(expression);
    }

    /// Records a turn whose expression may have failed to build; failures are
    /// replaced by [`Expression::sentinel`].
    pub fn record_outcome<E: std::fmt::Display>(&mut self, outcome: Result<Expression, E>) {
        match outcome {
            Ok(expression) => self.record_turn(expression),
            Err(err) => {
                warn!("Malformed turn replaced by sentinel: {}", err);
                self.record_turn(Expression::sentinel());
            }
        }
    }

    pub fn tally(&self, operator: Operator) -> Option<OperatorTally> {
        self.tallies.get(&operator).copied()
    }

    pub fn total(&self, operator: Operator) -> Option<u32> {
        self.tally(operator).map(|t| t.total())
    }

    pub fn right(&self, operator: Operator) -> Option<u32> {
        self.tally(operator).map(|t| t.right)
    }

    pub fn wrong(&self, operator: Operator) -> Option<u32> {
        self.tally(operator).map(|t| t.wrong)
    }

    pub fn total_turns(&self) -> u32 {
        self.tallies.values().map(OperatorTally::total).sum()
    }

    pub fn total_right(&self) -> u32 {
        self.tallies.values().map(|t| t.right).sum()
    }

    pub fn total_wrong(&self) -> u32 {
        self.tallies.values().map(|t| t.wrong).sum()
    }

    /// Tracked operators in declaration order
    pub fn tracked_operators(&self) -> Vec<Operator> {
        self.tallies.keys().copied().collect()
    }

    pub fn history(&self) -> &[Expression] {
        &self.history
    }

    pub fn discarded(&self) -> &[Expression] {
        &self.discarded
    }

    pub fn planned_games(&self) -> u32 {
        self.planned_games
    }

    pub fn is_finite(&self) -> bool {
        self.planned_games != 0
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn markers(&self) -> &ReportMarkers {
        &self.markers
    }
}
