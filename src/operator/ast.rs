use std::fmt;

/// Arithmetic operators a drill can ask about, in declaration order.
///
/// `Nothing` marks the absence of an operator and is never drawn or tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Nothing,
    Add,
    Subtract,
    Multiply,
    Division,
    IntDiv,
    Modulo,
}

impl Operator {
    pub const ALL: [Operator; 7] = [
        Operator::Nothing,
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Division,
        Operator::IntDiv,
        Operator::Modulo,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Nothing => " ",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Division => "/",
            Operator::IntDiv => "\\",
            Operator::Modulo => "%",
        }
    }

    /// Human-readable name, also the sort key of report tables
    pub fn name(self) -> &'static str {
        match self {
            Operator::Nothing => "nothing",
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Division => "division",
            Operator::IntDiv => "intdiv",
            Operator::Modulo => "modulo",
        }
    }

    pub fn is_no_op(self) -> bool {
        self == Operator::Nothing
    }

    /// Whether the operator yields a real rather than an integral result
    pub fn is_real(self) -> bool {
        self == Operator::Division
    }

    /// Every operator except the `Nothing` sentinel
    pub fn real_operators() -> Vec<Operator> {
        list_operators(&[Operator::Nothing])
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Returns every operator not in `excluding`, in declaration order.
pub fn list_operators(excluding: &[Operator]) -> Vec<Operator> {
    Operator::ALL
        .into_iter()
        .filter(|op| !excluding.contains(op))
        .collect()
}
