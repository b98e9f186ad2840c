//! Line-at-a-time indentation tracking.
//!
//! Lines are written one by one without a document tree, so block depth is
//! inferred from braces. Depth is decided *before* a line is written, and the
//! increase caused by an opening line is deferred until the next content line:
//!
//! - a bare `}` dedents first and disarms the pending indent;
//! - a line containing `}` among other text (`} catch(Exception e) {`)
//!   dedents first and arms the pending indent iff it also contains `{`;
//! - any other line indents one level first if the pending indent is armed.
//!
//! After writing, a stepping line other than a bare `}` arms the pending
//! indent. A level line (annotations, statements) never arms it.

/// One indentation level in generated Java.
pub const INDENT_UNIT: &str = "\t";

/// Whether the next content line should first increase depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pending {
    #[default]
    Idle,
    PendingIndent,
}

/// How a written line affects the line after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// Arms the pending indent after writing.
    Stepping,
    /// Leaves the pending indent disarmed after writing.
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineShape {
    BareClose,
    Closing { opens: bool },
    Other,
}

impl LineShape {
    fn of(line: &str) -> Self {
        if line == "}" {
            Self::BareClose
        } else if line.contains('}') {
            Self::Closing {
                opens: line.contains('{'),
            }
        } else {
            Self::Other
        }
    }
}

/// Depth and pending-indent state of one output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndentState {
    depth: usize,
    pending: Pending,
}

impl IndentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn pending(&self) -> Pending {
        self.pending
    }

    /// Apply the pre-write transition for `line` and return its depth.
    pub fn enter(&mut self, line: &str) -> usize {
        match LineShape::of(line) {
            LineShape::BareClose => {
                self.depth = self.depth.saturating_sub(1);
                self.pending = Pending::Idle;
            }
            LineShape::Closing { opens } => {
                self.depth = self.depth.saturating_sub(1);
                self.pending = if opens {
                    Pending::PendingIndent
                } else {
                    Pending::Idle
                };
            }
            LineShape::Other => {
                if self.pending == Pending::PendingIndent {
                    self.depth += 1;
                    self.pending = Pending::Idle;
                }
            }
        }
        self.depth
    }

    /// Apply the post-write transition for `line`.
    pub fn settle(&mut self, line: &str, mode: LineMode) {
        self.pending = match (mode, LineShape::of(line)) {
            (LineMode::Level, _) | (LineMode::Stepping, LineShape::BareClose) => Pending::Idle,
            (LineMode::Stepping, _) => Pending::PendingIndent,
        };
    }

    /// Prefix for a line at `depth`.
    pub fn prefix(depth: usize) -> String {
        INDENT_UNIT.repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LineMode::{Level, Stepping};

    /// Feed lines through the state machine, returning their depths.
    fn depths(lines: &[(&str, LineMode)]) -> (Vec<usize>, IndentState) {
        let mut state = IndentState::new();
        let depths = lines
            .iter()
            .map(|(line, mode)| {
                let depth = state.enter(line);
                state.settle(line, *mode);
                depth
            })
            .collect();
        (depths, state)
    }

    #[test]
    fn test_new_state() {
        let state = IndentState::new();
        assert_eq!(state.depth(), 0);
        assert_eq!(state.pending(), Pending::Idle);
    }

    #[test]
    fn test_open_line_defers_indent() {
        let mut state = IndentState::new();

        assert_eq!(state.enter("class A {"), 0);
        state.settle("class A {", Stepping);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.pending(), Pending::PendingIndent);

        assert_eq!(state.enter("int x;"), 1);
    }

    #[test]
    fn test_bare_close_dedents_and_disarms() {
        let mut state = IndentState::new();
        state.enter("a {");
        state.settle("a {", Stepping);
        state.enter("b {");
        state.settle("b {", Stepping);

        assert_eq!(state.enter("}"), 0);
        assert_eq!(state.pending(), Pending::Idle);
        state.settle("}", Stepping);
        assert_eq!(state.pending(), Pending::Idle);
    }

    #[test]
    fn test_close_open_line() {
        let (d, state) = depths(&[
            ("try {", Stepping),
            ("work();", Level),
            ("} catch(Exception e) {", Stepping),
            ("recover();", Stepping),
            ("}", Level),
        ]);

        assert_eq!(d, vec![0, 1, 0, 1, 0]);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_closing_line_without_open() {
        let mut state = IndentState::new();
        state.enter("f(new Runnable() {");
        state.settle("f(new Runnable() {", Stepping);
        state.enter("run();");
        state.settle("run();", Level);

        assert_eq!(state.enter("});"), 0);
        assert_eq!(state.pending(), Pending::Idle);
    }

    #[test]
    fn test_level_line_keeps_depth() {
        let (d, _) = depths(&[
            ("class A {", Stepping),
            ("@Override", Level),
            ("void f() {", Stepping),
        ]);

        assert_eq!(d, vec![0, 1, 1]);
    }

    #[test]
    fn test_level_line_consumes_pending_indent() {
        let (d, state) = depths(&[("try {", Stepping), ("a();", Level), ("b();", Level)]);

        assert_eq!(d, vec![0, 1, 1]);
        assert_eq!(state.pending(), Pending::Idle);
    }

    #[test]
    fn test_balanced_sequence_returns_to_zero() {
        let (_, state) = depths(&[
            ("class A {", Stepping),
            ("A() {", Stepping),
            ("super();", Stepping),
            ("}", Stepping),
            ("void f() {", Stepping),
            ("try {", Stepping),
            ("g();", Level),
            ("} catch(Exception e) {", Stepping),
            ("h();", Stepping),
            ("}", Level),
            ("}", Stepping),
            ("}", Stepping),
        ]);

        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_unbalanced_sequence_leaves_depth() {
        let (_, state) = depths(&[
            ("class A {", Stepping),
            ("void f() {", Stepping),
            ("g();", Level),
            ("}", Stepping),
        ]);

        assert_eq!(state.depth(), 1);
    }

    #[test]
    fn test_extra_close_saturates() {
        let (d, state) = depths(&[("}", Stepping), ("}", Stepping)]);

        assert_eq!(d, vec![0, 0]);
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(IndentState::prefix(0), "");
        assert_eq!(IndentState::prefix(3), "\t\t\t");
    }
}
