//! The fixed rule set for deployment process files.
//!
//! The step checks are data: an ordered table evaluated by the validator
//! with fail-fast semantics. Adding a rule means adding a row.

/// Required name of the first step
pub const FIRST_STEP_NAME: &str = "Generate GitHub Token";

/// Required name of the second step
pub const SECOND_STEP_NAME: &str = "Check for Updates";

/// Required name of the last step
pub const LAST_STEP_NAME: &str = "Vulnerability Scan";

/// Action type identifying a script step
pub const SCRIPT_ACTION_TYPE: &str = "Octopus.Script";

/// Minimum number of steps in a deployment process
pub const MIN_STEP_COUNT: usize = 3;

/// Names of the tree nodes the rules inspect
pub(crate) const NAME_ATTR: &str = "name";
pub(crate) const ACTION_BLOCK: &str = "action";
pub(crate) const ACTION_TYPE_ATTR: &str = "action_type";

/// Which step of the document a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSelector {
    First,
    Second,
    Last,
}

impl StepSelector {
    /// Index of the selected step within a document of `len` steps.
    ///
    /// Callers must have checked `len >= MIN_STEP_COUNT` first.
    pub fn index(&self, len: usize) -> usize {
        match self {
            StepSelector::First => 0,
            StepSelector::Second => 1,
            StepSelector::Last => len - 1,
        }
    }

    /// Message prefix, e.g. "First step must be called ..."
    pub fn label(&self) -> &'static str {
        match self {
            StepSelector::First => "First step",
            StepSelector::Second => "Second step",
            StepSelector::Last => "Last step",
        }
    }

    /// Lowercase noun, e.g. "the name of the last step"
    pub fn noun(&self) -> &'static str {
        match self {
            StepSelector::First => "first step",
            StepSelector::Second => "second step",
            StepSelector::Last => "last step",
        }
    }
}

/// A single structural check against one step
#[derive(Debug, Clone, Copy)]
pub enum StepCheck {
    /// The step's name attribute must be resolvable
    NamePresent,
    /// The step's unquoted name must equal the given value
    NameEquals(&'static str),
    /// The step's action block must carry the given action type
    ActionTypeEquals(&'static str),
}

/// One row of the rule table
#[derive(Debug, Clone, Copy)]
pub struct StepRule {
    pub selector: StepSelector,
    pub check: StepCheck,
}

/// The step rules, in evaluation order.
///
/// The step-count check runs before this table so the selectors can index
/// into the document safely. Name presence on the last step is its own rule
/// so its failure is reported distinctly from a name mismatch.
pub const STEP_RULES: &[StepRule] = &[
    StepRule {
        selector: StepSelector::First,
        check: StepCheck::NameEquals(FIRST_STEP_NAME),
    },
    StepRule {
        selector: StepSelector::First,
        check: StepCheck::ActionTypeEquals(SCRIPT_ACTION_TYPE),
    },
    StepRule {
        selector: StepSelector::Second,
        check: StepCheck::NameEquals(SECOND_STEP_NAME),
    },
    StepRule {
        selector: StepSelector::Second,
        check: StepCheck::ActionTypeEquals(SCRIPT_ACTION_TYPE),
    },
    StepRule {
        selector: StepSelector::Last,
        check: StepCheck::NamePresent,
    },
    StepRule {
        selector: StepSelector::Last,
        check: StepCheck::NameEquals(LAST_STEP_NAME),
    },
    StepRule {
        selector: StepSelector::Last,
        check: StepCheck::ActionTypeEquals(SCRIPT_ACTION_TYPE),
    },
];
