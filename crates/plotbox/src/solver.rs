#![forbid(unsafe_code)]

//! Thin facade over the cassowary linear-arithmetic solver.
//!
//! [`LayoutSolver`] owns one `cassowary::Solver` and the bookkeeping the raw
//! solver does not provide:
//!
//! - a registry of claimed box names, so constructing two boxes with the same
//!   name fails fast instead of silently aliasing variables;
//! - the set of declared edit variables, making edit declaration idempotent
//!   and queryable.
//!
//! Ordering rules (single-threaded, no suspension points):
//! constraints must be added before the first [`refresh`](LayoutSolver::refresh)
//! that depends on them; edit variables must be declared before they are
//! suggested; reads before the first refresh return 0.0 rather than erroring
//! ("solve on demand" semantics).
//!
//! Variables and constraints are never removed. Reusing one solver across many
//! rebuild cycles accumulates constraint state without bound; the intended use
//! is one solver per one-shot layout pass.

use cassowary::strength::REQUIRED;
use cassowary::{
    AddConstraintError, AddEditVariableError, Constraint, Solver, SuggestValueError, Variable,
};
use rustc_hash::FxHashSet;

/// Edit strength used to pin geometry and minimum sizes.
///
/// Sits just below `REQUIRED`: cassowary rejects edit variables at required
/// strength, so this is the hardest usable edit tier. Suggestions at this
/// strength behave as hard targets in practice.
pub const PIN: f64 = 1.0e9;

/// Strength of the soft equalities tying preferred sizes to actual sizes.
///
/// Far below `WEAK`, so a preference never fights a real constraint; it only
/// breaks ties among otherwise-satisfied solutions.
pub(crate) const TIE_BREAK: f64 = 1.0e-6;

/// Errors from layout construction and solving.
///
/// All of these are terminal for the current layout pass; nothing retries.
#[derive(Debug)]
pub enum LayoutError {
    /// A box was constructed with an empty name.
    EmptyName,
    /// A box name was already claimed on this solver.
    DuplicateName(String),
    /// A stacking direction string was not one of left/right/top/bottom.
    UnknownEdge(String),
    /// A geometry attribute string was not one of the eight box quantities.
    UnknownAttr(String),
    /// A label slot string was not one of left/right/top/bottom/title.
    UnknownSlot(String),
    /// A grid was constructed with zero rows or zero columns.
    EmptyGrid,
    /// A grid placement referenced cells outside the grid.
    CellOutOfRange {
        row: usize,
        col: usize,
        rowspan: usize,
        colspan: usize,
        rows: usize,
        cols: usize,
    },
    /// The solver rejected a constraint (duplicate or jointly unsatisfiable).
    Unsatisfiable(AddConstraintError),
    /// The solver rejected an edit-variable declaration.
    Edit(AddEditVariableError),
    /// The solver rejected a value suggestion.
    Suggest(SuggestValueError),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "box name must not be empty"),
            Self::DuplicateName(name) => {
                write!(f, "box name '{name}' is already registered on this solver")
            }
            Self::UnknownEdge(s) => {
                write!(f, "unknown stacking direction '{s}' (expected left, right, top or bottom)")
            }
            Self::UnknownAttr(s) => write!(f, "unknown geometry attribute '{s}'"),
            Self::UnknownSlot(s) => {
                write!(f, "unknown label slot '{s}' (expected left, right, top, bottom or title)")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::CellOutOfRange {
                row,
                col,
                rowspan,
                colspan,
                rows,
                cols,
            } => write!(
                f,
                "cell ({row}, {col}) with span {rowspan}x{colspan} does not fit a {rows}x{cols} grid"
            ),
            Self::Unsatisfiable(err) => write!(f, "constraint rejected: {err:?}"),
            Self::Edit(err) => write!(f, "edit variable rejected: {err:?}"),
            Self::Suggest(err) => write!(f, "suggestion rejected: {err:?}"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Owned handle to one constraint system.
///
/// Every box constructed against a `LayoutSolver` mutates it (new variables,
/// new constraints); independent layout trees should use independent solvers.
pub struct LayoutSolver {
    solver: Solver,
    names: FxHashSet<String>,
    edits: FxHashSet<Variable>,
}

impl LayoutSolver {
    /// Create an empty constraint system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            names: FxHashSet::default(),
            edits: FxHashSet::default(),
        }
    }

    /// Reserve a box name, failing on empty or duplicate names.
    pub(crate) fn claim_name(&mut self, name: &str) -> Result<(), LayoutError> {
        if name.is_empty() {
            return Err(LayoutError::EmptyName);
        }
        if !self.names.insert(name.to_owned()) {
            return Err(LayoutError::DuplicateName(name.to_owned()));
        }
        Ok(())
    }

    /// Add one constraint. Ownership of the constraint passes to the solver;
    /// there is no removal path.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<(), LayoutError> {
        self.solver
            .add_constraint(constraint)
            .map_err(LayoutError::Unsatisfiable)
    }

    /// Add a batch of constraints, stopping at the first rejection.
    pub fn add_constraints(
        &mut self,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), LayoutError> {
        for constraint in constraints {
            self.add_constraint(constraint)?;
        }
        Ok(())
    }

    /// Declare `variable` as an edit variable at `strength`.
    ///
    /// A no-op if the variable is already an edit variable, so repeated
    /// declarations (e.g. repeated `set_geometry` calls) are safe. The first
    /// declaration's strength wins. Strengths at or above `REQUIRED` are
    /// rejected by the solver; use [`PIN`] for hard targets.
    pub fn edit(&mut self, variable: Variable, strength: f64) -> Result<(), LayoutError> {
        if self.edits.contains(&variable) {
            return Ok(());
        }
        debug_assert!(strength < REQUIRED);
        self.solver
            .add_edit_variable(variable, strength)
            .map_err(LayoutError::Edit)?;
        self.edits.insert(variable);
        Ok(())
    }

    /// Whether `variable` has been declared as an edit variable.
    #[inline]
    #[must_use]
    pub fn has_edit(&self, variable: Variable) -> bool {
        self.edits.contains(&variable)
    }

    /// Suggest a new target value for a previously declared edit variable.
    ///
    /// The suggestion takes effect on the next [`refresh`](Self::refresh).
    pub fn suggest(&mut self, variable: Variable, value: f64) -> Result<(), LayoutError> {
        self.solver
            .suggest_value(variable, value)
            .map_err(LayoutError::Suggest)
    }

    /// Recompute variable values after a batch of suggestions.
    pub fn refresh(&mut self) {
        let changes = self.solver.fetch_changes();
        #[cfg(feature = "tracing")]
        tracing::trace!(changed = changes.len(), "solver refresh");
        #[cfg(not(feature = "tracing"))]
        let _ = changes;
    }

    /// Read the current solved value of a variable.
    ///
    /// Returns 0.0 for variables the solver has not assigned yet; reading
    /// before the first refresh is allowed and simply returns defaults.
    #[inline]
    #[must_use]
    pub fn value(&self, variable: Variable) -> f64 {
        self.solver.get_value(variable)
    }
}

impl Default for LayoutSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LayoutSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutSolver")
            .field("names", &self.names.len())
            .field("edits", &self.edits.len())
            .finish_non_exhaustive()
    }
}
