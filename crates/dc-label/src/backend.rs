//! The Boolean-function backend contract.
//!
//! The label algebra never manipulates formulas itself. It delegates every
//! logical operation to a backend that owns a universe of canonically
//! represented Boolean formulas over principal variables. Any engine with
//! sharing, canonical equality, and efficient conjunction, disjunction, and
//! implication checking can sit behind this trait; the in-tree
//! [`BddBackend`](crate::BddBackend) is one such engine, built for tests and
//! small principal universes.
//!
//! # Contract
//!
//! - The universe of formulas is append-only: operations may intern new
//!   nodes but never mutate or invalidate existing handles.
//! - Handles returned for semantically equal formulas must compare equal.
//!   The label algebra relies on this for antisymmetry of the flow order.
//! - The size metrics are diagnostic only and must not influence any
//!   logical result.

use std::fmt::Debug;
use std::hash::Hash;

/// A canonical Boolean-formula engine over a fixed variable universe.
///
/// Formulas are lightweight handles into state owned by the backend; a
/// handle is meaningless without the backend that produced it. Methods that
/// can intern new formula nodes take `&mut self` since the universe grows.
pub trait BooleanBackend {
    /// Handle to a formula inside this backend.
    type Formula: Copy + Eq + Hash + Debug;

    /// The formula "variable `id` is true".
    ///
    /// Calling this twice with the same `id` yields equal handles.
    fn variable(&mut self, id: u32) -> Self::Formula;

    /// The identically-true formula, `⊤`.
    fn constant_true(&self) -> Self::Formula;

    /// The identically-false formula, `⊥`.
    fn constant_false(&self) -> Self::Formula;

    /// Canonical conjunction `a ∧ b`.
    fn and(&mut self, a: Self::Formula, b: Self::Formula) -> Self::Formula;

    /// Canonical disjunction `a ∨ b`.
    fn or(&mut self, a: Self::Formula, b: Self::Formula) -> Self::Formula;

    /// Whether `a ⇒ b` is a tautology over the variable universe.
    fn implies(&mut self, a: Self::Formula, b: Self::Formula) -> bool;

    /// Structural size of the formula's representation.
    ///
    /// Diagnostic only; two backends may report different counts for the
    /// same predicate.
    fn node_count(&self, f: Self::Formula) -> usize;

    /// Number of satisfying assignments over the full variable universe.
    ///
    /// Diagnostic only.
    fn sat_count(&self, f: Self::Formula) -> u64;
}
