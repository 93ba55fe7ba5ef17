//! Reference decision-diagram backend.
//!
//! A reduced ordered binary decision diagram (ROBDD) with a hash-consing
//! unique table: semantically equal formulas share one node, so handle
//! equality is semantic equality and implication checks reduce to a single
//! conjunction against the false terminal.
//!
//! The node arena only grows. Formula handles are indices into it, tagged
//! with the owning backend instance so that mixing handles across two
//! backends fails fast instead of silently producing meaningless results.
//!
//! This backend targets the small principal universes used in tests and
//! experiments; it keeps no garbage collector and never reclaims nodes.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::backend::BooleanBackend;

/// Instance-id source; each backend gets a process-unique tag.
static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Index of the false terminal.
const FALSE_NODE: u32 = 0;
/// Index of the true terminal.
const TRUE_NODE: u32 = 1;
/// Variable marker for terminals, ordered after every real variable.
const TERMINAL_VAR: u32 = u32::MAX;

/// Handle to a canonical formula inside one [`BddBackend`].
///
/// Handles are plain indices plus the owning instance's tag; they are
/// `Copy` and compare equal exactly when they denote the same predicate
/// within the same backend.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BddRef {
    instance: u64,
    node: u32,
}

impl fmt::Debug for BddRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BddRef({}@{})", self.node, self.instance)
    }
}

/// An internal decision node: branch on `var`, false-edge `lo`, true-edge `hi`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Node {
    var: u32,
    lo: u32,
    hi: u32,
}

/// Binary operations memoised in the apply cache.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Op {
    And,
    Or,
}

/// Reduced ordered BDD backend over a fixed variable universe.
pub struct BddBackend {
    instance: u64,
    vars: u32,
    nodes: Vec<Node>,
    unique: HashMap<Node, u32>,
    apply_cache: HashMap<(Op, u32, u32), u32>,
    negate_cache: HashMap<u32, u32>,
}

impl BddBackend {
    /// Create a backend over variables `0..vars`.
    ///
    /// # Panics
    ///
    /// Panics if `vars` is 64 or more; model counts are reported as `u64`.
    pub fn new(vars: u32) -> Self {
        assert!(vars < 64, "variable universe too large for u64 model counts: {vars}");
        let nodes = vec![
            // Terminals carry self-loops so the two stay structurally distinct.
            Node { var: TERMINAL_VAR, lo: FALSE_NODE, hi: FALSE_NODE },
            Node { var: TERMINAL_VAR, lo: TRUE_NODE, hi: TRUE_NODE },
        ];
        Self {
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            vars,
            nodes,
            unique: HashMap::new(),
            apply_cache: HashMap::new(),
            negate_cache: HashMap::new(),
        }
    }

    /// Number of variables in the universe.
    pub fn variables(&self) -> u32 {
        self.vars
    }

    /// Total nodes interned so far, terminals included.
    pub fn node_total(&self) -> usize {
        self.nodes.len()
    }

    /// Validate that `f` belongs to this backend and unwrap its index.
    ///
    /// This check runs in release builds as well: silently combining
    /// formulas from two universes would corrupt every downstream flow
    /// decision.
    fn unwrap_ref(&self, f: BddRef) -> u32 {
        assert!(
            f.instance == self.instance,
            "formula handle from backend instance {} used with backend instance {}",
            f.instance,
            self.instance,
        );
        f.node
    }

    fn wrap(&self, node: u32) -> BddRef {
        BddRef { instance: self.instance, node }
    }

    /// Hash-cons a node, applying the ROBDD reduction rule.
    fn mk(&mut self, var: u32, lo: u32, hi: u32) -> u32 {
        if lo == hi {
            return lo;
        }
        let node = Node { var, lo, hi };
        if let Some(&existing) = self.unique.get(&node) {
            return existing;
        }
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.unique.insert(node, index);
        index
    }

    fn apply(&mut self, op: Op, a: u32, b: u32) -> u32 {
        // Terminal short-circuits.
        match op {
            Op::And => {
                if a == FALSE_NODE || b == FALSE_NODE {
                    return FALSE_NODE;
                }
                if a == TRUE_NODE || a == b {
                    return b;
                }
                if b == TRUE_NODE {
                    return a;
                }
            }
            Op::Or => {
                if a == TRUE_NODE || b == TRUE_NODE {
                    return TRUE_NODE;
                }
                if a == FALSE_NODE || a == b {
                    return b;
                }
                if b == FALSE_NODE {
                    return a;
                }
            }
        }

        // Both operations are commutative; normalise the cache key.
        let key = (op, a.min(b), a.max(b));
        if let Some(&cached) = self.apply_cache.get(&key) {
            return cached;
        }

        let (na, nb) = (self.nodes[a as usize], self.nodes[b as usize]);
        let var = na.var.min(nb.var);
        let (a_lo, a_hi) = if na.var == var { (na.lo, na.hi) } else { (a, a) };
        let (b_lo, b_hi) = if nb.var == var { (nb.lo, nb.hi) } else { (b, b) };

        let lo = self.apply(op, a_lo, b_lo);
        let hi = self.apply(op, a_hi, b_hi);
        let result = self.mk(var, lo, hi);
        self.apply_cache.insert(key, result);
        result
    }

    fn negate(&mut self, a: u32) -> u32 {
        if a == FALSE_NODE {
            return TRUE_NODE;
        }
        if a == TRUE_NODE {
            return FALSE_NODE;
        }
        if let Some(&cached) = self.negate_cache.get(&a) {
            return cached;
        }
        let node = self.nodes[a as usize];
        let lo = self.negate(node.lo);
        let hi = self.negate(node.hi);
        let result = self.mk(node.var, lo, hi);
        self.negate_cache.insert(a, result);
        result
    }

    /// Satisfying assignments of `node` over variables `level..vars`.
    fn sat_rec(&self, node: u32, level: u32) -> u64 {
        if node == FALSE_NODE {
            return 0;
        }
        if node == TRUE_NODE {
            return 1u64 << (self.vars - level);
        }
        let n = self.nodes[node as usize];
        // Variables between `level` and the branch variable are unconstrained.
        let free = 1u64 << (n.var - level);
        free * (self.sat_rec(n.lo, n.var + 1) + self.sat_rec(n.hi, n.var + 1))
    }

    fn count_reachable(&self, node: u32, seen: &mut Vec<bool>) -> usize {
        if seen[node as usize] {
            return 0;
        }
        seen[node as usize] = true;
        if node == FALSE_NODE || node == TRUE_NODE {
            return 1;
        }
        let n = self.nodes[node as usize];
        1 + self.count_reachable(n.lo, seen) + self.count_reachable(n.hi, seen)
    }
}

impl BooleanBackend for BddBackend {
    type Formula = BddRef;

    fn variable(&mut self, id: u32) -> BddRef {
        assert!(
            id < self.vars,
            "variable {id} outside the declared universe of {} variables",
            self.vars,
        );
        let node = self.mk(id, FALSE_NODE, TRUE_NODE);
        self.wrap(node)
    }

    fn constant_true(&self) -> BddRef {
        self.wrap(TRUE_NODE)
    }

    fn constant_false(&self) -> BddRef {
        self.wrap(FALSE_NODE)
    }

    fn and(&mut self, a: BddRef, b: BddRef) -> BddRef {
        let (a, b) = (self.unwrap_ref(a), self.unwrap_ref(b));
        let result = self.apply(Op::And, a, b);
        self.wrap(result)
    }

    fn or(&mut self, a: BddRef, b: BddRef) -> BddRef {
        let (a, b) = (self.unwrap_ref(a), self.unwrap_ref(b));
        let result = self.apply(Op::Or, a, b);
        self.wrap(result)
    }

    fn implies(&mut self, a: BddRef, b: BddRef) -> bool {
        let (a, b) = (self.unwrap_ref(a), self.unwrap_ref(b));
        // a ⇒ b is a tautology iff a ∧ ¬b is unsatisfiable.
        let not_b = self.negate(b);
        self.apply(Op::And, a, not_b) == FALSE_NODE
    }

    fn node_count(&self, f: BddRef) -> usize {
        let node = self.unwrap_ref(f);
        let mut seen = vec![false; self.nodes.len()];
        self.count_reachable(node, &mut seen)
    }

    fn sat_count(&self, f: BddRef) -> u64 {
        let node = self.unwrap_ref(f);
        self.sat_rec(node, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_interned() {
        let mut backend = BddBackend::new(4);
        assert_eq!(backend.variable(2), backend.variable(2));
        assert_ne!(backend.variable(2), backend.variable(3));
    }

    #[test]
    fn conjunction_is_canonical() {
        let mut backend = BddBackend::new(4);
        let x = backend.variable(0);
        let y = backend.variable(1);

        let xy = backend.and(x, y);
        let yx = backend.and(y, x);
        assert_eq!(xy, yx);

        // Absorbing constants.
        let tt = backend.constant_true();
        let ff = backend.constant_false();
        assert_eq!(backend.and(x, tt), x);
        assert_eq!(backend.and(x, ff), ff);
        assert_eq!(backend.or(x, ff), x);
        assert_eq!(backend.or(x, tt), tt);
    }

    #[test]
    fn implication_is_a_tautology_check() {
        let mut backend = BddBackend::new(4);
        let x = backend.variable(0);
        let y = backend.variable(1);
        let xy = backend.and(x, y);
        let x_or_y = backend.or(x, y);
        let tt = backend.constant_true();
        let ff = backend.constant_false();

        assert!(backend.implies(x, x));
        assert!(backend.implies(xy, x));
        assert!(backend.implies(x, x_or_y));
        assert!(backend.implies(ff, x));
        assert!(backend.implies(x, tt));

        assert!(!backend.implies(x, y));
        assert!(!backend.implies(x_or_y, xy));
        assert!(!backend.implies(tt, x));
    }

    #[test]
    fn sat_count_over_the_full_universe() {
        let mut backend = BddBackend::new(3);
        let x = backend.variable(0);
        let y = backend.variable(1);

        assert_eq!(backend.sat_count(backend.constant_true()), 8);
        assert_eq!(backend.sat_count(backend.constant_false()), 0);
        assert_eq!(backend.sat_count(x), 4);
        let xy = backend.and(x, y);
        assert_eq!(backend.sat_count(xy), 2);
        let x_or_y = backend.or(x, y);
        assert_eq!(backend.sat_count(x_or_y), 6);
    }

    #[test]
    fn node_count_includes_terminals() {
        let mut backend = BddBackend::new(2);
        assert_eq!(backend.node_count(backend.constant_true()), 1);
        let x = backend.variable(0);
        assert_eq!(backend.node_count(x), 3);
        let y = backend.variable(1);
        let xy = backend.and(x, y);
        assert_eq!(backend.node_count(xy), 4);
    }

    #[test]
    #[should_panic(expected = "outside the declared universe")]
    fn variable_outside_universe_panics() {
        let mut backend = BddBackend::new(2);
        let _ = backend.variable(2);
    }

    #[test]
    #[should_panic(expected = "backend instance")]
    fn cross_backend_handles_are_rejected() {
        let mut a = BddBackend::new(2);
        let mut b = BddBackend::new(2);
        let x = a.variable(0);
        let y = b.variable(1);
        let _ = a.and(x, y);
    }
}
