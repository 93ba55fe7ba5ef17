//! DC labels and their information-flow lattice.
//!
//! A label pairs two Boolean formulas over principal variables:
//!
//! - **confidentiality** — who may read data carried at this label
//! - **integrity** — who is trusted to have written it
//!
//! The two components point in opposite directions. A confidentiality of
//! `⊤` means anyone may read (unrestricted); `⊥` means no one may. For
//! integrity the reading is dual: `⊤` trusts everyone, `⊥` trusts no one.
//! This asymmetry is what makes [`Label::flows_to`] antitonic in
//! confidentiality and monotonic in integrity, while [`Label::acts_for`]
//! tightens both coordinates in the same direction. The two predicates look
//! structurally similar and are not interchangeable.
//!
//! Labels are immutable values. Every combinator returns a new label, and
//! every operation borrows the backend for the duration of the call; no
//! label ever owns the backend or outlives it.
//!
//! Based on A. Askarov's `Label` in Troupe.

use crate::backend::BooleanBackend;

/// An immutable security label `⟨confidentiality, integrity⟩`.
///
/// Both components are formula handles drawn from the same backend. With a
/// canonical backend, two labels denoting the same pair of predicates
/// compare equal.
pub struct Label<B: BooleanBackend> {
    confidentiality: B::Formula,
    integrity: B::Formula,
}

impl<B: BooleanBackend> Clone for Label<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: BooleanBackend> Copy for Label<B> {}

impl<B: BooleanBackend> PartialEq for Label<B> {
    fn eq(&self, other: &Self) -> bool {
        self.confidentiality == other.confidentiality && self.integrity == other.integrity
    }
}

impl<B: BooleanBackend> Eq for Label<B> {}

impl<B: BooleanBackend> std::fmt::Debug for Label<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label")
            .field("confidentiality", &self.confidentiality)
            .field("integrity", &self.integrity)
            .finish()
    }
}

impl<B: BooleanBackend> Label<B> {
    fn from_parts(confidentiality: B::Formula, integrity: B::Formula) -> Self {
        Self {
            confidentiality,
            integrity,
        }
    }

    /// Label `⟨var(level), var(level)⟩`: one principal at uniform sensitivity.
    pub fn from_level(backend: &mut B, level: u32) -> Self {
        Self::from_pair(backend, level, level)
    }

    /// Label `⟨var(c), var(i)⟩`.
    pub fn from_pair(backend: &mut B, c: u32, i: u32) -> Self {
        let confidentiality = backend.variable(c);
        let integrity = backend.variable(i);
        Self::from_parts(confidentiality, integrity)
    }

    /// Least restrictive information flow, `⟨⊤, ⊥⟩`.
    ///
    /// Anyone may read; no one is trusted to have written.
    pub fn bottom(backend: &B) -> Self {
        Self::from_parts(backend.constant_true(), backend.constant_false())
    }

    /// Most restrictive information flow, `⟨⊥, ⊤⟩`.
    ///
    /// No one may read; everyone is trusted to have written.
    pub fn top(backend: &B) -> Self {
        Self::from_parts(backend.constant_false(), backend.constant_true())
    }

    /// Minimal authority, `⟨⊤, ⊤⟩`.
    pub fn nil(backend: &B) -> Self {
        Self::from_parts(backend.constant_true(), backend.constant_true())
    }

    /// Maximal authority, `⟨⊥, ⊥⟩`.
    pub fn root(backend: &B) -> Self {
        Self::from_parts(backend.constant_false(), backend.constant_false())
    }

    /// The confidentiality component.
    pub fn confidentiality(&self) -> B::Formula {
        self.confidentiality
    }

    /// The integrity component.
    pub fn integrity(&self) -> B::Formula {
        self.integrity
    }

    /// Whether information may flow from this label to `other`.
    ///
    /// Flowing tightens confidentiality (the destination needs at least as
    /// restrictive a read predicate) and loosens integrity (the destination
    /// may trust no more writers than the source already did):
    ///
    /// ```text
    /// L₁ ⊑ L₂  ⟺  (S₂ ⇒ S₁) ∧ (I₁ ⇒ I₂)
    /// ```
    pub fn flows_to(&self, backend: &mut B, other: &Self) -> bool {
        let c_constraint = backend.implies(other.confidentiality, self.confidentiality);
        let i_constraint = backend.implies(self.integrity, other.integrity);
        c_constraint && i_constraint
    }

    /// Whether this label's authority subsumes `other`'s.
    ///
    /// Unlike [`Label::flows_to`], both read and write permissions become
    /// more restrictive in the same direction:
    ///
    /// ```text
    /// L₁ ≽ L₂  ⟺  (S₁ ⇒ S₂) ∧ (I₁ ⇒ I₂)
    /// ```
    pub fn acts_for(&self, backend: &mut B, other: &Self) -> bool {
        let c_constraint = backend.implies(self.confidentiality, other.confidentiality);
        let i_constraint = backend.implies(self.integrity, other.integrity);
        c_constraint && i_constraint
    }

    /// Join in the IFC lattice, i.e. least upper bound.
    ///
    /// `L₁ ⊔ L₂ = ⟨S₁ ∧ S₂, I₁ ∨ I₂⟩`: combined data is at least as secret
    /// as the more secret input and writable by the union of trusted
    /// writers.
    pub fn join(&self, backend: &mut B, other: &Self) -> Self {
        let confidentiality = backend.and(self.confidentiality, other.confidentiality);
        let integrity = backend.or(self.integrity, other.integrity);
        Self::from_parts(confidentiality, integrity)
    }

    /// Meet in the IFC lattice, i.e. greatest lower bound.
    ///
    /// `L₁ ⊓ L₂ = ⟨S₁ ∨ S₂, I₁ ∧ I₂⟩`, the De Morgan dual of
    /// [`Label::join`].
    pub fn meet(&self, backend: &mut B, other: &Self) -> Self {
        let confidentiality = backend.or(self.confidentiality, other.confidentiality);
        let integrity = backend.and(self.integrity, other.integrity);
        Self::from_parts(confidentiality, integrity)
    }

    /// View of a label: `⟨I, ⊤⟩`.
    ///
    /// The confidentiality an observer trusted to write at this label's
    /// integrity is permitted to see. Used to reason about nonmalleable
    /// declassification.
    pub fn view(&self, backend: &B) -> Self {
        Self::from_parts(self.integrity, backend.constant_true())
    }

    /// Voice of a label: `⟨⊤, S⟩`.
    ///
    /// The authority required to endorse data at this label's
    /// confidentiality; the dual of [`Label::view`].
    pub fn voice(&self, backend: &B) -> Self {
        Self::from_parts(backend.constant_true(), self.confidentiality)
    }

    /// Diagnostic rendering `⟨ nodes|models , nodes|models ⟩`.
    ///
    /// Backed by the backend's size metrics; carries no semantic contract
    /// and must not be used for equality or ordering.
    pub fn render(&self, backend: &B) -> String {
        format!(
            "⟨ {}|{} , {}|{} ⟩",
            backend.node_count(self.confidentiality),
            backend.sat_count(self.confidentiality),
            backend.node_count(self.integrity),
            backend.sat_count(self.integrity),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bdd::BddBackend;

    #[test]
    fn canonical_labels_use_the_backend_constants() {
        let backend = BddBackend::new(2);
        let tt = backend.constant_true();
        let ff = backend.constant_false();

        assert_eq!(Label::bottom(&backend).confidentiality(), tt);
        assert_eq!(Label::bottom(&backend).integrity(), ff);
        assert_eq!(Label::top(&backend).confidentiality(), ff);
        assert_eq!(Label::top(&backend).integrity(), tt);
        assert_eq!(Label::nil(&backend).confidentiality(), tt);
        assert_eq!(Label::nil(&backend).integrity(), tt);
        assert_eq!(Label::root(&backend).confidentiality(), ff);
        assert_eq!(Label::root(&backend).integrity(), ff);
    }

    #[test]
    fn from_level_is_the_uniform_pair() {
        let mut backend = BddBackend::new(2);
        let uniform = Label::from_level(&mut backend, 0);
        let pair = Label::from_pair(&mut backend, 0, 0);
        assert_eq!(uniform, pair);
        assert_eq!(uniform.confidentiality(), backend.variable(0));
    }

    #[test]
    fn join_and_meet_are_componentwise_duals() {
        let mut backend = BddBackend::new(2);
        let a = Label::from_level(&mut backend, 0);
        let b = Label::from_level(&mut backend, 1);

        let joined = a.join(&mut backend, &b);
        let met = a.meet(&mut backend, &b);

        let c_and = backend.and(a.confidentiality(), b.confidentiality());
        let c_or = backend.or(a.confidentiality(), b.confidentiality());
        let i_and = backend.and(a.integrity(), b.integrity());
        let i_or = backend.or(a.integrity(), b.integrity());

        assert_eq!(joined.confidentiality(), c_and);
        assert_eq!(joined.integrity(), i_or);
        assert_eq!(met.confidentiality(), c_or);
        assert_eq!(met.integrity(), i_and);
    }

    #[test]
    fn flow_order_has_bottom_and_top() {
        let mut backend = BddBackend::new(2);
        let bottom = Label::bottom(&backend);
        let top = Label::top(&backend);
        let alice = Label::from_level(&mut backend, 0);

        for label in [bottom, top, alice] {
            assert!(label.flows_to(&mut backend, &label));
            assert!(bottom.flows_to(&mut backend, &label));
            assert!(label.flows_to(&mut backend, &top));
        }
        assert!(!top.flows_to(&mut backend, &bottom));
    }

    #[test]
    fn flows_to_and_acts_for_are_not_interchangeable() {
        let mut backend = BddBackend::new(2);
        let alice = Label::from_level(&mut backend, 0);
        let bob = Label::from_level(&mut backend, 1);

        // Distinct principals are incomparable under both orders.
        assert!(!alice.flows_to(&mut backend, &bob));
        assert!(!alice.acts_for(&mut backend, &bob));

        // But the orders disagree about the sentinels: bottom flows to
        // alice yet holds no authority over her.
        let bottom = Label::bottom(&backend);
        assert!(bottom.flows_to(&mut backend, &alice));
        assert!(!bottom.acts_for(&mut backend, &alice));

        let root = Label::root(&backend);
        let nil = Label::nil(&backend);
        assert!(root.acts_for(&mut backend, &alice));
        assert!(!nil.acts_for(&mut backend, &alice));
        assert!(alice.acts_for(&mut backend, &nil));
    }

    #[test]
    fn view_and_voice_project_onto_the_unrestricted_constant() {
        let mut backend = BddBackend::new(2);
        let tt = backend.constant_true();
        let label = Label::from_pair(&mut backend, 0, 1);

        let view = label.view(&backend);
        assert_eq!(view.confidentiality(), label.integrity());
        assert_eq!(view.integrity(), tt);

        let voice = label.voice(&backend);
        assert_eq!(voice.confidentiality(), tt);
        assert_eq!(voice.integrity(), label.confidentiality());
    }

    #[test]
    fn render_reports_both_components() {
        let mut backend = BddBackend::new(2);
        let alice = Label::from_level(&mut backend, 0);
        // var(0) over 2 variables: 3 reachable nodes, 2 satisfying models.
        assert_eq!(alice.render(&backend), "⟨ 3|2 , 3|2 ⟩");
        assert_eq!(Label::nil(&backend).render(&backend), "⟨ 1|4 , 1|4 ⟩");
    }
}
