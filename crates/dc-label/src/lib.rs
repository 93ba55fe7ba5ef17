//! # dc-label
//!
//! A security label lattice for information-flow control (IFC).
//!
//! Each [`Label`] pairs a confidentiality formula ("who may read") with an
//! integrity formula ("who is trusted to have written"), both Boolean
//! predicates over a universe of principal variables. Labels support the
//! flow order, authority delegation, least upper and greatest lower bounds,
//! and the view/voice projections from nonmalleable IFC.
//!
//! The formulas themselves live in a pluggable [`BooleanBackend`]: any
//! canonical-form Boolean engine (decision diagrams or equivalent) that can
//! inject variables, combine formulas, and answer implication queries. The
//! in-tree [`BddBackend`] is a reduced ordered BDD suitable for tests and
//! small principal universes.
//!
//! ## The lattice
//!
//! ```text
//!          top ⟨⊥,⊤⟩            most restrictive flow
//!         /          \
//!   ⟨S,I⟩  ⊔  ⟨S',I'⟩  =  ⟨S ∧ S', I ∨ I'⟩
//!         \          /
//!          bot ⟨⊤,⊥⟩            least restrictive flow
//! ```
//!
//! Confidentiality `⊤` reads as "unrestricted": anyone satisfies the read
//! predicate. Integrity is the dual. Getting this asymmetry right is what
//! separates [`Label::flows_to`] (antitonic confidentiality, monotonic
//! integrity) from [`Label::acts_for`] (monotonic in both).
//!
//! ## Quick start
//!
//! ```rust
//! use dc_label::{BddBackend, Label};
//!
//! let mut backend = BddBackend::new(2);
//! let alice = Label::from_level(&mut backend, 0);
//! let bob = Label::from_level(&mut backend, 1);
//!
//! // Distinct principals are incomparable...
//! assert!(!alice.flows_to(&mut backend, &bob));
//!
//! // ...but both flow into their join.
//! let shared = alice.join(&mut backend, &bob);
//! assert!(alice.flows_to(&mut backend, &shared));
//! assert!(bob.flows_to(&mut backend, &shared));
//! assert!(!shared.flows_to(&mut backend, &alice));
//!
//! // Authority is the other order: root may act for anyone.
//! let root = Label::root(&backend);
//! assert!(root.acts_for(&mut backend, &alice));
//! ```
//!
//! ## Concurrency
//!
//! The label engine is synchronous and purely functional; all state lives
//! in the backend's append-only formula universe. Callers combining labels
//! from multiple threads must make backend access safe themselves, per the
//! chosen backend's documentation.

#![deny(missing_docs)]
#![deny(unsafe_code)]

mod backend;
mod bdd;
mod label;

pub use backend::BooleanBackend;
pub use bdd::{BddBackend, BddRef};
pub use label::Label;
