//! Basic usage example demonstrating the label lattice.

use dc_label::{BddBackend, Label};

fn main() {
    println!("=== dc-label Basic Usage ===\n");

    // Two principals over a two-variable universe.
    println!("1. Creating single-principal labels:");
    let mut backend = BddBackend::new(2);
    let alice = Label::from_level(&mut backend, 0);
    let bob = Label::from_level(&mut backend, 1);
    println!("   - alice: {}", alice.render(&backend));
    println!("   - bob:   {}", bob.render(&backend));

    // The flow order.
    println!("\n2. Checking information flow:");
    println!(
        "   - alice ⊑ alice: {}",
        alice.flows_to(&mut backend, &alice)
    );
    println!("   - alice ⊑ bob:   {}", alice.flows_to(&mut backend, &bob));

    // Combining data tightens the label.
    println!("\n3. Joining labels:");
    let shared = alice.join(&mut backend, &bob);
    println!("   - alice ⊔ bob: {}", shared.render(&backend));
    println!(
        "   - alice ⊑ (alice ⊔ bob): {}",
        alice.flows_to(&mut backend, &shared)
    );
    println!(
        "   - (alice ⊔ bob) ⊑ alice: {}",
        shared.flows_to(&mut backend, &alice)
    );

    // Authority is a separate order.
    println!("\n4. Checking authority:");
    let root = Label::root(&backend);
    let nil = Label::nil(&backend);
    println!(
        "   - root acts for alice: {}",
        root.acts_for(&mut backend, &alice)
    );
    println!(
        "   - nil acts for alice:  {}",
        nil.acts_for(&mut backend, &alice)
    );

    // Nonmalleable-IFC projections.
    println!("\n5. View and voice projections:");
    println!("   - view(alice ⊔ bob):  {}", shared.view(&backend).render(&backend));
    println!("   - voice(alice ⊔ bob): {}", shared.voice(&backend).render(&backend));
}
