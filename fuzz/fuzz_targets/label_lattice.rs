#![no_main]

use dc_label::{BddBackend, Label};
use libfuzzer_sys::fuzz_target;

const VARS: u32 = 8;

/// Decode one label from two fuzzer bytes.
fn label_from_bytes(backend: &mut BddBackend, c: u8, i: u8) -> Label<BddBackend> {
    match c % 5 {
        0 => Label::bottom(backend),
        1 => Label::top(backend),
        2 => Label::nil(backend),
        3 => Label::root(backend),
        _ => Label::from_pair(backend, u32::from(c) % VARS, u32::from(i) % VARS),
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let mut backend = BddBackend::new(VARS);
    let a = label_from_bytes(&mut backend, data[0], data[1]);
    let b = label_from_bytes(&mut backend, data[2], data[3]);

    // Order laws.
    assert!(a.flows_to(&mut backend, &a));
    let joined = a.join(&mut backend, &b);
    let met = a.meet(&mut backend, &b);
    assert!(a.flows_to(&mut backend, &joined));
    assert!(met.flows_to(&mut backend, &a));

    // Commutativity under canonical formulas is handle equality.
    assert_eq!(joined, b.join(&mut backend, &a));
    assert_eq!(met, b.meet(&mut backend, &a));

    // Absorption.
    assert_eq!(a.join(&mut backend, &met), a);
    assert_eq!(a.meet(&mut backend, &joined), a);
});
