use ir::OpDef;
use registry::{OpRegistry, RegistryReader};

#[test]
fn registry_preserves_load_order() {
    let reg = OpRegistry::from_ops(vec![
        OpDef::named("Zeta"),
        OpDef::named("Alpha"),
        OpDef::named("Mid"),
    ]);
    assert_eq!(reg.names(), vec!["Zeta", "Alpha", "Mid"]);
    assert_eq!(reg.op_count(), 3);
}

#[test]
fn duplicate_names_shadow_last_write_wins() {
    let first = OpDef { name: "Add".to_string(), summary: "first".to_string(), ..Default::default() };
    let second =
        OpDef { name: "Add".to_string(), summary: "second".to_string(), ..Default::default() };
    let reg = OpRegistry::from_ops(vec![first, OpDef::named("Mul"), second]);

    // Both entries still iterate, but lookup resolves to the later one.
    assert_eq!(reg.names(), vec!["Add", "Mul", "Add"]);
    assert_eq!(reg.get("Add").map(|op| op.summary.as_str()), Some("second"));
}

#[test]
fn missing_names_resolve_to_none() {
    let reg = OpRegistry::new();
    assert!(reg.get("Nope").is_none());
    assert_eq!(reg.op_count(), 0);
}
