use endpoints::EndpointIndex;
use ir::{ArgDef, AttrDef, EndpointRecord, Group, OpDef};
use opgen_plan::{build, write_plan, PLAN_FILE_NAME};
use registry::OpRegistry;

fn typed_arg(name: &str, type_attr: &str) -> ArgDef {
    ArgDef {
        name: name.to_string(),
        type_attr: Some(type_attr.to_string()),
        ..Default::default()
    }
}

fn add_v2() -> OpDef {
    OpDef {
        name: "AddV2".to_string(),
        input_args: vec![typed_arg("x", "T"), typed_arg("y", "T")],
        output_args: vec![typed_arg("z", "T")],
        attrs: vec![AttrDef { name: "T".to_string(), attr_type: "type".to_string() }],
        summary: "Returns x + y element-wise.".to_string(),
    }
}

fn record(op: &str, endpoints: &[&str], summary: Option<&str>) -> EndpointRecord {
    EndpointRecord {
        op_name: op.to_string(),
        endpoints: endpoints.iter().map(|s| s.to_string()).collect(),
        summary: summary.map(|s| s.to_string()),
    }
}

#[test]
fn endpoint_metadata_drives_group_and_canonical_name() {
    let registry = OpRegistry::from_ops(vec![add_v2()]);
    let index = EndpointIndex::new(vec![record("AddV2", &["math.add", "add"], None)]);
    let plan = build(&registry, Some(&index));

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].op_name, "AddV2");
    assert_eq!(plan[0].group, Group::Math);
    assert_eq!(plan[0].canonical_name, "add");
    assert_eq!(plan[0].endpoints, vec!["math.add", "add"]);
    assert_eq!(plan[0].arity, 2);
    assert_eq!(plan[0].attr_names, vec!["T"]);
    assert_eq!(plan[0].num_outputs, 0);
}

#[test]
fn heuristics_cover_operations_without_records() {
    let registry = OpRegistry::from_ops(vec![add_v2(), OpDef::named("Cholesky")]);
    let index = EndpointIndex::new(vec![record("AddV2", &["math.add"], None)]);
    let plan = build(&registry, Some(&index));

    assert_eq!(plan[1].op_name, "Cholesky");
    assert_eq!(plan[1].group, Group::Linalg);
    assert_eq!(plan[1].canonical_name, "cholesky");
    assert!(plan[1].endpoints.is_empty());
}

#[test]
fn heuristics_cover_everything_without_an_index() {
    let registry = OpRegistry::from_ops(vec![add_v2(), OpDef::named("Mystery")]);
    let plan = build(&registry, None);
    assert_eq!(plan[0].group, Group::Math);
    assert_eq!(plan[0].canonical_name, "addV2");
    assert_eq!(plan[1].group, Group::Other);
}

#[test]
fn an_existing_record_wins_even_when_it_resolves_to_other() {
    // The heuristic would say math, but the curated record exists and its
    // endpoint prefix is unrecognized.
    let registry = OpRegistry::from_ops(vec![add_v2()]);
    let index = EndpointIndex::new(vec![record("AddV2", &["compat.v1.add"], None)]);
    let plan = build(&registry, Some(&index));
    assert_eq!(plan[0].group, Group::Other);
}

#[test]
fn summary_prefers_curated_text_over_the_registry() {
    let registry = OpRegistry::from_ops(vec![add_v2()]);

    let curated = EndpointIndex::new(vec![record("AddV2", &["math.add"], Some("Adds tensors."))]);
    let plan = build(&registry, Some(&curated));
    assert_eq!(plan[0].summary.as_deref(), Some("Adds tensors."));

    let uncurated = EndpointIndex::new(vec![record("AddV2", &["math.add"], None)]);
    let plan = build(&registry, Some(&uncurated));
    assert_eq!(plan[0].summary.as_deref(), Some("Returns x + y element-wise."));
}

#[test]
fn summary_is_absent_when_every_source_is_empty() {
    let registry = OpRegistry::from_ops(vec![OpDef::named("Quiet")]);
    let plan = build(&registry, None);
    assert!(plan[0].summary.is_none());
}

#[test]
fn registry_iteration_order_is_preserved_without_sorting() {
    let registry =
        OpRegistry::from_ops(vec![OpDef::named("Zeta"), OpDef::named("Alpha"), OpDef::named("Mu")]);
    let plan = build(&registry, None);
    let names: Vec<_> = plan.iter().map(|r| r.op_name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
}

#[test]
fn duplicated_names_iterate_twice_with_the_shadowing_definition() {
    let mut shadowed = add_v2();
    shadowed.summary = "old text".to_string();
    let mut shadowing = add_v2();
    shadowing.summary = "new text".to_string();
    let registry = OpRegistry::from_ops(vec![shadowed, shadowing]);

    let plan = build(&registry, None);
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].summary.as_deref(), Some("new text"));
    assert_eq!(plan[1].summary.as_deref(), Some("new text"));
}

#[test]
fn plan_document_has_sorted_keys_and_round_trips() {
    let registry = OpRegistry::from_ops(vec![add_v2()]);
    let index = EndpointIndex::new(vec![record("AddV2", &["math.add"], None)]);
    let plan = build(&registry, Some(&index));

    let dir = tempfile::tempdir().expect("temp dir");
    let plan_path = dir.path().join(PLAN_FILE_NAME);
    write_plan(&plan, &plan_path).expect("write plan");

    let text = std::fs::read_to_string(&plan_path).expect("read plan");
    let keys = ["arity", "attr_names", "canonical_name", "endpoints", "group", "num_outputs", "op_name", "summary"];
    let positions: Vec<_> = keys
        .iter()
        .map(|k| text.find(&format!("\"{}\"", k)).unwrap_or_else(|| panic!("missing key {}", k)))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "keys must appear in sorted order");

    let back: Vec<ir::PlanRecord> = serde_json::from_str(&text).expect("parse plan");
    assert_eq!(back, plan);
}
