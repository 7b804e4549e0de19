use ir::{ArgDef, AttrDef, OpDef};
use wire::{decode_registry, encode, DecodeError};

fn typed_arg(name: &str, type_attr: &str) -> ArgDef {
    ArgDef {
        name: name.to_string(),
        type_attr: Some(type_attr.to_string()),
        ..Default::default()
    }
}

fn sample_ops() -> Vec<OpDef> {
    vec![
        OpDef {
            name: "AddV2".to_string(),
            input_args: vec![typed_arg("x", "T"), typed_arg("y", "T")],
            output_args: vec![typed_arg("z", "T")],
            attrs: vec![AttrDef { name: "T".to_string(), attr_type: "type".to_string() }],
            summary: "Returns x + y element-wise.".to_string(),
        },
        OpDef {
            name: "Relu".to_string(),
            input_args: vec![typed_arg("features", "T")],
            output_args: vec![typed_arg("activations", "T")],
            attrs: vec![AttrDef { name: "T".to_string(), attr_type: "type".to_string() }],
            summary: String::new(),
        },
    ]
}

#[test]
fn registry_round_trips_through_the_wire_form() {
    let ops = sample_ops();
    let bytes = encode::registry(&ops);
    let decoded = decode_registry(&bytes).expect("decode registry");
    assert_eq!(decoded, ops);
}

#[test]
fn empty_buffer_decodes_to_an_empty_registry() {
    let decoded = decode_registry(&[]).expect("decode empty");
    assert!(decoded.is_empty());
}

#[test]
fn unknown_fields_of_every_wire_type_do_not_desync_known_fields() {
    // op message: name, then a parade of unknown fields, then summary.
    let mut op = Vec::new();
    encode::string_field(&mut op, 1, "Square");
    encode::varint_field(&mut op, 9, 42);
    encode::fixed64_field(&mut op, 10, 0xdead_beef_dead_beef);
    encode::bytes_field(&mut op, 11, b"opaque payload with { braces }");
    let mut group_inner = Vec::new();
    encode::varint_field(&mut group_inner, 1, 7);
    let mut nested = Vec::new();
    encode::string_field(&mut nested, 2, "nested");
    encode::group_field(&mut group_inner, 3, &nested);
    encode::group_field(&mut op, 12, &group_inner);
    encode::fixed32_field(&mut op, 13, 0xcafe_f00d);
    encode::string_field(&mut op, 5, "Squares the input.");

    let mut registry = Vec::new();
    encode::bytes_field(&mut registry, 1, &op);

    let decoded = decode_registry(&registry).expect("decode with unknowns");
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, "Square");
    assert_eq!(decoded[0].summary, "Squares the input.");
}

#[test]
fn unknown_top_level_fields_are_skipped() {
    let mut registry = Vec::new();
    encode::varint_field(&mut registry, 2, 99);
    encode::bytes_field(&mut registry, 3, b"not an op");
    encode::bytes_field(&mut registry, 1, &encode::op_def(&OpDef::named("Neg")));
    let decoded = decode_registry(&registry).expect("decode");
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, "Neg");
}

#[test]
fn unknown_fields_inside_arg_messages_are_skipped() {
    let mut arg = Vec::new();
    encode::string_field(&mut arg, 1, "x");
    encode::varint_field(&mut arg, 2, 1); // description-ish unknown
    encode::string_field(&mut arg, 4, "T");
    encode::bytes_field(&mut arg, 7, b"unknown trailer");

    let mut op = Vec::new();
    encode::string_field(&mut op, 1, "Abs");
    encode::bytes_field(&mut op, 2, &arg);
    let mut registry = Vec::new();
    encode::bytes_field(&mut registry, 1, &op);

    let decoded = decode_registry(&registry).expect("decode");
    assert_eq!(decoded[0].input_args.len(), 1);
    assert_eq!(decoded[0].input_args[0].name, "x");
    assert_eq!(decoded[0].input_args[0].type_attr.as_deref(), Some("T"));
}

#[test]
fn literal_type_codes_and_variadic_markers_survive_decoding() {
    let arg = ArgDef {
        name: "values".to_string(),
        arg_type: Some(3),
        number_attr: Some("N".to_string()),
        type_list_attr: Some("Ts".to_string()),
        ..Default::default()
    };
    let op = OpDef {
        name: "Pack".to_string(),
        input_args: vec![arg.clone()],
        ..Default::default()
    };
    let bytes = encode::registry(&[op]);
    let decoded = decode_registry(&bytes).expect("decode");
    assert_eq!(decoded[0].input_args[0], arg);
}

#[test]
fn invalid_wire_type_is_rejected() {
    // field 2, wire type 6
    let bytes = [(2u8 << 3) | 6];
    assert_eq!(decode_registry(&bytes), Err(DecodeError::InvalidWireType(6)));
}

#[test]
fn length_running_past_the_buffer_is_truncated() {
    let mut bytes = Vec::new();
    encode::tag(&mut bytes, 1, 2);
    encode::varint(&mut bytes, 100);
    bytes.extend_from_slice(b"short");
    assert_eq!(decode_registry(&bytes), Err(DecodeError::Truncated));
}

#[test]
fn fixed_width_skip_past_the_buffer_is_truncated() {
    let mut bytes = Vec::new();
    encode::tag(&mut bytes, 7, 1);
    bytes.extend_from_slice(&[0u8; 4]); // 4 of the 8 fixed bytes
    assert_eq!(decode_registry(&bytes), Err(DecodeError::Truncated));
}

#[test]
fn unterminated_group_is_truncated() {
    let mut bytes = Vec::new();
    encode::tag(&mut bytes, 6, 3);
    encode::varint_field(&mut bytes, 1, 5);
    // no matching end-group tag
    assert_eq!(decode_registry(&bytes), Err(DecodeError::Truncated));
}

#[test]
fn non_utf8_name_is_rejected() {
    let mut op = Vec::new();
    encode::bytes_field(&mut op, 1, &[0xff, 0xfe, 0xfd]);
    let mut registry = Vec::new();
    encode::bytes_field(&mut registry, 1, &op);
    assert_eq!(decode_registry(&registry), Err(DecodeError::InvalidUtf8));
}
