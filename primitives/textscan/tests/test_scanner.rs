use textscan::{find_top_level_blocks, match_brace, top_level_field};

#[test]
fn braces_inside_quoted_values_do_not_move_block_boundaries() {
    let text = r#"op { name: "a{b}c" }"#;
    let blocks = find_top_level_blocks(text, "op");
    assert_eq!(blocks.len(), 1);
    assert_eq!(&text[blocks[0].clone()], r#" name: "a{b}c" "#);
}

#[test]
fn escaped_quotes_do_not_end_the_string_early() {
    let text = r#"op { summary: "a\"b}c" }"#;
    let blocks = find_top_level_blocks(text, "op");
    assert_eq!(blocks.len(), 1);
    assert_eq!(&text[blocks[0].clone()], r#" summary: "a\"b}c" "#);
}

#[test]
fn multiple_top_level_blocks_are_found_in_order() {
    let text = "op {\n  name: \"Add\"\n}\nop {\n  name: \"Mul\"\n}\n";
    let blocks = find_top_level_blocks(text, "op");
    assert_eq!(blocks.len(), 2);
    assert!(text[blocks[0].clone()].contains("Add"));
    assert!(text[blocks[1].clone()].contains("Mul"));
}

#[test]
fn nested_blocks_stay_inside_their_enclosing_range() {
    let text = "op {\n  endpoint { name: \"math.add\" }\n  endpoint { name: \"add\" }\n}\n";
    let blocks = find_top_level_blocks(text, "op");
    assert_eq!(blocks.len(), 1);
    let inner = &text[blocks[0].clone()];
    let endpoints = find_top_level_blocks(inner, "endpoint");
    assert_eq!(endpoints.len(), 2);
    assert_eq!(&inner[endpoints[0].clone()], " name: \"math.add\" ");
}

#[test]
fn a_block_nested_under_another_label_is_not_top_level() {
    let text = "wrapper {\n  op { name: \"Hidden\" }\n}\n";
    assert!(find_top_level_blocks(text, "op").is_empty());
}

#[test]
fn colon_and_tight_brace_forms_are_accepted() {
    assert_eq!(find_top_level_blocks("op: { a: \"1\" }", "op").len(), 1);
    assert_eq!(find_top_level_blocks("op:{ a: \"1\" }", "op").len(), 1);
    assert_eq!(find_top_level_blocks("op{ a: \"1\" }", "op").len(), 1);
}

#[test]
fn label_must_sit_on_a_token_boundary() {
    assert!(find_top_level_blocks("crop { a: \"1\" }", "op").is_empty());
    assert!(find_top_level_blocks("ops { a: \"1\" }", "op").is_empty());
}

#[test]
fn unmatched_block_at_end_of_text_is_dropped_silently() {
    let text = "op { a: \"1\" }\nop { b: \"2\"";
    let blocks = find_top_level_blocks(text, "op");
    assert_eq!(blocks.len(), 1);
    assert_eq!(&text[blocks[0].clone()], " a: \"1\" ");
}

#[test]
fn match_brace_tracks_depth_and_quotes() {
    let text = r#"{ a { b: "}" } }"#;
    assert_eq!(match_brace(text, 0), Some(text.len() - 1));
    assert_eq!(match_brace(text, 4), Some(13));
}

#[test]
fn match_brace_requires_an_opening_brace() {
    assert_eq!(match_brace("abc", 0), None);
    assert_eq!(match_brace("{ unterminated", 0), None);
}

#[test]
fn top_level_field_reads_the_first_occurrence() {
    let block = " name: \"AddV2\"\n name: \"Shadowed\"\n";
    assert_eq!(top_level_field(block, "name").as_deref(), Some("AddV2"));
}

#[test]
fn top_level_field_does_not_leak_out_of_nested_blocks() {
    let block = " graph_op_name: \"Add\"\n endpoint { name: \"math.add\" }\n";
    assert_eq!(top_level_field(block, "name"), None);
    assert_eq!(top_level_field(block, "graph_op_name").as_deref(), Some("Add"));
}

#[test]
fn top_level_field_keeps_escapes_verbatim() {
    let block = r#" summary: "says \"hi\"." "#;
    assert_eq!(top_level_field(block, "summary").as_deref(), Some(r#"says \"hi\"."#));
}

#[test]
fn top_level_field_ignores_keys_inside_string_values() {
    let block = r#" summary: "name: \"fake\"" name: "Real" "#;
    assert_eq!(top_level_field(block, "name").as_deref(), Some("Real"));
}

#[test]
fn unterminated_value_reads_as_absent() {
    let block = " name: \"Oops";
    assert_eq!(top_level_field(block, "name"), None);
}
