//! Name conversion helpers for generated source.

/// Convert a camelCase or PascalCase name to snake_case.
///
/// Runs of capitals stay together ("FFT2D" becomes "fft2d"); a capital after
/// a lowercase letter starts a new word ("addV2" becomes "add_v2").
pub fn to_snake_case(input: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = input.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            if let Some(prev) = chars.get(i - 1) {
                if prev.is_lowercase()
                    || (i > 1 && chars.get(i - 2).is_some_and(|p| p.is_lowercase()))
                {
                    result.push('_');
                }
            }
        }
        result.push(c.to_lowercase().next().unwrap_or(*c));
    }

    result
}

/// Rust function name for a plan record's canonical name.
pub fn rust_fn_name(canonical: &str) -> String { to_snake_case(canonical) }

/// Rust constant name for a registry operation name.
pub fn const_name(op_name: &str) -> String { to_snake_case(op_name).to_uppercase() }

/// Reduce a summary to one doc-comment-safe line.
pub fn doc_line(summary: &str) -> &str { summary.lines().next().unwrap_or("").trim() }
