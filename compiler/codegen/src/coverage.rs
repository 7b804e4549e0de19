//! Coverage reporting over the emitted wrapper files.
//!
//! The report deliberately scans the generated source text instead of
//! trusting plan arity: snapshot-only registries carry no slot metadata, so
//! the files on disk are the only ground truth for what was emitted.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path as FsPath;

use ir::{Group, PlanRecord};
use regex::Regex;

use crate::utils::rust_fn_name;
use crate::wrappers::WRAPPER_FILE_NAME;
use crate::{Result, ALWAYS_EMIT_OPS, EMIT_GROUPS};

/// File name of the coverage report inside the output directory.
pub const COVERAGE_FILE_NAME: &str = "OP_COVERAGE.md";

/// Most skipped-example names listed in the report.
const MAX_SKIPPED_EXAMPLES: usize = 16;

#[derive(Debug, Default, Clone, Copy)]
struct Counts {
    unary: usize,
    binary: usize,
}

/// Emit the coverage report for `plan` against the files under `out_dir`.
pub fn emit_coverage(
    plan: &[PlanRecord],
    out_dir: &FsPath,
    report_path: &FsPath,
    verbose: bool,
) -> Result<()> {
    // Selection rules must mirror the wrapper emitter. The predicate is
    // restated here instead of shared: if the selection rule changes, this
    // report and the emitter must change together.
    let selected: Vec<&PlanRecord> = plan
        .iter()
        .filter(|r| {
            EMIT_GROUPS.contains(&r.group) || ALWAYS_EMIT_OPS.contains(&r.op_name.as_str())
        })
        .collect();

    let mut total = Counts::default();
    let mut per_group: Vec<(Group, Counts)> = Vec::new();
    let mut emitted_names: HashSet<String> = HashSet::new();
    let fn_name_re = Regex::new(r"\bfn\s+([A-Za-z_][A-Za-z0-9_]*)\s*<")?;

    for group in Group::ALL {
        let file_path = out_dir.join(group.dir_name()).join(WRAPPER_FILE_NAME);
        if !file_path.exists() {
            continue;
        }
        let text = std::fs::read_to_string(&file_path)?;
        let counts = scan_signatures(&text);
        total.unary += counts.unary;
        total.binary += counts.binary;
        per_group.push((group, counts));
        for captures in fn_name_re.captures_iter(&text) {
            if let Some(name) = captures.get(1) {
                emitted_names.insert(name.as_str().to_string());
            }
        }
    }

    let emitted = total.unary + total.binary;
    let not_selected = plan.len() - selected.len();
    let skipped = selected.len().saturating_sub(emitted);

    let mut missing: Vec<&str> = selected
        .iter()
        .filter(|r| !emitted_names.contains(&rust_fn_name(&r.canonical_name)))
        .map(|r| r.canonical_name.as_str())
        .collect();
    missing.sort_unstable();
    missing.dedup();
    missing.truncate(MAX_SKIPPED_EXAMPLES);

    let mut md = String::new();
    writeln!(md, "# opgen — Wrapper Coverage")?;
    writeln!(md)?;
    writeln!(md, "- **Total registry ops**: {}", plan.len())?;
    writeln!(md, "- **Selected for wrappers**: {}", selected.len())?;
    writeln!(md, "  - Emitted unary: {}", total.unary)?;
    writeln!(md, "  - Emitted binary: {}", total.binary)?;
    writeln!(md, "- **Not selected**: {}", not_selected)?;
    writeln!(md)?;
    writeln!(md, "## Emitted by group")?;
    for group in Group::ALL {
        let counts = per_group
            .iter()
            .find(|(g, _)| *g == group)
            .map_or(Counts::default(), |(_, c)| *c);
        writeln!(
            md,
            "- {}: {} (unary {}, binary {})",
            group,
            counts.unary + counts.binary,
            counts.unary,
            counts.binary
        )?;
    }
    writeln!(md)?;
    writeln!(md, "## Skipped (selected but not emitted)")?;
    writeln!(md, "- Count: {}", skipped)?;
    if !missing.is_empty() {
        writeln!(md, "- Examples: {}", missing.join(", "))?;
    }

    path::write_atomic(report_path, &md)?;
    if verbose {
        logging::trace("CODEGEN", &format!("coverage -> {}", report_path.display()));
    }
    Ok(())
}

/// Count unary and binary wrapper signatures in one generated file.
fn scan_signatures(text: &str) -> Counts {
    let mut counts = Counts::default();
    for line in text.lines() {
        if !line.contains("pub fn ") || !line.contains("Tensor<") {
            continue;
        }
        if line.contains(", y: &Tensor<") {
            counts.binary += 1;
        } else if line.contains("x: &Tensor<") {
            counts.unary += 1;
        }
    }
    counts
}
