//! Per-group operation-name index emission.
//!
//! Every group with plan records gets a `names.rs` of string constants, one
//! per operation, so downstream code can refer to registry names without
//! spelling them inline.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;
use std::path::Path as FsPath;

use ir::{Group, PlanRecord};

use crate::utils::const_name;
use crate::Result;

/// File name of the name index inside each group directory.
pub const NAMES_FILE_NAME: &str = "names.rs";

/// Emit the name indexes; returns the number of files written.
pub fn emit_names(plan: &[PlanRecord], out_dir: &FsPath, verbose: bool) -> Result<usize> {
    let mut per_group: HashMap<Group, Vec<&PlanRecord>> = HashMap::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in plan {
        if seen.insert(record.op_name.as_str()) {
            per_group.entry(record.group).or_default().push(record);
        }
    }

    let mut files = 0;
    for group in Group::ALL {
        let Some(records) = per_group.get(&group) else {
            continue;
        };
        let group_dir = out_dir.join(group.dir_name());
        path::ensure_dir(&group_dir)?;
        let file_path = group_dir.join(NAMES_FILE_NAME);
        path::write_atomic(&file_path, &render_names_file(group, records)?)?;
        files += 1;
        if verbose {
            logging::trace(
                "CODEGEN",
                &format!("wrote {} names to {}", records.len(), file_path.display()),
            );
        }
    }
    Ok(files)
}

fn render_names_file(group: Group, records: &[&PlanRecord]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "//! Generated operation-name constants for the `{}` group.", group)?;
    writeln!(out, "//!")?;
    writeln!(out, "//! Produced by the name-index emitter; edits will be overwritten.")?;
    for record in records {
        writeln!(out)?;
        writeln!(out, "pub const {}: &str = \"{}\";", const_name(&record.op_name), record.op_name)?;
    }
    Ok(out)
}
