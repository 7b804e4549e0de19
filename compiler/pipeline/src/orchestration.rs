//! Pipeline orchestration for the main entry point.

use std::collections::BTreeMap;

use config::GeneratorConfig;
use endpoints::EndpointIndex;
use registry::{RegistryReader, RegistrySource};

use crate::Result;

/// Run the full generation pipeline with `cfg`.
///
/// `source` is the optional live-registry collaborator; hosts without a
/// linked runtime pass `None` and the loader recovers to the bundled
/// snapshot when the live tier is preferred.
pub fn run(cfg: &GeneratorConfig, source: Option<&dyn RegistrySource>) -> Result<()> {
    // 1) Acquire the registry (snapshot -> live-with-recovery -> bundled)
    let registry =
        registry::load(cfg.ops_snapshot.as_deref(), cfg.prefer_runtime, source, cfg.verbose)?;
    if cfg.verbose {
        logging::trace("PIPELINE", &format!("loaded {} ops", registry.op_count()));
    }

    // 2) Optionally scan curated endpoint metadata
    let index = match &cfg.api_def_dir {
        Some(dir) => {
            if cfg.verbose {
                logging::trace("PIPELINE", &format!("scanning api defs at {}", dir.display()));
            }
            let records = endpoints::scan_dir(dir)?;
            if cfg.verbose {
                logging::trace("PIPELINE", &format!("found {} api def records", records.len()));
            }
            Some(EndpointIndex::new(records))
        }
        None => None,
    };

    // 3) Build the plan, one record per op in registry order
    let plan_records = plan::build(&registry, index.as_ref());

    // 4) Write the plan document
    path::ensure_dir(&cfg.out_dir)?;
    let plan_path = cfg.out_dir.join(plan::PLAN_FILE_NAME);
    plan::write_plan(&plan_records, &plan_path)?;
    if cfg.verbose {
        logging::trace("PIPELINE", &format!("wrote plan to {}", plan_path.display()));
    }

    // 5) Emit grouped name indexes
    codegen::emit_names(&plan_records, &cfg.out_dir, cfg.verbose)?;

    // 6) Emit wrappers and the coverage report
    if cfg.emit_wrappers {
        let stats = codegen::emit_wrappers(&plan_records, &registry, &cfg.out_dir, cfg.verbose)?;
        if cfg.verbose {
            logging::trace(
                "PIPELINE",
                &format!(
                    "emitted {} unary and {} binary wrappers across {} files",
                    stats.unary, stats.binary, stats.files
                ),
            );
        }
        let report_path = cfg.out_dir.join(codegen::COVERAGE_FILE_NAME);
        codegen::emit_coverage(&plan_records, &cfg.out_dir, &report_path, cfg.verbose)?;
    }

    // 7) Done / stats
    if cfg.verbose {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &plan_records {
            *counts.entry(record.group.as_str()).or_default() += 1;
        }
        let summary: Vec<String> =
            counts.iter().map(|(group, count)| format!("{}: {}", group, count)).collect();
        logging::trace("PIPELINE", &format!("group counts: {}", summary.join(", ")));
    }

    Ok(())
}
