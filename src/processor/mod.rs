//! The functional core: descriptor in, unit text and link plan out.
pub mod links;
pub mod unit;

use std::path::{Path, PathBuf};

use crate::model::{EmitOptions, ServiceDescriptor};
use links::PlannedLink;

/// Read-only result handed to `writer`.
#[derive(Debug, Clone)]
pub struct ProcessedUnit {
    pub name: String,
    pub unit_path: PathBuf,
    pub text: String,
    pub links: Vec<PlannedLink>,
}

/// Runs every translation pass for one service.
pub fn run(svc: &ServiceDescriptor, out_dir: &Path, opts: &EmitOptions) -> ProcessedUnit {
    let unit_path = out_dir.join(opts.unit_name(&svc.name));
    let text = unit::render_unit(svc, opts);
    let links = links::plan_links(svc, out_dir, &unit_path, opts);

    ProcessedUnit {
        name: svc.name.clone(),
        unit_path,
        text,
        links,
    }
}
