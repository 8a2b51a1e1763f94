//! Create the wants and alias symlinks of a unit.
//!
//! Every link is tried independently. A link that already exists counts
//! as done; any other failure is logged and recorded, and the remaining
//! links are still attempted.

use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs as unix_fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::model::{LinkKind, LinkOutcome, LinkRecord};
use crate::processor::links::{LinkAction, PlannedLink};

pub fn emit(name: &str, plan: &[PlannedLink]) -> Vec<LinkRecord> {
    plan.iter()
        .map(|planned| LinkRecord {
            kind: planned.kind,
            link: planned.link.clone(),
            target: planned.target.clone(),
            outcome: apply(name, planned),
        })
        .collect()
}

fn apply(name: &str, planned: &PlannedLink) -> LinkOutcome {
    match &planned.action {
        LinkAction::Create => {}
        LinkAction::SkipSelfAlias => {
            info!("Not symlinking default name {}", name);
            return LinkOutcome::SkippedSelfAlias;
        }
        LinkAction::RejectName(bad) => {
            warn!(
                "Refusing to create symlink {} for name '{}': it leaves the output directory; continuing with other symlinks.",
                planned.link.display(),
                bad
            );
            return LinkOutcome::Failed(format!("invalid service name '{bad}'"));
        }
    }

    if planned.kind == LinkKind::Wants {
        ensure_parent(&planned.link);
    }

    match unix_fs::symlink(&planned.target, &planned.link) {
        Ok(()) => {
            debug!(
                "Created symlink: {} -> {}",
                planned.link.display(),
                planned.target.display()
            );
            LinkOutcome::Created
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Symlink {} already present", planned.link.display());
            LinkOutcome::AlreadyPresent
        }
        Err(e) => {
            warn!(
                "Failed to create symlink with source {} named {}: {}; continuing with other symlinks.",
                planned.target.display(),
                planned.link.display(),
                e
            );
            LinkOutcome::Failed(e.to_string())
        }
    }
}

// A failure here shows up again as the symlink's own error.
fn ensure_parent(link: &Path) {
    if let Some(parent) = link.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            debug!("Failed to create {}: {}", parent.display(), e);
        }
    }
}
