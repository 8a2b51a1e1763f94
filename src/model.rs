// defaults shared by the CLI and library callers
pub const DEFAULT_SUFFIX: &str = ".service";
pub const DEFAULT_SHIM: &str = "/usr/libexec/initware/runrcng";
pub const DEFAULT_MAX_LINE_LEN: usize = 2048;

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One rc.d script as seen through its directive comments.
///
/// `name` and `src_path` are set by the caller; the three name lists are
/// filled in by `parser::parse_rcscript`. A list is `None` when the script
/// carries no line for that keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub name: String,
    /// path to the original rc script
    pub src_path: String,
    /// All entries of the PROVIDE line. The first one is usually the same
    /// as `name`, which never gets an alias link.
    pub provides: Option<Vec<String>>,
    pub requires: Option<Vec<String>>,
    pub before: Option<Vec<String>>,
}

impl ServiceDescriptor {
    pub fn new(name: impl Into<String>, src_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src_path: src_path.into(),
            ..Self::default()
        }
    }

    pub fn provides(&self) -> &[String] {
        self.provides.as_deref().unwrap_or_default()
    }

    pub fn requires(&self) -> &[String] {
        self.requires.as_deref().unwrap_or_default()
    }

    pub fn before(&self) -> &[String] {
        self.before.as_deref().unwrap_or_default()
    }
}

/// What to do with a header line longer than `EmitOptions::max_line_len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinePolicy {
    #[default]
    Truncate,
    Reject,
}

/// Knobs for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Appended to every service name that refers to a unit.
    pub suffix: String,
    /// Compatibility shim that actually runs the rc script.
    pub shim: String,
    pub max_line_len: usize,
    pub line_policy: LinePolicy,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            shim: DEFAULT_SHIM.to_string(),
            max_line_len: DEFAULT_MAX_LINE_LEN,
            line_policy: LinePolicy::Truncate,
        }
    }
}

impl EmitOptions {
    /// `<name><suffix>`
    pub fn unit_name(&self, name: &str) -> String {
        format!("{name}{}", self.suffix)
    }
}

// ─────────────────────────────────────────────────────
// Emission results
// ─────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// `<before>.wants/<name>` – pulls this unit in when `<before>` starts.
    Wants,
    /// `<provide>` – an additional name for this unit.
    Alias,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum LinkOutcome {
    Created,
    AlreadyPresent,
    SkippedSelfAlias,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub kind: LinkKind,
    pub link: PathBuf,
    pub target: PathBuf,
    pub outcome: LinkOutcome,
}

/// Everything a conversion wrote, plus the links that did not make it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub service: String,
    pub unit_path: PathBuf,
    pub links: Vec<LinkRecord>,
}

impl EmitReport {
    pub fn warnings(&self) -> impl Iterator<Item = &LinkRecord> {
        self.links
            .iter()
            .filter(|l| matches!(l.outcome, LinkOutcome::Failed(_)))
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}

impl fmt::Display for EmitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "unit  {}", self.unit_path.display())?;
        for l in &self.links {
            let kind = match l.kind {
                LinkKind::Wants => "wants",
                LinkKind::Alias => "alias",
            };
            let outcome = match &l.outcome {
                LinkOutcome::Created => "created".to_string(),
                LinkOutcome::AlreadyPresent => "already present".to_string(),
                LinkOutcome::SkippedSelfAlias => "skipped, default name".to_string(),
                LinkOutcome::Failed(msg) => format!("FAILED: {msg}"),
            };
            writeln!(
                f,
                "{kind} {} -> {} ({outcome})",
                l.link.display(),
                l.target.display()
            )?;
        }
        Ok(())
    }
}
