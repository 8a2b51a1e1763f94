//! Work out which symlinks a unit needs.
//!
//! Nothing touches the filesystem here; `writer::links` carries the plan
//! out.

use std::path::{Path, PathBuf};

use crate::model::{EmitOptions, LinkKind, ServiceDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Create,
    /// PROVIDE entry equal to the service name; the unit already has it.
    SkipSelfAlias,
    /// Name would place the link outside the output directory.
    RejectName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedLink {
    pub kind: LinkKind,
    pub link: PathBuf,
    pub target: PathBuf,
    pub action: LinkAction,
}

/// Wants-links for every BEFORE entry, then aliases for every PROVIDE
/// entry, both in list order.
pub fn plan_links(
    svc: &ServiceDescriptor,
    out_dir: &Path,
    unit_path: &Path,
    opts: &EmitOptions,
) -> Vec<PlannedLink> {
    let unit_name = opts.unit_name(&svc.name);
    let mut plan = Vec::with_capacity(svc.before().len() + svc.provides().len());

    for wanted_by in svc.before() {
        plan.push(PlannedLink {
            kind: LinkKind::Wants,
            link: out_dir
                .join(format!("{}.wants", opts.unit_name(wanted_by)))
                .join(&unit_name),
            target: unit_path.to_path_buf(),
            action: check_name(wanted_by, opts),
        });
    }

    for provide in svc.provides() {
        let action = if *provide == svc.name {
            LinkAction::SkipSelfAlias
        } else {
            check_name(provide, opts)
        };
        plan.push(PlannedLink {
            kind: LinkKind::Alias,
            link: out_dir.join(opts.unit_name(provide)),
            target: unit_path.to_path_buf(),
            action,
        });
    }

    plan
}

/// A name must stay a single path component once the suffix is added.
fn check_name(name: &str, opts: &EmitOptions) -> LinkAction {
    let unit = opts.unit_name(name);
    if name.contains('/') || name.contains('\0') || unit == "." || unit == ".." {
        LinkAction::RejectName(name.to_string())
    } else {
        LinkAction::Create
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_order_and_paths() {
        let mut svc = ServiceDescriptor::new("myd", "/etc/rc.d/myd");
        svc.before = Some(vec!["DAEMON".into(), "LOGIN".into()]);
        svc.provides = Some(vec!["myd".into(), "mydaemon".into()]);
        let out = Path::new("/out");
        let unit = out.join("myd.service");

        let plan = plan_links(&svc, out, &unit, &EmitOptions::default());

        let links: Vec<_> = plan
            .iter()
            .map(|p| (p.kind, p.link.to_str().unwrap(), p.action.clone()))
            .collect();
        assert_eq!(
            links,
            vec![
                (
                    LinkKind::Wants,
                    "/out/DAEMON.service.wants/myd.service",
                    LinkAction::Create
                ),
                (
                    LinkKind::Wants,
                    "/out/LOGIN.service.wants/myd.service",
                    LinkAction::Create
                ),
                (LinkKind::Alias, "/out/myd.service", LinkAction::SkipSelfAlias),
                (LinkKind::Alias, "/out/mydaemon.service", LinkAction::Create),
            ]
        );
        assert!(plan.iter().all(|p| p.target == unit));
    }

    #[test]
    fn test_names_leaving_out_dir_are_rejected() {
        let mut svc = ServiceDescriptor::new("myd", "/etc/rc.d/myd");
        svc.before = Some(vec!["../../etc/x".into(), "DAEMON".into()]);
        svc.provides = Some(vec!["sub/alias".into(), "..".into(), "ok".into()]);
        let out = Path::new("/out");
        let bare = EmitOptions {
            suffix: String::new(),
            ..EmitOptions::default()
        };

        let plan = plan_links(&svc, out, &out.join("myd"), &bare);

        let actions: Vec<_> = plan.iter().map(|p| p.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                LinkAction::RejectName("../../etc/x".into()),
                LinkAction::Create,
                LinkAction::RejectName("sub/alias".into()),
                LinkAction::RejectName("..".into()),
                LinkAction::Create,
            ]
        );
    }

    #[test]
    fn test_no_lists_no_links() {
        let svc = ServiceDescriptor::new("myd", "myd");
        let out = Path::new("out");
        assert!(plan_links(&svc, out, &out.join("myd.service"), &EmitOptions::default()).is_empty());
    }
}
