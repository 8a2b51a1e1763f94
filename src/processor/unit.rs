//! Render a `ServiceDescriptor` into unit file text.

use crate::model::{EmitOptions, ServiceDescriptor};

pub const HEADER: &str = "# Automatically generated by the InitWare Mewburn RC Script Converter";
pub const DOCUMENTATION: &str = "man:iw_rcng(8)";

/// Build the complete unit file, trailing blank line included.
pub fn render_unit(svc: &ServiceDescriptor, opts: &EmitOptions) -> String {
    let mut out = String::new();

    out.push_str(HEADER);
    out.push_str("\n\n");

    // ── [Unit] ─────────────────────────────────────────────────────────
    out.push_str("[Unit]\n");
    out.push_str(&format!("Documentation={DOCUMENTATION}\n"));
    out.push_str(&format!("SourcePath={}\n", svc.src_path));

    let requires = svc.requires();
    if !requires.is_empty() {
        // rc.d REQUIRE is only an ordering hint, so Requires= becomes Wants=
        out.push_str("Wants=");
        emit_name_list(&mut out, requires, Some(&opts.suffix));
        out.push('\n');
        out.push_str("After=");
        emit_name_list(&mut out, requires, None);
        out.push('\n');
    }

    let before = svc.before();
    if !before.is_empty() {
        out.push_str("Before=");
        emit_name_list(&mut out, before, Some(&opts.suffix));
        out.push('\n');
    }
    out.push('\n');

    // ── [Service] ──────────────────────────────────────────────────────
    out.push_str("[Service]\n");
    out.push_str("Type=oneshot\n");
    out.push_str("RemainAfterExit=yes\n");
    out.push_str(&format!("ExecStart={} {} start\n", opts.shim, svc.src_path));
    out.push_str(&format!("ExecStop={} {} stop\n", opts.shim, svc.src_path));
    out.push('\n');

    out
}

/// Space separated list, each entry followed by `suffix` when one is given.
/// The caller's names are left untouched.
pub fn emit_name_list(out: &mut String, names: &[String], suffix: Option<&str>) {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(name);
        if let Some(suffix) = suffix {
            out.push_str(suffix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc() -> ServiceDescriptor {
        ServiceDescriptor::new("myd", "/etc/rc.d/myd")
    }

    fn list(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_full_unit_text() {
        let mut svc = svc();
        svc.provides = list(&["myd"]);
        svc.requires = list(&["network", "mountcritlocal"]);
        svc.before = list(&["DAEMON"]);

        let text = render_unit(&svc, &EmitOptions::default());

        assert_eq!(
            text,
            "# Automatically generated by the InitWare Mewburn RC Script Converter\n\
             \n\
             [Unit]\n\
             Documentation=man:iw_rcng(8)\n\
             SourcePath=/etc/rc.d/myd\n\
             Wants=network.service mountcritlocal.service\n\
             After=network mountcritlocal\n\
             Before=DAEMON.service\n\
             \n\
             [Service]\n\
             Type=oneshot\n\
             RemainAfterExit=yes\n\
             ExecStart=/usr/libexec/initware/runrcng /etc/rc.d/myd start\n\
             ExecStop=/usr/libexec/initware/runrcng /etc/rc.d/myd stop\n\
             \n"
        );
    }

    #[test]
    fn test_absent_lists_omit_dependency_keys() {
        let text = render_unit(&svc(), &EmitOptions::default());

        assert!(!text.contains("Wants="));
        assert!(!text.contains("After="));
        assert!(!text.contains("Before="));
        assert!(text.contains("SourcePath=/etc/rc.d/myd\n\n[Service]\n"));
    }

    #[test]
    fn test_empty_lists_behave_like_absent_ones() {
        let mut svc = svc();
        svc.requires = Some(vec![]);
        svc.before = Some(vec![]);

        assert_eq!(
            render_unit(&svc, &EmitOptions::default()),
            render_unit(&self::svc(), &EmitOptions::default())
        );
    }

    #[test]
    fn test_suffix_only_on_wants_and_before() {
        let mut svc = svc();
        svc.requires = list(&["bar"]);
        svc.before = list(&["baz"]);
        let opts = EmitOptions {
            suffix: ".unit".into(),
            ..EmitOptions::default()
        };

        let text = render_unit(&svc, &opts);

        assert!(text.contains("\nWants=bar.unit\n"));
        assert!(text.contains("\nAfter=bar\n"));
        assert!(text.contains("\nBefore=baz.unit\n"));
    }

    #[test]
    fn test_name_list_does_not_mutate_input() {
        let names = vec!["a".to_string(), "b".to_string()];
        let mut out = String::new();

        emit_name_list(&mut out, &names, Some(".service"));
        out.push('|');
        emit_name_list(&mut out, &names, None);

        assert_eq!(out, "a.service b.service|a b");
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_custom_shim() {
        let opts = EmitOptions {
            shim: "/opt/iw/runrcng".into(),
            ..EmitOptions::default()
        };
        let text = render_unit(&svc(), &opts);

        assert!(text.contains("ExecStart=/opt/iw/runrcng /etc/rc.d/myd start\n"));
        assert!(text.contains("ExecStop=/opt/iw/runrcng /etc/rc.d/myd stop\n"));
    }
}
