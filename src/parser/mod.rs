//! Directive scanner for rc.d script headers.
//!
//! Only comment lines are looked at. Of those, the ones shaped like
//!
//! ```text
//! # PROVIDE: name ...
//! # REQUIRE: name ...
//! # BEFORE: name ...
//! ```
//!
//! fill the matching list of the `ServiceDescriptor`. Everything else in
//! the script, shell code included, is skipped.

use std::borrow::Cow;
use std::io::BufRead;
use std::path::PathBuf;

use tracing::warn;

use crate::error::{ConvertError, Result};
use crate::model::{LinePolicy, ServiceDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Provide,
    Require,
    Before,
}

impl Directive {
    pub const ALL: [Directive; 3] = [Directive::Provide, Directive::Require, Directive::Before];

    pub fn keyword(self) -> &'static str {
        match self {
            Directive::Provide => "PROVIDE:",
            Directive::Require => "REQUIRE:",
            Directive::Before => "BEFORE:",
        }
    }
}

/// Read `rcscript` to the end and fill `svc` from its directive lines.
///
/// A keyword seen twice keeps the names of its last line. On error the
/// descriptor may be half-filled and must be thrown away.
pub fn parse_rcscript<R: BufRead>(
    mut rcscript: R,
    svc: &mut ServiceDescriptor,
    max_line_len: usize,
    policy: LinePolicy,
) -> Result<()> {
    let mut buf = Vec::<u8>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rcscript
            .read_until(b'\n', &mut buf)
            .map_err(|source| ConvertError::InputRead {
                path: PathBuf::from(&svc.src_path),
                source,
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        if buf.len() > max_line_len {
            match policy {
                LinePolicy::Truncate => {
                    warn!(
                        "{} line {} is {} bytes long, truncating to {}",
                        svc.src_path,
                        line_no,
                        buf.len(),
                        max_line_len
                    );
                    buf.truncate(max_line_len);
                }
                LinePolicy::Reject => {
                    return Err(ConvertError::LineTooLong {
                        path: PathBuf::from(&svc.src_path),
                        line: line_no,
                        len: buf.len(),
                        max: max_line_len,
                    });
                }
            }
        }

        let line: Cow<'_, str> = String::from_utf8_lossy(&buf);
        if let Some((directive, names)) = parse_directive(&line) {
            match directive {
                Directive::Provide => svc.provides = Some(names),
                Directive::Require => svc.requires = Some(names),
                Directive::Before => svc.before = Some(names),
            }
        }
    }

    Ok(())
}

/// Recognise a single directive line.
///
/// The comment marker and the character right after it (normally a
/// space) are skipped, as is the character following the keyword's colon.
pub fn parse_directive(line: &str) -> Option<(Directive, Vec<String>)> {
    let body = skip_one(line.trim().strip_prefix('#')?)?;

    Directive::ALL.into_iter().find_map(|directive| {
        let rest = body.strip_prefix(directive.keyword())?;
        let names = skip_one(rest).map(split_names).unwrap_or_default();
        Some((directive, names))
    })
}

/// Split a name list into tokens, dropping empty ones.
pub fn split_names(list: &str) -> Vec<String> {
    list.split_whitespace().map(str::to_owned).collect()
}

fn skip_one(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    chars.next()?;
    Some(chars.as_str())
}
