//! Decorator template: parsed once from the embedded text.
//!
//! The text is split into sections introduced by `-- name --` lines. Each
//! section is plain Go with `${key}` placeholders.

use std::sync::LazyLock;

const SOURCE: &str = include_str!("decorator.go.tmpl");

pub(super) static TEMPLATE: LazyLock<Template> = LazyLock::new(|| Template::parse(SOURCE));

#[derive(Debug)]
pub(super) struct Template {
    /// Header, package clause and import block
    pub(super) file: &'static str,
    /// Wrapper struct for one interface
    pub(super) interface: &'static str,
    /// Method opening a segment around the call
    pub(super) traced: &'static str,
    /// Method forwarding without a segment
    pub(super) forward: &'static str,
}

impl Template {
    fn parse(source: &'static str) -> Self {
        let sections = sections(source);
        let section = |name: &str| {
            sections
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, body)| *body)
                .unwrap_or_else(|| panic!("embedded template is missing section `{name}`"))
        };
        Self {
            file: section("file"),
            interface: section("interface"),
            traced: section("traced"),
            forward: section("forward"),
        }
    }
}

fn sections(source: &'static str) -> Vec<(&'static str, &'static str)> {
    let mut sections = Vec::new();
    let mut current: Option<(&'static str, usize)> = None;
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let header = line
            .trim_end()
            .strip_prefix("-- ")
            .and_then(|l| l.strip_suffix(" --"));
        if let Some(name) = header {
            if let Some((prev, start)) = current.take() {
                sections.push((prev, &source[start..offset]));
            }
            current = Some((name, offset + line.len()));
        }
        offset += line.len();
    }
    if let Some((prev, start)) = current {
        sections.push((prev, &source[start..]));
    }
    sections
}

/// Substitute `${key}` placeholders. Unknown keys are left in place.
pub(super) fn fill(section: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(section.len());
    let mut rest = section;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 3]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}
