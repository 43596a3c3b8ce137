//! Placeholder substitution for message patterns.
//!
//! Patterns use `{}` as positional placeholders. A placeholder preceded by a
//! single backslash is emitted literally; a doubled backslash escapes the
//! backslash itself and the placeholder is still substituted.

use serde_json::Value;

const PLACEHOLDER: &str = "{}";

/// A message pattern with `{}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessagePattern<'a>(&'a str);

impl<'a> MessagePattern<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self(pattern)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Number of substitutable placeholders (escaped ones excluded)
    pub fn placeholder_count(&self) -> usize {
        let mut count = 0;
        let mut rest = self.0;
        while let Some(idx) = rest.find(PLACEHOLDER) {
            if !is_escaped(&rest[..idx]) {
                count += 1;
            }
            rest = &rest[idx + PLACEHOLDER.len()..];
        }
        count
    }

    /// Substitute `args` into the placeholders.
    ///
    /// Surplus placeholders are kept as `{}`; surplus arguments are ignored.
    pub fn render(&self, args: &[Value]) -> String {
        let mut out = String::with_capacity(self.0.len() + args.len() * 8);
        let mut args = args.iter();
        let mut rest = self.0;

        while let Some(idx) = rest.find(PLACEHOLDER) {
            let before = &rest[..idx];
            if is_escaped(before) {
                out.push_str(&before[..before.len() - 1]);
                out.push_str(PLACEHOLDER);
            } else {
                if before.ends_with("\\\\") {
                    out.push_str(&before[..before.len() - 1]);
                } else {
                    out.push_str(before);
                }
                match args.next() {
                    Some(arg) => push_argument(&mut out, arg),
                    None => out.push_str(PLACEHOLDER),
                }
            }
            rest = &rest[idx + PLACEHOLDER.len()..];
        }

        out.push_str(rest);
        out
    }
}

fn is_escaped(before: &str) -> bool {
    before.ends_with('\\') && !before.ends_with("\\\\")
}

fn push_argument(out: &mut String, arg: &Value) {
    match arg {
        Value::String(s) => out.push_str(s),
        other => out.push_str(&other.to_string()),
    }
}

/// Render `pattern` with `args` in one call
pub fn render(pattern: &str, args: &[Value]) -> String {
    MessagePattern::new(pattern).render(args)
}
