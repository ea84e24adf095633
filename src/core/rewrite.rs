//! Regular-expression substitution rules for CSS files.
use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use crate::core::params::{DEFAULT_BORDER_RADIUS_VAR, DEFAULT_DARK_HOVER_VAR, RewriteRuleSpec};
use crate::error::{Error, Result};
use crate::types::RewriteRuleKind;

static CSS_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("variable pattern is valid"));

const BORDER_RADIUS_PATTERN: &str = r"border-radius:\s*[^;]+;";
const DARK_HOVER_PATTERN: &str =
    r"(body\.dark-theme\s+[^:]+:hover\s*\{\s*[^}]*?)background-color:\s*var\(--[^)]+\);";

/// A compiled pattern together with its replacement template
#[derive(Clone, Debug)]
pub struct RewriteRule {
    pub name: String,
    pattern: Regex,
    replacement: String,
}

/// Outcome of applying a rule to one text
#[derive(Debug)]
pub struct Rewritten<'a> {
    pub content: Cow<'a, str>,
    pub matches: usize,
}

impl Rewritten<'_> {
    pub fn changed(&self) -> bool {
        matches!(self.content, Cow::Owned(_))
    }
}

fn css_variable(variable: Option<&str>, default: &str) -> Result<String> {
    let name = variable.unwrap_or(default).trim_start_matches("--");
    if !CSS_VARIABLE.is_match(name) {
        return Err(Error::InvalidArgument {
            arg: "variable",
            value: name.to_string(),
        });
    }
    Ok(name.to_string())
}

impl RewriteRule {
    pub fn custom(name: impl Into<String>, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Every `border-radius` declaration becomes `border-radius: var(--<variable>);`
    pub fn border_radius(variable: Option<&str>) -> Result<Self> {
        let var = css_variable(variable, DEFAULT_BORDER_RADIUS_VAR)?;
        Ok(Self {
            name: RewriteRuleKind::BorderRadius.to_string(),
            pattern: Regex::new(BORDER_RADIUS_PATTERN)?,
            replacement: format!("border-radius: var(--{var});"),
        })
    }

    /// The first `background-color: var(--…)` inside each
    /// `body.dark-theme … :hover { … }` block points at `--<variable>`.
    pub fn dark_hover(variable: Option<&str>) -> Result<Self> {
        let var = css_variable(variable, DEFAULT_DARK_HOVER_VAR)?;
        let pattern = RegexBuilder::new(DARK_HOVER_PATTERN)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self {
            name: RewriteRuleKind::DarkHover.to_string(),
            pattern,
            replacement: format!("${{1}}background-color: var(--{var});"),
        })
    }

    pub fn builtin(kind: RewriteRuleKind, variable: Option<&str>) -> Result<Self> {
        match kind {
            RewriteRuleKind::BorderRadius => Self::border_radius(variable),
            RewriteRuleKind::DarkHover => Self::dark_hover(variable),
        }
    }

    pub fn from_spec(spec: &RewriteRuleSpec) -> Result<Self> {
        match spec {
            RewriteRuleSpec::Builtin { rule, variable } => Self::builtin(*rule, variable.as_deref()),
            RewriteRuleSpec::Custom {
                pattern,
                replacement,
            } => Self::custom("Custom", pattern, replacement.as_str()),
        }
    }

    /// Substitute every match in one scan. `content` is borrowed back when the
    /// result is byte-identical, even if the pattern matched.
    pub fn apply<'a>(&self, content: &'a str) -> Rewritten<'a> {
        let mut matches = 0;
        let replaced = self.pattern.replace_all(content, |caps: &Captures<'_>| {
            matches += 1;
            let mut dst = String::new();
            caps.expand(&self.replacement, &mut dst);
            dst
        });
        let content = match replaced {
            Cow::Owned(text) if text != content => Cow::Owned(text),
            _ => Cow::Borrowed(content),
        };
        Rewritten { content, matches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_radius_is_unified() {
        let rule = RewriteRule::border_radius(None).unwrap();
        let css = ".card { border-radius: 8px; }\n.btn{border-radius:4px 4px 0 0;}";
        let out = rule.apply(css);
        assert_eq!(out.matches, 2);
        assert!(out.changed());
        assert_eq!(
            out.content,
            ".card { border-radius: var(--border-radius-md); }\n.btn{border-radius: var(--border-radius-md);}"
        );
    }

    #[test]
    fn already_unified_file_is_unchanged() {
        let rule = RewriteRule::border_radius(None).unwrap();
        let css = "a { border-radius: var(--border-radius-md); }";
        let out = rule.apply(css);
        assert_eq!(out.matches, 1);
        assert!(!out.changed());
    }

    #[test]
    fn custom_variable_name() {
        let rule = RewriteRule::border_radius(Some("--radius-lg")).unwrap();
        let out = rule.apply("a{border-radius: 50%;}");
        assert_eq!(out.content, "a{border-radius: var(--radius-lg);}");
        assert!(RewriteRule::border_radius(Some("bad name;")).is_err());
    }

    #[test]
    fn dark_hover_spans_lines() {
        let rule = RewriteRule::dark_hover(None).unwrap();
        let css = "body.dark-theme .nav a:hover {\n    color: #fff;\n    background-color: var(--dark-accent);\n}\n\
                   body.dark-theme .nav a {\n    background-color: var(--dark-bg);\n}\n";
        let out = rule.apply(css);
        assert_eq!(out.matches, 1);
        assert_eq!(
            out.content,
            "body.dark-theme .nav a:hover {\n    color: #fff;\n    background-color: var(--dark-primary-hover-color);\n}\n\
             body.dark-theme .nav a {\n    background-color: var(--dark-bg);\n}\n"
        );
    }

    #[test]
    fn dark_hover_ignores_literal_colours_and_other_blocks() {
        let rule = RewriteRule::dark_hover(None).unwrap();
        let css = "body.dark-theme .btn:hover { background-color: #333; }\n.btn:hover { background-color: var(--x); }";
        let out = rule.apply(css);
        assert_eq!(out.matches, 0);
        assert!(!out.changed());
    }

    #[test]
    fn custom_rule_uses_groups() {
        let rule = RewriteRule::custom("Custom", r"color:\s*(\w+);", "color: var(--$1);").unwrap();
        assert_eq!(rule.apply("p{color: red;}").content, "p{color: var(--red);}");
        assert!(RewriteRule::custom("Custom", "(", "").is_err());
    }
}
