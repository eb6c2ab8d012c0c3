//! Bypass-list compilation
//!
//! A list containing no `*` at all is matched through an exact,
//! case-sensitive host set. As soon as any entry contains `*`, every entry
//! (literal ones included) is folded into one case-insensitive pattern
//! anchored to the whole host.

use hashbrown::HashSet;
use regex::{Regex, RegexBuilder};

/// Character class a `*` expands to: one or more hostname characters.
pub const WILDCARD_SEGMENT: &str = "[A-Za-z0-9_.-]+?";

/// Upper bound on the compiled wildcard pattern, in bytes.
pub const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

const WILDCARD: char = '*';

/// Splits a raw bypass list on commas and trims each entry.
///
/// Empty entries are kept; they are harmless literal rules that can never
/// match a real host.
pub fn split_rules(bypass_list: &str) -> Vec<&str> {
    bypass_list.split(',').map(str::trim).collect()
}

/// Compiled form of a bypass list.
#[derive(Debug, Clone)]
pub enum CompiledBypassRule {
    /// Exact, case-sensitive host names
    Exact(HashSet<String>),
    /// Single anchored, case-insensitive pattern over all entries
    Wildcard(Regex),
}

impl CompiledBypassRule {
    /// Compiles a bypass list.
    ///
    /// # Errors
    ///
    /// Returns the regex engine's error if a wildcard list produces a pattern
    /// larger than [`PATTERN_SIZE_LIMIT`].
    pub fn try_compile(bypass_list: &str) -> Result<Self, regex::Error> {
        Self::try_compile_with_limit(bypass_list, PATTERN_SIZE_LIMIT)
    }

    /// Like [`CompiledBypassRule::try_compile`] with an explicit bound on the
    /// compiled pattern size in bytes.
    ///
    /// # Errors
    ///
    /// Returns the regex engine's error if the pattern exceeds `size_limit`.
    pub fn try_compile_with_limit(bypass_list: &str, size_limit: usize) -> Result<Self, regex::Error> {
        let rules = split_rules(bypass_list);

        if !rules.iter().any(|rule| rule.contains(WILDCARD)) {
            return Ok(Self::exact(&rules));
        }

        let alternatives: Vec<String> = rules.iter().map(|rule| wildcard_alternative(rule)).collect();
        let pattern = format!("^(?:{})$", alternatives.join("|"));

        RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map(CompiledBypassRule::Wildcard)
    }

    /// Compiles a bypass list, falling back to exact matching of the same
    /// entries if the wildcard pattern cannot be built.
    pub fn compile(bypass_list: &str) -> Self {
        Self::try_compile(bypass_list).unwrap_or_else(|e| Self::fallback(bypass_list, &e))
    }

    pub(crate) fn fallback(bypass_list: &str, error: &regex::Error) -> Self {
        tracing::warn!(
            target: "proxygate::bypass",
            error = %error,
            "Wildcard bypass pattern rejected, falling back to exact host matching"
        );
        Self::exact(&split_rules(bypass_list))
    }

    pub(crate) fn exact(rules: &[&str]) -> Self {
        CompiledBypassRule::Exact(rules.iter().map(|rule| (*rule).to_owned()).collect())
    }

    /// Whether `host` is covered by this rule, i.e. should bypass the proxy.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            CompiledBypassRule::Exact(hosts) => hosts.contains(host),
            CompiledBypassRule::Wildcard(pattern) => pattern.is_match(host),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, CompiledBypassRule::Wildcard(_))
    }

    /// The compiled pattern source, for wildcard rules.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            CompiledBypassRule::Wildcard(pattern) => Some(pattern.as_str()),
            CompiledBypassRule::Exact(_) => None,
        }
    }
}

/// Escapes a rule for literal matching, expanding each `*`.
fn wildcard_alternative(rule: &str) -> String {
    rule.split(WILDCARD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(WILDCARD_SEGMENT)
}
