//! Lexical feature rules.
//!
//! Pure string heuristics over the literal URL and its decomposed parts; no
//! network access. The rules live in one declarative table of
//! `(feature name, extraction rule)` pairs so that adding or removing a
//! feature is a data change, not a control-flow change, and so the assembler
//! can emit them in a single ordered pass.

use crate::brands::BrandList;
use crate::features::record::FeatureValue;
use crate::url_parts::UrlParts;

/// Read-only inputs shared by every lexical rule.
pub(crate) struct LexicalContext<'a> {
    /// The decomposed URL under inspection.
    pub parts: &'a UrlParts,
    /// The immutable known-brand set.
    pub brands: &'a BrandList,
}

/// One extraction rule: deterministic count, ratio, or 0/1 indicator.
pub(crate) type LexicalRule = fn(&LexicalContext) -> FeatureValue;

fn int(v: i64) -> FeatureValue {
    FeatureValue::Int(v)
}

fn flag(v: bool) -> FeatureValue {
    FeatureValue::Int(v as i64)
}

fn count(haystack: &str, needle: &str) -> FeatureValue {
    FeatureValue::Int(haystack.matches(needle).count() as i64)
}

fn count_lower(haystack: &str, needle: &str) -> FeatureValue {
    FeatureValue::Int(haystack.to_lowercase().matches(needle).count() as i64)
}

fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Digit count over character count; 0.0 when the string is empty. An empty
/// host would otherwise divide by zero, and 0.0 is the documented fallback.
fn digit_ratio(text: &str) -> FeatureValue {
    let chars = text.chars().count();
    if chars == 0 {
        return FeatureValue::Float(0.0);
    }
    FeatureValue::Float(digit_count(text) as f64 / chars as f64)
}

/// Dot-split label count of the subdomain string. An empty subdomain splits
/// into one empty label, so the minimum is 1.
fn subdomain_label_count(parts: &UrlParts) -> i64 {
    parts.subdomain.split('.').count() as i64
}

/// The lexical feature table, in schema order.
///
/// Substring counts are non-overlapping; lengths are character counts over
/// the literal URL. Brand matching lowercases the subdomain/path before
/// comparing against the lowercase brand list, so mixed-case impersonation
/// does not evade the check.
pub(crate) const LEXICAL_FEATURES: &[(&str, LexicalRule)] = &[
    ("length_of_url", |c| int(c.parts.raw.chars().count() as i64)),
    ("length_of_hostname", |c| {
        int(c.parts.host.chars().count() as i64)
    }),
    ("ip_address", |c| flag(c.parts.host_is_ip())),
    ("num_dots", |c| count(&c.parts.raw, ".")),
    ("num_hyphens", |c| count(&c.parts.raw, "-")),
    ("num_at_symbols", |c| count(&c.parts.raw, "@")),
    ("num_question_marks", |c| count(&c.parts.raw, "?")),
    ("num_ampersands", |c| count(&c.parts.raw, "&")),
    ("num_or_keywords", |c| count_lower(&c.parts.raw, " or ")),
    ("num_equals", |c| count(&c.parts.raw, "=")),
    ("num_underscores", |c| count(&c.parts.raw, "_")),
    ("num_tildes", |c| count(&c.parts.raw, "~")),
    ("num_percent_signs", |c| count(&c.parts.raw, "%")),
    ("num_slashes", |c| count(&c.parts.raw, "/")),
    ("num_asterisks", |c| count(&c.parts.raw, "*")),
    ("num_colons", |c| count(&c.parts.raw, ":")),
    ("num_commas", |c| count(&c.parts.raw, ",")),
    ("num_semicolons", |c| count(&c.parts.raw, ";")),
    ("num_dollar_signs", |c| count(&c.parts.raw, "$")),
    ("num_spaces", |c| count(&c.parts.raw, " ")),
    ("num_www", |c| count_lower(&c.parts.raw, "www")),
    ("num_dot_com", |c| count_lower(&c.parts.raw, ".com")),
    ("num_double_slashes", |c| count(&c.parts.raw, "//")),
    ("http_in_path", |c| {
        flag(c.parts.path.to_lowercase().contains("http"))
    }),
    ("https_token", |c| {
        flag(c.parts.raw.to_lowercase().contains("https"))
    }),
    ("digit_ratio_url", |c| digit_ratio(&c.parts.raw)),
    ("digit_ratio_hostname", |c| digit_ratio(&c.parts.host)),
    ("punycode", |c| {
        flag(c.parts.raw.to_lowercase().contains("xn--"))
    }),
    ("nonstandard_port", |c| flag(c.parts.port.is_some())),
    // An empty suffix would trivially match any path/subdomain, so these
    // indicators require a real suffix.
    ("tld_in_path", |c| {
        flag(!c.parts.suffix.is_empty() && c.parts.path.contains(&c.parts.suffix))
    }),
    ("tld_in_subdomain", |c| {
        flag(!c.parts.suffix.is_empty() && c.parts.subdomain.contains(&c.parts.suffix))
    }),
    ("abnormal_subdomain", |c| {
        flag(subdomain_label_count(c.parts) > 2)
    }),
    ("num_subdomains", |c| int(subdomain_label_count(c.parts))),
    ("prefix_suffix", |c| flag(c.parts.host.contains('-'))),
    ("domain_in_brand", |c| {
        flag(c.brands.contains(&c.parts.domain_label))
    }),
    ("brand_in_subdomain", |c| {
        flag(c.brands.any_substring_of(&c.parts.subdomain))
    }),
    ("brand_in_path", |c| flag(c.brands.any_substring_of(&c.parts.path))),
];
