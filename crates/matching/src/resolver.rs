//! Manufacturer resolution from listing titles.

use regex::Regex;

use listmatch_core::pattern::compile_case_insensitive;
use listmatch_core::{MatchError, PatternMode};

#[derive(Debug, Clone)]
struct ManufacturerPattern {
    name: String,
    regex: Regex,
}

/// Precompiled prefix patterns for a fixed set of manufacturer names.
///
/// A name that does not compile is reported once at construction and then never
/// matches; it does not stop resolution for the remaining names.
#[derive(Debug, Clone, Default)]
pub struct ManufacturerResolver {
    patterns: Vec<ManufacturerPattern>,
    rejected: Vec<MatchError>,
}

impl ManufacturerResolver {
    pub fn new<I, S>(names: I, mode: PatternMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolver = Self::default();
        for name in names {
            let name = name.as_ref();
            let expression = format!("^(?:{})", mode.fragment(name));
            match compile_case_insensitive(&expression, name) {
                Ok(regex) => resolver.patterns.push(ManufacturerPattern {
                    name: name.to_string(),
                    regex,
                }),
                Err(err) => {
                    tracing::warn!(
                        manufacturer = name,
                        error = %err,
                        "manufacturer name excluded from resolution"
                    );
                    resolver.rejected.push(err);
                }
            }
        }
        resolver
    }

    /// The single manufacturer whose name prefixes `title`, ignoring case.
    ///
    /// Returns `None` when no name matches and also when two or more do.
    pub fn resolve(&self, title: &str) -> Option<&str> {
        let mut hits = self.patterns.iter().filter(|p| p.regex.is_match(title));
        match (hits.next(), hits.next()) {
            (Some(only), None) => Some(only.name.as_str()),
            _ => None,
        }
    }

    /// Every manufacturer name that prefixes `title`, in construction order.
    pub fn candidates<'s>(&'s self, title: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.patterns
            .iter()
            .filter(move |p| p.regex.is_match(title))
            .map(|p| p.name.as_str())
    }

    /// Names that failed to compile.
    pub fn rejected(&self) -> &[MatchError] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// One-shot resolution against `manufacturer_names`.
pub fn resolve<S: AsRef<str>>(
    manufacturer_names: &[S],
    listing_title: &str,
    mode: PatternMode,
) -> Option<String> {
    ManufacturerResolver::new(manufacturer_names, mode)
        .resolve(listing_title)
        .map(str::to_string)
}
