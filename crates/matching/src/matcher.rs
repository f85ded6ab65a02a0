//! Product-name keyword matching and best-candidate selection.

use regex::Regex;

use listmatch_catalog::{Listing, Product};
use listmatch_core::pattern::compile_case_insensitive;
use listmatch_core::{MatchResult, PatternMode};

/// Confidence reported for every keyword match. Matching is pass/fail; there is
/// no graduated score yet.
pub const NAME_MATCH_CONFIDENCE: u8 = 80;

/// Outcome of testing one product against one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub matched: bool,
    pub confidence: u8,
}

/// Compiled keyword pattern for a single product name.
///
/// For keywords `K1..Kn` the expression is `^(K1){1}.*(K2){1}.*...(Kn){1}.*`,
/// case-insensitive. The first keyword has to open the title; each following
/// keyword may appear anywhere after the previous one.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    regex: Regex,
}

impl KeywordPattern {
    pub fn compile(product: &Product, mode: PatternMode) -> MatchResult<Self> {
        let expression = keyword_expression(&product.keywords(), mode);
        let regex = compile_case_insensitive(&expression, product.product_name())?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

fn keyword_expression(keywords: &[String], mode: PatternMode) -> String {
    let mut expression = String::from("^");
    for keyword in keywords {
        expression.push('(');
        expression.push_str(&mode.fragment(keyword));
        expression.push_str("){1}.*");
    }
    expression
}

/// Test `product`'s name keywords against `listing`'s title.
pub fn score(product: &Product, listing: &Listing, mode: PatternMode) -> MatchResult<MatchScore> {
    let pattern = KeywordPattern::compile(product, mode)?;
    Ok(MatchScore {
        matched: pattern.is_match(listing.title()),
        confidence: NAME_MATCH_CONFIDENCE,
    })
}

/// One manufacturer's products, sorted by `product_name` with patterns compiled.
///
/// Name order stands in for specificity: when several products match, the one
/// sorting last is taken as the most specific. Products whose name does not
/// compile are dropped with a warning.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<'a> {
    entries: Vec<(&'a Product, KeywordPattern)>,
}

impl<'a> CandidateSet<'a> {
    pub fn new<I>(products: I, mode: PatternMode) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut sorted: Vec<&'a Product> = products.into_iter().collect();
        // Stable: equal names keep catalog order.
        sorted.sort_by(|a, b| a.product_name().cmp(b.product_name()));

        let entries = sorted
            .into_iter()
            .filter_map(|product| match KeywordPattern::compile(product, mode) {
                Ok(pattern) => Some((product, pattern)),
                Err(err) => {
                    tracing::warn!(
                        product_name = product.product_name(),
                        error = %err,
                        "product excluded from keyword matching"
                    );
                    None
                }
            })
            .collect();

        Self { entries }
    }

    /// The last product in name order whose keywords match `listing`.
    pub fn best_match(&self, listing: &Listing) -> Option<&'a Product> {
        // Scanning from the back finds the last match first.
        self.entries
            .iter()
            .rev()
            .find(|(_, pattern)| pattern.is_match(listing.title()))
            .map(|(product, _)| *product)
    }

    /// Every matching product, in name order.
    pub fn matches(&self, listing: &Listing) -> Vec<&'a Product> {
        self.entries
            .iter()
            .filter(|(_, pattern)| pattern.is_match(listing.title()))
            .map(|(product, _)| *product)
            .collect()
    }

    pub fn products(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.entries.iter().map(|(product, _)| *product)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pick the most specific product in `products` matching `listing`, if any.
pub fn find_best<'a, I>(products: I, listing: &Listing, mode: PatternMode) -> Option<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    CandidateSet::new(products, mode).best_match(listing)
}
