//! Category Registry - Load identifier layouts from JSON
//!
//! This module loads the layout of every resource category from embedded
//! JSON files and provides lookup functions for the synthesizer and the
//! recognizer.

use super::category::Category;
use super::normalize;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded layout JSON files (compiled into the binary)
const LAYOUT_FILES: &[&str] = &[
    include_str!("../resources/stack.json"),
    include_str!("../resources/lambda.json"),
    include_str!("../resources/apigateway.json"),
    include_str!("../resources/websockets.json"),
    include_str!("../resources/events.json"),
    include_str!("../resources/custom.json"),
];

/// How a caller token is turned into an identifier fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    FunctionName,
    AlphaNumeric,
    Path,
    Method,
    Words,
    RouteKey,
}

impl Normalizer {
    pub fn apply(self, token: &str) -> String {
        match self {
            Normalizer::FunctionName => normalize::normalize_function_name(token),
            Normalizer::AlphaNumeric => normalize::normalize_alpha_numeric(token),
            Normalizer::Path => normalize::normalize_path(token),
            Normalizer::Method => {
                let stripped: String = token.chars().filter(char::is_ascii_alphanumeric).collect();
                normalize::normalize_method_name(&stripped)
            }
            Normalizer::Words => normalize::normalize_words(token),
            Normalizer::RouteKey => normalize::normalize_route_key(token),
        }
    }
}

/// One piece of an identifier layout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Fixed text, copied verbatim
    Literal(String),
    /// Caller token at `slot`, normalized
    Token {
        #[serde(default)]
        slot: usize,
        normalizer: Normalizer,
    },
    /// Caller index as decimal, or `default` when none is given
    Index {
        #[serde(default)]
        default: Option<u64>,
    },
}

/// Which end of the identifier carries the fixed text used for recognition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Prefix,
    Suffix,
}

/// Category definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDef {
    pub description: String,
    /// Labels for the token slots, in slot order (for help output)
    #[serde(default)]
    pub tokens: Vec<String>,
    pub layout: Vec<Segment>,
    #[serde(default)]
    pub anchor: Option<Anchor>,
}

impl CategoryDef {
    /// Whether the layout takes an index
    pub fn is_indexed(&self) -> bool {
        self.layout
            .iter()
            .any(|s| matches!(s, Segment::Index { .. }))
    }

    /// Leading literal, if the layout starts with one
    pub fn prefix(&self) -> Option<&str> {
        match self.layout.first() {
            Some(Segment::Literal(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Trailing literal, skipping over trailing index segments
    pub fn suffix(&self) -> Option<&str> {
        let mut segments = self
            .layout
            .iter()
            .rev()
            .skip_while(|s| matches!(s, Segment::Index { .. }));
        match segments.next() {
            Some(Segment::Literal(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Whether an index follows the trailing literal
    pub fn has_trailing_index(&self) -> bool {
        matches!(self.layout.last(), Some(Segment::Index { .. }))
    }
}

/// Root structure of resources/*.json
#[derive(Debug, Clone, Deserialize)]
struct LayoutFile {
    #[serde(default)]
    categories: HashMap<String, CategoryDef>,
}

/// Loaded registry, keyed by category
#[derive(Debug)]
pub struct CategoryRegistry {
    pub categories: HashMap<Category, CategoryDef>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<CategoryRegistry> = OnceLock::new();

/// Get the category registry (loads from embedded JSON on first access)
pub fn get_registry() -> &'static CategoryRegistry {
    REGISTRY.get_or_init(|| {
        let mut categories = HashMap::new();

        for content in LAYOUT_FILES {
            let partial: LayoutFile = serde_json::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse embedded layout JSON: {}", e));
            for (key, def) in partial.categories {
                let category: Category = key
                    .parse()
                    .unwrap_or_else(|e| panic!("Embedded layout JSON: {}", e));
                categories.insert(category, def);
            }
        }

        tracing::debug!("Loaded {} category layouts", categories.len());
        CategoryRegistry { categories }
    })
}

/// Get a category definition
///
/// Every `Category` variant is registered; a missing entry is a bug in the
/// embedded layout files.
pub fn get_category(category: Category) -> &'static CategoryDef {
    get_registry()
        .categories
        .get(&category)
        .unwrap_or_else(|| panic!("No layout registered for category {}", category))
}

/// All categories with a recognition anchor
pub fn anchored_categories() -> impl Iterator<Item = (Category, &'static CategoryDef, Anchor)> {
    Category::ALL.iter().filter_map(|&category| {
        let def = get_category(category);
        def.anchor.map(|anchor| (category, def, anchor))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads_successfully() {
        let registry = get_registry();
        assert!(
            !registry.categories.is_empty(),
            "Registry should have categories"
        );
    }

    #[test]
    fn test_every_category_is_registered() {
        for category in Category::ALL {
            assert!(
                get_registry().categories.contains_key(category),
                "Missing layout for {}",
                category
            );
        }
        assert_eq!(get_registry().categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_lambda_function_layout() {
        let def = get_category(Category::LambdaFunction);
        assert_eq!(def.tokens, vec!["function".to_string()]);
        assert_eq!(def.suffix(), Some("LambdaFunction"));
        assert_eq!(def.prefix(), None);
        assert_eq!(def.anchor, Some(Anchor::Suffix));
        assert!(!def.is_indexed());
    }

    #[test]
    fn test_schedule_rule_suffix_skips_index() {
        let def = get_category(Category::ScheduleRule);
        assert_eq!(def.suffix(), Some("EventsRuleSchedule"));
        assert!(def.has_trailing_index());
    }

    #[test]
    fn test_anchors_have_matching_literal() {
        for (category, def, anchor) in anchored_categories() {
            let literal = match anchor {
                Anchor::Prefix => def.prefix(),
                Anchor::Suffix => def.suffix(),
            };
            assert!(
                literal.is_some(),
                "{} is anchored on {:?} but has no literal there",
                category,
                anchor
            );
        }
    }

    #[test]
    fn test_token_labels_cover_every_slot() {
        for category in Category::ALL {
            let def = get_category(*category);
            for segment in &def.layout {
                if let Segment::Token { slot, .. } = segment {
                    assert!(
                        *slot < def.tokens.len(),
                        "{} uses slot {} without a label",
                        category,
                        slot
                    );
                }
            }
        }
    }

    #[test]
    fn test_normalizer_apply() {
        assert_eq!(Normalizer::FunctionName.apply("a-b"), "ADashb");
        assert_eq!(Normalizer::AlphaNumeric.apply("a-b"), "Ab");
        assert_eq!(Normalizer::Path.apply("a/b"), "AB");
        assert_eq!(Normalizer::Method.apply("gET"), "Get");
        assert_eq!(Normalizer::Method.apply("x-amz"), "Xamz");
        assert_eq!(Normalizer::Words.apply("a/b"), "AB");
        assert_eq!(Normalizer::RouteKey.apply("$default"), "Sdefault");
    }
}
