//! Recognition and extraction
//!
//! Anchored patterns built from the registry layouts. A prefix category
//! matches any id starting with its leading literal; a suffix category
//! matches any id ending with its trailing literal (plus index digits when
//! the layout ends in an index).

use super::category::Category;
use super::registry::{anchored_categories, Anchor, CategoryDef};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Compiled patterns, keyed by category
static PATTERNS: OnceLock<HashMap<Category, Regex>> = OnceLock::new();

/// Pattern for one anchored layout. The `token` group captures everything
/// that is not the anchor (and, for suffixes, not the index).
fn build_pattern(def: &CategoryDef, anchor: Anchor) -> Option<String> {
    match anchor {
        Anchor::Prefix => {
            let prefix = def.prefix()?;
            Some(format!(r"(?s)^{}(?P<token>.*)$", regex::escape(prefix)))
        }
        Anchor::Suffix => {
            let suffix = def.suffix()?;
            let digits = if def.has_trailing_index() { "[0-9]*" } else { "" };
            Some(format!(
                r"(?s)^(?P<token>.*?){}{}$",
                regex::escape(suffix),
                digits
            ))
        }
    }
}

fn patterns() -> &'static HashMap<Category, Regex> {
    PATTERNS.get_or_init(|| {
        let mut patterns = HashMap::new();
        for (category, def, anchor) in anchored_categories() {
            let Some(pattern) = build_pattern(def, anchor) else {
                tracing::warn!("{} is anchored on {:?} without a literal", category, anchor);
                continue;
            };
            let regex = Regex::new(&pattern)
                .unwrap_or_else(|e| panic!("Invalid pattern for {}: {}", category, e));
            patterns.insert(category, regex);
        }
        tracing::debug!("Compiled {} recognition patterns", patterns.len());
        patterns
    })
}

/// Recognition pattern of `category`, if the category is anchored
pub fn category_regex(category: Category) -> Option<&'static Regex> {
    patterns().get(&category)
}

fn anchored(category: Category) -> &'static Regex {
    category_regex(category)
        .unwrap_or_else(|| panic!("Category {} has no recognition anchor", category))
}

/// Matches ids starting with `ServiceEndpoint`
pub fn service_endpoint_regex() -> &'static Regex {
    anchored(Category::ServiceEndpoint)
}

/// Matches ids ending with `LambdaFunction`
pub fn lambda_logical_id_regex() -> &'static Regex {
    anchored(Category::LambdaFunction)
}

/// Matches ids starting with `ApiGatewayApiKey`
pub fn api_key_logical_id_regex() -> &'static Regex {
    anchored(Category::ApiGatewayApiKey)
}

/// Matches ids starting with `ApiGatewayResource`
pub fn api_gateway_resource_regex() -> &'static Regex {
    anchored(Category::ApiGatewayResource)
}

/// Every anchored category whose pattern matches `id`, in declaration order
pub fn classify(id: &str) -> Vec<Category> {
    Category::ALL
        .iter()
        .copied()
        .filter(|category| category_regex(*category).is_some_and(|re| re.is_match(id)))
        .collect()
}

/// Strip the anchor of `category` from `id` and return what is left.
///
/// Returns `id` unchanged when the category has no anchor or `id` does not
/// match it; pre-filter with [`category_regex`] when that matters.
pub fn extract_token(category: Category, id: &str) -> &str {
    let Some(captures) = category_regex(category).and_then(|re| re.captures(id)) else {
        tracing::trace!("{} does not carry the {} anchor", id, category);
        return id;
    };
    captures.name("token").map_or(id, |m| m.as_str())
}

/// Normalized path embedded in an `ApiGatewayResource...` id
pub fn extract_resource_id(resource_logical_id: &str) -> &str {
    extract_token(Category::ApiGatewayResource, resource_logical_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_endpoint_regex() {
        let re = service_endpoint_regex();
        assert!(re.is_match("ServiceEndpoint"));
        assert!(!re.is_match("NotThePrefixServiceEndpoint"));
        assert!(re.is_match("ServiceEndpointForAService"));
    }

    #[test]
    fn test_lambda_logical_id_regex() {
        let re = lambda_logical_id_regex();
        assert!(re.is_match("LambdaFunction"));
        assert!(!re.is_match("LambdaFunctionNotTheSuffix"));
        assert!(re.is_match("AFunctionNameLambdaFunction"));
    }

    #[test]
    fn test_api_key_logical_id_regex() {
        let re = api_key_logical_id_regex();
        assert!(re.is_match("ApiGatewayApiKey"));
        assert!(!re.is_match("NotThePrefixApiGatewayApiKey"));
        assert!(re.is_match("ApiGatewayApiKeySuffix"));
    }

    #[test]
    fn test_indexed_suffix_accepts_digits_only_after_anchor() {
        let re = category_regex(Category::ScheduleRule).unwrap();
        assert!(re.is_match("FnEventsRuleSchedule0"));
        assert!(re.is_match("FnEventsRuleSchedule12"));
        assert!(!re.is_match("FnEventsRuleScheduleX"));
    }

    #[test]
    fn test_unindexed_suffix_rejects_trailing_digits() {
        assert!(!lambda_logical_id_regex().is_match("FnLambdaFunction1"));
    }

    #[test]
    fn test_unanchored_category_has_no_regex() {
        assert!(category_regex(Category::S3Permission).is_none());
    }

    #[test]
    fn test_extract_resource_id() {
        assert_eq!(
            extract_resource_id("ApiGatewayResourceMyPathToADashvarVarDashResource"),
            "MyPathToADashvarVarDashResource"
        );
    }

    #[test]
    fn test_extract_resource_id_without_prefix_returns_input() {
        assert_eq!(extract_resource_id("SomethingElse"), "SomethingElse");
    }

    #[test]
    fn test_extract_token_from_suffix_with_index() {
        assert_eq!(
            extract_token(Category::CustomS3Resource, "MyDashfunctionCustomS31"),
            "MyDashfunction"
        );
        assert_eq!(
            extract_token(Category::ScheduleRule, "Fn1EventsRuleSchedule0"),
            "Fn1"
        );
    }

    #[test]
    fn test_extract_token_unanchored_returns_input() {
        assert_eq!(
            extract_token(Category::S3Permission, "FnLambdaPermissionBucketS3"),
            "FnLambdaPermissionBucketS3"
        );
    }

    #[test]
    fn test_classify() {
        let categories = classify("HelloLambdaFunction");
        assert_eq!(categories, vec![Category::LambdaFunction]);

        let categories = classify("ApiGatewayUsagePlanKeyFree1");
        assert!(categories.contains(&Category::ApiGatewayUsagePlan));
        assert!(categories.contains(&Category::ApiGatewayUsagePlanKey));

        assert!(classify("Unrelated").is_empty());
    }
}
