//! Property-based tests using proptest
//!
//! These tests verify determinism, charset and length invariants, and the
//! synthesize/extract round trip using randomized tokens.

use proptest::prelude::*;
use slsname::naming::{self, physical, Category};
use slsname::Context;

/// Arbitrary user-supplied token, separators and interpolations included
fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9]{0,20}",
        "[a-zA-Z0-9_.-]{1,30}",
        "[a-z]{1,8}\\$\\{[a-z]{1,8}\\}[a-z]{0,8}",
        ".{0,20}",
    ]
}

/// Arbitrary context
fn arb_context() -> impl Strategy<Value = Context> {
    (
        "[a-zA-Z][a-zA-Z0-9-]{0,30}",
        prop_oneof!["dev", "prod", "staging", "[a-z]{1,10}"],
        prop_oneof!["us-east-1", "eu-west-1", "ap-southeast-2"],
    )
        .prop_map(|(service, stage, region)| Context::new(service, stage, region))
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

proptest! {
    /// Same inputs, same id
    #[test]
    fn synthesis_is_deterministic(
        category in arb_category(),
        a in arb_token(),
        b in arb_token(),
        index in proptest::option::of(0u64..1000)
    ) {
        let first = naming::synthesize(category, &[&a, &b], index);
        let second = naming::synthesize(category, &[&a, &b], index);
        prop_assert_eq!(first, second);
    }

    /// Logical ids contain only ASCII letters and digits
    #[test]
    fn logical_ids_are_alphanumeric(
        category in arb_category(),
        a in arb_token(),
        b in arb_token(),
        c in arb_token(),
        index in proptest::option::of(0u64..1000)
    ) {
        let id = naming::synthesize(category, &[&a, &b, &c], index);
        prop_assert!(is_alphanumeric(&id), "{} produced {:?}", category, id);
    }

    /// Normalized paths contain only ASCII letters and digits
    #[test]
    fn normalized_paths_are_alphanumeric(segments in prop::collection::vec(arb_token(), 0..5)) {
        let path = segments.join("/");
        prop_assert!(is_alphanumeric(&naming::normalize_path(&path)));
    }

    /// Alphanumeric normalization never leaves a non-alphanumeric character
    #[test]
    fn alpha_numeric_normalization_strips(token in ".*") {
        let normalized = naming::normalize_alpha_numeric(&token);
        prop_assert!(is_alphanumeric(&normalized));
    }

    /// normalize_name only touches the first character
    #[test]
    fn normalize_name_preserves_tail(token in "[a-zA-Z][a-zA-Z0-9]{0,20}") {
        let normalized = naming::normalize_name(&token);
        prop_assert_eq!(&normalized[1..], &token[1..]);
        prop_assert!(normalized.chars().next().unwrap().is_ascii_uppercase()
            || normalized.chars().next().unwrap().is_ascii_digit());
    }

    /// Distinct function names give distinct function ids
    #[test]
    fn function_names_do_not_collide(a in "[a-z][a-z_.-]{0,11}", b in "[a-z][a-z_.-]{0,11}") {
        prop_assume!(a != b);
        prop_assert_ne!(naming::lambda_logical_id(&a), naming::lambda_logical_id(&b));
    }

    /// Distinct indexes give distinct ids for the same function
    #[test]
    fn indexes_do_not_collide(name in "[a-zA-Z]{1,12}", i in 0u64..10_000, j in 0u64..10_000) {
        prop_assume!(i != j);
        prop_assert_ne!(
            naming::schedule_logical_id(&name, i),
            naming::schedule_logical_id(&name, j)
        );
    }

    /// extract_resource_id recovers the normalized path
    #[test]
    fn resource_id_round_trip(segments in prop::collection::vec(arb_token(), 1..5)) {
        let path = segments.join("/");
        let id = naming::resource_logical_id(&path);
        prop_assert_eq!(naming::extract_resource_id(&id), naming::normalize_path(&path));
    }

    /// Suffix categories recover the normalized function name, index or not
    #[test]
    fn suffix_round_trip(name in arb_token(), index in 0u64..1000) {
        let normalized = naming::normalized_function_name(&name);

        let id = naming::lambda_logical_id(&name);
        prop_assert_eq!(naming::extract_token(Category::LambdaFunction, &id), normalized.as_str());

        let id = naming::custom_resource_s3_resource_logical_id(&name, index);
        prop_assert_eq!(naming::extract_token(Category::CustomS3Resource, &id), normalized.as_str());
    }

    /// Every anchored category recognizes its own ids
    #[test]
    fn categories_recognize_their_own_ids(
        category in arb_category(),
        a in arb_token(),
        b in arb_token(),
        index in 0u64..1000
    ) {
        if let Some(re) = naming::category_regex(category) {
            let id = naming::synthesize(category, &[&a, &b, "c"], Some(index));
            prop_assert!(re.is_match(&id), "{} did not recognize {}", category, id);
            prop_assert!(naming::classify(&id).contains(&category));
        }
    }

    /// Target group names are always 32 lowercase hex characters
    #[test]
    fn alb_target_group_name_is_32_hex(ctx in arb_context(), name in arb_token()) {
        let group = physical::alb_target_group_name(&ctx, &name);
        prop_assert_eq!(group.len(), physical::ALB_TARGET_GROUP_NAME_MAX);
        prop_assert!(group.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Different identity tuples give different target group names
    #[test]
    fn alb_target_group_names_differ(
        ctx in arb_context(),
        a in "[a-zA-Z0-9]{1,20}",
        b in "[a-zA-Z0-9]{1,20}"
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(
            physical::alb_target_group_name(&ctx, &a),
            physical::alb_target_group_name(&ctx, &b)
        );
    }

    /// Capped names never exceed their cap
    #[test]
    fn capped_names_fit(ctx in arb_context(), name in "[a-zA-Z0-9-]{0,120}", index in 0u64..100) {
        let function = physical::function_name(&ctx, &name);
        prop_assert!(function.len() <= physical::LAMBDA_FUNCTION_NAME_MAX);

        let rule = physical::event_bridge_rule_name(&ctx, &name, index);
        prop_assert!(rule.len() <= physical::EVENT_BRIDGE_RULE_NAME_MAX);

        let statement = physical::event_bridge_statement_id(&function, &rule);
        prop_assert!(statement.len() <= physical::STATEMENT_ID_MAX);
    }

    /// fit_to_cap is the identity on names that fit, exact length otherwise
    #[test]
    fn fit_to_cap_bounds(name in "[a-z0-9-]{0,200}", cap in 1usize..120) {
        let capped = physical::fit_to_cap(&name, cap);
        if name.len() <= cap {
            prop_assert_eq!(capped, name);
        } else {
            prop_assert_eq!(capped.len(), cap);
        }
    }

    /// Lambda name extraction returns the text after the last colon
    #[test]
    fn lambda_name_from_arn(
        region in "[a-z]{2}-[a-z]{4,9}-[0-9]",
        account in "[0-9]{12}",
        name in "[a-zA-Z0-9_-]{1,40}"
    ) {
        let arn = physical::lambda_arn("aws", &region, &account, &name);
        prop_assert_eq!(naming::extract_lambda_name_from_arn(&arn), name.as_str());
        let authorizer = naming::extract_authorizer_name_from_arn(&arn);
        prop_assert!(name.ends_with(authorizer));
        prop_assert!(!authorizer.contains('-'));
    }
}

/// Parallel callers observe identical ids
mod concurrency_tests {
    use super::*;
    use std::thread;

    #[test]
    fn parallel_derivation_is_identical() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    (
                        naming::resource_logical_id("my/path/to/a-${var}-resource"),
                        naming::schedule_logical_id("functionName", 0),
                        physical::alb_target_group_name(
                            &Context::new("myService", "dev", "us-east-1"),
                            "functionName",
                        ),
                    )
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results {
            assert_eq!(result, &results[0]);
        }
        assert_eq!(results[0].1, "FunctionNameEventsRuleSchedule0");
    }
}
