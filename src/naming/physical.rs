//! Physical Name Synthesis
//!
//! Externally visible names. Literal compositions are returned as-is; names
//! with a provider length cap go through [`fit_to_cap`], which swaps in an
//! MD5 digest when the composition does not fit.

use crate::context::{Context, Overrides};
use crate::error::Error;
use md5::{Digest, Md5};
use std::fmt;
use std::str::FromStr;

/// Load balancer target group names are capped at 32 characters
pub const ALB_TARGET_GROUP_NAME_MAX: usize = 32;
/// Lambda function names are capped at 64 characters
pub const LAMBDA_FUNCTION_NAME_MAX: usize = 64;
/// Event bus rule names are capped at 64 characters
pub const EVENT_BRIDGE_RULE_NAME_MAX: usize = 64;
/// Lambda permission statement ids are capped at 100 characters
pub const STATEMENT_ID_MAX: usize = 100;

/// Hex digits of the digest kept when a readable prefix is preserved
const HASH_SUFFIX_LEN: usize = 8;

/// Lowercase hex MD5 of `input` (always 32 characters)
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", Md5::digest(input.as_bytes()))
}

/// Return `name` unchanged if it fits in `cap` bytes.
///
/// Otherwise, for caps of 32 or less, the first `cap` hex digits of the MD5
/// of `name`; for larger caps, the longest prefix of `name` followed by `-`
/// and 8 hex digits of the digest, `cap` bytes in total for ASCII input.
pub fn fit_to_cap(name: &str, cap: usize) -> String {
    if name.len() <= cap {
        return name.to_string();
    }

    let hash = md5_hex(name);
    tracing::debug!("{} exceeds {} characters, hashing", name, cap);

    if cap <= hash.len() {
        return hash[..cap].to_string();
    }

    let mut keep = cap - HASH_SUFFIX_LEN - 1;
    while !name.is_char_boundary(keep) {
        keep -= 1;
    }
    format!("{}-{}", &name[..keep], &hash[..HASH_SUFFIX_LEN])
}

/// Keep only characters accepted in function and rule names
fn sanitize(name: &str, extra: &[char]) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_' || extra.contains(c))
        .collect()
}

// =============================================================================
// Stack-level names
// =============================================================================

/// `service-stage`, unless overridden
pub fn stack_name(ctx: &Context, overrides: &Overrides) -> String {
    overrides
        .stack_name
        .clone()
        .unwrap_or_else(|| format!("{}-{}", ctx.service, ctx.stage))
}

/// `stage-service`, unless overridden
pub fn api_gateway_name(ctx: &Context, overrides: &Overrides) -> String {
    overrides
        .api_name
        .clone()
        .unwrap_or_else(|| format!("{}-{}", ctx.stage, ctx.service))
}

/// `stage-service-websockets`, unless overridden
pub fn websockets_api_name(ctx: &Context, overrides: &Overrides) -> String {
    overrides
        .websockets_api_name
        .clone()
        .unwrap_or_else(|| format!("{}-{}-websockets", ctx.stage, ctx.service))
}

/// IAM path of the execution role
pub fn role_path() -> &'static str {
    "/"
}

/// `service-stage-region-lambdaRole`
pub fn role_name(ctx: &Context) -> String {
    format!("{}-{}-{}-lambdaRole", ctx.service, ctx.stage, ctx.region)
}

/// `stage-service-lambda`
pub fn policy_name(ctx: &Context) -> String {
    format!("{}-{}-lambda", ctx.stage, ctx.service)
}

/// `/aws/lambda/<function>`
pub fn log_group_name(function_name: &str) -> String {
    format!("/aws/lambda/{function_name}")
}

/// `/aws/api-gateway/service-stage`
pub fn api_gateway_log_group_name(ctx: &Context) -> String {
    format!("/aws/api-gateway/{}-{}", ctx.service, ctx.stage)
}

/// `/aws/websocket/service-stage`
pub fn websockets_log_group_name(ctx: &Context) -> String {
    format!("/aws/websocket/{}-{}", ctx.service, ctx.stage)
}

// =============================================================================
// Capped names
// =============================================================================

/// Deployed function name: `service-stage-function`
pub fn function_name(ctx: &Context, function_name: &str) -> String {
    let name = sanitize(
        &format!("{}-{}-{}", ctx.service, ctx.stage, function_name),
        &[],
    );
    fit_to_cap(&name, LAMBDA_FUNCTION_NAME_MAX)
}

/// Target group name: MD5 of `service-function-stage`, always 32 characters
pub fn alb_target_group_name(ctx: &Context, function_name: &str) -> String {
    md5_hex(&alb_target_group_name_tag_value(ctx, function_name))
}

/// Readable companion of [`alb_target_group_name`], for tagging
pub fn alb_target_group_name_tag_value(ctx: &Context, function_name: &str) -> String {
    format!("{}-{}-{}", ctx.service, function_name, ctx.stage)
}

/// Event bus rule name: `service-stage-function-rule-index`
pub fn event_bridge_rule_name(ctx: &Context, function_name: &str, index: u64) -> String {
    let name = sanitize(
        &format!(
            "{}-{}-{}-rule-{}",
            ctx.service, ctx.stage, function_name, index
        ),
        &['.'],
    );
    fit_to_cap(&name, EVENT_BRIDGE_RULE_NAME_MAX)
}

/// Statement id scoping a function's invoke grant to one rule
pub fn event_bridge_statement_id(function_name: &str, rule_name: &str) -> String {
    let rule: String = rule_name
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ':' | '*'))
        .collect();
    fit_to_cap(&format!("{function_name}-{rule}"), STATEMENT_ID_MAX)
}

/// `arn:<partition>:lambda:<region>:<account>:function:<name>`
pub fn lambda_arn(partition: &str, region: &str, account_id: &str, function_name: &str) -> String {
    format!("arn:{partition}:lambda:{region}:{account_id}:function:{function_name}")
}

// =============================================================================
// Kind dispatch
// =============================================================================

/// Physical names that can be derived from a context and one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalKind {
    StackName,
    ApiName,
    WebsocketsApiName,
    RoleName,
    PolicyName,
    LogGroupName,
    ApiGatewayLogGroupName,
    WebsocketsLogGroupName,
    FunctionName,
    AlbTargetGroupName,
    AlbTargetGroupTag,
    EventBridgeRuleName,
    EventBridgeStatementId,
}

impl PhysicalKind {
    /// Every kind, in listing order
    pub const ALL: &'static [PhysicalKind] = &[
        PhysicalKind::StackName,
        PhysicalKind::ApiName,
        PhysicalKind::WebsocketsApiName,
        PhysicalKind::RoleName,
        PhysicalKind::PolicyName,
        PhysicalKind::LogGroupName,
        PhysicalKind::ApiGatewayLogGroupName,
        PhysicalKind::WebsocketsLogGroupName,
        PhysicalKind::FunctionName,
        PhysicalKind::AlbTargetGroupName,
        PhysicalKind::AlbTargetGroupTag,
        PhysicalKind::EventBridgeRuleName,
        PhysicalKind::EventBridgeStatementId,
    ];

    /// Kebab-case key used on the command line
    pub fn key(self) -> &'static str {
        match self {
            PhysicalKind::StackName => "stack-name",
            PhysicalKind::ApiName => "api-name",
            PhysicalKind::WebsocketsApiName => "websockets-api-name",
            PhysicalKind::RoleName => "role-name",
            PhysicalKind::PolicyName => "policy-name",
            PhysicalKind::LogGroupName => "log-group-name",
            PhysicalKind::ApiGatewayLogGroupName => "api-gateway-log-group-name",
            PhysicalKind::WebsocketsLogGroupName => "websockets-log-group-name",
            PhysicalKind::FunctionName => "function-name",
            PhysicalKind::AlbTargetGroupName => "alb-target-group-name",
            PhysicalKind::AlbTargetGroupTag => "alb-target-group-tag",
            PhysicalKind::EventBridgeRuleName => "event-bridge-rule-name",
            PhysicalKind::EventBridgeStatementId => "event-bridge-statement-id",
        }
    }

    /// Derive the name. `token` is the function name where one is needed;
    /// `index` disambiguates event bus rules.
    pub fn derive(self, ctx: &Context, overrides: &Overrides, token: &str, index: u64) -> String {
        match self {
            PhysicalKind::StackName => stack_name(ctx, overrides),
            PhysicalKind::ApiName => api_gateway_name(ctx, overrides),
            PhysicalKind::WebsocketsApiName => websockets_api_name(ctx, overrides),
            PhysicalKind::RoleName => role_name(ctx),
            PhysicalKind::PolicyName => policy_name(ctx),
            PhysicalKind::LogGroupName => log_group_name(token),
            PhysicalKind::ApiGatewayLogGroupName => api_gateway_log_group_name(ctx),
            PhysicalKind::WebsocketsLogGroupName => websockets_log_group_name(ctx),
            PhysicalKind::FunctionName => function_name(ctx, token),
            PhysicalKind::AlbTargetGroupName => alb_target_group_name(ctx, token),
            PhysicalKind::AlbTargetGroupTag => alb_target_group_name_tag_value(ctx, token),
            PhysicalKind::EventBridgeRuleName => event_bridge_rule_name(ctx, token, index),
            PhysicalKind::EventBridgeStatementId => {
                event_bridge_statement_id(token, &event_bridge_rule_name(ctx, token, index))
            }
        }
    }
}

impl fmt::Display for PhysicalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PhysicalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhysicalKind::ALL
            .iter()
            .copied()
            .find(|k| k.key() == s)
            .ok_or_else(|| Error::UnknownPhysicalKind(s.to_string()))
    }
}
