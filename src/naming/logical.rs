//! Logical Identifier Synthesis
//!
//! One routine, [`synthesize`], walks a category layout from the registry.
//! The named functions below are thin wrappers that fix the category and
//! the token order for callers.

use super::category::Category;
use super::registry::{get_category, Segment};

/// Directory name the custom resource handlers are packaged under
pub const CUSTOM_RESOURCES_ARTIFACT_DIRECTORY: &str = "custom-resources";
/// Handler function attaching existing S3 buckets
pub const CUSTOM_RESOURCE_S3_HANDLER_FUNCTION_NAME: &str = "custom-resource-existing-s3";
/// Handler function attaching existing Cognito user pools
pub const CUSTOM_RESOURCE_COGNITO_USER_POOL_HANDLER_FUNCTION_NAME: &str =
    "custom-resource-existing-cup";
/// Handler function managing event bus rules
pub const CUSTOM_RESOURCE_EVENT_BRIDGE_HANDLER_FUNCTION_NAME: &str = "custom-resource-event-bridge";

/// Derive the logical identifier of `category`.
///
/// `tokens` are matched to the layout's token slots by position; a missing
/// slot contributes nothing. `index` fills index segments, falling back to
/// the layout default.
///
/// ```
/// use slsname::naming::{synthesize, Category};
///
/// assert_eq!(
///     synthesize(Category::ScheduleRule, &["functionName"], Some(0)),
///     "FunctionNameEventsRuleSchedule0"
/// );
/// ```
pub fn synthesize(category: Category, tokens: &[&str], index: Option<u64>) -> String {
    let def = get_category(category);
    let mut id = String::new();

    for segment in &def.layout {
        match segment {
            Segment::Literal(text) => id.push_str(text),
            Segment::Token { slot, normalizer } => {
                if let Some(token) = tokens.get(*slot) {
                    id.push_str(&normalizer.apply(token));
                }
            }
            Segment::Index { default } => {
                if let Some(i) = index.or(*default) {
                    id.push_str(&i.to_string());
                }
            }
        }
    }

    tracing::trace!("synthesize {} {:?} {:?} -> {}", category, tokens, index, id);
    id
}

fn one(category: Category, token: &str) -> String {
    synthesize(category, &[token], None)
}

fn fixed(category: Category) -> String {
    synthesize(category, &[], None)
}

fn indexed(category: Category, token: &str, index: u64) -> String {
    synthesize(category, &[token], Some(index))
}

// =============================================================================
// Stack
// =============================================================================

/// `ServiceEndpoint`
pub fn service_endpoint_logical_id() -> String {
    fixed(Category::ServiceEndpoint)
}

/// `ServiceEndpointWebsocket`
pub fn websockets_service_endpoint_logical_id() -> String {
    fixed(Category::WebsocketsServiceEndpoint)
}

/// `IamRoleLambdaExecution`
pub fn role_logical_id() -> String {
    fixed(Category::IamRoleLambdaExecution)
}

/// `ServerlessDeploymentBucket`
pub fn deployment_bucket_logical_id() -> String {
    fixed(Category::DeploymentBucket)
}

/// `ServerlessDeploymentBucketName`
pub fn deployment_bucket_output_logical_id() -> String {
    fixed(Category::DeploymentBucketOutput)
}

// =============================================================================
// Functions and layers
// =============================================================================

/// Normalized function name, the stem of most per-function identifiers
pub fn normalized_function_name(function_name: &str) -> String {
    super::normalize::normalize_function_name(function_name)
}

/// `<function>LogGroup`
pub fn log_group_logical_id(function_name: &str) -> String {
    one(Category::LogGroup, function_name)
}

/// `<function>LambdaFunction`
pub fn lambda_logical_id(function_name: &str) -> String {
    one(Category::LambdaFunction, function_name)
}

/// `<function>LambdaVersion<code-sha>`
pub fn lambda_version_logical_id(function_name: &str, code_sha: &str) -> String {
    synthesize(Category::LambdaVersion, &[function_name, code_sha], None)
}

/// `<function>LambdaFunctionQualifiedArn`
pub fn lambda_version_output_logical_id(function_name: &str) -> String {
    one(Category::LambdaVersionOutput, function_name)
}

/// `<layer>LambdaLayer`
pub fn lambda_layer_logical_id(layer_name: &str) -> String {
    one(Category::LambdaLayer, layer_name)
}

/// `<layer>LambdaLayerQualifiedArn`
pub fn lambda_layer_output_logical_id(layer_name: &str) -> String {
    one(Category::LambdaLayerOutput, layer_name)
}

// =============================================================================
// Websockets
// =============================================================================

/// `WebsocketsApi`
pub fn websockets_api_logical_id() -> String {
    fixed(Category::WebsocketsApi)
}

/// `<function>WebsocketsIntegration`
pub fn websockets_integration_logical_id(function_name: &str) -> String {
    one(Category::WebsocketsIntegration, function_name)
}

/// `<function>LambdaPermissionWebsockets`
pub fn lambda_websockets_permission_logical_id(function_name: &str) -> String {
    one(Category::WebsocketsPermission, function_name)
}

/// `<route>WebsocketsRoute`
pub fn websockets_route_logical_id(route: &str) -> String {
    one(Category::WebsocketsRoute, route)
}

/// `WebsocketsDeployment<index>`
pub fn websockets_deployment_logical_id(id: u64) -> String {
    synthesize(Category::WebsocketsDeployment, &[], Some(id))
}

/// `WebsocketsDeploymentStage`
pub fn websockets_stage_logical_id() -> String {
    fixed(Category::WebsocketsStage)
}

/// `<authorizer>WebsocketsAuthorizer`
pub fn websockets_authorizer_logical_id(authorizer_name: &str) -> String {
    one(Category::WebsocketsAuthorizer, authorizer_name)
}

/// `WebsocketsLogGroup`
pub fn websockets_log_group_logical_id() -> String {
    fixed(Category::WebsocketsLogGroup)
}

/// `IamRoleWebsocketsLogs`
pub fn websockets_logs_role_logical_id() -> String {
    fixed(Category::WebsocketsLogsRole)
}

/// `WebsocketsAccount`
pub fn websockets_account_logical_id() -> String {
    fixed(Category::WebsocketsAccount)
}

// =============================================================================
// REST API Gateway
// =============================================================================

/// `ApiGatewayDeployment<index>`
pub fn api_gateway_deployment_logical_id(id: u64) -> String {
    synthesize(Category::ApiGatewayDeployment, &[], Some(id))
}

/// `ApiGatewayRestApi`
pub fn rest_api_logical_id() -> String {
    fixed(Category::ApiGatewayRestApi)
}

/// `<authorizer>ApiGatewayAuthorizer`
pub fn authorizer_logical_id(authorizer_name: &str) -> String {
    one(Category::ApiGatewayAuthorizer, authorizer_name)
}

/// `ApiGatewayResource` followed by the normalized path
pub fn resource_logical_id(resource_path: &str) -> String {
    one(Category::ApiGatewayResource, resource_path)
}

/// `ApiGatewayMethod<resource-id><method>`
pub fn method_logical_id(resource_id: &str, method: &str) -> String {
    synthesize(Category::ApiGatewayMethod, &[resource_id, method], None)
}

/// `ApiGatewayMethod<resource-id><method>Validator`
pub fn validator_logical_id(resource_id: &str, method: &str) -> String {
    synthesize(Category::ApiGatewayValidator, &[resource_id, method], None)
}

/// `ApiGatewayMethod<resource-id><method><content-type>Model`
pub fn model_logical_id(resource_id: &str, method: &str, content_type: &str) -> String {
    synthesize(
        Category::ApiGatewayModel,
        &[resource_id, method, content_type],
        None,
    )
}

/// `ApiGatewayApiKey<name><index>`
///
/// Name and index are not delimited: a name ending in digits can meet a
/// shorter name with a longer index (`free1`/2 and `free`/12).
pub fn api_key_logical_id(index: u64, name: Option<&str>) -> String {
    synthesize(
        Category::ApiGatewayApiKey,
        &[name.unwrap_or_default()],
        Some(index),
    )
}

/// `ApiGatewayUsagePlan<name>`
pub fn usage_plan_logical_id(name: Option<&str>) -> String {
    synthesize(
        Category::ApiGatewayUsagePlan,
        &[name.unwrap_or_default()],
        None,
    )
}

/// `ApiGatewayUsagePlanKey<name><index>`, undelimited like [`api_key_logical_id`]
pub fn usage_plan_key_logical_id(index: u64, name: Option<&str>) -> String {
    synthesize(
        Category::ApiGatewayUsagePlanKey,
        &[name.unwrap_or_default()],
        Some(index),
    )
}

/// `ApiGatewayStage`
pub fn stage_logical_id() -> String {
    fixed(Category::ApiGatewayStage)
}

/// `ApiGatewayLogGroup`
pub fn api_gateway_log_group_logical_id() -> String {
    fixed(Category::ApiGatewayLogGroup)
}

/// `IamRoleApiGatewayLogs`
pub fn api_gateway_logs_role_logical_id() -> String {
    fixed(Category::ApiGatewayLogsRole)
}

/// `ApiGatewayAccount`
pub fn api_gateway_account_logical_id() -> String {
    fixed(Category::ApiGatewayAccount)
}

/// `<function>LambdaPermissionApiGateway`
pub fn lambda_api_gateway_permission_logical_id(function_name: &str) -> String {
    one(Category::ApiGatewayPermission, function_name)
}

// =============================================================================
// Event sources
// =============================================================================

/// `S3Bucket<bucket>`
pub fn bucket_logical_id(bucket_name: &str) -> String {
    one(Category::S3Bucket, bucket_name)
}

/// `SNSTopic<topic>`
pub fn topic_logical_id(topic_name: &str) -> String {
    one(Category::SnsTopic, topic_name)
}

/// Raw (un-normalized) schedule event id
pub fn schedule_id(function_name: &str) -> String {
    format!("{function_name}Schedule")
}

/// `<function>EventsRuleSchedule<index>`
pub fn schedule_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::ScheduleRule, function_name, index)
}

/// Raw (un-normalized) CloudWatch event id
pub fn cloud_watch_event_id(function_name: &str) -> String {
    format!("{function_name}CloudWatchEvent")
}

/// `<function>EventsRuleCloudWatchEvent<index>`
pub fn cloud_watch_event_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::CloudWatchEventRule, function_name, index)
}

/// `<function>LogsSubscriptionFilterCloudWatchLog<log-group>`
pub fn cloud_watch_log_logical_id(function_name: &str, log_group: &str) -> String {
    synthesize(
        Category::CloudWatchLogSubscription,
        &[function_name, log_group],
        None,
    )
}

/// `CognitoUserPool<pool>`
pub fn cognito_user_pool_logical_id(pool_name: &str) -> String {
    one(Category::CognitoUserPool, pool_name)
}

/// `<function>LambdaPermission<bucket>S3`
pub fn lambda_s3_permission_logical_id(function_name: &str, bucket_name: &str) -> String {
    synthesize(Category::S3Permission, &[function_name, bucket_name], None)
}

/// `<function>LambdaPermission<topic>SNS`
pub fn lambda_sns_permission_logical_id(function_name: &str, topic_name: &str) -> String {
    synthesize(Category::SnsPermission, &[function_name, topic_name], None)
}

/// `<function>LambdaPermissionEventsRuleSchedule<index>`
pub fn lambda_schedule_permission_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::SchedulePermission, function_name, index)
}

/// `<function>LambdaPermissionEventsRuleCloudWatchEvent<index>`
pub fn lambda_cloud_watch_event_permission_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::CloudWatchEventPermission, function_name, index)
}

/// `<function>IotTopicRule<index>`
pub fn iot_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::IotTopicRule, function_name, index)
}

/// `<function>LambdaPermissionIotTopicRule<index>`
pub fn lambda_iot_permission_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::IotPermission, function_name, index)
}

/// `<function>LambdaPermissionAlexaSkill<index>`; index defaults to 0
pub fn lambda_alexa_skill_permission_logical_id(function_name: &str, index: Option<u64>) -> String {
    synthesize(Category::AlexaSkillPermission, &[function_name], index)
}

/// `<function>LambdaPermissionAlexaSmartHome<index>`
pub fn lambda_alexa_smart_home_permission_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::AlexaSmartHomePermission, function_name, index)
}

/// `<function>SnsSubscription<topic>`
pub fn lambda_sns_subscription_logical_id(function_name: &str, topic_name: &str) -> String {
    synthesize(Category::SnsSubscription, &[function_name, topic_name], None)
}

/// `<function>LambdaPermissionLogsSubscriptionFilterCloudWatchLog`
pub fn lambda_cloud_watch_log_permission_logical_id(function_name: &str) -> String {
    one(Category::CloudWatchLogPermission, function_name)
}

/// `<function>LambdaPermissionCognitoUserPool<pool>TriggerSource<trigger>`
pub fn lambda_cognito_user_pool_permission_logical_id(
    function_name: &str,
    pool_name: &str,
    trigger_source: &str,
) -> String {
    synthesize(
        Category::CognitoUserPoolPermission,
        &[function_name, pool_name, trigger_source],
        None,
    )
}

/// `<function>LambdaPermissionAlb`
pub fn lambda_alb_permission_logical_id(function_name: &str) -> String {
    one(Category::AlbPermission, function_name)
}

/// `<function>EventSourceMappingSQS<queue>`
pub fn queue_logical_id(function_name: &str, queue_name: &str) -> String {
    synthesize(
        Category::SqsEventSourceMapping,
        &[function_name, queue_name],
        None,
    )
}

/// `<function>EventSourceMapping<stream-type><stream>`
///
/// `stream_type` is the event source kind, e.g. `kinesis` or `dynamodb`
pub fn stream_logical_id(function_name: &str, stream_type: &str, stream_name: &str) -> String {
    synthesize(
        Category::StreamEventSourceMapping,
        &[function_name, stream_type, stream_name],
        None,
    )
}

/// `<function>AlbTargetGroup`
pub fn alb_target_group_logical_id(function_name: &str) -> String {
    one(Category::AlbTargetGroup, function_name)
}

/// `<function>AlbListenerRule<index>`
pub fn alb_listener_rule_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::AlbListenerRule, function_name, index)
}

// =============================================================================
// Custom resources
// =============================================================================

/// `IamRoleCustomResourcesLambdaExecution`
pub fn custom_resources_role_logical_id() -> String {
    fixed(Category::CustomResourcesRole)
}

/// Function id of the S3 custom resource handler
pub fn custom_resource_s3_handler_function_logical_id() -> String {
    lambda_logical_id(CUSTOM_RESOURCE_S3_HANDLER_FUNCTION_NAME)
}

/// `<function>CustomS3<index>`
pub fn custom_resource_s3_resource_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::CustomS3Resource, function_name, index)
}

/// Function id of the Cognito user pool custom resource handler
pub fn custom_resource_cognito_user_pool_handler_function_logical_id() -> String {
    lambda_logical_id(CUSTOM_RESOURCE_COGNITO_USER_POOL_HANDLER_FUNCTION_NAME)
}

/// `<function>CustomCognitoUserPool<index>`
pub fn custom_resource_cognito_user_pool_resource_logical_id(
    function_name: &str,
    index: u64,
) -> String {
    indexed(Category::CustomCognitoUserPoolResource, function_name, index)
}

/// Function id of the event bus custom resource handler
pub fn custom_resource_event_bridge_handler_function_logical_id() -> String {
    lambda_logical_id(CUSTOM_RESOURCE_EVENT_BRIDGE_HANDLER_FUNCTION_NAME)
}

/// `<function>CustomEventBridge<index>`
pub fn custom_resource_event_bridge_resource_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::CustomEventBridgeResource, function_name, index)
}

pub fn lambda_event_bridge_permission_logical_id(function_name: &str, index: u64) -> String {
    indexed(Category::EventBridgePermission, function_name, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_missing_token_slot_is_empty() {
        assert_eq!(synthesize(Category::LambdaFunction, &[], None), "LambdaFunction");
    }

    #[test]
    fn test_synthesize_missing_index_without_default() {
        assert_eq!(
            synthesize(Category::ScheduleRule, &["fn"], None),
            "FnEventsRuleSchedule"
        );
    }

    #[test]
    fn test_synthesize_ignores_extra_tokens() {
        assert_eq!(
            synthesize(Category::LambdaFunction, &["fn", "extra"], Some(3)),
            "FnLambdaFunction"
        );
    }

    #[test]
    fn test_index_is_not_padded() {
        assert_eq!(schedule_logical_id("fn", 10), "FnEventsRuleSchedule10");
        assert_eq!(schedule_logical_id("fn", 7), "FnEventsRuleSchedule7");
    }

    #[test]
    fn test_alexa_skill_default_index() {
        assert_eq!(
            lambda_alexa_skill_permission_logical_id("functionName", None),
            "FunctionNameLambdaPermissionAlexaSkill0"
        );
        assert_eq!(
            lambda_alexa_skill_permission_logical_id("functionName", Some(2)),
            "FunctionNameLambdaPermissionAlexaSkill2"
        );
    }

    #[test]
    fn test_api_key_optional_name() {
        assert_eq!(api_key_logical_id(1, None), "ApiGatewayApiKey1");
        assert_eq!(api_key_logical_id(1, Some("free")), "ApiGatewayApiKeyFree1");
    }

    #[test]
    fn test_lambda_version_strips_sha() {
        assert_eq!(
            lambda_version_logical_id("func", "abc+/=123"),
            "FuncLambdaVersionAbc123"
        );
    }

    #[test]
    fn test_compound_key_order() {
        assert_eq!(
            model_logical_id("ResourceId", "get", "application/json"),
            "ApiGatewayMethodResourceIdGetApplicationJsonModel"
        );
        assert_ne!(
            method_logical_id("Users", "get"),
            method_logical_id("Get", "users")
        );
    }

    #[test]
    fn test_event_bridge_identifiers() {
        assert_eq!(
            custom_resource_event_bridge_handler_function_logical_id(),
            "CustomDashresourceDasheventDashbridgeLambdaFunction"
        );
        assert_eq!(
            custom_resource_event_bridge_resource_logical_id("my-function", 2),
            "MyDashfunctionCustomEventBridge2"
        );
        assert_eq!(
            lambda_event_bridge_permission_logical_id("my-function", 0),
            "MyDashfunctionLambdaPermissionEventBridge0"
        );
    }

    #[test]
    fn test_every_fixed_category_is_alphanumeric() {
        for category in Category::ALL {
            let id = synthesize(*category, &["a-b", "c_d", "e/f"], Some(1));
            assert!(
                id.chars().all(|c| c.is_ascii_alphanumeric()),
                "{} produced {}",
                category,
                id
            );
        }
    }
}
