//! Resource categories
//!
//! The closed set of resource kinds a logical identifier can be derived for.
//! Every category has exactly one layout in the registry; the enum only
//! names them.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A resource category with a fixed identifier layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    // Stack-level
    ServiceEndpoint,
    WebsocketsServiceEndpoint,
    IamRoleLambdaExecution,
    DeploymentBucket,
    DeploymentBucketOutput,

    // Functions and layers
    LogGroup,
    LambdaFunction,
    LambdaVersion,
    LambdaVersionOutput,
    LambdaLayer,
    LambdaLayerOutput,

    // Websockets
    WebsocketsApi,
    WebsocketsIntegration,
    WebsocketsPermission,
    WebsocketsRoute,
    WebsocketsDeployment,
    WebsocketsStage,
    WebsocketsAuthorizer,
    WebsocketsLogGroup,
    WebsocketsLogsRole,
    WebsocketsAccount,

    // REST API Gateway
    ApiGatewayDeployment,
    ApiGatewayRestApi,
    ApiGatewayAuthorizer,
    ApiGatewayResource,
    ApiGatewayMethod,
    ApiGatewayValidator,
    ApiGatewayModel,
    ApiGatewayApiKey,
    ApiGatewayUsagePlan,
    ApiGatewayUsagePlanKey,
    ApiGatewayStage,
    ApiGatewayLogGroup,
    ApiGatewayLogsRole,
    ApiGatewayAccount,
    ApiGatewayPermission,

    // Event sources
    S3Bucket,
    SnsTopic,
    ScheduleRule,
    CloudWatchEventRule,
    CloudWatchLogSubscription,
    CognitoUserPool,
    S3Permission,
    SnsPermission,
    SchedulePermission,
    CloudWatchEventPermission,
    IotTopicRule,
    IotPermission,
    AlexaSkillPermission,
    AlexaSmartHomePermission,
    SnsSubscription,
    CloudWatchLogPermission,
    CognitoUserPoolPermission,
    AlbPermission,
    SqsEventSourceMapping,
    StreamEventSourceMapping,
    AlbTargetGroup,
    AlbListenerRule,

    // Custom resources
    CustomResourcesRole,
    CustomS3Resource,
    CustomCognitoUserPoolResource,
    CustomEventBridgeResource,
    EventBridgePermission,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: &'static [Category] = &[
        Category::ServiceEndpoint,
        Category::WebsocketsServiceEndpoint,
        Category::IamRoleLambdaExecution,
        Category::DeploymentBucket,
        Category::DeploymentBucketOutput,
        Category::LogGroup,
        Category::LambdaFunction,
        Category::LambdaVersion,
        Category::LambdaVersionOutput,
        Category::LambdaLayer,
        Category::LambdaLayerOutput,
        Category::WebsocketsApi,
        Category::WebsocketsIntegration,
        Category::WebsocketsPermission,
        Category::WebsocketsRoute,
        Category::WebsocketsDeployment,
        Category::WebsocketsStage,
        Category::WebsocketsAuthorizer,
        Category::WebsocketsLogGroup,
        Category::WebsocketsLogsRole,
        Category::WebsocketsAccount,
        Category::ApiGatewayDeployment,
        Category::ApiGatewayRestApi,
        Category::ApiGatewayAuthorizer,
        Category::ApiGatewayResource,
        Category::ApiGatewayMethod,
        Category::ApiGatewayValidator,
        Category::ApiGatewayModel,
        Category::ApiGatewayApiKey,
        Category::ApiGatewayUsagePlan,
        Category::ApiGatewayUsagePlanKey,
        Category::ApiGatewayStage,
        Category::ApiGatewayLogGroup,
        Category::ApiGatewayLogsRole,
        Category::ApiGatewayAccount,
        Category::ApiGatewayPermission,
        Category::S3Bucket,
        Category::SnsTopic,
        Category::ScheduleRule,
        Category::CloudWatchEventRule,
        Category::CloudWatchLogSubscription,
        Category::CognitoUserPool,
        Category::S3Permission,
        Category::SnsPermission,
        Category::SchedulePermission,
        Category::CloudWatchEventPermission,
        Category::IotTopicRule,
        Category::IotPermission,
        Category::AlexaSkillPermission,
        Category::AlexaSmartHomePermission,
        Category::SnsSubscription,
        Category::CloudWatchLogPermission,
        Category::CognitoUserPoolPermission,
        Category::AlbPermission,
        Category::SqsEventSourceMapping,
        Category::StreamEventSourceMapping,
        Category::AlbTargetGroup,
        Category::AlbListenerRule,
        Category::CustomResourcesRole,
        Category::CustomS3Resource,
        Category::CustomCognitoUserPoolResource,
        Category::CustomEventBridgeResource,
        Category::EventBridgePermission,
    ];

    /// Registry key (kebab-case)
    pub fn key(self) -> &'static str {
        match self {
            Category::ServiceEndpoint => "service-endpoint",
            Category::WebsocketsServiceEndpoint => "websockets-service-endpoint",
            Category::IamRoleLambdaExecution => "iam-role-lambda-execution",
            Category::DeploymentBucket => "deployment-bucket",
            Category::DeploymentBucketOutput => "deployment-bucket-output",
            Category::LogGroup => "log-group",
            Category::LambdaFunction => "lambda-function",
            Category::LambdaVersion => "lambda-version",
            Category::LambdaVersionOutput => "lambda-version-output",
            Category::LambdaLayer => "lambda-layer",
            Category::LambdaLayerOutput => "lambda-layer-output",
            Category::WebsocketsApi => "websockets-api",
            Category::WebsocketsIntegration => "websockets-integration",
            Category::WebsocketsPermission => "websockets-permission",
            Category::WebsocketsRoute => "websockets-route",
            Category::WebsocketsDeployment => "websockets-deployment",
            Category::WebsocketsStage => "websockets-stage",
            Category::WebsocketsAuthorizer => "websockets-authorizer",
            Category::WebsocketsLogGroup => "websockets-log-group",
            Category::WebsocketsLogsRole => "websockets-logs-role",
            Category::WebsocketsAccount => "websockets-account",
            Category::ApiGatewayDeployment => "api-gateway-deployment",
            Category::ApiGatewayRestApi => "api-gateway-rest-api",
            Category::ApiGatewayAuthorizer => "api-gateway-authorizer",
            Category::ApiGatewayResource => "api-gateway-resource",
            Category::ApiGatewayMethod => "api-gateway-method",
            Category::ApiGatewayValidator => "api-gateway-validator",
            Category::ApiGatewayModel => "api-gateway-model",
            Category::ApiGatewayApiKey => "api-gateway-api-key",
            Category::ApiGatewayUsagePlan => "api-gateway-usage-plan",
            Category::ApiGatewayUsagePlanKey => "api-gateway-usage-plan-key",
            Category::ApiGatewayStage => "api-gateway-stage",
            Category::ApiGatewayLogGroup => "api-gateway-log-group",
            Category::ApiGatewayLogsRole => "api-gateway-logs-role",
            Category::ApiGatewayAccount => "api-gateway-account",
            Category::ApiGatewayPermission => "api-gateway-permission",
            Category::S3Bucket => "s3-bucket",
            Category::SnsTopic => "sns-topic",
            Category::ScheduleRule => "schedule-rule",
            Category::CloudWatchEventRule => "cloud-watch-event-rule",
            Category::CloudWatchLogSubscription => "cloud-watch-log-subscription",
            Category::CognitoUserPool => "cognito-user-pool",
            Category::S3Permission => "s3-permission",
            Category::SnsPermission => "sns-permission",
            Category::SchedulePermission => "schedule-permission",
            Category::CloudWatchEventPermission => "cloud-watch-event-permission",
            Category::IotTopicRule => "iot-topic-rule",
            Category::IotPermission => "iot-permission",
            Category::AlexaSkillPermission => "alexa-skill-permission",
            Category::AlexaSmartHomePermission => "alexa-smart-home-permission",
            Category::SnsSubscription => "sns-subscription",
            Category::CloudWatchLogPermission => "cloud-watch-log-permission",
            Category::CognitoUserPoolPermission => "cognito-user-pool-permission",
            Category::AlbPermission => "alb-permission",
            Category::SqsEventSourceMapping => "sqs-event-source-mapping",
            Category::StreamEventSourceMapping => "stream-event-source-mapping",
            Category::AlbTargetGroup => "alb-target-group",
            Category::AlbListenerRule => "alb-listener-rule",
            Category::CustomResourcesRole => "custom-resources-role",
            Category::CustomS3Resource => "custom-s3-resource",
            Category::CustomCognitoUserPoolResource => "custom-cognito-user-pool-resource",
            Category::CustomEventBridgeResource => "custom-event-bridge-resource",
            Category::EventBridgePermission => "event-bridge-permission",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
