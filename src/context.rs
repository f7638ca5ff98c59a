//! Derivation context
//!
//! The ambient values every physical name is scoped by. Callers build one
//! per deployment and pass it by reference; nothing here is ever mutated.

use serde::{Deserialize, Serialize};

/// Default deployment stage
pub const DEFAULT_STAGE: &str = "dev";

/// Default deployment region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Immutable (service, stage, region) triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context {
    pub service: String,
    pub stage: String,
    pub region: String,
}

impl Context {
    /// Build a context from anything string-like
    pub fn new(
        service: impl Into<String>,
        stage: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            stage: stage.into(),
            region: region.into(),
        }
    }
}

/// User-supplied names that replace the default compositions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overrides {
    /// Custom CloudFormation stack name
    #[serde(default)]
    pub stack_name: Option<String>,
    /// Custom REST API name
    #[serde(default)]
    pub api_name: Option<String>,
    /// Custom websockets API name
    #[serde(default)]
    pub websockets_api_name: Option<String>,
}
