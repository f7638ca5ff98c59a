//! Identifier derivation layer
//!
//! This module provides a data-driven approach to naming infrastructure
//! resources. Category layouts are loaded from JSON files at compile time,
//! so a new resource category is one enum variant plus one JSON entry.
//!
//! # Architecture
//!
//! - [`normalize`] - Token and path normalizers (no category knowledge)
//! - [`registry`] - Loads and caches category layouts from embedded JSON
//! - [`logical`] - Generic synthesis plus one named function per category
//! - [`physical`] - Length-bounded external names and hashed names
//! - [`recognize`] - Anchored patterns and inverse extraction
//! - [`arn`] - Convention-based ARN extractors
//!
//! # Layout Definitions
//!
//! Layouts are defined in JSON files under `src/resources/`:
//! - `stack.json` - Stack outputs, deployment bucket, execution role
//! - `lambda.json` - Functions, versions, layers, log groups
//! - `apigateway.json` - REST API resources, methods, keys, usage plans
//! - `websockets.json` - Websockets API, routes, authorizers
//! - `events.json` - Event sources and their invoke permissions
//! - `custom.json` - Custom resources
//!
//! # Example
//!
//! ```
//! use slsname::naming::{extract_token, lambda_logical_id, Category};
//!
//! let id = lambda_logical_id("hello-world");
//! assert_eq!(id, "HelloDashworldLambdaFunction");
//! assert_eq!(extract_token(Category::LambdaFunction, &id), "HelloDashworld");
//! ```

mod arn;
mod category;
pub mod logical;
pub mod normalize;
pub mod physical;
mod recognize;
pub mod registry;

pub use arn::{
    extract_authorizer_name_from_arn, extract_event_bus_name, extract_lambda_name_from_arn, Arn,
};
pub use category::Category;
pub use logical::*;
pub use normalize::{
    normalize_alpha_numeric, normalize_function_name, normalize_method_name, normalize_name,
    normalize_path, normalize_path_part, normalize_route_key, normalize_words,
};
pub use physical::PhysicalKind;
pub use recognize::{
    api_gateway_resource_regex, api_key_logical_id_regex, category_regex, classify,
    extract_resource_id, extract_token, lambda_logical_id_regex, service_endpoint_regex,
};
pub use registry::{get_category, get_registry, Anchor, CategoryDef, Normalizer, Segment};
