//! ARN helpers
//!
//! Best-effort extraction of names embedded in ARNs by convention. None of
//! these validate their input; a string without the expected separators
//! comes back (mostly) unchanged.

/// The colon-delimited parts of an ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn<'a> {
    pub partition: &'a str,
    pub service: &'a str,
    pub region: &'a str,
    pub account: &'a str,
    /// Everything after the fifth colon, which may itself contain colons
    pub resource: &'a str,
}

impl<'a> Arn<'a> {
    /// Split `arn:<partition>:<service>:<region>:<account>:<resource>`.
    ///
    /// Returns `None` when the `arn` prefix or any of the six parts is missing.
    pub fn parse(input: &'a str) -> Option<Self> {
        let mut parts = input.splitn(6, ':');
        if parts.next()? != "arn" {
            return None;
        }
        Some(Self {
            partition: parts.next()?,
            service: parts.next()?,
            region: parts.next()?,
            account: parts.next()?,
            resource: parts.next()?,
        })
    }
}

/// Everything after the last `:`
///
/// ```
/// use slsname::naming::extract_lambda_name_from_arn;
///
/// assert_eq!(
///     extract_lambda_name_from_arn("arn:aws:lambda:us-east-1:0123456789:my-dev-lambda"),
///     "my-dev-lambda"
/// );
/// ```
pub fn extract_lambda_name_from_arn(arn: &str) -> &str {
    match arn.rfind(':') {
        Some(i) => &arn[i + 1..],
        None => arn,
    }
}

/// Everything after the last `-` of the function name.
///
/// Assumes the deployed name is `service-stage-name`, so a name that itself
/// contains dashes loses everything up to its last dash.
pub fn extract_authorizer_name_from_arn(arn: &str) -> &str {
    let name = extract_lambda_name_from_arn(arn);
    match name.rfind('-') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}

/// Event bus name from either a bare name or an event bus ARN
/// (`arn:aws:events:<region>:<account>:event-bus/<name>`).
pub fn extract_event_bus_name(name_or_arn: &str) -> &str {
    match Arn::parse(name_or_arn) {
        Some(arn) => match arn.resource.rfind('/') {
            Some(i) => &arn.resource[i + 1..],
            None => arn.resource,
        },
        None => name_or_arn,
    }
}
