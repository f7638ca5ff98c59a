//! Token Normalization
//!
//! Pure string transforms that turn user-supplied names into fragments that
//! are safe to concatenate into logical identifiers. Nothing here knows about
//! resource categories.
//!
//! Separators are translated into words (`-` becomes `Dash`) rather than
//! dropped, so `hello-world` and `helloworld` never normalize to the same id.

/// Word substituted for a separator character, if `c` is one
fn separator_word(c: char) -> Option<&'static str> {
    match c {
        '-' => Some("Dash"),
        '_' => Some("Underscore"),
        '.' => Some("Period"),
        '/' => Some("Slash"),
        _ => None,
    }
}

/// Append `c` translated: separators become words, alphanumerics are kept,
/// everything else is dropped.
fn push_translated(out: &mut String, c: char) {
    if let Some(word) = separator_word(c) {
        out.push_str(word);
    } else if c.is_ascii_alphanumeric() {
        out.push(c);
    }
}

/// Capitalize the first character, leaving the rest untouched.
///
/// ```
/// use slsname::naming::normalize_name;
///
/// assert_eq!(normalize_name("name"), "Name");
/// assert_eq!(normalize_name("nAME"), "NAME");
/// ```
pub fn normalize_name(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip everything outside `[A-Za-z0-9]`, then capitalize the first character.
pub fn normalize_alpha_numeric(token: &str) -> String {
    let stripped: String = token.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    normalize_name(&stripped)
}

/// First character uppercase, the rest lowercase (`gET` -> `Get`).
pub fn normalize_method_name(method: &str) -> String {
    let mut chars = method.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Split on non-alphanumeric runs and capitalize every word.
///
/// `application/json` -> `ApplicationJson`, `/aws/lambda/test` -> `AwsLambdaTest`.
pub fn normalize_words(token: &str) -> String {
    token
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(normalize_name)
        .collect()
}

/// Normalize a function-like name: separators become words, other
/// non-alphanumerics are dropped, the first character is capitalized.
///
/// Also used for authorizer, layer, API key and usage plan names.
pub fn normalize_function_name(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for c in token.chars() {
        push_translated(&mut out, c);
    }
    normalize_name(&out)
}

/// Normalize a websockets route key. `$` becomes `S`; no case change.
///
/// `$connect` -> `Sconnect`, `foo/bar` -> `fooSlashbar`.
pub fn normalize_route_key(route: &str) -> String {
    let mut out = String::with_capacity(route.len());
    for c in route.chars() {
        if c == '$' {
            out.push('S');
        } else {
            push_translated(&mut out, c);
        }
    }
    out
}

/// Normalize a single path segment.
///
/// The segment is lowercased after its first character, separators become
/// words, and every `{name}` / `${name}` interpolation becomes `nameVar` in
/// place. The result is capitalized.
///
/// ```
/// use slsname::naming::normalize_path_part;
///
/// assert_eq!(normalize_path_part("a-path"), "ADashpath");
/// assert_eq!(normalize_path_part("${variable}Path"), "VariableVarpath");
/// assert_eq!(normalize_path_part("path${variable}"), "PathvariableVar");
/// ```
pub fn normalize_path_part(segment: &str) -> String {
    let chars: Vec<char> = normalize_method_name(segment).chars().collect();
    let mut out = String::with_capacity(segment.len() + 8);

    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '{' {
            if let Some(len) = chars[i + 1..].iter().position(|&c| c == '}') {
                for &c in &chars[i + 1..i + 1 + len] {
                    push_translated(&mut out, c);
                }
                out.push_str("Var");
                i += len + 2;
                continue;
            }
        }
        push_translated(&mut out, chars[i]);
        i += 1;
    }

    normalize_name(&out)
}

/// Normalize a full `/`-separated path into one alphanumeric token.
///
/// ```
/// use slsname::naming::normalize_path;
///
/// assert_eq!(
///     normalize_path("my/path/to/a-${var}-resource"),
///     "MyPathToADashvarVarDashresource"
/// );
/// ```
pub fn normalize_path(path: &str) -> String {
    path.split('/').map(normalize_path_part).collect()
}
