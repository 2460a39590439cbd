use crate::error::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use qs::{Params, Value};
use std::borrow::Cow;

// `encodeURIComponent` equivalent, so `/` becomes `%2F` and a space `%20`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Outcome of substituting a template: the rendered path and a copy of the
/// parameter bag with every consumed key removed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub rendered_path: String,
    pub remaining: Params,
}

/// Substitutes `:params` in a template with values from a parameter bag.
///
/// Discards the remaining parameters; use [`substitute`] to keep them.
///
/// ## Example
///
/// ```
/// use urlcat::{params, subst};
///
/// let path = subst("/users/:id/posts/:postId", &params! { "id" => 42, "postId" => 36 });
/// assert_eq!(path.unwrap(), "/users/42/posts/36");
/// ```
pub fn subst(template: &str, params: &Params) -> Result<String> {
    substitute(template, params).map(|result| result.rendered_path)
}

/// Substitutes every `:identifier` placeholder in `template` in a single
/// left-to-right pass.
///
/// The caller's bag is never mutated; consumed keys are dropped from the
/// returned copy. A `:` not followed by an identifier-start character is a
/// literal.
pub fn substitute(template: &str, params: &Params) -> Result<PathResult> {
    let mut remaining = params.clone();
    let mut rendered_path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(':') {
        let (before, after) = rest.split_at(pos);
        rendered_path.push_str(before);

        let after = &after[1..];
        let len = placeholder_len(after);
        if len == 0 {
            rendered_path.push(':');
            rest = after;
            continue;
        }

        let key = &after[..len];
        let value = path_value(params, key)?;
        rendered_path.extend(utf8_percent_encode(&value, COMPONENT));
        remaining.remove(key);
        rest = &after[len..];
    }

    rendered_path.push_str(rest);

    Ok(PathResult {
        rendered_path,
        remaining,
    })
}

/// Length of the placeholder identifier at the start of `input`
/// (`[_A-Za-z][_A-Za-z0-9]*`), or 0 if there is none.
fn placeholder_len(input: &str) -> usize {
    let bytes = input.as_bytes();

    match bytes.first() {
        Some(&first) if is_ident_start(first) => 1 + bytes[1..]
            .iter()
            .take_while(|&&b| is_ident_start(b) || b.is_ascii_digit())
            .count(),
        _ => 0,
    }
}

fn is_ident_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn path_value<'p>(params: &'p Params, key: &str) -> Result<Cow<'p, str>> {
    let value = params
        .get(key)
        .ok_or_else(|| Error::MissingParam(key.to_owned()))?;

    match value {
        Value::String(s) if s.trim().is_empty() => Err(Error::EmptyStringParam(key.to_owned())),
        Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        Value::Int(i) => Ok(Cow::Owned(i.to_string())),
        Value::Float(f) => Ok(Cow::Owned(f.to_string())),
        Value::Bool(b) => Ok(Cow::Borrowed(if *b { "true" } else { "false" })),
        other => Err(Error::InvalidParamType {
            key: key.to_owned(),
            actual: other.type_name(),
        }),
    }
}
