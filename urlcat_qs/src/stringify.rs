use crate::value::{Params, Value};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

// `encodeURIComponent` equivalent: everything but A-Za-z0-9 - _ . ! ~ * ' ( )
// gets percent-encoded.
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

/// Space-encoding convention for query string values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Spaces encode as `+`.
    Rfc1738,
    /// Spaces encode as `%20`.
    #[default]
    Rfc3986,
}

/// Convention for flattening sequence values into key/value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayFormat {
    /// `a[0]=x&a[1]=y`
    #[default]
    Indices,
    /// `a[]=x&a[]=y`
    Brackets,
    /// `a=x&a=y`
    Repeat,
    /// `a=x,y` (a single pair, comma percent-encoded)
    Comma,
}

/// Resolved serialization options.
///
/// Defaults match the behavior callers get when they configure nothing at
/// this layer: RFC3986 spaces and indexed arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub format: Format,
    pub array_format: ArrayFormat,
}

/// Serialize a parameter bag into a query string.
///
/// Nested maps flatten into bracketed keys (`filter[author]=...`), sequences
/// follow [`Options::array_format`], and every key and value is
/// percent-encoded (including the brackets of generated keys). The output
/// carries no leading `?`; an empty bag yields an empty string.
///
/// ## Example
///
/// ```
/// use urlcat_qs::{params, stringify, Options};
///
/// let out = stringify(&params! { "id" => 42, "search" => "foo" }, &Options::default());
/// assert_eq!(out, "id=42&search=foo");
/// ```
pub fn stringify(params: &Params, options: &Options) -> String {
    let mut pairs = vec![];

    for (key, value) in params.iter() {
        push_pairs(&mut pairs, &encode(key, options.format), value, options);
    }

    pairs.join("&")
}

fn push_pairs(pairs: &mut Vec<String>, key: &str, value: &Value, options: &Options) {
    match value {
        Value::Null => pairs.push(format!("{key}=")),
        Value::Seq(items) => push_seq(pairs, key, items, options),
        Value::Map(map) => {
            for (child, value) in map.iter() {
                let child_key = nest_key(key, &encode(child, options.format));
                push_pairs(pairs, &child_key, value, options);
            }
        }
        scalar => {
            // remaining variants all have a scalar form
            let scalar = scalar.as_scalar().unwrap_or_default();
            pairs.push(format!("{key}={}", encode(&scalar, options.format)));
        }
    }
}

fn push_seq(pairs: &mut Vec<String>, key: &str, items: &[Value], options: &Options) {
    match options.array_format {
        ArrayFormat::Indices => {
            for (idx, item) in items.iter().enumerate() {
                push_pairs(pairs, &nest_key(key, &idx.to_string()), item, options);
            }
        }
        ArrayFormat::Brackets => {
            for item in items {
                push_pairs(pairs, &nest_key(key, ""), item, options);
            }
        }
        ArrayFormat::Repeat => {
            for item in items {
                push_pairs(pairs, key, item, options);
            }
        }
        ArrayFormat::Comma => {
            if items.is_empty() {
                return;
            }

            // Comma lists only make sense for scalar elements; anything
            // without a scalar form is skipped.
            let joined = items
                .iter()
                .filter_map(|item| item.as_scalar())
                .map(|scalar| encode(&scalar, options.format).into_owned())
                .collect::<Vec<_>>()
                .join("%2C");

            pairs.push(format!("{key}={joined}"));
        }
    }
}

fn nest_key(parent: &str, child: &str) -> String {
    format!("{parent}%5B{child}%5D")
}

fn encode(input: &str, format: Format) -> Cow<'_, str> {
    let encoded: Cow<'_, str> = utf8_percent_encode(input, COMPONENT).into();

    match format {
        Format::Rfc3986 => encoded,
        Format::Rfc1738 if !encoded.contains("%20") => encoded,
        Format::Rfc1738 => Cow::Owned(encoded.replace("%20", "+")),
    }
}
