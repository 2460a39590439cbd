use crate::config::Config;
use qs::Params;

/// Creates a query string from a parameter bag.
///
/// Keys with a null value are stripped first; falsy-but-present values
/// (`0`, `false`, `""`) are kept. Returns the serialized pairs with no
/// leading `?`; an empty bag yields an empty string.
///
/// ## Example
///
/// ```
/// use urlcat::{params, query, Config, Value};
///
/// let q = query(&params! { "id" => 42, "tags" => Value::Null }, &Config::default());
/// assert_eq!(q, "id=42");
/// ```
pub fn query(params: &Params, config: &Config) -> String {
    let mut clean = params.clone();
    clean.retain(|_, value| !value.is_null());

    qs::stringify(&clean, &config.resolve())
}

#[cfg(test)]
mod tests {
    use super::query;
    use crate::config::Config;
    use qs::{params, ArrayFormat, Format, Value};

    #[test]
    fn null_values_stripped() {
        let q = query(&params! { "id" => 42, "tags" => Value::Null }, &Config::new());
        assert_eq!(q, "id=42");
    }

    #[test]
    fn falsy_values_kept() {
        let q = query(
            &params! { "a" => 0, "b" => false, "c" => "" },
            &Config::new(),
        );
        assert_eq!(q, "a=0&b=false&c=");
    }

    #[test]
    fn empty_bag_yields_empty_string() {
        assert_eq!(query(&params! {}, &Config::new()), "");
        assert_eq!(query(&params! { "a" => Value::Null }, &Config::new()), "");
    }

    #[test]
    fn spaces_default_to_rfc1738() {
        let q = query(&params! { "q" => "hello world" }, &Config::new());
        assert_eq!(q, "q=hello+world");
    }

    #[test]
    fn rfc3986_opt_in() {
        let config = Config::new().object_format(Format::Rfc3986);
        let q = query(&params! { "q" => "hello world" }, &config);
        assert_eq!(q, "q=hello%20world");
    }

    #[test]
    fn unset_array_format_uses_indices() {
        let q = query(&params! { "a" => vec![1, 2] }, &Config::new());
        assert_eq!(q, "a%5B0%5D=1&a%5B1%5D=2");
    }

    #[test]
    fn array_format_passed_through() {
        let config = Config::new().array_format(ArrayFormat::Repeat);
        let q = query(&params! { "a" => vec![1, 2] }, &config);
        assert_eq!(q, "a=1&a=2");
    }
}
