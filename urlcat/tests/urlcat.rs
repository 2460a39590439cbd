use rstest::rstest;
use serde::Serialize;
use urlcat::{
    configure, join, params, path_and_query, query, subst, urlcat, urlcat_with, ArrayFormat,
    Config, Error, Format, Params, Value,
};

#[rstest]
#[case("https://api.example.com", "/users/:id", params! { "id" => 42, "search" => "foo" }, "https://api.example.com/users/42?search=foo")]
#[case("https://api.example.com/", "/users", params! {}, "https://api.example.com/users")]
#[case("https://api.example.com/", "users", params! {}, "https://api.example.com/users")]
#[case("https://example.com", "/posts/:title", params! { "title" => "VR & AR" }, "https://example.com/posts/VR%20%26%20AR")]
#[case("https://example.com", "/", params! { "q" => "a" }, "https://example.com/?q=a")]
fn builds_full_urls(
    #[case] base: &str,
    #[case] template: &str,
    #[case] params: Params,
    #[case] expected: &str,
) {
    assert_eq!(urlcat(base, template, &params).unwrap(), expected);
}

#[test]
fn no_base_url_overload() {
    let url = path_and_query("/users/:id/posts/:postId", &params! { "id" => 42, "postId" => 36 });
    assert_eq!(url.unwrap(), "/users/42/posts/36");
}

#[test]
fn all_empty_elides_to_empty_string() {
    assert_eq!(urlcat("", "", &params! {}).unwrap(), "");
}

#[test]
fn consumed_keys_never_reach_the_query() {
    let url = urlcat(
        "https://api.example.com",
        "/users/:id",
        &params! { "id" => 42, "id2" => 7 },
    );
    assert_eq!(url.unwrap(), "https://api.example.com/users/42?id2=7");
}

#[test]
fn null_keys_never_reach_the_query() {
    let url = urlcat(
        "https://api.example.com",
        "/users",
        &params! { "search" => "foo", "page" => Value::Null },
    );
    assert_eq!(url.unwrap(), "https://api.example.com/users?search=foo");
}

#[test]
fn query_strips_null_values() {
    let q = query(&params! { "id" => 42, "tags" => Value::Null }, &Config::new());
    assert_eq!(q, "id=42");
}

#[test]
fn insertion_order_preserved_in_query() {
    let url = urlcat(
        "https://api.example.com",
        "/search",
        &params! { "z" => 1, "a" => 2, "m" => 3 },
    );
    assert_eq!(url.unwrap(), "https://api.example.com/search?z=1&a=2&m=3");
}

#[rstest]
#[case(ArrayFormat::Indices, "/x?a%5B0%5D=1&a%5B1%5D=2")]
#[case(ArrayFormat::Brackets, "/x?a%5B%5D=1&a%5B%5D=2")]
#[case(ArrayFormat::Repeat, "/x?a=1&a=2")]
#[case(ArrayFormat::Comma, "/x?a=1%2C2")]
fn array_formats(#[case] format: ArrayFormat, #[case] expected: &str) {
    let config = Config::new().array_format(format);
    let url = urlcat::path_and_query_with("/x", &params! { "a" => vec![1, 2] }, &config);
    assert_eq!(url.unwrap(), expected);
}

#[test]
fn configured_preset_equals_explicit_config() {
    let config = Config::new().array_format(ArrayFormat::Brackets);
    let bag = params! { "a" => vec![1, 2] };

    let preset = configure(config).path_and_query("/x", &bag).unwrap();
    let direct = urlcat::path_and_query_with("/x", &bag, &config).unwrap();

    assert_eq!(preset, direct);
}

#[test]
fn per_call_config_overrides_preset_field_by_field() {
    let preset = configure(
        Config::new()
            .array_format(ArrayFormat::Brackets)
            .object_format(Format::Rfc3986),
    );

    // array format overridden, object format inherited from the root
    let url = preset
        .path_and_query_with(
            "/x",
            &params! { "a" => vec!["b c"] },
            &Config::new().array_format(ArrayFormat::Repeat),
        )
        .unwrap();

    assert_eq!(url, "/x?a=b%20c");
}

#[test]
fn preset_is_reusable() {
    let api = configure(Config::new());

    assert_eq!(
        api.urlcat("https://x.com", "/a/:id", &params! { "id" => 1 })
            .unwrap(),
        "https://x.com/a/1"
    );
    assert_eq!(
        api.urlcat("https://x.com", "/b/:id", &params! { "id" => 2 })
            .unwrap(),
        "https://x.com/b/2"
    );
}

#[test]
fn rfc1738_is_the_default_space_encoding() {
    let url = urlcat(
        "https://api.example.com",
        "/search",
        &params! { "q" => "hello world" },
    );
    assert_eq!(url.unwrap(), "https://api.example.com/search?q=hello+world");
}

#[test]
fn rfc3986_space_encoding_opt_in() {
    let url = urlcat_with(
        "https://api.example.com",
        "/search",
        &params! { "q" => "hello world" },
        &Config::new().object_format(Format::Rfc3986),
    );
    assert_eq!(url.unwrap(), "https://api.example.com/search?q=hello%20world");
}

#[rstest]
#[case("first/", "/", "/second", "first/second")]
#[case("first", "/", "second", "first/second")]
#[case("", "/", "x", "x")]
#[case("x", "/", "", "x")]
fn join_cases(#[case] a: &str, #[case] sep: &str, #[case] b: &str, #[case] expected: &str) {
    assert_eq!(join(a, sep, b), expected);
}

#[test]
fn subst_missing_param() {
    assert_eq!(
        subst("/users/:id", &params! {}),
        Err(Error::MissingParam("id".to_owned()))
    );
}

#[test]
fn subst_empty_string_param() {
    assert_eq!(
        subst("/x/:id", &params! { "id" => "" }),
        Err(Error::EmptyStringParam("id".to_owned()))
    );
}

#[test]
fn error_messages_name_the_offender() {
    let err = subst("/x/:id", &params! { "id" => vec![1] }).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("id"));
    assert!(msg.contains("array"));
}

#[derive(Serialize)]
struct SearchQuery {
    search: &'static str,
    page: Option<u32>,
}

#[test]
fn derived_structs_as_parameter_bags() {
    let bag = Params::from_serialize(&SearchQuery {
        search: "foo",
        page: None,
    })
    .unwrap();

    let url = urlcat("https://api.example.com", "/users", &bag);
    // the None page serializes as null and is stripped
    assert_eq!(url.unwrap(), "https://api.example.com/users?search=foo");
}

#[test]
fn nested_bags_flatten_into_bracketed_keys() {
    let url = urlcat(
        "https://api.example.com",
        "/books",
        &params! { "filter" => params! { "author" => "poe" } },
    );
    assert_eq!(
        url.unwrap(),
        "https://api.example.com/books?filter%5Bauthor%5D=poe"
    );
}
