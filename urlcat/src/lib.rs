//! # `urlcat`: Friendly URL Building
//!
//! Ever concatenated a base URL, a path and a hand-rolled query string and
//! ended up with `https://api.example.com//users/?q=`? Then `urlcat` is what
//! you need.
//!
//! Build URLs from a base, a path template with `:named` placeholders and a
//! parameter bag. Parameters matched by a placeholder are substituted into
//! the path (percent-encoded), everything else becomes the query string, and
//! the fragments are joined without duplicated separators.
//!
//! ```
//! use urlcat::{params, urlcat};
//!
//! let url = urlcat(
//!     "https://api.example.com",
//!     "/users/:id",
//!     &params! { "id" => 42, "search" => "foo" },
//! );
//! assert_eq!(url.unwrap(), "https://api.example.com/users/42?search=foo");
//! ```
//!
//! ## Configuration
//!
//! Query serialization is configurable per call ([`urlcat_with`]) or through
//! a reusable preset ([`configure`]), with per-call settings overriding the
//! preset field by field:
//!
//! ```
//! use urlcat::{configure, params, ArrayFormat, Config};
//!
//! let api = configure(Config::new().array_format(ArrayFormat::Brackets));
//! let url = api.path_and_query("/posts", &params! { "tags" => vec!["a", "b"] });
//! assert_eq!(url.unwrap(), "/posts?tags%5B%5D=a&tags%5B%5D=b");
//! ```

mod config;
mod error;
mod join;
mod path;
mod query;

pub use config::Config;
pub use error::{Error, Result};
pub use join::join;
pub use path::{subst, substitute, PathResult};
pub use query::query;

pub use qs::{params, ArrayFormat, Format, Params, Value};

#[cfg(feature = "serde")]
pub use qs::to_value;

/// Builds a full URL from a base, a path template and a parameter bag,
/// using default configuration.
///
/// ## Example
///
/// ```
/// use urlcat::{params, urlcat};
///
/// let url = urlcat("https://api.example.com/", "/users/:id", &params! { "id" => 42 });
/// assert_eq!(url.unwrap(), "https://api.example.com/users/42");
/// ```
pub fn urlcat(base_url: &str, path_template: &str, params: &Params) -> Result<String> {
    urlcat_with(base_url, path_template, params, &Config::default())
}

/// [`urlcat`] with explicit query serialization settings.
pub fn urlcat_with(
    base_url: &str,
    path_template: &str,
    params: &Params,
    config: &Config,
) -> Result<String> {
    let path_and_query = path_and_query_with(path_template, params, config)?;
    Ok(join(base_url, "/", &path_and_query))
}

/// Builds a path and query string from a template and a parameter bag,
/// without a base URL.
///
/// ## Example
///
/// ```
/// use urlcat::{params, path_and_query};
///
/// let url = path_and_query("/users/:id/posts/:postId", &params! { "id" => 42, "postId" => 36 });
/// assert_eq!(url.unwrap(), "/users/42/posts/36");
/// ```
pub fn path_and_query(path_template: &str, params: &Params) -> Result<String> {
    path_and_query_with(path_template, params, &Config::default())
}

/// [`path_and_query`] with explicit query serialization settings.
pub fn path_and_query_with(
    path_template: &str,
    params: &Params,
    config: &Config,
) -> Result<String> {
    let PathResult {
        rendered_path,
        remaining,
    } = substitute(path_template, params)?;

    let rendered_query = query(&remaining, config);
    Ok(join(&rendered_path, "?", &rendered_query))
}

/// Creates a reusable, pre-configured URL builder.
///
/// The root config is captured once; each call's explicit config is merged
/// on top of it field by field.
///
/// ## Example
///
/// ```
/// use urlcat::{configure, params, ArrayFormat, Config};
///
/// let api = configure(Config::new().array_format(ArrayFormat::Comma));
/// let url = api.urlcat("https://api.example.com", "/posts", &params! { "ids" => vec![1, 2] });
/// assert_eq!(url.unwrap(), "https://api.example.com/posts?ids=1%2C2");
/// ```
pub fn configure(root: Config) -> Urlcat {
    Urlcat::new(root)
}

/// A URL builder bound to a root [`Config`].
///
/// Exposes the same operations as the free functions; `_with` variants merge
/// the per-call config over the captured root, explicitly set fields winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Urlcat {
    root: Config,
}

impl Urlcat {
    pub fn new(root: Config) -> Self {
        Self { root }
    }

    pub fn urlcat(&self, base_url: &str, path_template: &str, params: &Params) -> Result<String> {
        urlcat_with(base_url, path_template, params, &self.root)
    }

    pub fn urlcat_with(
        &self,
        base_url: &str,
        path_template: &str,
        params: &Params,
        config: &Config,
    ) -> Result<String> {
        urlcat_with(base_url, path_template, params, &self.root.merged_with(config))
    }

    pub fn path_and_query(&self, path_template: &str, params: &Params) -> Result<String> {
        path_and_query_with(path_template, params, &self.root)
    }

    pub fn path_and_query_with(
        &self,
        path_template: &str,
        params: &Params,
        config: &Config,
    ) -> Result<String> {
        path_and_query_with(path_template, params, &self.root.merged_with(config))
    }

    pub fn query(&self, params: &Params) -> String {
        query(params, &self.root)
    }
}
