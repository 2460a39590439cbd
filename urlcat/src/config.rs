use qs::{ArrayFormat, Format, Options};

/// Optional settings for query string serialization.
///
/// Unset fields fall back to the defaults of the layer that consumes them:
/// `object_format` resolves to [`Format::Rfc1738`] at query time, an unset
/// `array_format` lets the serializer apply its own default
/// ([`ArrayFormat::Indices`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub array_format: Option<ArrayFormat>,
    pub object_format: Option<Format>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn array_format(mut self, format: ArrayFormat) -> Self {
        self.array_format = Some(format);
        self
    }

    pub fn object_format(mut self, format: Format) -> Self {
        self.object_format = Some(format);
        self
    }

    /// Shallow merge: each field of `overrides` that is explicitly set wins
    /// over the corresponding field of `self`.
    pub fn merged_with(&self, overrides: &Config) -> Config {
        Config {
            array_format: overrides.array_format.or(self.array_format),
            object_format: overrides.object_format.or(self.object_format),
        }
    }

    /// Resolve into the serializer's options, applying this layer's
    /// RFC1738 default.
    pub(crate) fn resolve(&self) -> Options {
        Options {
            format: self.object_format.unwrap_or(Format::Rfc1738),
            array_format: self.array_format.unwrap_or_default(),
        }
    }
}
