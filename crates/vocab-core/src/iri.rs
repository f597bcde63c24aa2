//! Bare references to entities that are not inlined.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::IriError;

/// An absolute IRI, kept verbatim.
///
/// The `url` crate validates the reference but its normalised form is never
/// written back, so `http://example.com` stays `http://example.com` on output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Iri {
    raw: String,
    url: Url,
}

impl Iri {
    /// Parses an absolute reference. Relative references are rejected.
    pub fn parse(input: &str) -> Result<Self, IriError> {
        let url = Url::parse(input).map_err(|_| IriError::NotAbsolute(input.to_owned()))?;

        Ok(Self {
            raw: input.to_owned(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed (normalised) form, for callers that want to dereference it.
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let url = Url::parse(&value).map_err(|_| IriError::NotAbsolute(value.clone()))?;
        Ok(Self { raw: value, url })
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.raw
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
