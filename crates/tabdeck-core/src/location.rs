//! Location codec
//!
//! Converts between the structural [`Location`] used by route parsing
//! (ordered path segments) and the native, history-style
//! [`NativeLocation`] (a single `pathname` string).
//!
//! Segment contents are never validated: any string is a valid segment.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Base used to resolve relative hrefs typed into the address bar.
const HREF_BASE: &str = "http://tabdeck.local/";

/// History-style location: the shape the navigation history stores.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeLocation {
    pub pathname: String,
    /// Query string including the leading `?`, or empty
    pub search: String,
    /// Fragment including the leading `#`, or empty
    pub hash: String,
    /// Opaque per-navigation payload
    pub state: Option<Value>,
    /// Unique key assigned by the history on push
    pub key: Option<String>,
}

/// Partial native location, produced from a [`PartialLocation`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NativeLocationDescriptor {
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
    pub state: Option<Value>,
}

/// Structural location: path split into ordered segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub paths: Vec<String>,
    pub search: String,
    pub hash: String,
    pub state: Option<Value>,
    pub key: Option<String>,
}

/// Structural location where every field is optional.
///
/// Route-to-location conversions only know about the path, so the other
/// fields are usually `None` and get filled in by the history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartialLocation {
    pub paths: Option<Vec<String>>,
    pub search: Option<String>,
    pub hash: Option<String>,
    pub state: Option<Value>,
}

impl Location {
    /// Build a location from path segments only.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Split `pathname` on `/`, dropping the leading empty segment.
    ///
    /// `""` → `[]`, `"/"` → `[""]`, `"/tabs/1"` → `["tabs", "1"]`.
    pub fn from_native(native: &NativeLocation) -> Self {
        Self {
            paths: split_pathname(&native.pathname),
            search: native.search.clone(),
            hash: native.hash.clone(),
            state: native.state.clone(),
            key: native.key.clone(),
        }
    }

    /// Rejoin the segments with a `/` prefix.
    pub fn to_native(&self) -> NativeLocation {
        NativeLocation {
            pathname: join_paths(&self.paths),
            search: self.search.clone(),
            hash: self.hash.clone(),
            state: self.state.clone(),
            key: self.key.clone(),
        }
    }

    /// Copy of this location with the first `n` segments removed.
    ///
    /// Used by parent routes to hand the remainder to a nested route.
    pub fn without_prefix(&self, n: usize) -> Self {
        Self {
            paths: self.paths.iter().skip(n).cloned().collect(),
            ..self.clone()
        }
    }
}

impl PartialLocation {
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: Some(paths.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Prepend segments to this location's path (nested route lifting).
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        let mut paths = vec![prefix.to_string()];
        paths.extend(self.paths.take().unwrap_or_default());
        self.paths = Some(paths);
        self
    }

    pub fn to_native_descriptor(&self) -> NativeLocationDescriptor {
        NativeLocationDescriptor {
            pathname: self.paths.as_deref().map(join_paths),
            search: self.search.clone(),
            hash: self.hash.clone(),
            state: self.state.clone(),
        }
    }

    /// Resolve to a full native location, filling gaps with defaults.
    pub fn to_native(&self) -> NativeLocation {
        NativeLocation::from_descriptor(self.to_native_descriptor())
    }
}

impl NativeLocation {
    /// Build a full location from a descriptor; a missing pathname is `/`.
    pub fn from_descriptor(descriptor: NativeLocationDescriptor) -> Self {
        Self {
            pathname: descriptor.pathname.unwrap_or_else(|| "/".to_string()),
            search: descriptor.search.unwrap_or_default(),
            hash: descriptor.hash.unwrap_or_default(),
            state: descriptor.state,
            key: None,
        }
    }

    /// Parse an href such as `/tabs/2?sort=asc#top`.
    pub fn parse_href(href: &str) -> Result<Self> {
        let trimmed = href.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_location(href));
        }

        let base = Url::parse(HREF_BASE).map_err(|_| Error::invalid_location(HREF_BASE))?;
        let url = base
            .join(trimmed)
            .map_err(|_| Error::invalid_location(href))?;

        Ok(Self {
            pathname: url.path().to_string(),
            search: url.query().map(|q| format!("?{}", q)).unwrap_or_default(),
            hash: url.fragment().map(|f| format!("#{}", f)).unwrap_or_default(),
            state: None,
            key: None,
        })
    }

    /// Render as an href (`pathname` + `search` + `hash`).
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

fn split_pathname(pathname: &str) -> Vec<String> {
    if pathname.is_empty() {
        return Vec::new();
    }

    let mut segments = pathname.split('/');
    if pathname.starts_with('/') {
        segments.next();
    }
    segments.map(String::from).collect()
}

fn join_paths(paths: &[String]) -> String {
    format!("/{}", paths.join("/"))
}
