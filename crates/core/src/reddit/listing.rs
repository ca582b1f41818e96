//! Boundary representation of Reddit's `{ kind, data }` envelopes.
//!
//! The API returns weakly-typed JSON: every object is a "thing" tagged with a
//! `kind`, and listings nest further things under `data.children`. This module
//! only validates that envelope shape. Field values stay untyped here and are
//! coerced by the normalization layer through [`Fields`].

use serde_json::{Map, Value};

use super::error::{RedditError, Result};

pub const KIND_LISTING: &str = "Listing";
pub const KIND_COMMENT: &str = "t1";
pub const KIND_LINK: &str = "t3";
pub const KIND_SUBREDDIT: &str = "t5";

/// A thing as returned by the API, tagged by its `kind`
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    Listing(Listing),
    Comment(Fields),
    Link(Fields),
    Subreddit(Fields),
    /// Any other kind (`more` placeholders, accounts, awards...)
    Other { kind: String },
}

/// Listing envelope: ordered children plus pagination cursors
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub children: Vec<Thing>,
    pub after: Option<String>,
    pub before: Option<String>,
}

/// The untyped `data` object of a leaf thing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields(Map<String, Value>);

impl Thing {
    /// Validate a `{ kind, data }` envelope and wrap it in the matching variant.
    ///
    /// Listing children are converted recursively. A child whose envelope is
    /// itself broken fails the whole conversion.
    pub fn from_value(value: &Value) -> Result<Thing> {
        let object = value
            .as_object()
            .ok_or_else(|| malformed("expected an object with `kind` and `data`", value))?;

        let kind = object
            .get("kind")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed("missing `kind` tag", value))?;

        let data = object.get("data");

        match kind {
            KIND_LISTING => {
                let data = data
                    .and_then(Value::as_object)
                    .ok_or_else(|| malformed("listing without a `data` object", value))?;
                Listing::from_data(data).map(Thing::Listing)
            }
            KIND_COMMENT => Ok(Thing::Comment(Fields::from_data(data, kind)?)),
            KIND_LINK => Ok(Thing::Link(Fields::from_data(data, kind)?)),
            KIND_SUBREDDIT => Ok(Thing::Subreddit(Fields::from_data(data, kind)?)),
            other => Ok(Thing::Other {
                kind: other.to_string(),
            }),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Thing::Listing(_) => KIND_LISTING,
            Thing::Comment(_) => KIND_COMMENT,
            Thing::Link(_) => KIND_LINK,
            Thing::Subreddit(_) => KIND_SUBREDDIT,
            Thing::Other { kind } => kind,
        }
    }

    /// Unwrap a listing, failing with `MalformedResponse` for any other kind
    pub fn into_listing(self, context: &str) -> Result<Listing> {
        match self {
            Thing::Listing(listing) => Ok(listing),
            other => Err(RedditError::MalformedResponse(format!(
                "{context}: expected a Listing, got `{}`",
                other.kind()
            ))),
        }
    }
}

impl Listing {
    fn from_data(data: &Map<String, Value>) -> Result<Listing> {
        let children = match data.get("children") {
            Some(Value::Array(children)) => children
                .iter()
                .map(Thing::from_value)
                .collect::<Result<Vec<_>>>()?,
            None | Some(Value::Null) => Vec::new(),
            Some(other) => return Err(malformed("listing `children` is not an array", other)),
        };

        Ok(Listing {
            children,
            after: cursor(data.get("after")),
            before: cursor(data.get("before")),
        })
    }
}

impl Fields {
    fn from_data(data: Option<&Value>, kind: &str) -> Result<Fields> {
        match data {
            Some(Value::Object(map)) => Ok(Fields(map.clone())),
            _ => Err(RedditError::MalformedResponse(format!(
                "`{kind}` thing without a `data` object"
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Coerce to a string. Numbers and booleans are stringified, anything else is empty.
    pub fn string(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Coerce to a signed integer. Floats truncate, numeric strings parse, anything else is 0.
    pub fn int(&self, key: &str) -> i64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or_default(),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(|f| f as i64)
                .unwrap_or_default(),
            Some(Value::Bool(b)) => i64::from(*b),
            _ => 0,
        }
    }

    /// Coerce to a non-negative integer, clamping negatives to 0
    pub fn uint(&self, key: &str) -> u64 {
        u64::try_from(self.int(key)).unwrap_or_default()
    }

    /// Coerce to a boolean: `true`, the string `"true"` or a nonzero number.
    pub fn boolean(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        }
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Fields(map)
    }
}

fn cursor(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn malformed(message: &str, value: &Value) -> RedditError {
    let snippet: String = value.to_string().chars().take(80).collect();
    RedditError::MalformedResponse(format!("{message} (near `{snippet}`)"))
}
