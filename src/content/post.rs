//! Post, Author and Media models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer that accepts either a string id or a numeric id
/// (the upstream API emits both, depending on the backing store).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct StringOrNumber;

    impl Visitor<'_> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

/// Custom deserializer that handles both a single string and a list of
/// strings for the tags field.
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// A blog post as returned by the post-read service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier, used to build navigation URLs and storage values
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Post title
    pub title: String,

    /// Post author; absent when the record was created anonymously
    #[serde(default)]
    pub author: Option<Author>,

    /// Post body text
    #[serde(default)]
    pub body: String,

    /// Post tags
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,

    /// Attached media
    #[serde(default)]
    pub media: Option<Media>,

    /// Creation timestamp (ISO-8601 / RFC 3339)
    pub created: DateTime<Utc>,

    /// Additional fields the API may attach (counts, flags, ...)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: &str, title: &str, body: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: None,
            body: body.to_string(),
            tags: Vec::new(),
            media: None,
            created: Utc::now(),
            extra: HashMap::new(),
        }
    }

    /// The author's display name, if an author is present
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }

    /// Tags joined into a single display line
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }
}

/// The author of a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,

    /// Contact address
    #[serde(default)]
    pub email: Option<String>,

    /// Profile image
    #[serde(default)]
    pub avatar: Option<Media>,
}

impl Author {
    /// Create an author from a display name
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: None,
            avatar: None,
        }
    }
}

/// A media attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Location of the media resource
    pub url: String,

    /// Alternate text; falls back to the URL when absent
    #[serde(default)]
    pub alt: Option<String>,
}
