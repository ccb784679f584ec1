//! Front-matter parsing

use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Title hierarchy attached to a document.
///
/// A document either carries one title per hierarchy depth (the last entry
/// being the most specific) or no titles at all. The two cases behave
/// differently when the document title is computed, so the nullability is
/// made explicit instead of being an `Option` buried in a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TitleInfo {
    /// One title per hierarchy depth; entries may be empty strings.
    Present(Vec<String>),
    /// No title hierarchy; the page falls back to the bare site title.
    #[default]
    Absent,
}

impl TitleInfo {
    /// Titles with empty-string entries filtered out.
    pub fn filtered(&self) -> Vec<&str> {
        match self {
            TitleInfo::Present(titles) => titles
                .iter()
                .map(String::as_str)
                .filter(|t| !t.is_empty())
                .collect(),
            TitleInfo::Absent => Vec::new(),
        }
    }

    /// The most specific non-empty title, if any.
    pub fn last(&self) -> Option<&str> {
        self.filtered().last().copied()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TitleInfo::Absent)
    }
}

impl<'de> Deserialize<'de> for TitleInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let titles = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(match titles {
            Some(titles) => TitleInfo::Present(titles),
            None => TitleInfo::Absent,
        })
    }
}

impl Serialize for TitleInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TitleInfo::Present(titles) => titles.serialize(serializer),
            TitleInfo::Absent => serializer.serialize_none(),
        }
    }
}

/// Custom deserializer that accepts a sequence token written either as a
/// string or as a bare integer
fn opaque_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct OpaqueToken;

    impl<'de> Visitor<'de> for OpaqueToken {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, an integer, or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(OpaqueToken)
}

/// Front-matter data from a document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    /// Unique content route (e.g. "/chapter-2/section-3")
    pub path: String,

    /// Hierarchical position, e.g. [2, 3] = section 2.3
    pub index: Vec<u32>,

    /// Opaque token identifying the document's prev/next neighbors
    #[serde(deserialize_with = "opaque_token")]
    pub sequence: Option<String>,

    /// Title at each hierarchy depth, most specific last
    pub titles: TitleInfo,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            path: String::new(),
            index: Vec::new(),
            sequence: None,
            titles: TitleInfo::Absent,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => Ok((fm, remaining)),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                Ok((FrontMatter::default(), content))
            }
        }
    }
}
