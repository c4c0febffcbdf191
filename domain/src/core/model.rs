//! Model value object representing a candidate Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available generation models (Value Object)
///
/// This is a domain concept representing the backend models a request may
/// be routed to. The known variants make up the static fallback order;
/// anything else (e.g. an experimental preview the user typed into
/// settings) is carried through as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini3FlashPreview,
    Gemini3ProPreview,
    Gemini25Flash,
    Gemini25Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini3FlashPreview => "gemini-3-flash-preview",
            Model::Gemini3ProPreview => "gemini-3-pro-preview",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Custom(s) => s,
        }
    }

    /// The static fallback order, tried after the preferred model.
    ///
    /// The order is version-controlled configuration: fastest preview
    /// first, stable models last.
    pub fn fallback_order() -> Vec<Model> {
        vec![
            Model::Gemini3FlashPreview,
            Model::Gemini3ProPreview,
            Model::Gemini25Flash,
            Model::Gemini25Pro,
        ]
    }
}

impl Default for Model {
    /// Returns the default model (gemini-3-flash-preview)
    fn default() -> Self {
        Model::Gemini3FlashPreview
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-3-flash-preview" => Model::Gemini3FlashPreview,
            "gemini-3-pro-preview" => Model::Gemini3ProPreview,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

/// Ordered, de-duplicated list of candidate models (Value Object)
///
/// A chain always starts with the preferred model, followed by the static
/// fallback order with later duplicates removed. It is recomputed per
/// request and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelChain {
    models: Vec<Model>,
}

impl ModelChain {
    /// Build the chain for a preferred model.
    ///
    /// `[preferred] ++ fallback_order()`, keeping the first occurrence of
    /// each model and preserving relative order.
    pub fn for_preferred(preferred: Model) -> Self {
        let mut models = vec![preferred];
        for model in Model::fallback_order() {
            if !models.contains(&model) {
                models.push(model);
            }
        }
        Self { models }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        // Non-empty by construction; kept for clippy's len-without-is-empty
        self.models.is_empty()
    }

    /// The last candidate in the chain.
    pub fn last(&self) -> &Model {
        self.models.last().expect("chain is never empty")
    }
}

impl<'a> IntoIterator for &'a ModelChain {
    type Item = &'a Model;
    type IntoIter = std::slice::Iter<'a, Model>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
