//! Model value object representing a generative model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models used by the storybook (Value Object)
///
/// Text and chat go to a Gemini model, illustrations to an Imagen model.
/// Anything else is carried through as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini25Flash,
    Gemini25Pro,
    Imagen4,
    Imagen4Fast,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Imagen4 => "imagen-4.0-generate-001",
            Model::Imagen4Fast => "imagen-4.0-fast-generate-001",
            Model::Custom(s) => s,
        }
    }

    /// Default model for story generation
    pub fn default_story() -> Model {
        Model::Gemini25Flash
    }

    /// Default model for illustrations
    pub fn default_image() -> Model {
        Model::Imagen4
    }

    /// Default model for the chat assistant
    pub fn default_chat() -> Model {
        Model::Gemini25Flash
    }

    /// Check if this is an image generation model
    pub fn is_image_model(&self) -> bool {
        match self {
            Model::Imagen4 | Model::Imagen4Fast => true,
            Model::Custom(s) => s.starts_with("imagen"),
            _ => false,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Gemini25Flash
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
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "imagen-4.0-generate-001" => Model::Imagen4,
            "imagen-4.0-fast-generate-001" => Model::Imagen4Fast,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
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
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_identifiers() {
        assert_eq!(Model::Gemini25Flash.to_string(), "gemini-2.5-flash");
        assert_eq!(Model::Imagen4.to_string(), "imagen-4.0-generate-001");
        assert_eq!(Model::from("imagen-4.0-generate-001"), Model::Imagen4);
    }

    #[test]
    fn test_custom_model() {
        let model = Model::from("gemini-exp-1206");
        assert_eq!(model, Model::Custom("gemini-exp-1206".to_string()));
        assert_eq!(model.to_string(), "gemini-exp-1206");
    }

    #[test]
    fn test_image_model_detection() {
        assert!(Model::Imagen4.is_image_model());
        assert!(Model::from("imagen-3.0-generate-002").is_image_model());
        assert!(!Model::Gemini25Flash.is_image_model());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Model::default_story(), Model::Gemini25Flash);
        assert_eq!(Model::default_image(), Model::Imagen4);
        assert_eq!(Model::default_chat(), Model::Gemini25Flash);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Model::Imagen4Fast).unwrap();
        assert_eq!(json, "\"imagen-4.0-fast-generate-001\"");
        let parsed: Model = serde_json::from_str("\"gemini-2.5-pro\"").unwrap();
        assert_eq!(parsed, Model::Gemini25Pro);
    }
}
