use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Top-level document key the extension block is merged under
pub const EXTENSION_KEY: &str = "x-sfdc";

/// Topic metadata describing what a resource's API is for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub description: String,
    pub instructions: String,
}

/// Per-HTTP-verb guidance for the agent consuming the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInstructions {
    pub get: String,
    pub post: String,
    pub put: String,
    pub delete: String,
}

/// The extension block merged into one resource's OpenAPI document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceExtension {
    pub topics: Vec<Topic>,
    pub agent_instructions: AgentInstructions,
}

impl ResourceExtension {
    /// Serializes this block into the `{ "x-sfdc": ... }` overlay mapping
    pub fn to_overlay(&self) -> Result<Mapping, serde_yaml::Error> {
        let mut overlay = Mapping::new();
        overlay.insert(Value::from(EXTENSION_KEY), serde_yaml::to_value(self)?);
        Ok(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_extension() -> ResourceExtension {
        ResourceExtension {
            topics: vec![Topic {
                name: "Widget Management".to_string(),
                description: "Operations for managing widgets".to_string(),
                instructions: "Use this API for widgets.".to_string(),
            }],
            agent_instructions: AgentInstructions {
                get: "get text".to_string(),
                post: "post text".to_string(),
                put: "put text".to_string(),
                delete: "delete text".to_string(),
            },
        }
    }

    #[test]
    fn overlay_is_keyed_by_extension_key() {
        let overlay = sample_extension().to_overlay().unwrap();

        assert_eq!(overlay.len(), 1);
        assert!(overlay.contains_key(EXTENSION_KEY));
    }

    #[test]
    fn extension_serializes_with_camel_case_instructions_key() {
        let value = serde_yaml::to_value(sample_extension()).unwrap();
        let mapping = value.as_mapping().unwrap();

        assert!(mapping.contains_key("topics"));
        assert!(mapping.contains_key("agentInstructions"));
        assert!(!mapping.contains_key("agent_instructions"));
    }

    #[test]
    fn extension_round_trips_through_yaml() {
        let extension = sample_extension();
        let value = serde_yaml::to_value(&extension).unwrap();
        let back: ResourceExtension = serde_yaml::from_value(value).unwrap();

        assert_eq!(back, extension);
    }
}
