//! Prompt catalogue.

use std::collections::BTreeMap;

use securerand_shared::{Content, GetPromptResult, PromptArgument, PromptDescriptor, PromptMessage, Role};

pub const GENERATE_RANDOM: &str = "generate_random";

const GENERATE_RANDOM_DESCRIPTION: &str =
    "Help me generate random values using cryptographically secure methods";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),
}

/// The prompts this server offers. Currently a single guide prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptCatalogue;

impl PromptCatalogue {
    pub fn new() -> Self {
        Self
    }

    pub fn descriptors(&self) -> Vec<PromptDescriptor> {
        vec![PromptDescriptor {
            name: GENERATE_RANDOM.to_string(),
            description: GENERATE_RANDOM_DESCRIPTION.to_string(),
            arguments: vec![
                PromptArgument {
                    name: "type".to_string(),
                    description: "Type of random value needed (integer, float, uuid, string, bytes, choice, boolean)"
                        .to_string(),
                    required: false,
                },
                PromptArgument {
                    name: "requirements".to_string(),
                    description: "Specific requirements for the random generation".to_string(),
                    required: false,
                },
            ],
        }]
    }

    pub fn render(
        &self,
        name: &str,
        arguments: &BTreeMap<String, String>,
    ) -> Result<GetPromptResult, PromptError> {
        if name != GENERATE_RANDOM {
            return Err(PromptError::UnknownPrompt(name.to_string()));
        }
        let text = guide_text(
            non_empty(arguments.get("type")),
            non_empty(arguments.get("requirements")),
        );
        Ok(GetPromptResult {
            description: Some(GENERATE_RANDOM_DESCRIPTION.to_string()),
            messages: vec![PromptMessage {
                role: Role::User,
                content: Content::text(text),
            }],
        })
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn guide_text(kind: Option<&str>, requirements: Option<&str>) -> String {
    let mut text =
        String::from("I'll help you generate cryptographically secure random values.");
    if let Some(requirements) = requirements {
        text.push_str(&format!(" Requirements: {requirements}"));
    }
    if let Some(kind) = kind {
        text.push_str(&format!(" Type: {kind}"));
    }
    text.push_str(
        "\n\nAs an AI, I cannot generate truly random numbers myself, but I have access to a \
         cryptographically secure random number generator through MCP tools.\n\n\
         Available random generation tools:\n\n\
         1. **generate_random_integer** - Generate random integers within a range\n\
         2. **generate_random_float** - Generate random floating-point numbers\n\
         3. **generate_random_bytes** - Generate random bytes (hex/base64)\n\
         4. **generate_uuid** - Generate UUID v4 identifiers\n\
         5. **generate_random_string** - Generate random strings with custom character sets\n\
         6. **generate_random_choice** - Make random selections from arrays\n\
         7. **generate_random_boolean** - Generate random booleans with probability control\n\n\
         All randomness comes from the operating system's cryptographically secure random \
         number generator, suitable for security-sensitive applications.\n\n\
         What type of random value would you like me to generate?",
    );
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_prompt_with_optional_arguments() {
        let descriptors = PromptCatalogue::new().descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, "generate_random");
        let names: Vec<&str> = descriptors[0]
            .arguments
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["type", "requirements"]);
        assert!(descriptors[0].arguments.iter().all(|a| !a.required));
    }

    #[test]
    fn test_render_without_arguments_lists_tools() {
        let result = PromptCatalogue::new()
            .render(GENERATE_RANDOM, &BTreeMap::new())
            .expect("known prompt");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, Role::User);
        let text = result.messages[0].content.as_text();
        assert!(text.contains("generate_random_integer"));
        assert!(text.contains("generate_random_boolean"));
        assert!(!text.contains("Type:"));
        assert!(!text.contains("Requirements:"));
    }

    #[test]
    fn test_render_mentions_supplied_arguments() {
        let arguments = BTreeMap::from([
            ("type".to_string(), "uuid".to_string()),
            ("requirements".to_string(), "five of them".to_string()),
        ]);
        let result = PromptCatalogue::new()
            .render(GENERATE_RANDOM, &arguments)
            .expect("known prompt");
        let text = result.messages[0].content.as_text();
        assert!(text.contains("Type: uuid"));
        assert!(text.contains("Requirements: five of them"));
    }

    #[test]
    fn test_unknown_prompt() {
        assert_eq!(
            PromptCatalogue::new().render("roll_dice", &BTreeMap::new()),
            Err(PromptError::UnknownPrompt("roll_dice".to_string()))
        );
    }
}
