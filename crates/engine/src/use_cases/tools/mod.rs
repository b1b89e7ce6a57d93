//! Tool registry.
//!
//! The seven generation operations are registered once, in a fixed order, as
//! plain function pointers. Dispatch is a name lookup in that table.

mod schema;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use securerand_domain::{
    BooleanRequest, BytesRequest, ChoiceRequest, FloatRequest, GenerationError, IntegerRequest,
    RandomEnvelope, StringRequest, UuidRequest,
};
use securerand_shared::ToolDescriptor;

use super::generation::Generator;

/// Errors from running a tool.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    /// The arguments object could not be decoded into the tool's request
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: &'static str, message: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl ToolError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "unknown_operation",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::Generation(e) => e.kind(),
        }
    }
}

type Handler = fn(&Generator, &'static str, Value) -> Result<RandomEnvelope, ToolError>;

/// One registered tool.
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    handler: Handler,
}

impl ToolDefinition {
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema.clone(),
        }
    }
}

/// Immutable name -> tool table.
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// The seven random generation tools.
    pub fn standard() -> Self {
        Self::from_definitions(vec![
            ToolDefinition {
                name: "generate_random_integer",
                description:
                    "Generate cryptographically secure random integers within a specified range",
                input_schema: schema::integer(),
                handler: |g, tool, args| Ok(g.integers(&decode::<IntegerRequest>(tool, args)?)?),
            },
            ToolDefinition {
                name: "generate_random_float",
                description: "Generate cryptographically secure random floating-point numbers",
                input_schema: schema::float(),
                handler: |g, tool, args| Ok(g.floats(&decode::<FloatRequest>(tool, args)?)?),
            },
            ToolDefinition {
                name: "generate_random_bytes",
                description: "Generate cryptographically secure random bytes in various encodings",
                input_schema: schema::bytes(),
                handler: |g, tool, args| Ok(g.bytes(&decode::<BytesRequest>(tool, args)?)?),
            },
            ToolDefinition {
                name: "generate_uuid",
                description: "Generate cryptographically secure UUID version 4 identifiers",
                input_schema: schema::uuid(),
                handler: |g, tool, args| Ok(g.uuids(&decode::<UuidRequest>(tool, args)?)?),
            },
            ToolDefinition {
                name: "generate_random_string",
                description:
                    "Generate cryptographically secure random strings with customizable character sets",
                input_schema: schema::string(),
                handler: |g, tool, args| Ok(g.strings(&decode::<StringRequest>(tool, args)?)?),
            },
            ToolDefinition {
                name: "generate_random_choice",
                description:
                    "Randomly select items from a provided list using cryptographically secure randomness",
                input_schema: schema::choice(),
                handler: |g, tool, args| Ok(g.choices(&decode::<ChoiceRequest>(tool, args)?)?),
            },
            ToolDefinition {
                name: "generate_random_boolean",
                description:
                    "Generate cryptographically secure random boolean values with configurable probability",
                input_schema: schema::boolean(),
                handler: |g, tool, args| Ok(g.booleans(&decode::<BooleanRequest>(tool, args)?)?),
            },
        ])
    }

    fn from_definitions(tools: Vec<ToolDefinition>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| (tool.name, i))
            .collect();
        Self { tools, index }
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(ToolDefinition::descriptor).collect()
    }

    /// Run a tool by name. Missing or `null` arguments mean "all defaults".
    pub fn call(
        &self,
        generator: &Generator,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<RandomEnvelope, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownOperation(name.to_string()))?;
        let arguments = match arguments {
            None | Some(Value::Null) => Value::Object(Default::default()),
            Some(value) => value,
        };
        (tool.handler)(generator, tool.name, arguments)
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|tool| tool.name)
    }
}

fn decode<T: DeserializeOwned>(tool: &'static str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool,
        message: e.to_string(),
    })
}
