use std::sync::Arc;

use serde_json::{json, Value};

use gantry_core::{Counter, Error};
use gantry_mcp::{registry::ToolDefinition, ToolRegistry};

fn empty_object_schema() -> Value {
    json!({"type": "object", "properties": {}, "required": []})
}

/// Register the demo counter tools, in the order they are listed by
/// `tools/list`: `increment`, `status`, `reset`. Each handler shares the
/// same counter; the tools take no arguments.
pub fn register_counter_tools(
    registry: &mut ToolRegistry,
    counter: &Arc<Counter>,
) -> Result<(), Error> {
    let c = Arc::clone(counter);
    registry.register(
        ToolDefinition {
            name: "increment".to_string(),
            description: "Increments the counter by one.".to_string(),
            input_schema: empty_object_schema(),
        },
        move |_args| Ok(json!({"value": c.increment(), "message": "Counter incremented."})),
    )?;

    let c = Arc::clone(counter);
    registry.register(
        ToolDefinition {
            name: "status".to_string(),
            description: "Returns the current counter value.".to_string(),
            input_schema: empty_object_schema(),
        },
        move |_args| Ok(json!({"value": c.value(), "message": "Current counter value."})),
    )?;

    let c = Arc::clone(counter);
    registry.register(
        ToolDefinition {
            name: "reset".to_string(),
            description: "Resets the counter to zero.".to_string(),
            input_schema: empty_object_schema(),
        },
        move |_args| Ok(json!({"value": c.reset(), "message": "Counter reset."})),
    )?;

    Ok(())
}
