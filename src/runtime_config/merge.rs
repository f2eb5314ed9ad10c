//! Deep merge and keyed upsert over `serde_json::Value`.

use super::{AGENTS_KEY, ID_KEY, LIST_KEY, WORKSPACE_KEY};
use crate::agent::AgentRecord;
use serde_json::{Map, Value};

/// Whether an upsert touched an existing entry or appended a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Merge `patch` into `target`.
///
/// Objects merge key by key, recursively. Any other patch value, arrays
/// included, replaces the target value outright.
pub fn deep_merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match target_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, patch_value),
                    None => {
                        target_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

/// Make sure `doc.agents.list` exists as an array and return it.
///
/// A non-object root, a non-object `agents`, or a non-array `list` is replaced.
pub fn ensure_agent_list(doc: &mut Value) -> &mut Vec<Value> {
    let root = coerce_object(doc);
    let agents = coerce_object(
        root.entry(AGENTS_KEY.to_string())
            .or_insert_with(|| Value::Object(Map::new())),
    );
    coerce_array(
        agents
            .entry(LIST_KEY.to_string())
            .or_insert_with(|| Value::Array(Vec::new())),
    )
}

fn coerce_object(value: &mut Value) -> &mut Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            coerce_object(other)
        }
    }
}

fn coerce_array(value: &mut Value) -> &mut Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => {
            *other = Value::Array(Vec::new());
            coerce_array(other)
        }
    }
}

/// Upsert `partial` into the agent list under `agent_id`.
///
/// A matching entry is deep-merged with `partial`; otherwise `{id, ...partial}`
/// is appended after the existing entries.
pub fn upsert_agent(doc: &mut Value, agent_id: &str, partial: &Value) -> UpsertOutcome {
    let list = ensure_agent_list(doc);

    let existing = list
        .iter_mut()
        .find(|entry| entry.get(ID_KEY).and_then(Value::as_str) == Some(agent_id));
    if let Some(entry) = existing {
        deep_merge(entry, partial);
        return UpsertOutcome::Updated;
    }

    let mut entry = Map::new();
    entry.insert(ID_KEY.to_string(), Value::String(agent_id.to_string()));
    if let Value::Object(fields) = partial {
        for (key, value) in fields {
            entry.insert(key.clone(), value.clone());
        }
    }
    list.push(Value::Object(entry));
    UpsertOutcome::Inserted
}

/// Runtime config fields projected from an agent's descriptors.
pub fn partial_config(agent: &AgentRecord) -> Value {
    let mut partial = Map::new();
    if let Some(workspace) = agent.workspace_override() {
        partial.insert(
            WORKSPACE_KEY.to_string(),
            Value::String(workspace.to_string()),
        );
    }
    Value::Object(partial)
}
