//! Collection contracts
//!
//! A collection either lists its members explicitly or, when `is_smart` is
//! set, derives them from [`SmartCollectionRule`]s evaluated by the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::media::MediaEntity;
use crate::timestamp::Timestamp;

/// A named, user-curated set of media entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaCollection {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user_id: i64,
    pub is_public: bool,
    pub is_smart: bool,
    /// Only meaningful when `is_smart` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_rules: Option<Vec<SmartCollectionRule>>,
    /// Denormalized member count, present even when `items` is not expanded
    pub item_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MediaEntity>>,
}

/// Filter criterion for a smart collection.
///
/// Operators are expected to match the value kind (`gt`/`lt` against
/// numbers). The rule engine checks this, not the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartCollectionRule {
    /// Attribute the rule targets, e.g. `media_type` or `rating`
    pub field: String,
    pub operator: RuleOperator,
    pub value: RuleValue,
}

/// Comparison applied by a [`SmartCollectionRule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    Eq,
    Ne,
    Gt,
    Lt,
    Contains,
    NotContains,
}

impl RuleOperator {
    /// Wire name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOperator::Eq => "eq",
            RuleOperator::Ne => "ne",
            RuleOperator::Gt => "gt",
            RuleOperator::Lt => "lt",
            RuleOperator::Contains => "contains",
            RuleOperator::NotContains => "not_contains",
        }
    }
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a rule: exactly one of string, number or boolean.
///
/// Serialized as the bare JSON primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl RuleValue {
    /// Name of the primitive kind: `string`, `number` or `boolean`
    pub fn kind(&self) -> &'static str {
        match self {
            RuleValue::Bool(_) => "boolean",
            RuleValue::Number(_) => "number",
            RuleValue::String(_) => "string",
        }
    }
}

impl From<&str> for RuleValue {
    fn from(value: &str) -> Self {
        RuleValue::String(value.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(value: String) -> Self {
        RuleValue::String(value)
    }
}

impl From<f64> for RuleValue {
    fn from(value: f64) -> Self {
        RuleValue::Number(value)
    }
}

impl From<i32> for RuleValue {
    fn from(value: i32) -> Self {
        RuleValue::Number(f64::from(value))
    }
}

impl From<bool> for RuleValue {
    fn from(value: bool) -> Self {
        RuleValue::Bool(value)
    }
}

/// Payload for POST /collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_smart: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_rules: Option<Vec<SmartCollectionRule>>,
}

/// Payload for PUT /collections/:id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCollectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_rules: Option<Vec<SmartCollectionRule>>,
}
