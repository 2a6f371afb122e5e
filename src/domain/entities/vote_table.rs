//! Nested vote table entity and leaf counter addressing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category vote counts: topic name → option name → count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryVotes(pub BTreeMap<String, BTreeMap<String, u64>>);

/// The full vote table: category name → [`CategoryVotes`].
///
/// The table itself is never stored whole. It is materialized per read by
/// overlaying stored leaf counters onto [`VoteTable::default_shape`], so
/// missing paths always read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteTable(pub BTreeMap<String, CategoryVotes>);

impl VoteTable {
    /// The documented default shape, all leaf counts at zero.
    ///
    /// Categories are fixed: votes may only be recorded under a category
    /// listed here. Topics and options inside an existing category are
    /// created on first vote.
    pub fn default_shape() -> Self {
        const SHAPE: &[(&str, &[(&str, &[&str])])] = &[
            (
                "owner",
                &[
                    ("values", &["right", "wrong"]),
                    ("priorities", &["features", "stability"]),
                ],
            ),
            (
                "team",
                &[("size", &["grow", "keep"]), ("remote", &["yes", "no"])],
            ),
        ];

        let mut table = BTreeMap::new();
        for (category, topics) in SHAPE {
            let mut topic_map = BTreeMap::new();
            for (topic, options) in *topics {
                topic_map.insert(
                    (*topic).to_string(),
                    options.iter().map(|o| ((*o).to_string(), 0)).collect(),
                );
            }
            table.insert((*category).to_string(), CategoryVotes(topic_map));
        }
        VoteTable(table)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryVotes> {
        self.0.get(name)
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets the leaf counter at `path`, creating the topic/option entries
    /// if missing. Returns `false` when the category does not exist in the
    /// table; the counter is dropped in that case.
    pub fn apply(&mut self, path: &VotePath, count: u64) -> bool {
        match self.0.get_mut(&path.category) {
            Some(category) => {
                category
                    .0
                    .entry(path.topic.clone())
                    .or_default()
                    .insert(path.option.clone(), count);
                true
            }
            None => false,
        }
    }
}

/// Address of one leaf counter: (category, topic, option).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotePath {
    pub category: String,
    pub topic: String,
    pub option: String,
}

impl VotePath {
    pub fn new(
        category: impl Into<String>,
        topic: impl Into<String>,
        option: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            topic: topic.into(),
            option: option.into(),
        }
    }

    /// Encodes the path as a JSON array for use as a store field name.
    ///
    /// A JSON array is unambiguous for arbitrary names; joining with a
    /// separator character would break on names containing the separator.
    pub fn encode(&self) -> String {
        serde_json::Value::from(vec![
            self.category.clone(),
            self.topic.clone(),
            self.option.clone(),
        ])
        .to_string()
    }

    /// Decodes a store field name produced by [`VotePath::encode`].
    pub fn decode(field: &str) -> Option<Self> {
        let parts: Vec<String> = serde_json::from_str(field).ok()?;
        match <[String; 3]>::try_from(parts) {
            Ok([category, topic, option]) => Some(Self {
                category,
                topic,
                option,
            }),
            Err(_) => None,
        }
    }
}
