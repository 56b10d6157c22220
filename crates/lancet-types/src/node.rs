//! Node types for Lancet.
//!
//! A node is the text-bearing unit handed back to the retrieval framework.
//! It keeps back-references to related documents and nodes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of link from a node to another document or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRelationship {
    /// The document the node was extracted from.
    Source,
    Previous,
    Next,
    Parent,
    Child,
}

impl fmt::Display for NodeRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRelationship::Source => write!(f, "source"),
            NodeRelationship::Previous => write!(f, "previous"),
            NodeRelationship::Next => write!(f, "next"),
            NodeRelationship::Parent => write!(f, "parent"),
            NodeRelationship::Child => write!(f, "child"),
        }
    }
}

impl FromStr for NodeRelationship {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "source" => Ok(NodeRelationship::Source),
            "previous" => Ok(NodeRelationship::Previous),
            "next" => Ok(NodeRelationship::Next),
            "parent" => Ok(NodeRelationship::Parent),
            "child" => Ok(NodeRelationship::Child),
            other => Err(format!("invalid node relationship: '{other}'")),
        }
    }
}

/// A text-bearing retrieval unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<NodeRelationship, String>,
}

impl Node {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            relationships: BTreeMap::new(),
        }
    }

    /// Attach a relationship, replacing any previous target of the same kind.
    pub fn with_relationship(mut self, kind: NodeRelationship, target: impl Into<String>) -> Self {
        self.relationships.insert(kind, target.into());
        self
    }

    /// The id of the document this node came from, if recorded.
    pub fn source_doc_id(&self) -> Option<&str> {
        self.relationships
            .get(&NodeRelationship::Source)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_display_and_parse() {
        for kind in [
            NodeRelationship::Source,
            NodeRelationship::Previous,
            NodeRelationship::Next,
            NodeRelationship::Parent,
            NodeRelationship::Child,
        ] {
            let parsed: NodeRelationship = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert_eq!("SOURCE".parse::<NodeRelationship>().unwrap(), NodeRelationship::Source);
        assert!("sibling".parse::<NodeRelationship>().is_err());
    }

    #[test]
    fn test_source_doc_id() {
        let node = Node::new("n1", "hello").with_relationship(NodeRelationship::Source, "doc-7");
        assert_eq!(node.source_doc_id(), Some("doc-7"));

        let orphan = Node::new("n2", "world");
        assert_eq!(orphan.source_doc_id(), None);
    }

    #[test]
    fn test_node_serializes_relationships_lowercase() {
        let node = Node::new("n1", "hello").with_relationship(NodeRelationship::Source, "doc-7");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["relationships"]["source"], "doc-7");

        let bare = serde_json::to_value(Node::new("n2", "x")).unwrap();
        assert!(bare.get("relationships").is_none());
    }
}
