//! JSON-compatible rendering of cluster trees.
//!
//! ```text
//! {"nodes": [{"node_id", "node_pages", "node_parents", "guest_pages"?}],
//!  "cluster_children": [...], "capacity"}
//! ```
//!
//! `capacity` appears on the root cluster only; `guest_pages` on leaf
//! nodes only.

use serde::{Serialize, Serializer};
use sharegen_core::{NodeId, PageSet};

use crate::arena::NodeArena;
use crate::cluster::{Cluster, ClusterTree};

#[derive(Serialize)]
struct ClusterRecord<'a> {
    nodes: Vec<NodeRecord<'a>>,
    cluster_children: Vec<ClusterRecord<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capacity: Option<usize>,
}

#[derive(Serialize)]
struct NodeRecord<'a> {
    node_id: NodeId,
    node_pages: &'a PageSet,
    node_parents: &'a [NodeId],
    #[serde(skip_serializing_if = "Option::is_none")]
    guest_pages: Option<&'a PageSet>,
}

impl<'a> ClusterRecord<'a> {
    fn new(arena: &'a NodeArena, cluster: &'a Cluster, capacity: Option<usize>) -> Self {
        let nodes = cluster
            .nodes
            .iter()
            .filter_map(|id| arena.get(*id))
            .map(|node| NodeRecord {
                node_id: node.id,
                node_pages: &node.pages,
                node_parents: &node.parent_ids,
                guest_pages: node.guest_pages.as_ref(),
            })
            .collect();
        let cluster_children = cluster
            .children
            .iter()
            .map(|child| ClusterRecord::new(arena, child, None))
            .collect();
        Self {
            nodes,
            cluster_children,
            capacity,
        }
    }
}

impl Serialize for ClusterTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ClusterRecord::new(&self.arena, &self.root, Some(self.capacity())).serialize(serializer)
    }
}
