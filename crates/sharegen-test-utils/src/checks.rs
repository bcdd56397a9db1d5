//! Structural invariant checkers for tree and cluster fixtures.

use std::collections::HashSet;

use sharegen_cluster::{Cluster, ClusterNode, ClusterTree};
use sharegen_core::{NodeId, PageSet};
use sharegen_tree::TreeNode;

// ── Tree fixtures ───────────────────────────────────────────────

/// Every leaf's `guest_pages` alongside the union of `pages` on its
/// root-to-leaf path, in depth-first order.
pub fn tree_leaf_paths(root: &TreeNode) -> Vec<(PageSet, PageSet)> {
    fn walk(node: &TreeNode, above: &PageSet, out: &mut Vec<(PageSet, PageSet)>) {
        let path = above.union(node.pages());
        match node {
            TreeNode::Leaf { guest_pages, .. } => out.push((path, guest_pages.clone())),
            TreeNode::Internal { children, .. } => {
                for child in children {
                    walk(child, &path, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    walk(root, &PageSet::empty(), &mut out);
    out
}

/// Each leaf's `guest_pages` equals the union of `pages` on its root path.
pub fn check_tree_coverage(root: &TreeNode) -> Result<(), String> {
    for (i, (path, guest_pages)) in tree_leaf_paths(root).into_iter().enumerate() {
        if path != guest_pages {
            return Err(format!(
                "leaf {i}: path union {:?} != guest_pages {:?}",
                path.to_vec(),
                guest_pages.to_vec()
            ));
        }
    }
    Ok(())
}

/// No page is owned by two nodes on the same root-to-leaf path.
pub fn check_tree_paths_disjoint(root: &TreeNode) -> Result<(), String> {
    fn walk(node: &TreeNode, above: &PageSet) -> Result<(), String> {
        if !above.is_disjoint(node.pages()) {
            return Err(format!(
                "node pages {:?} repeat an ancestor's pages",
                node.pages().intersection(above).to_vec()
            ));
        }
        let path = above.union(node.pages());
        node.children().iter().try_for_each(|c| walk(c, &path))
    }
    walk(root, &PageSet::empty())
}

/// Internal nodes have at most `max` children, and at least `min` unless
/// fewer guests remained below them.
pub fn check_tree_fan_out(root: &TreeNode, min: usize, max: usize) -> Result<(), String> {
    if let TreeNode::Internal { children, .. } = root {
        let n = children.len();
        let floor = min.min(root.leaf_count());
        if n > max || n < floor {
            return Err(format!(
                "internal node with {} guests has {n} children, expected {floor}..={max}",
                root.leaf_count()
            ));
        }
        for child in children {
            check_tree_fan_out(child, min, max)?;
        }
    }
    Ok(())
}

// ── Cluster fixtures ────────────────────────────────────────────

fn node<'a>(tree: &'a ClusterTree, id: NodeId) -> Result<&'a ClusterNode, String> {
    tree.node(id)
        .ok_or_else(|| format!("node {id} is referenced but not in the arena"))
}

/// Every node's pages are disjoint from its `ancestor_pages` and from the
/// pages of every node reachable through `parent_ids`.
pub fn check_cluster_disjointness(tree: &ClusterTree) -> Result<(), String> {
    for n in tree.arena.iter() {
        if !n.pages.is_disjoint(&n.ancestor_pages) {
            return Err(format!("node {}: pages intersect ancestor_pages", n.id));
        }
        let mut stack: Vec<NodeId> = n.parent_ids.to_vec();
        let mut seen = HashSet::new();
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let ancestor = node(tree, id)?;
            if !n.pages.is_disjoint(&ancestor.pages) {
                return Err(format!(
                    "node {}: pages intersect those of ancestor {id}",
                    n.id
                ));
            }
            stack.extend(ancestor.parent_ids.iter().copied());
        }
    }
    Ok(())
}

/// Every node's `ancestor_pages` is exactly the union of its parents'
/// `pages ∪ ancestor_pages`.
pub fn check_cluster_ancestry(tree: &ClusterTree) -> Result<(), String> {
    for n in tree.arena.iter() {
        let mut expected = PageSet::empty();
        for &p in &n.parent_ids {
            let parent = node(tree, p)?;
            if parent.id >= n.id {
                return Err(format!("node {} has later node {p} as parent", n.id));
            }
            expected.union_with(&parent.visible_pages());
        }
        if expected != n.ancestor_pages {
            return Err(format!(
                "node {}: ancestor_pages {:?} != parents' coverage {:?}",
                n.id,
                n.ancestor_pages.to_vec(),
                expected.to_vec()
            ));
        }
        if let Some(guest_pages) = &n.guest_pages {
            if *guest_pages != n.visible_pages() {
                return Err(format!("node {}: guest_pages != pages ∪ ancestor_pages", n.id));
            }
        }
    }
    Ok(())
}

/// `parent_ids` only reference nodes of the immediately enclosing cluster.
pub fn check_cluster_layering(tree: &ClusterTree) -> Result<(), String> {
    fn walk(tree: &ClusterTree, cluster: &Cluster, enclosing: &[NodeId]) -> Result<(), String> {
        for &id in &cluster.nodes {
            let n = node(tree, id)?;
            if let Some(p) = n.parent_ids.iter().find(|p| !enclosing.contains(p)) {
                return Err(format!(
                    "node {id} names {p}, which is not in the enclosing layer"
                ));
            }
        }
        cluster
            .children
            .iter()
            .try_for_each(|child| walk(tree, child, &cluster.nodes))
    }
    walk(tree, &tree.root, &[])
}

/// Leaf capacities equal their guest's page count and every other
/// cluster's capacity is the maximum of its children's.
pub fn check_cluster_capacity(tree: &ClusterTree) -> Result<(), String> {
    fn walk(tree: &ClusterTree, cluster: &Cluster) -> Result<(), String> {
        let expected = if cluster.is_leaf() {
            let id = cluster
                .nodes
                .first()
                .ok_or_else(|| "leaf cluster without a node".to_string())?;
            node(tree, *id)?
                .guest_pages
                .as_ref()
                .map(PageSet::len)
                .ok_or_else(|| format!("leaf node {id} has no guest_pages"))?
        } else {
            cluster.children.iter().map(|c| c.capacity).max().unwrap_or(0)
        };
        if cluster.capacity != expected {
            return Err(format!(
                "cluster capacity {} != expected {expected}",
                cluster.capacity
            ));
        }
        cluster.children.iter().try_for_each(|c| walk(tree, c))
    }
    walk(tree, &tree.root)
}

/// Each cluster splits its guests into `min(guests, degree)` buckets whose
/// sizes differ by at most one, larger buckets first; `degree` shrinks to
/// the bucket size on the way down.
pub fn check_cluster_partition(cluster: &Cluster, max_cluster_degree: usize) -> Result<(), String> {
    if cluster.is_leaf() {
        return Ok(());
    }
    let guests = cluster.guest_count();
    let sizes: Vec<usize> = cluster.children.iter().map(Cluster::guest_count).collect();
    if sizes.len() != guests.min(max_cluster_degree) {
        return Err(format!(
            "cluster of {guests} guests has {} sub-clusters, degree {max_cluster_degree}",
            sizes.len()
        ));
    }
    if sizes.iter().sum::<usize>() != guests {
        return Err(format!("bucket sizes {sizes:?} do not sum to {guests}"));
    }
    if sizes.windows(2).any(|w| w[0] < w[1] || w[0] - w[1] > 1) {
        return Err(format!("bucket sizes {sizes:?} are not an even split"));
    }
    for (child, size) in cluster.children.iter().zip(&sizes) {
        check_cluster_partition(child, (*size).min(max_cluster_degree))?;
    }
    Ok(())
}

/// Node ids are unique and increase in creation (arena) order.
pub fn check_node_ids(tree: &ClusterTree) -> Result<(), String> {
    let ids: Vec<NodeId> = tree.arena.iter().map(|n| n.id).collect();
    if ids.windows(2).any(|w| w[0] >= w[1]) {
        return Err(format!("node ids not strictly increasing: {ids:?}"));
    }
    Ok(())
}

/// Run every cluster checker.
pub fn check_cluster_tree(tree: &ClusterTree, max_cluster_degree: usize) -> Result<(), String> {
    check_node_ids(tree)?;
    check_cluster_disjointness(tree)?;
    check_cluster_ancestry(tree)?;
    check_cluster_layering(tree)?;
    check_cluster_capacity(tree)?;
    check_cluster_partition(&tree.root, max_cluster_degree)
}
