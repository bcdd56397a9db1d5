//! Structural properties of generated cluster fixtures.

use proptest::prelude::*;
use sharegen_cluster::{generate_cluster_tree, ClusterConfig, ClusterNode, NodeAllocator, ParentIds};
use sharegen_core::{NodeId, PageId, PageSet, PageUniverse};
use sharegen_test_utils::{check_cluster_tree, seeded};

fn pages(ids: &[u32]) -> PageSet {
    ids.iter().copied().map(PageId).collect()
}

fn parent(id: u64, own: &[u32]) -> ClusterNode {
    ClusterNode {
        id: NodeId(id),
        pages: pages(own),
        ancestor_pages: PageSet::empty(),
        parent_ids: ParentIds::new(),
        guest_pages: None,
    }
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn root_allocation_is_fully_satisfied() {
    let allocator = NodeAllocator::new(PageUniverse::new(5));
    let allocation = allocator.allocate(&mut seeded(1), &[], 5);
    assert_eq!(allocation.pages, PageUniverse::new(5).all());
    assert!(!allocation.is_under_fulfilled());
}

#[test]
fn covered_universe_falls_back_to_remainder() {
    let allocator = NodeAllocator::new(PageUniverse::new(5));
    let a = parent(1, &[0, 1]);
    let b = parent(2, &[2]);
    let allocation = allocator.allocate(&mut seeded(2), &[&a, &b], 5);
    assert_eq!(allocation.pages, pages(&[3, 4]));
    assert_eq!(allocation.requested, 5);
    assert!(allocation.is_under_fulfilled());
    assert!(allocation.pages.is_disjoint(&allocation.ancestor_pages));
}

#[test]
fn single_guest_tiny_universe() {
    let config = ClusterConfig::default()
        .instance_page_count(1)
        .guest_count(1)
        .max_node_page_count(1);
    let tree = generate_cluster_tree(&config, &mut seeded(0)).unwrap();
    assert_eq!(tree.arena.len(), 1);
    let guest = tree.guests().next().unwrap();
    assert!(guest.pages.is_subset(&pages(&[0])));
    assert!(guest.parent_ids.is_empty());
    assert!(tree.capacity() <= 1);
}

#[test]
fn reference_defaults_hold_invariants() {
    let config = ClusterConfig::default();
    let tree = generate_cluster_tree(&config, &mut seeded(10)).unwrap();
    assert_eq!(tree.root.guest_count(), 40);
    assert_eq!(tree.guests().count(), 40);
    assert_eq!(tree.root.nodes.first(), Some(&NodeId(101)));
    check_cluster_tree(&tree, config.max_cluster_degree as usize).unwrap();
}

#[test]
fn multi_parent_nodes_appear() {
    let config = ClusterConfig::default()
        .instance_page_count(200)
        .guest_count(12)
        .cluster_node_count(3)
        .max_cluster_degree(3)
        .max_node_page_count(4);
    let tree = generate_cluster_tree(&config, &mut seeded(5)).unwrap();
    assert!(tree.arena.iter().any(|n| n.parent_ids.len() >= 2));
    check_cluster_tree(&tree, 3).unwrap();
}

#[test]
fn identical_seeds_identical_trees() {
    let config = ClusterConfig::default();
    let a = generate_cluster_tree(&config, &mut seeded(21)).unwrap();
    let b = generate_cluster_tree(&config, &mut seeded(21)).unwrap();
    assert_eq!(a.root, b.root);
    let nodes_a: Vec<&ClusterNode> = a.arena.iter().collect();
    let nodes_b: Vec<&ClusterNode> = b.arena.iter().collect();
    assert_eq!(nodes_a, nodes_b);
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_trees_hold_invariants(
        seed in any::<u64>(),
        pages in 0u32..60,
        guests in 1u32..30,
        nodes in 0u32..4,
        degree in 2u32..6,
        node_pages in 0u32..8,
    ) {
        let config = ClusterConfig::default()
            .instance_page_count(pages)
            .guest_count(guests)
            .cluster_node_count(nodes)
            .max_cluster_degree(degree)
            .max_node_page_count(node_pages.min(pages));
        let tree = generate_cluster_tree(&config, &mut seeded(seed)).unwrap();

        prop_assert_eq!(tree.root.guest_count(), guests as usize);
        let checked = check_cluster_tree(&tree, degree as usize);
        prop_assert!(checked.is_ok(), "{:?}", checked);
    }

    #[test]
    fn allocations_never_overlap_ancestry(
        seed in any::<u64>(),
        universe in 1u32..40,
        parent_pages in prop::collection::vec(prop::collection::vec(0u32..40, 0..10), 0..5),
        target in 0usize..20,
    ) {
        let parents: Vec<ClusterNode> = parent_pages
            .iter()
            .enumerate()
            .map(|(i, own)| {
                let own: Vec<u32> = own.iter().map(|p| p % universe).collect();
                parent(i as u64, &own)
            })
            .collect();
        let refs: Vec<&ClusterNode> = parents.iter().collect();
        let allocator = NodeAllocator::new(PageUniverse::new(universe));
        let allocation = allocator.allocate(&mut seeded(seed), &refs, target);

        prop_assert!(allocation.pages.is_disjoint(&allocation.ancestor_pages));
        prop_assert!(allocation.pages.len() <= target);
        prop_assert!(allocation.pages.is_subset(&PageUniverse::new(universe).all()));
        prop_assert!(allocation.parent_ids.len() != 1);
    }
}
