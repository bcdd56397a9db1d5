//! Recursive guest partitioning with shared-page lifting.

use rand::seq::SliceRandom;
use rand::Rng;
use sharegen_core::{
    max_page_count, random_guest_pages, ConfigError, GuestId, GuestPages, PageSet,
};

use crate::config::{validate_degrees, validate_fan_out, TreeConfig};
use crate::node::{TreeInstance, TreeNode};

/// Builds a [`TreeNode`] hierarchy over a guest population.
///
/// Each guest carries two page sets through the recursion: *unplaced*
/// pages, not yet owned by any enclosing node, and *ancestor* pages,
/// already lifted into one. Pages only move from the first set to the
/// second, so a guest's total page set is unchanged by the build.
pub struct TreeBuilder<'r, R: ?Sized> {
    rng: &'r mut R,
    min_node_degree: u32,
    max_node_degree: u32,
}

impl<'r, R: Rng + ?Sized> TreeBuilder<'r, R> {
    /// Create a builder drawing fan-outs uniformly from
    /// `[min_node_degree, max_node_degree]`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroDegree`] or [`ConfigError::DegreeRange`] if the
    /// bounds are not `1 <= min <= max`.
    pub fn new(
        rng: &'r mut R,
        min_node_degree: u32,
        max_node_degree: u32,
    ) -> Result<Self, ConfigError> {
        validate_degrees(min_node_degree, max_node_degree)?;
        Ok(Self {
            rng,
            min_node_degree,
            max_node_degree,
        })
    }

    /// Partition the guests of `unplaced` into a tree.
    ///
    /// `ancestors` holds pages each guest has already inherited; guests
    /// missing from it start with none, and entries for guests absent from
    /// `unplaced` are ignored.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoGuests`] if `unplaced` is empty, or
    /// [`ConfigError::FanOutTooSmall`] if several guests must be split with
    /// a maximum degree of 1.
    pub fn build(
        &mut self,
        unplaced: GuestPages,
        ancestors: &GuestPages,
    ) -> Result<TreeNode, ConfigError> {
        if unplaced.is_empty() {
            return Err(ConfigError::NoGuests);
        }
        validate_fan_out(unplaced.len(), self.max_node_degree)?;
        let ancestors: GuestPages = unplaced
            .keys()
            .map(|guest| (*guest, ancestors.get(guest).cloned().unwrap_or_default()))
            .collect();
        Ok(self.subtree(unplaced, ancestors))
    }

    fn subtree(&mut self, mut unplaced: GuestPages, mut ancestors: GuestPages) -> TreeNode {
        if let Some((guest, own)) = unplaced.first().filter(|_| unplaced.len() == 1) {
            let inherited = ancestors.get(guest).cloned().unwrap_or_default();
            return TreeNode::Leaf {
                pages: own.difference(&inherited),
                guest_pages: inherited.union(own),
            };
        }

        let shared = unplaced
            .values()
            .skip(1)
            .fold(unplaced[0].clone(), |acc, pages| acc.intersection(pages));
        for (guest, pages) in unplaced.iter_mut() {
            pages.difference_with(&shared);
            if let Some(inherited) = ancestors.get_mut(guest) {
                inherited.union_with(&shared);
            }
        }

        let drawn = self
            .rng
            .random_range(self.min_node_degree..=self.max_node_degree);
        let fan_out = (drawn as usize).min(unplaced.len());

        let mut order: Vec<GuestId> = unplaced.keys().copied().collect();
        order.shuffle(&mut *self.rng);

        tracing::trace!(
            guests = order.len(),
            shared = shared.len(),
            fan_out,
            "lifting shared pages"
        );

        let mut groups: Vec<(GuestPages, GuestPages)> =
            (0..fan_out).map(|_| Default::default()).collect();
        for (i, guest) in order.into_iter().enumerate() {
            let (group_unplaced, group_ancestors) = &mut groups[i % fan_out];
            group_unplaced.insert(guest, unplaced.swap_remove(&guest).unwrap_or_default());
            group_ancestors.insert(guest, ancestors.swap_remove(&guest).unwrap_or_default());
        }

        let children = groups
            .into_iter()
            .filter(|(group_unplaced, _)| !group_unplaced.is_empty())
            .map(|(group_unplaced, group_ancestors)| self.subtree(group_unplaced, group_ancestors))
            .collect();

        TreeNode::Internal {
            pages: shared,
            children,
        }
    }
}

/// Generate a complete tree fixture.
///
/// Draws each guest's page set with [`random_guest_pages`], records the
/// capacity (the largest raw per-guest page count, which lifting never
/// changes) and partitions the guests with a [`TreeBuilder`].
///
/// # Errors
///
/// Any error of [`TreeConfig::validate`]; nothing is drawn from `rng` in
/// that case.
pub fn generate_tree<R: Rng + ?Sized>(
    config: &TreeConfig,
    rng: &mut R,
) -> Result<TreeInstance, ConfigError> {
    config.validate()?;

    let guests = random_guest_pages(rng, config.instance_page_count, config.guest_count);
    let capacity = max_page_count(&guests);
    let ancestors: GuestPages = guests
        .keys()
        .map(|guest| (*guest, PageSet::empty()))
        .collect();

    let root = TreeBuilder::new(rng, config.min_node_degree, config.max_node_degree)?
        .build(guests, &ancestors)?;

    tracing::debug!(
        guests = config.guest_count,
        internal_nodes = root.internal_count(),
        depth = root.depth(),
        capacity,
        "generated tree fixture"
    );

    Ok(TreeInstance { root, capacity })
}
