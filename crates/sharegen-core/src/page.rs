//! The [`PageSet`] bitset.

use crate::id::PageId;

/// A set of page IDs implemented as a dynamically-sized bitset.
///
/// Every page-bearing record (guest bookkeeping, tree nodes, cluster nodes)
/// stores its pages as a `PageSet`. Iteration is always in ascending page
/// order, which keeps serialized fixtures stable for a given seed.
#[derive(Clone, Debug, Default)]
pub struct PageSet {
    bits: Vec<u64>,
}

impl PageSet {
    const BITS_PER_WORD: usize = 64;

    /// Create an empty page set.
    pub fn empty() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create the set `{0, 1, .., count - 1}`.
    pub fn full(count: u32) -> Self {
        let count = count as usize;
        let mut bits = vec![u64::MAX; count / Self::BITS_PER_WORD];
        let rem = count % Self::BITS_PER_WORD;
        if rem != 0 {
            bits.push((1u64 << rem) - 1);
        }
        Self { bits }
    }

    /// Insert a page into the set. Returns `true` if it was not present.
    pub fn insert(&mut self, page: PageId) -> bool {
        let word = page.0 as usize / Self::BITS_PER_WORD;
        let bit = page.0 as usize % Self::BITS_PER_WORD;
        if word >= self.bits.len() {
            self.bits.resize(word + 1, 0);
        }
        let fresh = self.bits[word] & (1u64 << bit) == 0;
        self.bits[word] |= 1u64 << bit;
        fresh
    }

    /// Remove a page from the set. Returns `true` if it was present.
    pub fn remove(&mut self, page: PageId) -> bool {
        let present = self.contains(page);
        if present {
            let word = page.0 as usize / Self::BITS_PER_WORD;
            let bit = page.0 as usize % Self::BITS_PER_WORD;
            self.bits[word] &= !(1u64 << bit);
            self.trim();
        }
        present
    }

    /// Check whether the set contains a page.
    pub fn contains(&self, page: PageId) -> bool {
        let word = page.0 as usize / Self::BITS_PER_WORD;
        let bit = page.0 as usize % Self::BITS_PER_WORD;
        word < self.bits.len() && (self.bits[word] & (1u64 << bit)) != 0
    }

    /// Return the union of two sets (`self | other`).
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    /// Add every page of `other` to `self`.
    pub fn union_with(&mut self, other: &Self) {
        if other.bits.len() > self.bits.len() {
            self.bits.resize(other.bits.len(), 0);
        }
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a |= b;
        }
    }

    /// Return the intersection of two sets (`self & other`).
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.intersect_with(other);
        out
    }

    /// Keep only the pages of `self` that are also in `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits.truncate(other.bits.len());
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a &= b;
        }
        self.trim();
    }

    /// Return the set difference (`self - other`): pages in `self` but not `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.difference_with(other);
        out
    }

    /// Remove every page of `other` from `self`.
    pub fn difference_with(&mut self, other: &Self) {
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a &= !b;
        }
        self.trim();
    }

    /// Check whether `self` is a subset of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        for i in 0..self.bits.len() {
            let b = other.bits.get(i).copied().unwrap_or(0);
            if self.bits[i] & !b != 0 {
                return false;
            }
        }
        true
    }

    /// Check whether the two sets share no page.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.bits.iter().zip(&other.bits).all(|(a, b)| a & b == 0)
    }

    /// Returns `true` if the set contains no pages.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Returns the number of pages in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the page IDs in the set, in ascending order.
    pub fn iter(&self) -> PageSetIter<'_> {
        PageSetIter {
            bits: &self.bits,
            word_idx: 0,
            bit_idx: 0,
        }
    }

    /// Collect the pages into an ascending `Vec`.
    pub fn to_vec(&self) -> Vec<PageId> {
        self.iter().collect()
    }

    fn trim(&mut self) {
        while self.bits.last() == Some(&0) {
            self.bits.pop();
        }
    }
}

impl PartialEq for PageSet {
    fn eq(&self, other: &Self) -> bool {
        let max_len = self.bits.len().max(other.bits.len());
        for i in 0..max_len {
            let a = self.bits.get(i).copied().unwrap_or(0);
            let b = other.bits.get(i).copied().unwrap_or(0);
            if a != b {
                return false;
            }
        }
        true
    }
}

impl Eq for PageSet {}

impl FromIterator<PageId> for PageSet {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<PageId> for PageSet {
    fn extend<I: IntoIterator<Item = PageId>>(&mut self, iter: I) {
        for page in iter {
            self.insert(page);
        }
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = PageId;
    type IntoIter = PageSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PageSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over page IDs in a [`PageSet`], yielding IDs in ascending order.
pub struct PageSetIter<'a> {
    bits: &'a [u64],
    word_idx: usize,
    bit_idx: usize,
}

impl Iterator for PageSetIter<'_> {
    type Item = PageId;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.bits.len() {
            let word = self.bits[self.word_idx];
            while self.bit_idx < 64 {
                let bit = self.bit_idx;
                self.bit_idx += 1;
                if word & (1u64 << bit) != 0 {
                    return Some(PageId((self.word_idx * 64 + bit) as u32));
                }
            }
            self.word_idx += 1;
            self.bit_idx = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(pages: &[u32]) -> PageSet {
        pages.iter().copied().map(PageId).collect()
    }

    fn arb_page_set() -> impl Strategy<Value = PageSet> {
        prop::collection::vec(0u32..200, 0..48)
            .prop_map(|ids| ids.into_iter().map(PageId).collect::<PageSet>())
    }

    #[test]
    fn full_covers_exact_range() {
        assert_eq!(PageSet::full(0), PageSet::empty());
        assert_eq!(PageSet::full(3), set(&[0, 1, 2]));
        let full = PageSet::full(130);
        assert_eq!(full.len(), 130);
        assert!(full.contains(PageId(129)));
        assert!(!full.contains(PageId(130)));
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut s = PageSet::empty();
        assert!(s.insert(PageId(70)));
        assert!(!s.insert(PageId(70)));
        assert!(s.remove(PageId(70)));
        assert!(!s.remove(PageId(70)));
        assert!(s.is_empty());
        assert_eq!(s, PageSet::empty());
    }

    #[test]
    fn iteration_is_ascending() {
        let s = set(&[90, 3, 64, 0, 63]);
        assert_eq!(
            s.to_vec(),
            vec![PageId(0), PageId(3), PageId(63), PageId(64), PageId(90)]
        );
    }

    #[test]
    fn equality_ignores_trailing_words() {
        let mut a = set(&[1, 150]);
        a.remove(PageId(150));
        assert_eq!(a, set(&[1]));
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_page_set(), b in arb_page_set()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
        }

        #[test]
        fn intersection_commutative(a in arb_page_set(), b in arb_page_set()) {
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn difference_removes_common(a in arb_page_set(), b in arb_page_set()) {
            let diff = a.difference(&b);
            for page in diff.iter() {
                prop_assert!(a.contains(page), "diff element {page:?} not in a");
                prop_assert!(!b.contains(page), "diff element {page:?} in b");
            }
            prop_assert!(diff.is_disjoint(&b));
        }

        #[test]
        fn difference_and_intersection_partition(a in arb_page_set(), b in arb_page_set()) {
            let inter = a.intersection(&b);
            let diff = a.difference(&b);
            prop_assert!(inter.is_disjoint(&diff));
            prop_assert_eq!(inter.union(&diff), a.clone());
            prop_assert_eq!(inter.len() + diff.len(), a.len());
        }

        #[test]
        fn disjoint_matches_empty_intersection(a in arb_page_set(), b in arb_page_set()) {
            prop_assert_eq!(a.is_disjoint(&b), a.intersection(&b).is_empty());
        }

        #[test]
        fn subset_of_union(a in arb_page_set(), b in arb_page_set()) {
            let u = a.union(&b);
            prop_assert!(a.is_subset(&u));
            prop_assert!(b.is_subset(&u));
        }

        #[test]
        fn len_matches_iter_count(a in arb_page_set()) {
            prop_assert_eq!(a.len(), a.iter().count());
        }
    }
}
