//! Flat (non-hierarchical) fixtures.
//!
//! Each page is given to a random nonempty subset of guests, independently
//! of every other page. There is no tree and no disjointness search.

use rand::Rng;
use serde::Serialize;
use sharegen_core::{max_page_count, random_guest_pages, ConfigError, PageSet};

/// Parameters of a general fixture session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Size `P` of the page universe.
    pub instance_page_count: u32,
    /// Number of guests `G`.
    pub guest_count: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            instance_page_count: 40,
            guest_count: 40,
        }
    }
}

impl GeneralConfig {
    /// Check that there is at least one guest to give pages to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guest_count == 0 {
            return Err(ConfigError::NoGuests);
        }
        Ok(())
    }
}

/// A flat fixture: every guest's page set plus the capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneralInstance {
    /// Page sets, indexed by guest id.
    pub guests: Vec<PageSet>,
    /// Largest per-guest page-set size.
    pub capacity: usize,
}

/// Generate a general fixture.
///
/// # Errors
///
/// [`ConfigError::NoGuests`] if `guest_count` is zero.
pub fn generate_general<R: Rng + ?Sized>(
    config: &GeneralConfig,
    rng: &mut R,
) -> Result<GeneralInstance, ConfigError> {
    config.validate()?;
    let guests = random_guest_pages(rng, config.instance_page_count, config.guest_count);
    let capacity = max_page_count(&guests);
    tracing::debug!(guests = guests.len(), capacity, "generated general fixture");
    Ok(GeneralInstance {
        guests: guests.into_values().collect(),
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_page_is_owned() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let instance = generate_general(&GeneralConfig::default(), &mut rng).unwrap();
        assert_eq!(instance.guests.len(), 40);
        let mut all = PageSet::empty();
        for pages in &instance.guests {
            all.union_with(pages);
        }
        assert_eq!(all, PageSet::full(40));
        assert_eq!(
            instance.capacity,
            instance.guests.iter().map(PageSet::len).max().unwrap()
        );
    }

    #[test]
    fn zero_guests_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = GeneralConfig {
            instance_page_count: 5,
            guest_count: 0,
        };
        assert_eq!(
            generate_general(&config, &mut rng),
            Err(ConfigError::NoGuests)
        );
    }
}
