//! Tree fixture configuration.

use sharegen_core::ConfigError;

/// Parameters of a tree fixture session.
///
/// Defaults reproduce the reference fixtures: 40 pages shared among 40
/// guests, internal nodes fanning out to 2..=4 children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Size `P` of the page universe.
    pub instance_page_count: u32,
    /// Number of guests `G` to place as leaves.
    pub guest_count: u32,
    /// Smallest fan-out drawn for an internal node. Must be >= 1.
    pub min_node_degree: u32,
    /// Largest fan-out drawn for an internal node. Must be >= `min_node_degree`.
    pub max_node_degree: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            instance_page_count: 40,
            guest_count: 40,
            min_node_degree: 2,
            max_node_degree: 4,
        }
    }
}

impl TreeConfig {
    /// Set the universe size.
    pub fn instance_page_count(mut self, count: u32) -> Self {
        self.instance_page_count = count;
        self
    }

    /// Set the guest count.
    pub fn guest_count(mut self, count: u32) -> Self {
        self.guest_count = count;
        self
    }

    /// Set both degree bounds.
    pub fn node_degree(mut self, min: u32, max: u32) -> Self {
        self.min_node_degree = min;
        self.max_node_degree = max;
        self
    }

    /// Check the structural preconditions of a tree build.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoGuests`] if `guest_count` is zero
    /// - [`ConfigError::ZeroDegree`] if `min_node_degree` is zero
    /// - [`ConfigError::DegreeRange`] if `min_node_degree > max_node_degree`
    /// - [`ConfigError::FanOutTooSmall`] if more than one guest must be
    ///   split but `max_node_degree` is 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.guest_count == 0 {
            return Err(ConfigError::NoGuests);
        }
        validate_degrees(self.min_node_degree, self.max_node_degree)?;
        validate_fan_out(self.guest_count as usize, self.max_node_degree)
    }
}

pub(crate) fn validate_degrees(min: u32, max: u32) -> Result<(), ConfigError> {
    if min == 0 {
        return Err(ConfigError::ZeroDegree {
            param: "min_node_degree",
        });
    }
    if min > max {
        return Err(ConfigError::DegreeRange { min, max });
    }
    Ok(())
}

pub(crate) fn validate_fan_out(guests: usize, max: u32) -> Result<(), ConfigError> {
    if guests > 1 && max < 2 {
        return Err(ConfigError::FanOutTooSmall {
            param: "max_node_degree",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(TreeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_guests() {
        let config = TreeConfig::default().guest_count(0);
        assert_eq!(config.validate(), Err(ConfigError::NoGuests));
    }

    #[test]
    fn rejects_zero_min_degree() {
        let config = TreeConfig::default().node_degree(0, 3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDegree {
                param: "min_node_degree"
            })
        );
    }

    #[test]
    fn rejects_inverted_degrees() {
        let config = TreeConfig::default().node_degree(5, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DegreeRange { min: 5, max: 2 })
        );
    }

    #[test]
    fn rejects_unit_fan_out_for_many_guests() {
        let config = TreeConfig::default().node_degree(1, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::FanOutTooSmall {
                param: "max_node_degree"
            })
        );
        assert!(config.guest_count(1).validate().is_ok());
    }

    #[test]
    fn equal_degrees_allowed() {
        let config = TreeConfig::default().node_degree(3, 3);
        assert!(config.validate().is_ok());
    }
}
