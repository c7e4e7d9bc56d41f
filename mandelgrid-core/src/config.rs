//! Engine construction parameters.

use crate::error::DomainError;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};

/// Everything needed to construct an engine: pixel grid, initial domain,
/// iteration budget, and the CPU worker count for the pooled backend.
///
/// The default is the classic full-set view: 500×400 pixels over
/// re [-2, 1], im [-1.2, 1.2], budget 255.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub re_domain: (f64, f64),
    pub im_domain: (f64, f64),
    /// Escape-time cap shared by every backend of one engine instance.
    pub max_iterations: u16,
    /// Worker threads for the vectorized backend's row pool.
    pub workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
            re_domain: (-2.0, 1.0),
            im_domain: (-1.2, 1.2),
            max_iterations: 255,
            workers: 8,
        }
    }
}

impl EngineConfig {
    /// Build the initial viewport, validating dimensions and domains.
    pub fn viewport(&self) -> Result<Viewport, DomainError> {
        Viewport::new(self.width, self.height, self.re_domain, self.im_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_classic_view() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 500);
        assert_eq!(config.height, 400);
        assert_eq!(config.re_domain, (-2.0, 1.0));
        assert_eq!(config.im_domain, (-1.2, 1.2));
        assert_eq!(config.max_iterations, 255);
    }

    #[test]
    fn viewport_reflects_config() {
        let config = EngineConfig::default();
        let vp = config.viewport().unwrap();
        assert_eq!(vp.width(), 500);
        assert_eq!(vp.re_size(), 3.0);
    }

    #[test]
    fn viewport_rejects_bad_config() {
        let config = EngineConfig {
            width: 0,
            ..EngineConfig::default()
        };
        assert!(config.viewport().is_err());
    }

    #[test]
    fn config_json_roundtrip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
