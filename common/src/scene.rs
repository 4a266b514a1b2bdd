//! Top-level scenes.
//!
//! - [`Scene::Menu`]: Title screen with the pulsing "press A" prompt
//! - [`Scene::Rain`]: The rain simulation

/// Active scene of the game loop.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Scene {
    /// Title menu. Initial scene.
    #[default]
    Menu,

    /// Rain simulation with wind, speed, mood and thunder controls.
    Rain,
}

impl Scene {
    /// Short label for the debug log.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Menu => "MENU",
            Self::Rain => "RAIN",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_default() {
        assert_eq!(Scene::default(), Scene::Menu);
    }

    #[test]
    fn test_labels_are_renderable() {
        for scene in [Scene::Menu, Scene::Rain] {
            assert!(scene.label().chars().all(crate::font::is_supported));
        }
    }
}
