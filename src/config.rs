//! Page Configuration
//!
//! Tunables shared across sections.

use leptos_tilt::TiltConfig;

use crate::reveal::RevealConfig;

/// Reveal once 10% of a section is on screen, then stop observing
pub const SECTION_REVEAL: RevealConfig = RevealConfig {
    threshold: 0.1,
    trigger_once: true,
};

/// Viewports narrower than this are treated as touch/constrained devices
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Pointer tilt applied to project cards on capable devices
pub const CARD_TILT: TiltConfig = TiltConfig {
    max_angle_x: 12.0,
    max_angle_y: 12.0,
    scale: 1.03,
    glare_enable: true,
    glare_max_opacity: 0.15,
    transition_speed_ms: 250,
    perspective_px: 1000.0,
};

/// Entrance delay step between consecutive cards
pub const CARD_STAGGER_MS: u32 = 100;

/// How long each hero role stays on screen
pub const ROLE_ROTATION_MS: u32 = 2500;

pub const PARTICLE_COUNT: usize = 36;

pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};
