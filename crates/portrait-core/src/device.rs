//! Desktop/mobile strategy selection for the gallery.
//!
//! The transform engine never looks at the device; the gallery picks a
//! strategy once and resolves every tile's variant through it.

use crate::config::{PortraitConfig, PortraitVariant};
use crate::constants::MOBILE_MAX_VIEWPORT_PX;
use crate::style::Variant;

const MOBILE_AGENT_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceStrategy {
    /// Pointer hover, tiles in a grid.
    Desktop,
    /// Device tilt, one tile at a time.
    Mobile,
}

impl DeviceStrategy {
    /// Mobile when the user agent names a handheld platform or the viewport
    /// is narrow.
    pub fn classify(user_agent: &str, inner_width: f64) -> Self {
        let agent = user_agent.to_ascii_lowercase();
        let mobile_agent = MOBILE_AGENT_MARKERS.iter().any(|m| agent.contains(m));
        if mobile_agent || inner_width <= MOBILE_MAX_VIEWPORT_PX {
            DeviceStrategy::Mobile
        } else {
            DeviceStrategy::Desktop
        }
    }

    /// Variant a tile is rendered with under this strategy.
    pub fn variant_for(self, config: &PortraitConfig) -> Variant {
        match (self, config.variant) {
            (DeviceStrategy::Mobile, _) => Variant::Mobile,
            (DeviceStrategy::Desktop, PortraitVariant::Standard) => Variant::Desktop,
            (DeviceStrategy::Desktop, PortraitVariant::Rainbow) => Variant::Rainbow,
        }
    }
}
