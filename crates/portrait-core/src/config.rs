//! Caller-owned description of one portrait tile.

use crate::error::ConfigError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PortraitSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Fills the container; hides the mobile debug readout.
    Fullscreen,
}

impl PortraitSize {
    /// Fixed dimension classes for the photo element.
    pub fn classes(self) -> &'static str {
        match self {
            PortraitSize::Small => "w-16 h-16",
            PortraitSize::Medium => "w-24 h-24",
            PortraitSize::Large => "w-64 h-84",
            PortraitSize::Fullscreen => "w-full h-full",
        }
    }
}

impl FromStr for PortraitSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(PortraitSize::Small),
            "medium" => Ok(PortraitSize::Medium),
            "large" => Ok(PortraitSize::Large),
            "fullscreen" => Ok(PortraitSize::Fullscreen),
            _ => Err(ConfigError::UnknownSize(s.to_string())),
        }
    }
}

/// Finish used when the tile is shown on a pointer device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PortraitVariant {
    #[default]
    Standard,
    Rainbow,
}

impl FromStr for PortraitVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "" => Ok(PortraitVariant::Standard),
            "rainbow" => Ok(PortraitVariant::Rainbow),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Everything a tile needs besides live input. Asset sources are opaque URIs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortraitConfig {
    pub name: String,
    pub image_src: String,
    pub size: PortraitSize,
    pub show_glare: bool,
    pub glare_mask_src: Option<String>,
    /// Only consumed by the rainbow finish.
    pub rainbow_mask_src: Option<String>,
    pub variant: PortraitVariant,
}

impl PortraitConfig {
    pub fn new(name: impl Into<String>, image_src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_src: image_src.into(),
            size: PortraitSize::default(),
            show_glare: true,
            glare_mask_src: None,
            rainbow_mask_src: None,
            variant: PortraitVariant::default(),
        }
    }

    pub fn size(mut self, size: PortraitSize) -> Self {
        self.size = size;
        self
    }

    pub fn show_glare(mut self, show: bool) -> Self {
        self.show_glare = show;
        self
    }

    /// An empty source is treated as "no mask".
    pub fn glare_mask(mut self, src: impl Into<String>) -> Self {
        self.glare_mask_src = non_empty(src.into());
        self
    }

    pub fn rainbow_mask(mut self, src: impl Into<String>) -> Self {
        self.rainbow_mask_src = non_empty(src.into());
        self
    }

    pub fn variant(mut self, variant: PortraitVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Alt text for the photo.
    pub fn alt_text(&self) -> String {
        format!("Portrait of {}", self.name)
    }

    /// Build a config from string attributes such as an element's `data-*`
    /// set. Recognized keys: `name`, `src`, `size`, `glare`, `glare-mask`,
    /// `rainbow-mask`, `variant`.
    pub fn from_attributes<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = get("name").unwrap_or_default();
        let image_src = get("src").filter(|s| !s.trim().is_empty());
        let Some(image_src) = image_src else {
            return Err(ConfigError::MissingImage(name));
        };
        let mut config = PortraitConfig::new(name, image_src);
        if let Some(size) = get("size") {
            config = config.size(size.parse()?);
        }
        if let Some(glare) = get("glare") {
            config = config.show_glare(!matches!(glare.trim(), "false" | "0" | "off"));
        }
        if let Some(mask) = get("glare-mask") {
            config = config.glare_mask(mask);
        }
        if let Some(mask) = get("rainbow-mask") {
            config = config.rainbow_mask(mask);
        }
        if let Some(variant) = get("variant") {
            config = config.variant(variant.parse()?);
        }
        Ok(config)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
