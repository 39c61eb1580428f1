//! Declarative style descriptions for each portrait variant.
//!
//! Nothing here touches the DOM. A [`PortraitLayers`] value lists, per element,
//! the class names and CSS properties that should be applied for a given
//! [`TransformState`]; the web front-end copies them onto real elements and
//! leaves blending, masking and easing to the browser compositor.

use crate::config::{PortraitConfig, PortraitSize};
use crate::constants::*;
use crate::state::TransformState;
use crate::tile::DebugReadout;

pub const CONTAINER_CLASS: &str = "portrait-container relative cursor-pointer overflow-hidden rounded-lg";
pub const MOBILE_CONTAINER_CLASS: &str = "portrait-container relative overflow-hidden rounded-lg touch-none";
pub const GLARE_CLASS: &str = "absolute inset-0 pointer-events-none z-20";
pub const RAINBOW_GLARE_CLASS: &str = "rainbow-glare";
pub const DEBUG_READOUT_CLASS: &str = "absolute bottom-0 left-0 right-0 text-white text-center p-4 z-30";

/// Ordered list of CSS declarations. Later `set` calls replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    props: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.props.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.props.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.props.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Serialize as an inline `style` attribute value.
    pub fn to_css_text(&self) -> String {
        self.props
            .iter()
            .map(|(n, v)| format!("{}: {};", n, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One positioned element: its classes and inline style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    pub class: String,
    pub style: Style,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    pub class: String,
    pub style: Style,
}

/// The mask-textured glare layer. `opacity` is the raw, unclamped value also
/// written into the layer's style.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedGlare {
    pub layer: Layer,
    pub opacity: f64,
}

/// Damped spring (unit mass) the browser should approximate when easing the
/// tile toward its new rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
}

impl Spring {
    pub const DESKTOP: Self = Self {
        stiffness: DESKTOP_SPRING_STIFFNESS,
        damping: DESKTOP_SPRING_DAMPING,
    };
    pub const MOBILE: Self = Self {
        stiffness: MOBILE_SPRING_STIFFNESS,
        damping: MOBILE_SPRING_DAMPING,
    };

    /// Damping ratio; 1 is critical.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Approximate 2% settling time in seconds.
    pub fn settle_time_secs(&self) -> f64 {
        let omega = self.stiffness.sqrt();
        let zeta = self.damping_ratio();
        if omega <= 0.0 || zeta <= 0.0 {
            return 0.0;
        }
        let decay = if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        4.0 / decay
    }

    /// CSS `transition` value easing `property` over the settle time.
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{} {:.3}s cubic-bezier(0.2, 0.8, 0.2, 1)",
            property,
            self.settle_time_secs()
        )
    }
}

/// Pointer state published for effects defined outside this crate (for
/// example a stylesheet rainbow gradient keyed off CSS custom properties).
#[derive(Clone, Debug, PartialEq)]
pub struct StyleHooks {
    pub mask_uri: Option<String>,
    pub glare_mask_uri: Option<String>,
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub pointer_from_center: f64,
}

impl StyleHooks {
    pub fn from_state(config: &PortraitConfig, state: &TransformState) -> Self {
        Self {
            mask_uri: config.rainbow_mask_src.clone(),
            glare_mask_uri: config.glare_mask_src.clone(),
            pointer_x: state.glare_x,
            pointer_y: state.glare_y,
            pointer_from_center: state.pointer_from_center(),
        }
    }

    /// Custom property declarations, e.g. `("--pointer-x", "42")`.
    pub fn custom_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--rainbow-mask", css_url(self.mask_uri.as_deref().unwrap_or(""))),
            ("--background-x", self.pointer_x.to_string()),
            ("--background-y", self.pointer_y.to_string()),
            ("--pointer-from-center", self.pointer_from_center.to_string()),
            ("--glare-mask", css_url(self.glare_mask_uri.as_deref().unwrap_or(""))),
            ("--pointer-x", self.pointer_x.to_string()),
            ("--pointer-y", self.pointer_y.to_string()),
        ]
    }
}

/// Which component's look to describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Hover-driven tile with the plain glare finish.
    Desktop,
    /// Tilt-driven tile with spring-eased rotation and a debug readout.
    Mobile,
    /// Hover-driven tile with the holographic finish and published hooks.
    Rainbow,
}

impl Variant {
    pub fn spring(self) -> Spring {
        match self {
            Variant::Desktop | Variant::Rainbow => Spring::DESKTOP,
            Variant::Mobile => Spring::MOBILE,
        }
    }
}

/// Full description of a tile for one transform state.
#[derive(Clone, Debug, PartialEq)]
pub struct PortraitLayers {
    pub container: Layer,
    pub photo: Photo,
    pub glare: Option<Layer>,
    pub masked_glare: Option<MaskedGlare>,
    pub hooks: Option<StyleHooks>,
    pub debug: Option<DebugReadout>,
    pub spring: Spring,
}

/// Describe `config` rendered as `variant` at `state`.
///
/// `debug` is only shown by the mobile variant, and never at fullscreen size.
pub fn describe(
    variant: Variant,
    config: &PortraitConfig,
    state: &TransformState,
    debug: Option<DebugReadout>,
) -> PortraitLayers {
    let spring = variant.spring();
    let glare = config.show_glare.then(|| match variant {
        Variant::Desktop => desktop_glare(state, spring),
        Variant::Mobile => mobile_glare(state, spring),
        Variant::Rainbow => rainbow_glare(state, spring),
    });
    let mask = config
        .glare_mask_src
        .as_deref()
        .filter(|_| config.show_glare);
    let masked_glare = mask.map(|mask| match variant {
        Variant::Desktop | Variant::Mobile => standard_masked_glare(mask, state),
        Variant::Rainbow => rainbow_masked_glare(config, mask, state),
    });
    let hooks = match variant {
        Variant::Rainbow if masked_glare.is_some() => Some(StyleHooks::from_state(config, state)),
        _ => None,
    };
    let debug = match variant {
        Variant::Mobile if config.size != PortraitSize::Fullscreen => debug,
        _ => None,
    };

    PortraitLayers {
        container: container(variant, config.size, state, spring),
        photo: photo(config),
        glare,
        masked_glare,
        hooks,
        debug,
        spring,
    }
}

fn container(variant: Variant, size: PortraitSize, state: &TransformState, spring: Spring) -> Layer {
    let class = match (variant, size) {
        (Variant::Mobile, PortraitSize::Fullscreen) => format!("{} w-full h-full", MOBILE_CONTAINER_CLASS),
        (Variant::Mobile, _) => MOBILE_CONTAINER_CLASS.to_string(),
        _ => CONTAINER_CLASS.to_string(),
    };
    let style = Style::new()
        .with("transform-style", "preserve-3d")
        .with("transform-origin", "center center")
        .with(
            "transform",
            format!("rotateX({}deg) rotateY({}deg)", state.rotate_x, state.rotate_y),
        )
        .with("transition", spring.css_transition("transform"));
    Layer { class, style }
}

fn photo(config: &PortraitConfig) -> Photo {
    Photo {
        src: config.image_src.clone(),
        alt: config.alt_text(),
        class: format!("{} object-cover relative z-10", config.size.classes()),
        style: Style::new()
            .with("backface-visibility", "hidden")
            .with("-webkit-backface-visibility", "hidden"),
    }
}

fn glare_layer(background: String, state: &TransformState, spring: Spring) -> Layer {
    Layer {
        class: GLARE_CLASS.to_string(),
        style: Style::new()
            .with("background", background)
            .with("opacity", state.glare_opacity.to_string())
            .with("mix-blend-mode", "overlay")
            .with("transition", spring.css_transition("opacity")),
    }
}

fn desktop_glare(state: &TransformState, spring: Spring) -> Layer {
    let background = format!(
        "radial-gradient(farthest-side circle at {}% {}%, hsla(0, 0%, 100%, 0.8) 10%, hsla(0, 0%, 100%, 0.65) 20%, hsla(0, 0%, 0%, 0.5) 90%)",
        state.glare_x, state.glare_y
    );
    glare_layer(background, state, spring)
}

// Darker falloff than desktop, always filtered.
fn mobile_glare(state: &TransformState, spring: Spring) -> Layer {
    let mut layer = glare_layer(darker_glare_background(state), state, spring);
    layer.style.set("filter", "brightness(0.7) contrast(1.5)");
    layer
}

fn rainbow_glare(state: &TransformState, spring: Spring) -> Layer {
    let mut layer = glare_layer(darker_glare_background(state), state, spring);
    layer.style.set("filter", "brightness(0.7) contrast(1.5) blur(180px)");
    layer
}

fn darker_glare_background(state: &TransformState) -> String {
    format!(
        "radial-gradient(farthest-side circle at {}% {}%, hsla(0, 0%, 100%, 0.8) 10%, hsla(0, 0%, 100%, 0.5) 20%, hsla(0, 0%, 0%, 0.75) 90%)",
        state.glare_x, state.glare_y
    )
}

fn standard_masked_glare(mask: &str, state: &TransformState) -> MaskedGlare {
    let opacity = state.masked_glare_opacity();
    let style = Style::new()
        .with(
            "background-image",
            format!(
                "radial-gradient(circle at {}% {}%, #fff 5%, #000 50%, #fff 80%), linear-gradient(-45deg, #000 15%, #fff, #000 85%), {}",
                state.glare_x,
                state.glare_y,
                css_url(mask)
            ),
        )
        .with("opacity", opacity.to_string())
        .with(
            "background-position",
            format!(
                "center center, calc(100% * {}) calc(100% * {}), center center",
                state.glare_x / PERCENT_MAX,
                state.glare_y / PERCENT_MAX
            ),
        )
        .with("background-blend-mode", "soft-light, difference")
        .with("background-size", "120% 120%, 200% 200%, cover")
        .with("filter", "brightness(0.8) contrast(1.5) saturate(1)")
        .with("mix-blend-mode", "color-dodge");
    MaskedGlare {
        layer: Layer {
            class: GLARE_CLASS.to_string(),
            style,
        },
        opacity,
    }
}

fn rainbow_masked_glare(config: &PortraitConfig, mask: &str, state: &TransformState) -> MaskedGlare {
    let opacity = state.masked_glare_opacity();
    let url = css_url(mask);
    let mut style = Style::new()
        .with(
            "background-image",
            format!(
                "{url}, {url}, radial-gradient(farthest-corner circle at {}% {}%, hsla(150, 20%, 10%, 1) 10%, hsla(177, 22%, 80%, 0.1) 50%, hsla(0, 0%, 95%, 0.98) 90%)",
                state.glare_x,
                state.glare_y
            ),
        )
        .with("opacity", opacity.to_string())
        .with("background-position", "40% 45%, 55% 55%, center center")
        .with("background-blend-mode", "soft-light, color-burn")
        .with("background-size", "25% 25%, 25% 25%, cover")
        .with("filter", "brightness(1) contrast(1) saturate(0.9)")
        .with("mix-blend-mode", "color-dodge")
        .with("display", "grid")
        .with("grid-area", "1 / 1");
    for (name, value) in StyleHooks::from_state(config, state).custom_properties() {
        style.set(name, value);
    }
    let class = match config.rainbow_mask_src {
        Some(_) => format!("{} {}", GLARE_CLASS, RAINBOW_GLARE_CLASS),
        None => GLARE_CLASS.to_string(),
    };
    MaskedGlare {
        layer: Layer { class, style },
        opacity,
    }
}

/// Wrap a URI for use in a CSS `url()` value.
pub fn css_url(uri: &str) -> String {
    format!("url(\"{}\")", uri.replace('\\', "\\\\").replace('"', "\\\""))
}
