//! Gallery composition: reads tile configs from the page, picks a device
//! strategy and mounts the tiles as a grid or a one-at-a-time carousel.

use crate::dom;
use crate::listener::EventListener;
use crate::portrait::PortraitView;
use anyhow::anyhow;
use portrait_core::carousel::{zone_for, Carousel};
use portrait_core::{CalibrationProfile, DeviceStrategy, PortraitConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const GALLERY_ROOT_ID: &str = "portrait-gallery";

const GRID_CLASS: &str =
    "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 justify-items-center max-w-6xl mx-auto px-4";
const CAROUSEL_CLASS: &str = "relative w-full select-none";
const DOTS_CLASS: &str = "flex justify-center gap-2 mt-4";
const DOT_CLASS: &str = "w-2 h-2 rounded-full bg-white/40";
const DOT_ACTIVE_CLASS: &str = "w-2 h-2 rounded-full bg-white";

struct Slides {
    carousel: Carousel,
    slots: Vec<web::HtmlElement>,
    dots: Vec<web::HtmlElement>,
}

impl Slides {
    fn show_current(&self) {
        let current = self.carousel.index();
        for (i, slot) in self.slots.iter().enumerate() {
            dom::set_visible(slot, i == current);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dot.set_class_name(if i == current { DOT_ACTIVE_CLASS } else { DOT_CLASS });
        }
    }
}

pub struct Gallery {
    root: web::Element,
    configs: Vec<PortraitConfig>,
    strategy: DeviceStrategy,
    tiles: Vec<PortraitView>,
    slides: Option<Rc<RefCell<Slides>>>,
    listeners: Vec<EventListener>,
}

impl Gallery {
    pub fn strategy(&self) -> DeviceStrategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.slides.as_ref().map(|s| s.borrow().carousel.index())
    }

    /// Configs the gallery was mounted with, for remounting.
    pub fn configs(&self) -> &[PortraitConfig] {
        &self.configs
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len() + self.tiles.iter().map(|t| t.listener_count()).sum::<usize>()
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        self.tiles.clear();
        self.root.set_inner_html("");
    }
}

pub fn detect_strategy(window: &web::Window) -> DeviceStrategy {
    let agent = window.navigator().user_agent().unwrap_or_default();
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX);
    DeviceStrategy::classify(&agent, width)
}

/// Each child of the gallery root describes one tile through `data-*`
/// attributes. Children that fail to parse are logged and skipped.
pub fn read_configs(root: &web::Element) -> Vec<PortraitConfig> {
    let children = root.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| {
            match PortraitConfig::from_attributes(|key| dom::data_attribute(&el, key)) {
                Ok(config) => Some(config),
                Err(e) => {
                    log::warn!("[gallery] skipping tile: {}", e);
                    None
                }
            }
        })
        .collect()
}

pub fn root(document: &web::Document) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(GALLERY_ROOT_ID)
        .ok_or_else(|| anyhow!("missing #{}", GALLERY_ROOT_ID))
}

pub fn mount(
    document: &web::Document,
    configs: Vec<PortraitConfig>,
    strategy: DeviceStrategy,
    profile: CalibrationProfile,
) -> anyhow::Result<Gallery> {
    let root = root(document)?;
    root.set_inner_html("");
    log::info!("[gallery] {} tiles, {:?} layout", configs.len(), strategy);

    match strategy {
        DeviceStrategy::Desktop => mount_grid(document, root, configs),
        DeviceStrategy::Mobile => mount_carousel(document, root, configs, profile),
    }
}

fn mount_grid(
    document: &web::Document,
    root: web::Element,
    configs: Vec<PortraitConfig>,
) -> anyhow::Result<Gallery> {
    root.set_class_name(GRID_CLASS);
    let strategy = DeviceStrategy::Desktop;
    let tiles = configs
        .iter()
        .cloned()
        .map(|config| {
            let variant = strategy.variant_for(&config);
            PortraitView::mount(document, &root, config, variant, CalibrationProfile::default())
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Gallery {
        root,
        configs,
        strategy,
        tiles,
        slides: None,
        listeners: Vec::new(),
    })
}

fn mount_carousel(
    document: &web::Document,
    root: web::Element,
    configs: Vec<PortraitConfig>,
    profile: CalibrationProfile,
) -> anyhow::Result<Gallery> {
    root.set_class_name(CAROUSEL_CLASS);
    let strategy = DeviceStrategy::Mobile;
    let stage: web::HtmlElement = dom::create(document, "div")?;
    stage.set_class_name("relative flex justify-center");
    let dots_row: web::HtmlElement = dom::create(document, "div")?;
    dots_row.set_class_name(DOTS_CLASS);
    dom::append(&root, &stage)?;
    dom::append(&root, &dots_row)?;

    let mut tiles = Vec::with_capacity(configs.len());
    let mut slots = Vec::with_capacity(configs.len());
    let mut dots = Vec::with_capacity(configs.len());
    for config in configs.iter().cloned() {
        let slot: web::HtmlElement = dom::create(document, "div")?;
        dom::append(&stage, &slot)?;
        let variant = strategy.variant_for(&config);
        tiles.push(PortraitView::mount(document, &slot, config, variant, profile)?);
        slots.push(slot);

        let dot: web::HtmlElement = dom::create(document, "button")?;
        dom::append(&dots_row, &dot)?;
        dots.push(dot);
    }

    let slides = Rc::new(RefCell::new(Slides {
        carousel: Carousel::new(tiles.len()),
        slots,
        dots,
    }));
    slides.borrow().show_current();

    let mut listeners = Vec::new();
    {
        let slides = slides.clone();
        let target = stage.clone();
        listeners.push(EventListener::new(&stage, "click", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let zone = zone_for(ev.client_x() as f64 - rect.left(), rect.width());
            let mut s = slides.borrow_mut();
            let index = s.carousel.navigate(zone);
            log::debug!("[gallery] {:?} zone -> slide {}", zone, index);
            s.show_current();
        })?);
    }
    let dot_elements = slides.borrow().dots.clone();
    for (i, dot) in dot_elements.iter().enumerate() {
        let slides = slides.clone();
        listeners.push(EventListener::new(dot, "click", move |_ev: web::Event| {
            let mut s = slides.borrow_mut();
            s.carousel.select(i);
            s.show_current();
        })?);
    }

    Ok(Gallery {
        root,
        configs,
        strategy,
        tiles,
        slides: Some(slides),
        listeners,
    })
}
