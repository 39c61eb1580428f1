//! A mounted portrait tile.
//!
//! The view owns its tile state machine and the listeners that feed it. Every
//! accepted input re-describes the tile and copies the result onto the DOM;
//! dropping the view unsubscribes the listeners and detaches the elements.

use crate::dom;
use crate::listener::EventListener;
use portrait_core::style::{describe, PortraitLayers, Variant, DEBUG_READOUT_CLASS};
use portrait_core::{
    Bounds, CalibrationProfile, OrientationSample, OrientationTile, PointerSample, PointerTile,
    PortraitConfig, TransformState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

enum Driver {
    Pointer(PointerTile),
    Orientation(OrientationTile),
}

impl Driver {
    fn transform(&self) -> TransformState {
        match self {
            Driver::Pointer(t) => t.transform(),
            Driver::Orientation(t) => t.transform(),
        }
    }
}

struct Elements {
    container: web::HtmlElement,
    glare: Option<web::HtmlElement>,
    masked_glare: Option<web::HtmlElement>,
    readout: Option<(web::HtmlElement, web::HtmlElement)>,
}

struct Tile {
    config: PortraitConfig,
    variant: Variant,
    driver: Driver,
    elements: Elements,
}

impl Tile {
    fn layers(&self) -> PortraitLayers {
        let debug = match &self.driver {
            Driver::Orientation(t) => Some(t.debug()),
            Driver::Pointer(_) => None,
        };
        describe(self.variant, &self.config, &self.driver.transform(), debug)
    }

    fn render(&self) {
        let layers = self.layers();
        let els = &self.elements;
        dom::apply_layer(&els.container, &layers.container);
        if let (Some(el), Some(layer)) = (&els.glare, &layers.glare) {
            dom::apply_layer(el, layer);
        }
        if let (Some(el), Some(masked)) = (&els.masked_glare, &layers.masked_glare) {
            dom::apply_layer(el, &masked.layer);
        }
        if let (Some((beta, gamma)), Some(debug)) = (&els.readout, &layers.debug) {
            beta.set_text_content(Some(&format!("Beta: {}", debug.beta)));
            gamma.set_text_content(Some(&format!("Gamma: {}", debug.gamma)));
        }
    }
}

pub struct PortraitView {
    container: web::HtmlElement,
    tile: Rc<RefCell<Tile>>,
    listeners: Vec<EventListener>,
}

impl PortraitView {
    /// Build the tile's elements under `parent` and start listening for the
    /// input that drives `variant`.
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        config: PortraitConfig,
        variant: Variant,
        profile: CalibrationProfile,
    ) -> anyhow::Result<Self> {
        let driver = match variant {
            Variant::Mobile => Driver::Orientation(OrientationTile::new(profile)),
            Variant::Desktop | Variant::Rainbow => Driver::Pointer(PointerTile::new()),
        };
        let initial = describe(
            variant,
            &config,
            &driver.transform(),
            matches!(driver, Driver::Orientation(_)).then(Default::default),
        );
        let elements = build_elements(document, &initial)?;
        let container = elements.container.clone();
        dom::append(parent, &container)?;

        log::info!("[portrait] mounted {:?} tile for {}", variant, config.name);
        let tile = Rc::new(RefCell::new(Tile {
            config,
            variant,
            driver,
            elements,
        }));
        tile.borrow().render();

        let listeners = match variant {
            Variant::Mobile => wire_orientation(&tile)?,
            Variant::Desktop | Variant::Rainbow => wire_pointer(&container, &tile)?,
        };

        Ok(Self {
            container,
            tile,
            listeners,
        })
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn transform(&self) -> TransformState {
        self.tile.borrow().driver.transform()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for PortraitView {
    fn drop(&mut self) {
        // listeners are released right after this, as fields drop
        self.container.remove();
        log::debug!("[portrait] unmounted {}", self.tile.borrow().config.name);
    }
}

fn build_elements(document: &web::Document, layers: &PortraitLayers) -> anyhow::Result<Elements> {
    let container: web::HtmlElement = dom::create(document, "div")?;

    let photo: web::HtmlImageElement = dom::create(document, "img")?;
    photo.set_src(&layers.photo.src);
    photo.set_alt(&layers.photo.alt);
    photo.set_class_name(&layers.photo.class);
    dom::apply_style(&photo, &layers.photo.style);
    dom::append(&container, &photo)?;

    let glare = match &layers.glare {
        Some(_) => {
            let el: web::HtmlElement = dom::create(document, "div")?;
            dom::append(&container, &el)?;
            Some(el)
        }
        None => None,
    };
    let masked_glare = match &layers.masked_glare {
        Some(_) => {
            let el: web::HtmlElement = dom::create(document, "div")?;
            dom::append(&container, &el)?;
            Some(el)
        }
        None => None,
    };
    let readout = match &layers.debug {
        Some(_) => {
            let panel: web::HtmlElement = dom::create(document, "div")?;
            panel.set_class_name(DEBUG_READOUT_CLASS);
            let beta: web::HtmlElement = dom::create(document, "p")?;
            let gamma: web::HtmlElement = dom::create(document, "p")?;
            dom::append(&panel, &beta)?;
            dom::append(&panel, &gamma)?;
            dom::append(&container, &panel)?;
            Some((beta, gamma))
        }
        None => None,
    };

    Ok(Elements {
        container,
        glare,
        masked_glare,
        readout,
    })
}

fn wire_pointer(
    container: &web::HtmlElement,
    tile: &Rc<RefCell<Tile>>,
) -> anyhow::Result<Vec<EventListener>> {
    let on_move = {
        let tile = tile.clone();
        let target = container.clone();
        EventListener::new(container, "pointermove", move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            // layout may have changed since the last event
            let rect = target.get_bounding_client_rect();
            let bounds = Bounds::new(rect.left(), rect.top(), rect.width(), rect.height());
            let sample = PointerSample::new(ev.client_x() as f64, ev.client_y() as f64);
            let mut t = tile.borrow_mut();
            let moved = match &mut t.driver {
                Driver::Pointer(p) => p.pointer_move(sample, bounds),
                Driver::Orientation(_) => false,
            };
            if moved {
                t.render();
            }
        })?
    };
    let on_leave = {
        let tile = tile.clone();
        EventListener::new(container, "pointerleave", move |_ev: web::Event| {
            let mut t = tile.borrow_mut();
            let left = match &mut t.driver {
                Driver::Pointer(p) => {
                    p.pointer_leave();
                    true
                }
                Driver::Orientation(_) => false,
            };
            if left {
                t.render();
            }
        })?
    };
    Ok(vec![on_move, on_leave])
}

fn wire_orientation(tile: &Rc<RefCell<Tile>>) -> anyhow::Result<Vec<EventListener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tile = tile.clone();
    let on_orientation = EventListener::new(&window, "deviceorientation", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        let sample = OrientationSample::new(ev.beta(), ev.gamma());
        let mut t = tile.borrow_mut();
        if let Driver::Orientation(o) = &mut t.driver {
            o.orientation(sample);
        }
        // readout changes even when the transform does not
        t.render();
    })?;
    Ok(vec![on_orientation])
}
