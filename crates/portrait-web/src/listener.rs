//! Scoped DOM event subscriptions.
//!
//! An [`EventListener`] is registered when created and removed when dropped,
//! so a tile that goes away can never leave a handler behind on `window`.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<F>(target: &web::EventTarget, event: &'static str, handler: F) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref::<js_sys::Function>();
        if let Err(e) = self.target.remove_event_listener_with_callback(self.event, callback) {
            log::warn!("[listener] remove {}: {:?}", self.event, e);
        }
    }
}
