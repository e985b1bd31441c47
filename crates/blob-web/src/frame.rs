use blob_core::{BlobDriver, InstantClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::CanvasSurface;

pub type WebDriver = BlobDriver<CanvasSurface, InstantClock>;

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `energize -> animate -> update` once per display refresh.
pub fn start_loop(driver: Rc<RefCell<WebDriver>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match driver.borrow_mut().frame() {
            Ok(report) if report.resized => log::debug!("[frame] resize applied"),
            Ok(_) => {}
            Err(e) => log::error!("frame error: {}", e),
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
