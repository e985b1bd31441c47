use blob_core::{DVec2, FrameInput, InputSender, MotionSampler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub sender: InputSender,
    pub sampler: Rc<RefCell<MotionSampler>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_resize(&w);
    wire_mousemove(&w);
    wire_motion_poll(&w);
    wire_cue_buttons(&w);
}

// Every resize goes to the driver; it debounces and applies the breakpoint.
fn wire_resize(w: &InputWiring) {
    let tx = w.sender.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(viewport) = dom::viewport_size() else {
            return;
        };
        if tx
            .send(FrameInput::Resize {
                viewport_width: viewport.x,
            })
            .is_err()
        {
            log::warn!("[resize] driver gone, dropping event");
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let sampler = w.sampler.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        sampler
            .borrow_mut()
            .record(DVec2::new(ev.screen_x() as f64, ev.screen_y() as f64));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Fixed-rate pointer poll, independent of the frame loop.
fn wire_motion_poll(w: &InputWiring) {
    let sampler = w.sampler.clone();
    let tx = w.sender.clone();
    let interval_ms = sampler.borrow().interval_ms();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(speed) = sampler.borrow_mut().poll() {
            _ = tx.send(FrameInput::Motion(speed));
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        if let Err(e) = wnd.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            log::error!("[motion] setInterval failed: {:?}", e);
        }
    }
    closure.forget();
}

fn wire_cue_buttons(w: &InputWiring) {
    let tx_expand = w.sender.clone();
    if dom::add_click_listener(&w.document, "blob-expand", move || {
        _ = tx_expand.send(FrameInput::CueExpansion);
    }) {
        log::info!("[cue] #blob-expand wired");
    }

    let tx_collapse = w.sender.clone();
    if dom::add_click_listener(&w.document, "blob-collapse", move || {
        _ = tx_collapse.send(FrameInput::CueCollapse);
    }) {
        log::info!("[cue] #blob-collapse wired");
    }
}
