#![cfg(target_arch = "wasm32")]
use blob_core::{Blob, BlobConfig, BlobDriver, FrameInput, InputSender, InstantClock, MotionSampler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod frame;

use canvas::CanvasSurface;
use frame::WebDriver;

const CANVAS_ID: &str = "vector_canvas";

/// The one blob of this page, plus a handle for feeding it inputs.
struct App {
    driver: Rc<RefCell<WebDriver>>,
    sender: InputSender,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn send(input: FrameInput) {
    APP.with(|app| {
        if let Some(app) = app.borrow().as_ref() {
            _ = app.sender.send(input);
        } else {
            log::warn!("blob not started; dropping {:?}", input);
        }
    });
}

/// Read-only access to the running driver.
fn with_driver<T>(f: impl FnOnce(&WebDriver) -> T) -> Option<T> {
    APP.with(|app| {
        app.borrow()
            .as_ref()
            .and_then(|app| app.driver.try_borrow().ok().map(|d| f(&d)))
    })
}

#[wasm_bindgen]
pub fn cue_expansion() {
    send(FrameInput::CueExpansion);
}

#[wasm_bindgen]
pub fn cue_collapse() {
    send(FrameInput::CueCollapse);
}

#[wasm_bindgen]
pub fn blob_shape_state() -> Option<String> {
    with_driver(|d| d.blob().shape_state().to_string())
}

#[wasm_bindgen]
pub fn blob_energy_state() -> Option<String> {
    with_driver(|d| d.blob().energy_state().to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blob-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document: web::Document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let surface = CanvasSurface::new(canvas)?;

    let blob = Blob::new(BlobConfig::default(), surface, InstantClock::new())?;
    let driver = BlobDriver::new(blob);
    let sender = driver.sender();
    let driver = Rc::new(RefCell::new(driver));

    events::wire_input_handlers(events::InputWiring {
        document,
        sender: sender.clone(),
        sampler: Rc::new(RefCell::new(MotionSampler::default())),
    });

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            driver: driver.clone(),
            sender,
        });
    });

    frame::start_loop(driver);
    Ok(())
}
