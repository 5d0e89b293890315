//! Browser binding for `driftboat`: `initBoatDrag(options, createSplash?, getBoatBottomPx?)`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use driftboat::{DragConfig, DragController, RestContext};

mod dom;
mod surface;
mod wire;

use surface::DomSurface;
use wire::{Driver, JsSplash};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook_set();
    console_log::init_with_level(log::Level::Info).ok();
}

fn console_error_panic_hook_set() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        web_sys::console::error_1(&msg.into());
    }));
}

/// Handle returned to the page.
#[wasm_bindgen]
pub struct BoatDrag {
    driver: Rc<Driver>,
}

#[wasm_bindgen]
impl BoatDrag {
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> HtmlElement {
        self.driver.controller.borrow().surface().element().clone()
    }

    #[wasm_bindgen(getter)]
    pub fn container(&self) -> HtmlElement {
        self.driver.controller.borrow().surface().container().clone()
    }

    #[wasm_bindgen(js_name = getWaveOffset)]
    pub fn wave_offset(&self) -> f64 {
        self.driver.with(|c| c.wave_offset()).unwrap_or(f64::NAN)
    }

    /// Freeze the boat where it is on screen. Returns `[left, top]` in container px.
    #[wasm_bindgen(js_name = lockPosition)]
    pub fn lock_position(&self) -> Vec<f64> {
        self.driver
            .with(|c| c.freeze_position())
            .map(|p| vec![p.x, p.y])
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = resumeDrift)]
    pub fn resume_drift(&self, x: f64) {
        self.driver.with(|c| c.resume_drift(x, dom::now()));
    }
}

/// Bind the controller. Returns `undefined` when the element or container is missing
/// or the options are invalid.
#[wasm_bindgen(js_name = initBoatDrag)]
pub fn init_boat_drag(
    options: JsValue,
    create_splash: Option<js_sys::Function>,
    get_boat_bottom_px: Option<js_sys::Function>,
) -> Option<BoatDrag> {
    let config = match parse_options(&options) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("initBoatDrag: {}", e);
            return None;
        }
    };
    let surface = match DomSurface::bind(&config) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("initBoatDrag: {}", e);
            return None;
        }
    };
    let element = surface.element().clone();
    let container = surface.container().clone();

    let mut controller = DragController::new(surface, config, JsSplash::new(create_splash)).ok()?;
    if let Some(f) = get_boat_bottom_px {
        controller = controller.with_rest_offset(move |ctx: &RestContext| {
            call_rest_offset(&f, ctx, &element, &container)
        });
    }
    log::info!("boat drag bound in phase {:?}", controller.phase());

    let driver = Driver::new(controller);
    wire::attach(&driver);
    Some(BoatDrag { driver })
}

fn parse_options(options: &JsValue) -> Result<DragConfig, driftboat::DragError> {
    if options.is_undefined() || options.is_null() {
        return Ok(DragConfig::default());
    }
    let json: String = js_sys::JSON::stringify(options)
        .map_err(|e| driftboat::DragError::Config(format!("{:?}", e)))?
        .into();
    DragConfig::from_json(&json)
}

/// `getBoatBottomPx({ bgRect, waveY, boat, container })`. Anything but a finite number
/// falls back to the default formula.
fn call_rest_offset(
    f: &js_sys::Function,
    ctx: &RestContext,
    element: &HtmlElement,
    container: &HtmlElement,
) -> f64 {
    let rect = js_sys::Object::new();
    let r = &ctx.container;
    for (k, v) in [
        ("left", r.left),
        ("top", r.top),
        ("width", r.width),
        ("height", r.height),
        ("right", r.right()),
        ("bottom", r.bottom()),
    ] {
        js_sys::Reflect::set(&rect, &k.into(), &v.into()).ok();
    }
    let arg = js_sys::Object::new();
    js_sys::Reflect::set(&arg, &"bgRect".into(), &rect).ok();
    js_sys::Reflect::set(&arg, &"waveY".into(), &ctx.wave_offset.into()).ok();
    js_sys::Reflect::set(&arg, &"boat".into(), element).ok();
    js_sys::Reflect::set(&arg, &"container".into(), container).ok();
    match f.call1(&JsValue::NULL, &arg) {
        Ok(v) => v.as_f64().unwrap_or(f64::NAN),
        Err(e) => {
            log::warn!("getBoatBottomPx threw: {:?}", e);
            f64::NAN
        }
    }
}
