#![cfg(target_arch = "wasm32")]
//! WASM entry point: builds the scene, brings up WebGPU, wires the DOM and
//! starts the render loop.

pub mod assets;
pub mod camera;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod render;
pub mod ui;

use crate::camera::OrbitCamera;
use crate::constants::REDUCED_TIER_MAX_CORES;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{DeviceTier, Scene, SceneConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn detect_tier() -> DeviceTier {
    let cores = web::window()
        .map(|w| w.navigator().hardware_concurrency())
        .unwrap_or(REDUCED_TIER_MAX_CORES as f64);
    if cores <= REDUCED_TIER_MAX_CORES as f64 {
        DeviceTier::Reduced
    } else {
        DeviceTier::Full
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    {
        // keep the backing store matched to CSS size on window resize
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let tier = detect_tier();
    let images = assets::bundled_image_set();
    let seed = js_sys::Date::now() as u64;
    let scene = Rc::new(RefCell::new(Scene::new(
        SceneConfig::default(),
        tier,
        images,
        seed,
    )));
    let camera = Rc::new(RefCell::new(OrbitCamera::new(
        scene.borrow().config.camera_distance,
    )));
    let mouse = Rc::new(RefCell::new(input::MouseState::default()));

    let gpu = Rc::new(RefCell::new(frame::init_gpu(&canvas).await));
    {
        let mut g = gpu.borrow_mut();
        if let Some(g) = g.as_mut() {
            g.set_foliage(&scene.borrow().foliage.vertex_data());
        }
    }
    assets::refresh_photo_textures(&gpu, &scene.borrow().images);

    events::wire_global_keydown(scene.clone(), canvas.clone());
    events::wire_overlay_toggle_h(&document);
    events::wire_pointer_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        camera: camera.clone(),
        mouse: mouse.clone(),
    });
    ui::wire_settings_panel(&document, scene.clone(), gpu.clone());
    assets::wire_upload_input(&document, scene.clone(), gpu.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        mouse,
        canvas,
        gpu,
        last_instant: Instant::now(),
        time: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
