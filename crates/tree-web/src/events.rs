//! Pointer and keyboard wiring: orbit dragging, click-to-cycle, photo
//! picking, and the keyboard shortcuts.

use crate::camera::{screen_to_world_ray, OrbitCamera};
use crate::constants::{
    DRAG_CLICK_SLOP_PX, DRAG_HEIGHT_SENSITIVITY, DRAG_YAW_SENSITIVITY, PICK_RADIUS_FACTOR,
};
use crate::input;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{Scene, TreeMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Nearest photo hit by the ray, if any. Pick radius scales with the photo so
/// enlarged selected prints stay easy to hit.
pub fn pick_photo(scene: &Scene, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, o) in scene.photos.ornaments().iter().enumerate() {
        let radius = o.scale * PICK_RADIUS_FACTOR;
        if let Some(t) = input::ray_sphere(ray_origin, ray_dir, o.position, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<Scene>>,
    canvas: &web::HtmlCanvasElement,
) {
    match ev.key().as_str() {
        " " => {
            scene.borrow_mut().cycle_mode();
            ev.prevent_default();
        }
        "1" => scene.borrow_mut().set_mode(TreeMode::Scattered),
        "2" => scene.borrow_mut().set_mode(TreeMode::Assembled),
        "3" => scene.borrow_mut().enter_photo_wall(),
        "Enter" => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    doc.exit_fullscreen();
                } else {
                    let _ = canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(doc) = crate::dom::window_document() {
                doc.exit_fullscreen();
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<Scene>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &scene, &canvas);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// 'H' toggles the help overlay independently of the scene shortcuts
pub fn wire_overlay_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if key == "h" || key == "H" {
                crate::overlay::toggle(&doc);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
}

pub fn wire_pointer_handlers(w: InputWiring) {
    // pointerdown: start a potential drag
    {
        let mouse = w.mouse.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas);
            let mut ms = mouse.borrow_mut();
            ms.down = true;
            ms.dragged = false;
            ms.x = pos.x;
            ms.y = pos.y;
            ms.down_x = pos.x;
            ms.down_y = pos.y;
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove: orbit while down
    {
        let mouse = w.mouse.clone();
        let camera = w.camera.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_canvas_px(&ev, &canvas);
            let mut ms = mouse.borrow_mut();
            if ms.down {
                let dx = pos.x - ms.x;
                let dy = pos.y - ms.y;
                let mut cam = camera.borrow_mut();
                cam.angle -= dx * DRAG_YAW_SENSITIVITY;
                cam.height = (cam.height + dy * DRAG_HEIGHT_SENSITIVITY).clamp(-20.0, 30.0);
                let moved_x = pos.x - ms.down_x;
                let moved_y = pos.y - ms.down_y;
                if (moved_x * moved_x + moved_y * moved_y).sqrt() > DRAG_CLICK_SLOP_PX {
                    ms.dragged = true;
                }
            }
            ms.x = pos.x;
            ms.y = pos.y;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup: click actions unless this was a drag
    {
        let mouse = w.mouse.clone();
        let camera = w.camera.clone();
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let was_drag = {
                let mut ms = mouse.borrow_mut();
                let was = ms.down && ms.dragged;
                ms.down = false;
                was
            };
            if !was_drag {
                let pos = input::pointer_canvas_px(&ev, &canvas);
                let (ro, rd) = screen_to_world_ray(&canvas, &camera.borrow(), pos.x, pos.y);
                let mut s = scene.borrow_mut();
                let hit = pick_photo(&s, ro, rd);
                match hit {
                    Some(i) if s.state.photo_wall => {
                        log::info!("[click] photo {i}");
                        s.click_photo(i);
                    }
                    _ => s.cycle_mode(),
                }
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
