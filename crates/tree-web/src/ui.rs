//! Settings panel wiring. Every numeric field feeds straight into the scene
//! configuration, which clamps silently; the next frame picks the value up
//! with no apply step.

use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{Scene, TreeMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_number_input(
    document: &web::Document,
    element_id: &str,
    mut apply: impl FnMut(f64) + 'static,
) {
    let Some(input) = crate::dom::input_element(document, element_id) else {
        return;
    };
    let input_captured = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        // parse failures become NaN and clamp to the field's low bound
        let v = input_captured.value().trim().parse::<f64>().unwrap_or(f64::NAN);
        apply(v);
    }) as Box<dyn FnMut(_)>);
    let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_settings_panel(
    document: &web::Document,
    scene: Rc<RefCell<Scene>>,
    gpu: Rc<RefCell<Option<GpuState<'static>>>>,
) {
    {
        let scene = scene.clone();
        let gpu = gpu.clone();
        wire_number_input(document, "cfg-foliage", move |v| {
            let mut s = scene.borrow_mut();
            s.set_foliage_count(v as i64);
            if let Some(g) = gpu.borrow_mut().as_mut() {
                g.set_foliage(&s.foliage.vertex_data());
            }
        });
    }
    {
        let scene = scene.clone();
        wire_number_input(document, "cfg-baubles", move |v| {
            scene.borrow_mut().set_bauble_count(v as i64);
        });
    }
    {
        let scene = scene.clone();
        wire_number_input(document, "cfg-lights", move |v| {
            scene.borrow_mut().set_light_count(v as i64);
        });
    }
    {
        let scene = scene.clone();
        wire_number_input(document, "cfg-photos", move |v| {
            scene.borrow_mut().set_photo_count(v as i64);
        });
    }
    {
        let scene = scene.clone();
        wire_number_input(document, "cfg-camera-distance", move |v| {
            scene.borrow_mut().config.set_camera_distance(v as f32);
        });
    }
    {
        let scene = scene.clone();
        wire_number_input(document, "cfg-photo-scale", move |v| {
            scene.borrow_mut().config.set_photo_scale(v as f32);
        });
    }
    {
        let scene = scene.clone();
        wire_number_input(document, "cfg-ring-radius", move |v| {
            scene.borrow_mut().config.set_ring_radius(v as f32);
        });
    }
    {
        let scene = scene.clone();
        wire_number_input(document, "cfg-migration-speed", move |v| {
            scene.borrow_mut().config.set_migration_speed(v as f32);
        });
    }

    // direct mode buttons beside the cycle-on-click canvas gesture
    {
        let scene = scene.clone();
        crate::dom::add_click_listener(document, "mode-scattered", move || {
            scene.borrow_mut().set_mode(TreeMode::Scattered);
        });
    }
    {
        let scene = scene.clone();
        crate::dom::add_click_listener(document, "mode-assembled", move || {
            scene.borrow_mut().set_mode(TreeMode::Assembled);
        });
    }
    {
        let scene = scene.clone();
        crate::dom::add_click_listener(document, "mode-wall", move || {
            scene.borrow_mut().enter_photo_wall();
        });
    }
}
