//! Render-loop driver: one callback per display frame, which advances the
//! scene and turns it into draw data for the GPU.

use crate::camera::OrbitCamera;
use crate::constants::{FOLIAGE_COLOR, FOLIAGE_POINT_SCALE};
use crate::input;
use crate::render::{self, CardInstance, SceneDraw, SpriteInstance, Uniforms};
use glam::{EulerRot, Mat4, Quat, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{photo_quads, FrameInput, QuadKind, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Rc<RefCell<Option<render::GpuState<'static>>>>,
    pub last_instant: Instant,
    pub time: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(0.1); // tab-switch guard
        self.last_instant = now;
        self.time += dt;

        let mut scene = self.scene.borrow_mut();
        {
            let mut cam = self.camera.borrow_mut();
            cam.distance = scene.config.camera_distance;
            cam.advance(dt, self.mouse.borrow().down);
        }
        let cam = self.camera.borrow();
        let input = FrameInput {
            dt,
            time: self.time,
            camera_eye: cam.eye(),
            camera_target: cam.target(),
        };
        scene.update(&input);

        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let draw = build_draw(&scene, &cam, self.time, w, h);
            if let Err(e) = g.render(&draw) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Flatten the scene into instance buffers for the renderer.
fn build_draw(scene: &Scene, camera: &OrbitCamera, time: f32, width: u32, height: u32) -> SceneDraw {
    let (cam_right, cam_up) = camera.basis();
    let field = scene.foliage.uniforms(time, FOLIAGE_POINT_SCALE);
    let uniforms = Uniforms {
        view_proj: camera.view_proj(width, height).to_cols_array_2d(),
        cam_right: [cam_right.x, cam_right.y, cam_right.z, 0.0],
        cam_up: [cam_up.x, cam_up.y, cam_up.z, 0.0],
        params: [field.progress, field.time, field.point_scale, 0.0],
        color: FOLIAGE_COLOR,
    };

    let formed_blend = scene.foliage.progress();
    let mut sprites = Vec::with_capacity(scene.lights.len());
    for l in scene.lights.lights() {
        sprites.push(SpriteInstance {
            pos: l.position.to_array(),
            scale: 0.35,
            color: [l.color[0], l.color[1], l.color[2], 0.95],
            emissive: l.emissive(time, formed_blend),
        });
    }

    let quads = photo_quads();
    let mut cards =
        Vec::with_capacity(scene.baubles.len() + scene.photos.len() * quads.len());
    for b in scene.baubles.baubles() {
        let rot = Quat::from_euler(EulerRot::YXZ, b.rotation.y, b.rotation.x, b.rotation.z);
        let model =
            Mat4::from_scale_rotation_translation(Vec3::splat(b.scale), rot, b.position);
        cards.push(CardInstance {
            model: model.to_cols_array_2d(),
            tint: [b.color[0], b.color[1], b.color[2], 1.0],
            layer: -1.0,
            _pad: [0.0; 3],
        });
    }
    for o in scene.photos.ornaments() {
        let rot = Quat::from_euler(EulerRot::YXZ, o.rotation.y, o.rotation.x, o.rotation.z);
        let base = Mat4::from_scale_rotation_translation(Vec3::splat(o.scale), rot, o.position);
        for q in &quads {
            let local = Mat4::from_translation(q.local_offset)
                * Mat4::from_rotation_y(q.yaw)
                * Mat4::from_scale(Vec3::new(q.size.x, q.size.y, 1.0));
            let (tint, layer) = match q.kind {
                QuadKind::Face => ([1.0, 1.0, 1.0, 1.0], o.texture_index as f32),
                QuadKind::Border => (
                    [o.border_color[0], o.border_color[1], o.border_color[2], 1.0],
                    -1.0,
                ),
            };
            cards.push(CardInstance {
                model: (base * local).to_cols_array_2d(),
                tint,
                layer,
                _pad: [0.0; 3],
            });
        }
    }

    SceneDraw {
        uniforms,
        sprites,
        cards,
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
