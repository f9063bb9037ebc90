//! Image loading: the bundled photo list, the user-upload path, and the
//! async decode of each image into its texture-array layer.
//!
//! Decoding never blocks the frame loop; layers show the neutral placeholder
//! until their image arrives, and a failed decode simply leaves the
//! placeholder in place.

use crate::constants::PHOTO_LAYER_SIZE;
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{ImageRef, ImageSet, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Photos shipped with the page, relative to the served root. The `top_`
/// image lands on the tree apex slot by the ordering rule.
const BUNDLED_PHOTOS: &[&str] = &[
    "photos/top_star.jpg",
    "photos/family_01.jpg",
    "photos/family_02.jpg",
    "photos/family_03.jpg",
    "photos/holiday_01.jpg",
    "photos/holiday_02.jpg",
    "photos/winter_01.jpg",
    "photos/winter_02.jpg",
];

pub fn bundled_image_set() -> ImageSet {
    let entries = BUNDLED_PHOTOS
        .iter()
        .map(|path| ImageRef {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            url: (*path).to_string(),
        })
        .collect();
    ImageSet::new(entries)
}

/// Rebuild the photo texture array for the current image set and kick off an
/// async decode per image.
pub fn refresh_photo_textures(gpu: &Rc<RefCell<Option<GpuState<'static>>>>, images: &ImageSet) {
    {
        let mut g = gpu.borrow_mut();
        if let Some(g) = g.as_mut() {
            g.recreate_photo_array(images.effective_count() as u32);
        }
    }
    for (layer, image) in images.iter().enumerate() {
        let gpu = gpu.clone();
        let url = image.url.clone();
        let name = image.name.clone();
        spawn_local(async move {
            match load_image_rgba(&url).await {
                Ok(rgba) => {
                    if let Some(g) = gpu.borrow_mut().as_mut() {
                        g.write_photo_layer(layer as u32, &rgba);
                    }
                }
                Err(e) => {
                    // placeholder layer stays in place
                    log::warn!("[assets] failed to load {name}: {:?}", e);
                }
            }
        });
    }
}

/// Wire the file picker: a chosen set of images replaces the active list
/// wholesale via object URLs, with the same ordering rule as the bundled set.
pub fn wire_upload_input(
    document: &web::Document,
    scene: Rc<RefCell<Scene>>,
    gpu: Rc<RefCell<Option<GpuState<'static>>>>,
) {
    let Some(input) = crate::dom::input_element(document, "photo-upload") else {
        return;
    };
    let input_captured = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(files) = input_captured.files() else {
            return;
        };
        let mut entries = Vec::with_capacity(files.length() as usize);
        for i in 0..files.length() {
            let Some(file) = files.get(i) else { continue };
            match web::Url::create_object_url_with_blob(&file) {
                Ok(url) => entries.push(ImageRef {
                    name: file.name(),
                    url,
                }),
                Err(e) => log::warn!("[assets] object URL failed for {}: {:?}", file.name(), e),
            }
        }
        if entries.is_empty() {
            return;
        }
        log::info!("[assets] upload replacing image set with {} files", entries.len());
        let mut s = scene.borrow_mut();
        s.set_images(entries);
        refresh_photo_textures(&gpu, &s.images);
    }) as Box<dyn FnMut(_)>);
    let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Decode one image to layer-sized RGBA bytes through a scratch 2D canvas.
async fn load_image_rgba(url: &str) -> Result<Vec<u8>, wasm_bindgen::JsValue> {
    let img = web::HtmlImageElement::new()?;
    img.set_cross_origin(Some("anonymous"));
    let load = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(load).await?;

    let document = crate::dom::window_document()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| wasm_bindgen::JsValue::from_str("not a canvas"))?;
    canvas.set_width(PHOTO_LAYER_SIZE);
    canvas.set_height(PHOTO_LAYER_SIZE);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no 2d context"))?
        .dyn_into()
        .map_err(|_| wasm_bindgen::JsValue::from_str("not a 2d context"))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &img,
        0.0,
        0.0,
        PHOTO_LAYER_SIZE as f64,
        PHOTO_LAYER_SIZE as f64,
    )?;
    let data = ctx.get_image_data(0.0, 0.0, PHOTO_LAYER_SIZE as f64, PHOTO_LAYER_SIZE as f64)?;
    Ok(data.data().0)
}
