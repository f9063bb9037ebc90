// End-to-end behavior of the scene orchestrator: mode coordination, image
// fallback, and swarm regeneration.

use glam::Vec3;
use tree_core::config::{DeviceTier, SceneConfig};
use tree_core::images::{ImageRef, ImageSet};
use tree_core::scene::Scene;
use tree_core::state::{FrameInput, TreeMode};

fn small_config() -> SceneConfig {
    let mut cfg = SceneConfig::default();
    cfg.set_foliage_count(1_000);
    cfg.set_bauble_count(10);
    cfg.set_light_count(10);
    cfg.set_photo_count(5);
    cfg
}

fn img(name: &str) -> ImageRef {
    ImageRef {
        name: name.to_string(),
        url: format!("photos/{name}"),
    }
}

fn frame(dt: f32) -> FrameInput {
    FrameInput {
        dt,
        time: 0.0,
        camera_eye: Vec3::new(0.0, 0.0, 42.0),
        camera_target: Vec3::ZERO,
    }
}

fn make_scene(images: Vec<ImageRef>) -> Scene {
    Scene::new(small_config(), DeviceTier::Full, ImageSet::new(images), 42)
}

#[test]
fn mode_cycle_walks_assembled_scattered_wall() {
    let mut scene = make_scene(vec![]);
    assert_eq!(scene.state.mode, TreeMode::Assembled);
    assert!(!scene.state.photo_wall);
    scene.cycle_mode();
    assert_eq!(scene.state.mode, TreeMode::Scattered);
    scene.cycle_mode();
    assert!(scene.state.photo_wall);
    // backdrop captured on entry: still scattered behind the wall
    assert_eq!(scene.state.mode, TreeMode::Scattered);
    scene.cycle_mode();
    assert!(!scene.state.photo_wall);
    assert_eq!(scene.state.mode, TreeMode::Assembled);
}

#[test]
fn gallery_blend_damps_toward_the_wall_flag() {
    let mut scene = make_scene(vec![]);
    scene.enter_photo_wall();
    for _ in 0..400 {
        scene.update(&frame(0.016));
    }
    assert!(scene.state.gallery_blend > 0.98, "blend={}", scene.state.gallery_blend);
    scene.exit_photo_wall();
    for _ in 0..400 {
        scene.update(&frame(0.016));
    }
    assert!(scene.state.gallery_blend < 0.02, "blend={}", scene.state.gallery_blend);
}

#[test]
fn gallery_blend_moves_every_frame_without_popping() {
    let mut scene = make_scene(vec![]);
    scene.enter_photo_wall();
    let mut prev = scene.state.gallery_blend;
    for i in 0..60 {
        scene.update(&frame(0.016));
        let b = scene.state.gallery_blend;
        assert!(b > prev, "blend did not advance at frame {i}");
        assert!(b - prev < 0.1, "blend jumped by {} at frame {i}", b - prev);
        prev = b;
    }
}

#[test]
fn empty_image_list_still_yields_renderable_photos() {
    let scene = make_scene(vec![]);
    assert_eq!(scene.photos.len(), 5);
    for o in scene.photos.ornaments() {
        // every ornament maps to the single placeholder slot
        assert_eq!(o.texture_index, 0);
    }
}

#[test]
fn texture_indices_cycle_over_available_images() {
    let mut scene = make_scene(vec![img("a.jpg"), img("b.jpg"), img("c.jpg")]);
    scene.set_photo_count(10);
    for (i, o) in scene.photos.ornaments().iter().enumerate() {
        assert_eq!(o.texture_index, i % 3, "ornament {i}");
    }
}

#[test]
fn replacing_images_remaps_texture_indices() {
    let mut scene = make_scene(vec![img("a.jpg"), img("b.jpg"), img("c.jpg")]);
    scene.set_images(vec![img("x.jpg"), img("y.jpg")]);
    for (i, o) in scene.photos.ornaments().iter().enumerate() {
        assert_eq!(o.texture_index, i % 2, "ornament {i}");
    }
}

#[test]
fn photo_clicks_only_register_in_wall_mode() {
    let mut scene = make_scene(vec![]);
    scene.click_photo(1);
    assert_eq!(scene.photos.selected(), None, "selection outside wall mode");
    scene.enter_photo_wall();
    scene.click_photo(1);
    assert_eq!(scene.photos.selected(), Some(1));
    scene.click_photo(3);
    assert_eq!(scene.photos.selected(), Some(3));
    assert!(!scene.photos.ornaments()[1].selected);
    // leaving the wall clears the selection
    scene.exit_photo_wall();
    assert_eq!(scene.photos.selected(), None);
}

#[test]
fn count_changes_regenerate_only_the_affected_swarm() {
    let mut scene = make_scene(vec![]);
    let bauble_positions: Vec<_> = scene.baubles.baubles().iter().map(|b| b.position).collect();
    scene.set_photo_count(8);
    assert_eq!(scene.photos.len(), 8);
    let after: Vec<_> = scene.baubles.baubles().iter().map(|b| b.position).collect();
    assert_eq!(bauble_positions, after, "bauble swarm was rebuilt unnecessarily");
}

#[test]
fn clamped_count_change_rebuilds_to_the_bound() {
    let mut scene = make_scene(vec![]);
    scene.set_foliage_count(-5);
    assert_eq!(scene.foliage.len(), 1_000);
    scene.set_photo_count(999);
    assert_eq!(scene.photos.len(), 60);
}

#[test]
fn reduced_tier_halves_the_background_swarms() {
    let scene = Scene::new(small_config(), DeviceTier::Reduced, ImageSet::new(vec![]), 42);
    assert_eq!(scene.foliage.len(), 500);
    assert_eq!(scene.baubles.len(), 5);
    assert_eq!(scene.lights.len(), 5);
}

#[test]
fn seeded_scenes_are_reproducible() {
    let a = make_scene(vec![]);
    let b = make_scene(vec![]);
    for (x, y) in a.photos.ornaments().iter().zip(b.photos.ornaments()) {
        assert_eq!(x.chaos_position, y.chaos_position);
        assert_eq!(x.tree_position, y.tree_position);
        assert_eq!(x.weight, y.weight);
    }
}

#[test]
fn update_runs_all_swarms_toward_the_tree() {
    let mut scene = make_scene(vec![]);
    let mut input = frame(0.016);
    for _ in 0..800 {
        scene.update(&input);
        input.time += 0.016;
    }
    assert!(scene.foliage.progress() > 0.99);
    for b in scene.baubles.baubles() {
        assert!(b.position.distance(b.tree_position) < 0.1);
    }
    for l in scene.lights.lights() {
        assert!(l.position.distance(l.tree_position) < 0.1);
    }
    for o in scene.photos.ornaments() {
        assert!(o.position.distance(o.tree_position) < 0.2);
    }
}
