// Ordering and fallback rules of the image set.

use tree_core::images::{ImageRef, ImageSet};

fn img(name: &str) -> ImageRef {
    ImageRef {
        name: name.to_string(),
        url: format!("photos/{name}"),
    }
}

#[test]
fn top_named_images_sort_first_then_lexicographic() {
    let set = ImageSet::new(vec![
        img("zebra.jpg"),
        img("top_star.png"),
        img("alpha.jpg"),
        img("mid.jpg"),
    ]);
    let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["top_star.png", "alpha.jpg", "mid.jpg", "zebra.jpg"]);
}

#[test]
fn top_match_is_case_insensitive_on_the_stem() {
    let set = ImageSet::new(vec![img("banana.jpg"), img("TOP.jpg")]);
    assert_eq!(set.iter().next().unwrap().name, "TOP.jpg");
}

#[test]
fn duplicate_names_keep_first_occurrence() {
    let set = ImageSet::new(vec![img("a.jpg"), img("b.jpg"), img("a.jpg")]);
    assert_eq!(set.len(), 2);
}

#[test]
fn empty_set_still_offers_one_slot() {
    let set = ImageSet::new(vec![]);
    assert!(set.is_empty());
    assert_eq!(set.effective_count(), 1);
    assert_eq!(set.texture_index(0), 0);
    assert_eq!(set.texture_index(17), 0);
    assert!(set.get(0).is_none(), "placeholder slot has no backing image");
}

#[test]
fn texture_index_cycles_modulo_image_count() {
    let set = ImageSet::new(vec![img("a.jpg"), img("b.jpg"), img("c.jpg")]);
    for i in 0..10 {
        assert_eq!(set.texture_index(i), i % 3, "ornament {i}");
    }
}

#[test]
fn replace_swaps_the_whole_set_and_reapplies_ordering() {
    let mut set = ImageSet::new(vec![img("a.jpg")]);
    set.replace(vec![img("d.jpg"), img("top-me.jpg"), img("c.jpg")]);
    let names: Vec<&str> = set.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["top-me.jpg", "c.jpg", "d.jpg"]);
}
