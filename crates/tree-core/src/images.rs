//! Ordered image references for the photo ornaments.
//!
//! The set is built once at startup from the bundled assets and may be
//! replaced wholesale by a user upload; there is no partial-update path.
//! Ornament-to-image mapping is `index mod effective_count`, where the
//! effective count is clamped to at least one so an empty set still yields a
//! renderable placeholder slot.

use fnv::FnvHashSet;

/// Filename stem prefix that sorts an image ahead of everything else, so a
/// designated picture lands at the top of the tree and at angle zero on
/// the wall.
pub const TOP_NAME_PREFIX: &str = "top";

/// One image the photo swarm can display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    /// Bare filename, used for ordering.
    pub name: String,
    /// URL the asset loader resolves (bundled path or object URL).
    pub url: String,
}

#[inline]
fn is_top_name(name: &str) -> bool {
    let stem = name.rsplit('/').next().unwrap_or(name);
    stem.to_ascii_lowercase().starts_with(TOP_NAME_PREFIX)
}

/// Ordered, deduplicated image list.
#[derive(Clone, Debug, Default)]
pub struct ImageSet {
    entries: Vec<ImageRef>,
}

impl ImageSet {
    /// Build the canonical ordering: "top"-named images first, remainder
    /// lexicographic by name. Duplicate names keep their first occurrence.
    pub fn new(mut entries: Vec<ImageRef>) -> Self {
        let mut seen = FnvHashSet::default();
        entries.retain(|e| seen.insert(e.name.clone()));
        entries.sort_by(|a, b| {
            is_top_name(&b.name)
                .cmp(&is_top_name(&a.name))
                .then_with(|| a.name.cmp(&b.name))
        });
        Self { entries }
    }

    /// Replace the whole set (user upload path). Same ordering rule.
    pub fn replace(&mut self, entries: Vec<ImageRef>) {
        *self = Self::new(entries);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Image-slot count used for modulo mapping and ring spacing; never zero.
    #[inline]
    pub fn effective_count(&self) -> usize {
        self.entries.len().max(1)
    }

    /// Texture index for ornament `ornament_index`.
    #[inline]
    pub fn texture_index(&self, ornament_index: usize) -> usize {
        ornament_index % self.effective_count()
    }

    /// `None` when the set is empty and the placeholder slot applies.
    #[inline]
    pub fn get(&self, image_index: usize) -> Option<&ImageRef> {
        self.entries.get(image_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.entries.iter()
    }
}
