// drobe-core/src/selection/mod.rs
//
// Pure list algorithms behind outfit browsing: front-loading the active
// choice and drawing a uniform random pick.

use rand::Rng;
use uuid::Uuid;

/// Move the element identified by `current` to the front of `items`,
/// keeping every other element in its original relative order.
///
/// No-op when `current` is `None`, not present, or already first.
pub fn front_load<T, F>(items: &mut [T], current: Option<Uuid>, id_of: F)
where
    F: Fn(&T) -> Uuid,
{
    let Some(current) = current else {
        return;
    };
    if let Some(pos) = items.iter().position(|it| id_of(it) == current) {
        if pos > 0 {
            items[..=pos].rotate_right(1);
        }
    }
}

/// Uniform random pick from a slice; `None` when the slice is empty.
pub fn pick_random<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..items.len());
    items.get(idx)
}
