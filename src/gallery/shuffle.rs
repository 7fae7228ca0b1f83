//! The once-per-mount gallery shuffle.
//!
//! Fisher-Yates through `SliceRandom`, so every permutation is equally
//! likely. Called exactly once when the gallery screen is built; the
//! resulting order is stored in the screen state and reused for every
//! page change, so the grid never visibly reshuffles under the user
//! while they paginate.

use rand::seq::SliceRandom;

use super::catalog::ImageDescriptor;

/// Produce a uniformly random permutation of the catalog.
pub fn shuffled(catalog: &[ImageDescriptor]) -> Vec<ImageDescriptor> {
    let mut order = catalog.to_vec();
    order.shuffle(&mut rand::thread_rng());
    order
}
