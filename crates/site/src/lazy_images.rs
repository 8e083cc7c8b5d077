//! Deferred image loading.
//!
//! Images carrying a `data-src` are observed; when enough of one scrolls
//! into the (margin-expanded) viewport, its real `src` is swapped in and it
//! stops being observed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Position of an image in the page's image list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub usize);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyImage {
    pub src: Option<String>,
    pub data_src: Option<String>,
    /// Carries the `loaded` class.
    pub loaded: bool,
}

impl LazyImage {
    pub fn deferred(data_src: impl Into<String>) -> Self {
        Self {
            data_src: Some(data_src.into()),
            ..Self::default()
        }
    }
}

/// A vertical extent in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fraction of `element` inside `viewport` grown by `margin` on both edges.
///
/// A zero-height element counts as fully visible when it lies inside.
pub fn intersection_ratio(element: Span, viewport: Span, margin: f64) -> f64 {
    let root_top = viewport.top - margin;
    let root_bottom = viewport.bottom() + margin;

    if element.height <= 0.0 {
        return if element.top >= root_top && element.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = element.bottom().min(root_bottom) - element.top.max(root_top);
    (overlap / element.height).clamp(0.0, 1.0)
}

#[derive(Debug)]
pub struct LazyImageLoader {
    images: Vec<LazyImage>,
    observed: BTreeSet<ImageId>,
    threshold: f64,
    root_margin: f64,
}

impl LazyImageLoader {
    /// Observe every image that has a `data_src`.
    pub fn new(images: Vec<LazyImage>, threshold: f64, root_margin: f64) -> Self {
        let observed = images
            .iter()
            .enumerate()
            .filter(|(_, img)| img.data_src.is_some())
            .map(|(i, _)| ImageId(i))
            .collect();
        Self {
            images,
            observed,
            threshold,
            root_margin,
        }
    }

    /// Handle an intersection report for the current viewport. Returns the
    /// images that were loaded.
    pub fn on_viewport(&mut self, viewport: Span, bounds: &[(ImageId, Span)]) -> Vec<ImageId> {
        let mut loaded = Vec::new();
        for &(id, span) in bounds {
            if !self.observed.contains(&id) {
                continue;
            }
            let ratio = intersection_ratio(span, viewport, self.root_margin);
            if ratio > 0.0 && ratio >= self.threshold && self.load(id) {
                loaded.push(id);
            }
        }
        if !loaded.is_empty() {
            tracing::debug!(count = loaded.len(), "lazy images loaded");
        }
        loaded
    }

    /// Swap in the real source and stop observing. Returns `false` if the
    /// image is unknown or not observed.
    pub fn load(&mut self, id: ImageId) -> bool {
        if !self.observed.remove(&id) {
            return false;
        }
        let Some(img) = self.images.get_mut(id.0) else {
            return false;
        };
        if let Some(src) = img.data_src.clone() {
            img.src = Some(src);
            img.loaded = true;
        }
        true
    }

    pub fn is_observed(&self, id: ImageId) -> bool {
        self.observed.contains(&id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn image(&self, id: ImageId) -> Option<&LazyImage> {
        self.images.get(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> LazyImageLoader {
        LazyImageLoader::new(
            vec![
                LazyImage::deferred("/img/suv.webp"),
                LazyImage {
                    src: Some("/img/logo.svg".into()),
                    ..LazyImage::default()
                },
                LazyImage::deferred("/img/sedan.webp"),
            ],
            0.1,
            50.0,
        )
    }

    #[test]
    fn only_deferred_images_are_observed() {
        let loader = loader();
        assert_eq!(loader.observed_count(), 2);
        assert!(!loader.is_observed(ImageId(1)));
    }

    #[test]
    fn ratio_accounts_for_margin() {
        let viewport = Span::new(0.0, 800.0);
        assert_eq!(intersection_ratio(Span::new(100.0, 200.0), viewport, 0.0), 1.0);
        assert_eq!(intersection_ratio(Span::new(900.0, 100.0), viewport, 0.0), 0.0);
        assert_eq!(intersection_ratio(Span::new(820.0, 100.0), viewport, 50.0), 0.3);
        assert_eq!(intersection_ratio(Span::new(-1000.0, 100.0), viewport, 50.0), 0.0);
    }

    #[test]
    fn loads_when_threshold_reached_then_unobserves() {
        let mut loader = loader();
        let viewport = Span::new(0.0, 800.0);
        let bounds = [
            (ImageId(0), Span::new(845.0, 100.0)),
            (ImageId(2), Span::new(2000.0, 100.0)),
        ];

        // 5% inside the margin: below the 10% threshold.
        assert!(loader.on_viewport(viewport, &bounds).is_empty());

        let bounds = [(ImageId(0), Span::new(830.0, 100.0))];
        assert_eq!(loader.on_viewport(viewport, &bounds), vec![ImageId(0)]);

        let img = loader.image(ImageId(0)).unwrap();
        assert_eq!(img.src.as_deref(), Some("/img/suv.webp"));
        assert!(img.loaded);
        assert!(!loader.is_observed(ImageId(0)));

        // Already loaded: not reported again.
        assert!(loader.on_viewport(viewport, &bounds).is_empty());
    }

    #[test]
    fn unknown_images_are_ignored() {
        let mut loader = loader();
        assert!(!loader.load(ImageId(1)));
        assert!(!loader.load(ImageId(42)));
    }
}
