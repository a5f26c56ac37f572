//! # Portals
//!
//! A [`Portal`] paints its children inside the [`PortalHost`] instead of where
//! it appears in the tree, so fixed-position overlays escape the `overflow`
//! and stacking rules of the page they are declared in. The component that
//! renders the portal stays the owner of the content: it decides when the
//! content exists, and its handles and callbacks flow into it.
//!
//! The attachment point is an explicit [`PortalTarget`] handle created by
//! [`use_portal_target`] and rendered by exactly one [`PortalHost`]. Content
//! published before the host is mounted is kept and shown once it is.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dioxus::dioxus_core::schedule_update;
use dioxus::prelude::*;

/// Stacking position of one portal's content inside the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerKey(u64);

impl fmt::Display for LayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// Content published to a host, in stacking order.
#[derive(Debug)]
pub struct OverlayLayer<T> {
    layers: BTreeMap<LayerKey, Option<T>>,
    next_key: u64,
    attached: bool,
}

impl<T> Default for OverlayLayer<T> {
    fn default() -> Self {
        Self {
            layers: BTreeMap::new(),
            next_key: 0,
            attached: false,
        }
    }
}

impl<T> OverlayLayer<T> {
    /// Reserve a slot above every existing one.
    pub fn reserve(&mut self) -> LayerKey {
        let key = LayerKey(self.next_key);
        self.next_key += 1;
        self.layers.insert(key, None);
        key
    }

    /// Replace the content of `key`. Returns `false` for released keys.
    pub fn publish(&mut self, key: LayerKey, content: T) -> bool {
        match self.layers.get_mut(&key) {
            Some(slot) => {
                *slot = Some(content);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, key: LayerKey) -> Option<T> {
        self.layers.remove(&key).flatten()
    }

    /// The attachment point now exists.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// What the host should paint: nothing until attached, then every
    /// published layer bottom to top.
    pub fn visible(&self) -> impl Iterator<Item = (LayerKey, &T)> + '_ {
        self.layers
            .iter()
            .filter(|_| self.attached)
            .filter_map(|(key, content)| content.as_ref().map(|c| (*key, c)))
    }
}

/// Handle to one attachment point. Cheap to copy into any component.
#[derive(Clone, Copy, PartialEq)]
pub struct PortalTarget {
    layers: CopyValue<OverlayLayer<Element>>,
    refresh: CopyValue<Option<Arc<dyn Fn() + Send + Sync>>>,
}

impl PortalTarget {
    fn new() -> Self {
        Self {
            layers: CopyValue::new(OverlayLayer::default()),
            refresh: CopyValue::new(None),
        }
    }

    fn reserve(&self) -> LayerKey {
        let mut layers = self.layers;
        let key = layers.write().reserve();
        key
    }

    fn publish(&self, key: LayerKey, content: Element) {
        let mut layers = self.layers;
        layers.write().publish(key, content);
        self.repaint();
    }

    fn release(&self, key: LayerKey) {
        let mut layers = self.layers;
        if let Ok(mut layers) = layers.try_write() {
            layers.release(key);
        }
        self.repaint();
    }

    /// Ask the host to re-render, if it is mounted.
    fn repaint(&self) {
        if let Ok(refresh) = self.refresh.try_read() {
            if let Some(refresh) = refresh.as_ref() {
                refresh();
            }
        };
    }

    pub fn is_attached(&self) -> bool {
        self.layers.read().is_attached()
    }
}

/// Create the attachment point for this subtree and share it through
/// context, so pages can reach it with [`use_portal`].
pub fn use_portal_target() -> PortalTarget {
    use_context_provider(PortalTarget::new)
}

/// The attachment point provided by an ancestor, if any.
pub fn use_portal() -> Option<PortalTarget> {
    try_use_context::<PortalTarget>()
}

/// Paints every portal published to `target`. Render it once, as a leaf
/// near the root of the app.
#[component]
pub fn PortalHost(target: PortalTarget) -> Element {
    use_hook(move || {
        let mut refresh = target.refresh;
        refresh.set(Some(schedule_update()));
        let mut layers = target.layers;
        layers.write().attach();
    });
    use_drop(move || {
        let mut refresh = target.refresh;
        if let Ok(mut refresh) = refresh.try_write() {
            *refresh = None;
        }
        let mut layers = target.layers;
        if let Ok(mut layers) = layers.try_write() {
            layers.detach();
        };
    });

    let layers: Vec<(LayerKey, Element)> = target
        .layers
        .read()
        .visible()
        .map(|(key, content)| (key, content.clone()))
        .collect();

    rsx! {
        div {
            id: "portal-root",
            for (key, content) in layers {
                Fragment { key: "{key}", {content} }
            }
        }
    }
}

/// Render `children` inside `target`'s host instead of here.
#[component]
pub fn Portal(target: PortalTarget, children: Element) -> Element {
    let key = use_hook(move || target.reserve());
    use_drop(move || target.release(key));

    target.publish(key, children);

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_visible_before_attach() {
        let mut layer = OverlayLayer::default();
        let key = layer.reserve();
        assert!(layer.publish(key, "cabin form"));
        assert_eq!(layer.visible().count(), 0);

        layer.attach();
        assert_eq!(layer.visible().collect::<Vec<_>>(), vec![(key, &"cabin form")]);

        layer.detach();
        assert_eq!(layer.visible().count(), 0);
    }

    #[test]
    fn layers_stack_in_reservation_order() {
        let mut layer = OverlayLayer::default();
        layer.attach();
        let bottom = layer.reserve();
        let top = layer.reserve();
        layer.publish(top, "confirm");
        layer.publish(bottom, "edit");

        let order: Vec<_> = layer.visible().map(|(_, c)| *c).collect();
        assert_eq!(order, vec!["edit", "confirm"]);
    }

    #[test]
    fn reserved_but_unpublished_slots_are_skipped() {
        let mut layer: OverlayLayer<&str> = OverlayLayer::default();
        layer.attach();
        layer.reserve();
        assert_eq!(layer.visible().count(), 0);
    }

    #[test]
    fn released_keys_cannot_be_republished() {
        let mut layer = OverlayLayer::default();
        layer.attach();
        let key = layer.reserve();
        layer.publish(key, 1);
        assert_eq!(layer.release(key), Some(1));
        assert!(!layer.publish(key, 2));
        assert_eq!(layer.visible().count(), 0);
        assert_eq!(layer.release(key), None);
    }
}
