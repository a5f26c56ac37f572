//! # Outside-click detection
//!
//! [`OutsideClick`] keeps one document-level listener alive for as long as
//! the guard lives. The listener fires its callback when a pointer-down lands
//! outside the tracked root element. Dropping the guard removes the listener.
//!
//! The document is reached through the [`PointerHost`] trait so the detector
//! runs against the browser document ([`DocumentHost`] on WASM) or against a
//! fake tree in tests.
//!
//! Listening happens in the capture phase by default. The click that opens a
//! window must never be seen as an outside click by that same window.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

/// DOM event the detector listens for.
pub const DISMISS_EVENT: &str = "pointerdown";

/// Event delivery phase a listener is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPhase {
    /// Root → target, before any element handler runs.
    Capture,
    /// Target → root.
    Bubble,
}

impl EventPhase {
    pub fn from_capture(capture: bool) -> Self {
        if capture {
            EventPhase::Capture
        } else {
            EventPhase::Bubble
        }
    }
}

/// Identifies a listener registered with a [`PointerHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// A node of the host's tree.
pub trait DomNode {
    /// `true` when `other` is this node or one of its descendants.
    fn contains_node(&self, other: &Self) -> bool;
}

/// The document-level event source the detector attaches to.
pub trait PointerHost {
    type Node: DomNode + 'static;

    /// Register `handler` for `event` on the document. The handler receives
    /// the event's target node, if the target is a node.
    fn listen(
        &self,
        event: &'static str,
        phase: EventPhase,
        handler: Box<dyn FnMut(Option<&Self::Node>)>,
    ) -> ListenerId;

    fn unlisten(&self, id: ListenerId);
}

/// A live outside-click listener bound to (at most) one root node.
pub struct OutsideClick<H: PointerHost> {
    host: H,
    id: ListenerId,
    root: Rc<RefCell<Option<H::Node>>>,
}

impl<H: PointerHost> OutsideClick<H> {
    /// Start listening. Nothing fires until a root is attached.
    pub fn bind(host: H, phase: EventPhase, mut on_outside: impl FnMut() + 'static) -> Self {
        let root: Rc<RefCell<Option<H::Node>>> = Rc::new(RefCell::new(None));
        let tracked = root.clone();
        let id = host.listen(
            DISMISS_EVENT,
            phase,
            Box::new(move |target| {
                let outside = match (tracked.borrow().as_ref(), target) {
                    (Some(root), Some(target)) => !root.contains_node(target),
                    (Some(_), None) => true,
                    (None, _) => false,
                };
                if outside {
                    on_outside();
                }
            }),
        );
        Self { host, id, root }
    }

    /// Track `node` as the element whose subtree counts as "inside".
    pub fn attach(&self, node: H::Node) {
        *self.root.borrow_mut() = Some(node);
    }

    pub fn detach(&self) {
        self.root.borrow_mut().take();
    }

    pub fn is_attached(&self) -> bool {
        self.root.borrow().is_some()
    }

    pub fn listener(&self) -> ListenerId {
        self.id
    }
}

impl<H: PointerHost> Drop for OutsideClick<H> {
    fn drop(&mut self) {
        self.root.borrow_mut().take();
        self.host.unlisten(self.id);
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::DocumentHost;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::{DomNode, EventPhase, ListenerId, PointerHost};

    type Listener = (&'static str, EventPhase, Closure<dyn FnMut(web_sys::Event)>);

    impl DomNode for web_sys::Node {
        fn contains_node(&self, other: &Self) -> bool {
            self.contains(Some(other))
        }
    }

    /// The browser document as a [`PointerHost`].
    #[derive(Clone)]
    pub struct DocumentHost {
        document: web_sys::Document,
        listeners: Rc<RefCell<HashMap<ListenerId, Listener>>>,
        next_id: Rc<Cell<u64>>,
    }

    impl DocumentHost {
        pub fn current() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            Some(Self {
                document,
                listeners: Rc::default(),
                next_id: Rc::default(),
            })
        }
    }

    impl PointerHost for DocumentHost {
        type Node = web_sys::Node;

        fn listen(
            &self,
            event: &'static str,
            phase: EventPhase,
            mut handler: Box<dyn FnMut(Option<&web_sys::Node>)>,
        ) -> ListenerId {
            let id = ListenerId(self.next_id.get());
            self.next_id.set(id.0 + 1);

            let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
                let target = evt
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                handler(target.as_ref());
            });
            if let Err(e) = self.document.add_event_listener_with_callback_and_bool(
                event,
                closure.as_ref().unchecked_ref(),
                phase == EventPhase::Capture,
            ) {
                tracing::warn!("Failed to add {} listener: {:?}", event, e);
            }
            self.listeners
                .borrow_mut()
                .insert(id, (event, phase, closure));
            id
        }

        fn unlisten(&self, id: ListenerId) {
            let Some((event, phase, closure)) = self.listeners.borrow_mut().remove(&id) else {
                return;
            };
            if let Err(e) = self.document.remove_event_listener_with_callback_and_bool(
                event,
                closure.as_ref().unchecked_ref(),
                phase == EventPhase::Capture,
            ) {
                tracing::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

/// Handle returned by [`use_outside_click`]. Pass mounted events of the
/// window's root element to [`OutsideClickRef::attach`].
#[derive(Clone)]
pub struct OutsideClickRef {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    binding: Rc<RefCell<Option<OutsideClick<DocumentHost>>>>,
}

impl PartialEq for OutsideClickRef {
    fn eq(&self, _other: &Self) -> bool {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            Rc::ptr_eq(&self.binding, &_other.binding)
        }
        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        {
            true
        }
    }
}

impl OutsideClickRef {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    fn bind(handler: Callback<()>, phase: EventPhase) -> Self {
        let binding = DocumentHost::current()
            .map(|host| OutsideClick::bind(host, phase, move || handler.call(())));
        if binding.is_none() {
            tracing::warn!("No document available; outside clicks will not be detected");
        }
        Self {
            binding: Rc::new(RefCell::new(binding)),
        }
    }

    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    fn bind(_handler: Callback<()>, _phase: EventPhase) -> Self {
        Self {}
    }

    /// Track the element behind `evt` as the inside of the window.
    pub fn attach(&self, evt: MountedEvent) {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
                return;
            };
            if let Some(binding) = self.binding.borrow().as_ref() {
                binding.attach(element.into());
            }
        }
        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        let _ = evt;
    }

    /// Whether a document listener is live. When it is not, the window falls
    /// back to closing on backdrop clicks.
    pub fn is_active(&self) -> bool {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            self.binding.borrow().is_some()
        }
        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        {
            false
        }
    }

    fn release(&self) {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        self.binding.borrow_mut().take();
    }
}

/// Listen for pointer-downs outside an element for the lifetime of the
/// calling component. `handler` is a [`Callback`], so later renders may swap
/// its body without re-registering the document listener.
pub fn use_outside_click(handler: Callback<()>, capture: bool) -> OutsideClickRef {
    let outside = use_hook(move || OutsideClickRef::bind(handler, EventPhase::from_capture(capture)));
    use_drop({
        let outside = outside.clone();
        move || outside.release()
    });
    outside
}

#[cfg(test)]
pub(crate) mod testing {
    //! A fake document: nodes with parent links and a listener table that
    //! dispatches capture listeners before bubble listeners.

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Debug)]
    pub struct FakeNode {
        pub id: usize,
        parents: Rc<Vec<Option<usize>>>,
    }

    impl DomNode for FakeNode {
        fn contains_node(&self, other: &Self) -> bool {
            let mut current = Some(other.id);
            while let Some(id) = current {
                if id == self.id {
                    return true;
                }
                current = self.parents[id];
            }
            false
        }
    }

    type Handler = Box<dyn FnMut(Option<&FakeNode>)>;

    #[derive(Clone, Default)]
    pub struct FakeDocument {
        parents: Rc<Vec<Option<usize>>>,
        listeners: Rc<RefCell<Vec<(ListenerId, &'static str, EventPhase, Handler)>>>,
        next_id: Rc<Cell<u64>>,
    }

    impl FakeDocument {
        /// `parents[i]` is the parent of node `i`; node 0 is the root.
        pub fn new(parents: Vec<Option<usize>>) -> Self {
            Self {
                parents: Rc::new(parents),
                ..Default::default()
            }
        }

        pub fn node(&self, id: usize) -> FakeNode {
            FakeNode {
                id,
                parents: self.parents.clone(),
            }
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        pub fn phases(&self) -> Vec<EventPhase> {
            self.listeners.borrow().iter().map(|l| l.2).collect()
        }

        /// Deliver a pointer-down on `target` to every listener.
        pub fn pointer_down(&self, target: Option<usize>) {
            let target = target.map(|id| self.node(id));
            let mut listeners = self.listeners.borrow_mut();
            for phase in [EventPhase::Capture, EventPhase::Bubble] {
                for (_, event, listener_phase, handler) in listeners.iter_mut() {
                    if *event == DISMISS_EVENT && *listener_phase == phase {
                        handler(target.as_ref());
                    }
                }
            }
        }
    }

    impl PointerHost for FakeDocument {
        type Node = FakeNode;

        fn listen(&self, event: &'static str, phase: EventPhase, handler: Handler) -> ListenerId {
            let id = ListenerId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.listeners.borrow_mut().push((id, event, phase, handler));
            id
        }

        fn unlisten(&self, id: ListenerId) {
            self.listeners.borrow_mut().retain(|l| l.0 != id);
        }
    }
}
