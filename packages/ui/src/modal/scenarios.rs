//! End-to-end flows through the registry and the outside-click detector,
//! mounting and unmounting windows the way `ModalWindow` does on render.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::outside_click::testing::FakeDocument;
use super::{DialogState, EventPhase, ModalError, OutsideClick, WindowNames};

// 0 body ─┬─ 1 page ─┬─ 2 "create" trigger
//         │          └─ 3 "edit" trigger
//         ├─ 4 window root ── 5 form submit button
//         └─ 6 window root ── 7 form submit button
fn document() -> FakeDocument {
    FakeDocument::new(vec![
        None,
        Some(0),
        Some(1),
        Some(1),
        Some(0),
        Some(4),
        Some(0),
        Some(6),
    ])
}

/// One modal scope with its declared windows and their root nodes.
struct Scope {
    doc: FakeDocument,
    state: Rc<RefCell<DialogState>>,
    names: WindowNames,
    roots: BTreeMap<String, usize>,
    mounted: BTreeMap<String, OutsideClick<FakeDocument>>,
}

impl Scope {
    fn new(doc: &FakeDocument) -> Self {
        Self {
            doc: doc.clone(),
            state: Rc::default(),
            names: WindowNames::default(),
            roots: BTreeMap::new(),
            mounted: BTreeMap::new(),
        }
    }

    fn window(&mut self, name: &str, root: usize) -> Result<(), ModalError> {
        self.names.register(name)?;
        self.roots.insert(name.to_string(), root);
        Ok(())
    }

    /// A trigger's activation handler.
    fn open(&mut self, name: &str) {
        self.state.borrow_mut().open(name);
        self.render();
    }

    /// The close callback injected into a window's content.
    fn close(&mut self) {
        self.state.borrow_mut().close();
        self.render();
    }

    fn pointer_down(&mut self, target: usize) {
        self.doc.pointer_down(Some(target));
        self.render();
    }

    /// Mount windows whose name is open, unmount the rest.
    fn render(&mut self) {
        let state = self.state.borrow().clone();
        self.mounted.retain(|name, _| state.is_open(name));
        for (name, root) in &self.roots {
            if state.is_open(name) && !self.mounted.contains_key(name) {
                let state = self.state.clone();
                let binding = OutsideClick::bind(self.doc.clone(), EventPhase::Capture, move || {
                    state.borrow_mut().close();
                });
                binding.attach(self.doc.node(*root));
                self.mounted.insert(name.clone(), binding);
            }
        }
    }

    fn visible(&self) -> Vec<&str> {
        self.mounted.keys().map(String::as_str).collect()
    }
}

#[test]
fn cabin_form_opens_submits_and_cleans_up() {
    let doc = document();
    let mut scope = Scope::new(&doc);
    scope.window("cabin-form", 4).unwrap();
    assert_eq!(scope.state.borrow().open_name(), "");
    assert!(scope.visible().is_empty());

    scope.open("cabin-form");
    assert_eq!(scope.state.borrow().open_name(), "cabin-form");
    assert_eq!(scope.visible(), vec!["cabin-form"]);
    assert_eq!(doc.listener_count(), 1);

    // Typing into the form is inside the window.
    scope.pointer_down(5);
    assert_eq!(scope.visible(), vec!["cabin-form"]);

    // Successful submit calls the injected close handler.
    scope.close();
    assert_eq!(scope.state.borrow().open_name(), "");
    assert!(scope.visible().is_empty());
    assert_eq!(doc.listener_count(), 0);
}

#[test]
fn outside_pointer_down_closes_exactly_once() {
    let doc = document();
    let mut scope = Scope::new(&doc);
    scope.window("cabin-form", 4).unwrap();
    scope.open("cabin-form");

    scope.pointer_down(1);
    assert_eq!(*scope.state.borrow(), DialogState::Closed);
    assert_eq!(doc.listener_count(), 0);

    // Nothing left to close.
    scope.pointer_down(1);
    assert_eq!(*scope.state.borrow(), DialogState::Closed);
}

#[test]
fn switching_between_sibling_windows() {
    let doc = document();
    let mut scope = Scope::new(&doc);
    scope.window("create", 4).unwrap();
    scope.window("edit", 6).unwrap();

    scope.open("create");
    let create_listener = scope.mounted["create"].listener();
    assert_eq!(scope.visible(), vec!["create"]);

    scope.open("edit");
    assert_eq!(scope.visible(), vec!["edit"]);
    assert_ne!(scope.mounted["edit"].listener(), create_listener);
    assert_eq!(doc.listener_count(), 1);
}

#[test]
fn repeated_cycles_do_not_accumulate_listeners() {
    let doc = document();
    let mut scope = Scope::new(&doc);
    scope.window("create", 4).unwrap();
    scope.window("edit", 6).unwrap();

    for _ in 0..5 {
        scope.open("create");
        scope.open("edit");
        scope.pointer_down(2);
        assert_eq!(doc.listener_count(), 0);
    }
}

#[test]
fn two_windows_cannot_share_a_name() {
    let doc = document();
    let mut scope = Scope::new(&doc);
    scope.window("edit", 4).unwrap();
    assert_eq!(
        scope.window("edit", 6),
        Err(ModalError::DuplicateWindow("edit".to_string()))
    );
}
