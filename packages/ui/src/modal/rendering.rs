//! The real components in a `VirtualDom`, rendered to HTML.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use tokio::sync::oneshot;

use super::{use_modal_scope, use_portal_target, ModalError, ModalHandle, ModalWindow, PortalHost};

thread_local! {
    static HANDLE: Cell<Option<ModalHandle>> = const { Cell::new(None) };
    static SHOWN: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
    static NAME: Cell<Option<Signal<String>>> = const { Cell::new(None) };
    static RELEASE: RefCell<Option<oneshot::Receiver<()>>> = const { RefCell::new(None) };
    static SAVED: Cell<bool> = const { Cell::new(false) };
}

fn handle() -> ModalHandle {
    HANDLE.with(|h| h.get()).expect("harness did not render")
}

/// Run queued renders and tasks until the dom goes quiet.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..16 {
        let work = tokio::time::timeout(Duration::from_millis(10), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

async fn mount(root: fn() -> Element) -> VirtualDom {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    settle(&mut dom).await;
    dom
}

fn sibling_windows() -> Element {
    let modal = use_modal_scope();
    let portal = use_portal_target();
    HANDLE.with(|h| h.set(Some(modal)));

    rsx! {
        main {
            ModalWindow {
                modal,
                name: "create",
                render: move |_: EventHandler<()>| rsx! { p { "NEW CABIN FORM" } },
            }
            ModalWindow {
                modal,
                name: "edit",
                render: move |_: EventHandler<()>| rsx! { p { "EDIT CABIN FORM" } },
            }
        }
        PortalHost { target: portal }
    }
}

#[tokio::test]
async fn only_the_open_window_is_painted_into_the_host() {
    let mut dom = mount(sibling_windows).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("portal-root"));
    assert!(!html.contains("modal-overlay"));
    assert!(!html.contains("CABIN FORM"));

    dom.in_runtime(|| handle().open("create"));
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("NEW CABIN FORM"));
    assert!(!html.contains("EDIT CABIN FORM"));
    // Painted inside the host, not where the window is declared.
    let host = html.find("portal-root").unwrap();
    let main_end = html.find("</main>").unwrap();
    let body = html.find("NEW CABIN FORM").unwrap();
    assert!(body > host && body > main_end);

    dom.in_runtime(|| handle().open("edit"));
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("EDIT CABIN FORM"));
    assert!(!html.contains("NEW CABIN FORM"));

    dom.in_runtime(|| handle().close());
    settle(&mut dom).await;
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("CABIN FORM"));
    assert!(!html.contains("modal-overlay"));
}

#[tokio::test]
async fn mounted_names_are_claimed_in_the_scope() {
    let dom = mount(sibling_windows).await;
    let duplicate = dom.in_runtime(|| handle().register_window("edit"));
    assert_eq!(duplicate, Err(ModalError::DuplicateWindow("edit".to_string())));
    assert_eq!(dom.in_runtime(|| handle().register_window("delete")), Ok(()));
}

fn duplicate_windows() -> Element {
    let modal = use_modal_scope();
    let portal = use_portal_target();

    rsx! {
        ErrorBoundary {
            handle_error: move |_: ErrorContext| rsx! { p { "WINDOW ERROR" } },
            ModalWindow {
                modal,
                name: "delete",
                render: move |_: EventHandler<()>| rsx! { p { "first" } },
            }
            ModalWindow {
                modal,
                name: "delete",
                render: move |_: EventHandler<()>| rsx! { p { "second" } },
            }
        }
        PortalHost { target: portal }
    }
}

#[tokio::test]
async fn second_window_with_the_same_name_fails_to_render() {
    let dom = mount(duplicate_windows).await;
    assert!(dioxus_ssr::render(&dom).contains("WINDOW ERROR"));
}

fn toggled_window() -> Element {
    let modal = use_modal_scope();
    let portal = use_portal_target();
    let shown = use_signal(|| true);
    HANDLE.with(|h| h.set(Some(modal)));
    SHOWN.with(|s| s.set(Some(shown)));

    rsx! {
        if shown() {
            ModalWindow {
                modal,
                name: "cabin-form",
                render: move |_: EventHandler<()>| rsx! { p { "CABIN FORM" } },
            }
        }
        PortalHost { target: portal }
    }
}

#[tokio::test]
async fn unmounting_the_open_window_closes_the_scope() {
    let mut dom = mount(toggled_window).await;
    dom.in_runtime(|| handle().open("cabin-form"));
    settle(&mut dom).await;
    assert!(dioxus_ssr::render(&dom).contains("CABIN FORM"));

    dom.in_runtime(|| {
        let mut shown = SHOWN.with(|s| s.get()).unwrap();
        shown.set(false);
    });
    settle(&mut dom).await;

    assert!(!dioxus_ssr::render(&dom).contains("CABIN FORM"));
    assert_eq!(dom.in_runtime(|| handle().open_name()), "");
    // The name is free again.
    assert_eq!(dom.in_runtime(|| handle().register_window("cabin-form")), Ok(()));
}

fn renamed_window() -> Element {
    let modal = use_modal_scope();
    let portal = use_portal_target();
    let name = use_signal(|| "edit".to_string());
    HANDLE.with(|h| h.set(Some(modal)));
    NAME.with(|n| n.set(Some(name)));

    rsx! {
        ModalWindow {
            modal,
            name: name(),
            render: move |_: EventHandler<()>| rsx! { p { "FORM" } },
        }
        PortalHost { target: portal }
    }
}

#[tokio::test]
async fn renaming_a_window_moves_its_claim() {
    let mut dom = mount(renamed_window).await;
    dom.in_runtime(|| handle().open("edit"));
    settle(&mut dom).await;
    assert!(dioxus_ssr::render(&dom).contains("FORM"));

    dom.in_runtime(|| {
        let mut name = NAME.with(|n| n.get()).unwrap();
        name.set("create".to_string());
    });
    settle(&mut dom).await;

    assert_eq!(dom.in_runtime(|| handle().open_name()), "");
    assert_eq!(
        dom.in_runtime(|| handle().register_window("create")),
        Err(ModalError::DuplicateWindow("create".to_string()))
    );
    assert_eq!(dom.in_runtime(|| handle().register_window("edit")), Ok(()));
}

fn short_lived_scope() -> Element {
    let shown = use_signal(|| true);
    SHOWN.with(|s| s.set(Some(shown)));

    rsx! {
        if shown() {
            ScopeOwner {}
        }
    }
}

#[component]
fn ScopeOwner() -> Element {
    let modal = use_modal_scope();
    HANDLE.with(|h| h.set(Some(modal)));
    rsx! {}
}

#[tokio::test]
async fn handle_outliving_its_scope_reports_scope_closed() {
    let mut dom = mount(short_lived_scope).await;
    assert_eq!(dom.in_runtime(|| handle().try_open("edit")), Ok(()));

    dom.in_runtime(|| {
        let mut shown = SHOWN.with(|s| s.get()).unwrap();
        shown.set(false);
    });
    settle(&mut dom).await;

    let stale = handle();
    assert_eq!(dom.in_runtime(|| stale.try_open("edit")), Err(ModalError::ScopeClosed));
    assert_eq!(dom.in_runtime(|| stale.try_close()), Err(ModalError::ScopeClosed));
}

fn owner_with_pending_save() -> Element {
    let modal = use_modal_scope();
    let portal = use_portal_target();
    HANDLE.with(|h| h.set(Some(modal)));

    let save = use_callback(move |_: ()| {
        let release = RELEASE.with(|r| r.borrow_mut().take());
        spawn(async move {
            if let Some(release) = release {
                let _ = release.await;
            }
            SAVED.with(|s| s.set(true));
        });
    });

    rsx! {
        ModalWindow {
            modal,
            name: "cabin-form",
            render: move |_: EventHandler<()>| rsx! { SubmitOnMount { on_submit: save } },
        }
        PortalHost { target: portal }
    }
}

#[component]
fn SubmitOnMount(on_submit: Callback<()>) -> Element {
    use_hook(|| on_submit.call(()));
    rsx! { p { "SAVING" } }
}

#[tokio::test]
async fn save_started_from_a_window_survives_its_dismissal() {
    let (release, pending) = oneshot::channel();
    RELEASE.with(|r| *r.borrow_mut() = Some(pending));

    let mut dom = mount(owner_with_pending_save).await;
    dom.in_runtime(|| handle().open("cabin-form"));
    settle(&mut dom).await;
    assert!(dioxus_ssr::render(&dom).contains("SAVING"));
    assert!(!SAVED.with(|s| s.get()));

    // Outside click while the request is in flight.
    dom.in_runtime(|| handle().close());
    settle(&mut dom).await;
    assert!(!dioxus_ssr::render(&dom).contains("SAVING"));

    release.send(()).unwrap();
    settle(&mut dom).await;
    assert!(SAVED.with(|s| s.get()));
}
