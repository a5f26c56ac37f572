use dioxus::prelude::*;

use super::ModalHandle;

/// Trigger for the window called `opens`.
///
/// `render` draws the trigger element and receives the handler that opens
/// the window; wire it to whichever event should open it. Any handler the
/// element had before is replaced, not chained.
#[component]
pub fn ModalOpen(
    modal: ModalHandle,
    #[props(into)] opens: String,
    render: Callback<EventHandler<MouseEvent>, Element>,
) -> Element {
    let open = use_callback(move |_: MouseEvent| modal.open(&opens));

    render.call(open)
}
