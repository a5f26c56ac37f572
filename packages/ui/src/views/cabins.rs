use dioxus::prelude::*;

use crate::cabins::{AddCabin, CabinTable};
use crate::components::{ErrorMessage, PageHeading, Spinner};
use crate::queries::use_cabins;

/// All cabins, with the add button below the table.
#[component]
pub fn CabinsView() -> Element {
    let mut cabins = use_cabins();
    let refetch = move |_: ()| cabins.restart();

    rsx! {
        PageHeading { title: "All cabins" }
        {
            match &*cabins.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! { ErrorMessage { message: e.to_string() } },
                Some(Ok(list)) => rsx! {
                    CabinTable { cabins: list.clone(), on_change: refetch }
                },
            }
        }
        AddCabin { on_saved: refetch }
    }
}
