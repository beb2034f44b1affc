//! Static content pages, keyed by name rather than numeric id.

use crate::app::{ActionCreator, Dispatcher};
use crate::state::{AppState, Page};
use crate::store::{
    Action, ActionKind, ActionView, EntityMap, PayloadValue, Reducer, create_reducer,
    merge_with_state,
};
use futures_util::FutureExt;

pub const PAGE_LOAD: ActionKind = ActionKind("PAGE_LOAD");
pub const PAGE_ADD: ActionKind = ActionKind("PAGE_ADD");

/// Fetch a page by name, skipping the fetch when it is already cached.
pub struct LoadPage(pub &'static str);

impl ActionCreator for LoadPage {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let name = self.0;
        if cx.store().read(|state| state.pages.contains_key(name)) {
            return None;
        }

        let api = cx.api();
        let cx = cx.clone();
        Some(Action::deferred(
            PAGE_LOAD,
            async move {
                let page = api.get_page(name).await?;
                cx.dispatch(AddPage(page.clone())).await?;
                Ok(PayloadValue::Page(page))
            }
            .boxed(),
        ))
    }
}

/// Merge one fetched page into the store.
pub struct AddPage(pub Page);

impl ActionCreator for AddPage {
    fn create(&self, _cx: &Dispatcher) -> Option<Action> {
        Some(Action::ready(PAGE_ADD, PayloadValue::Page(self.0.clone())))
    }
}

/// Look up a page by name.
pub fn get_page<'a>(state: &'a AppState, name: &str) -> Option<&'a Page> {
    state.pages.get(name)
}

/// Reducer for the pages slice.
pub fn reducer() -> Reducer<EntityMap<String, Page>> {
    create_reducer(vec![(
        PAGE_ADD,
        merge_with_state(
            |page: &Page| page.name.clone(),
            |action: &ActionView<'_>| match action.payload {
                Some(PayloadValue::Page(page)) => Some(page.clone()),
                _ => None,
            },
        ),
    )])
}
