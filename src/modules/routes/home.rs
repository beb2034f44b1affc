//! The landing page: intro content plus the latest published posts.

use crate::app::{Request, Response};
use crate::error::HandlerResult;
use crate::modules::pages::{self, LoadPage};
use crate::modules::posts::{self, LoadPosts};
use crate::router::RouteHandler;
use crate::store::Store;
use crate::view::Component;
use async_trait::async_trait;
use futures_util::try_join;

pub struct HomeRoute;

#[async_trait]
impl RouteHandler for HomeRoute {
    async fn handle(&self, _req: &Request, res: &Response, store: &Store) -> HandlerResult {
        // Both fetches are independent; run them concurrently but settle
        // both before rendering.
        try_join!(
            res.dispatch(LoadPage("home")),
            res.dispatch(LoadPosts {
                include_unpublished: false,
            }),
        )?;

        let (page, recent) = store.read(|state| {
            (
                pages::get_page(state, "home").cloned(),
                posts::published_posts(state),
            )
        });

        let props = serde_json::json!({
            "page": serde_json::to_value(&page)?,
            "posts": serde_json::to_value(&recent)?,
        });
        res.render(Component::Home, props);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "home"
    }
}
