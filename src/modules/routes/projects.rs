//! The portfolio page, driven by the `projects` content page's categories.

use crate::app::{Request, Response};
use crate::error::HandlerResult;
use crate::modules::pages::{self, LoadPage};
use crate::router::RouteHandler;
use crate::store::Store;
use crate::view::Component;
use async_trait::async_trait;

pub struct ProjectsRoute;

#[async_trait]
impl RouteHandler for ProjectsRoute {
    async fn handle(&self, _req: &Request, res: &Response, store: &Store) -> HandlerResult {
        res.dispatch(LoadPage("projects")).await?;

        let page = store.read(|state| pages::get_page(state, "projects").cloned());
        let props = serde_json::json!({
            "page": serde_json::to_value(&page)?,
        });
        res.render(Component::Projects, props);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "projects"
    }
}
