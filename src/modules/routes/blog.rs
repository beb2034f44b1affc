//! Public blog routes: the index and individual posts.

use crate::app::{Request, Response};
use crate::error::{ApiError, HandlerResult, RouteError};
use crate::modules::posts::{self, LoadPost, LoadPosts};
use crate::router::RouteHandler;
use crate::store::Store;
use crate::view::Component;
use async_trait::async_trait;

pub struct BlogIndexRoute;

#[async_trait]
impl RouteHandler for BlogIndexRoute {
    async fn handle(&self, _req: &Request, res: &Response, store: &Store) -> HandlerResult {
        res.dispatch(LoadPosts {
            include_unpublished: false,
        })
        .await?;

        let listing = store.read(posts::published_posts);
        let props = serde_json::json!({
            "posts": serde_json::to_value(&listing)?,
        });
        res.render(Component::BlogIndex, props);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "blog_index"
    }
}

/// One post, addressed by its `:post` permalink parameter.
pub struct PostRoute;

#[async_trait]
impl RouteHandler for PostRoute {
    async fn handle(&self, req: &Request, res: &Response, store: &Store) -> HandlerResult {
        let permalink = req.param("post").ok_or(RouteError::MissingParam("post"))?;

        let loaded = res
            .dispatch(LoadPost {
                permalink: permalink.to_string(),
                editable: false,
            })
            .await;
        match loaded {
            Ok(_) => {}
            // An unknown permalink is the not-found page, not a failure.
            Err(ApiError::NotFound(_)) => {
                res.render_404();
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        let post = store.read(|state| posts::post_by_permalink(state, permalink).cloned());
        match post {
            Some(post) => {
                let props = serde_json::json!({
                    "post": serde_json::to_value(&post)?,
                });
                res.render(Component::Post, props);
            }
            None => res.render_404(),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "post"
    }
}
