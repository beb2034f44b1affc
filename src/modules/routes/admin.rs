//! Admin routes: the dashboard, the post editor, and sign-in.
//!
//! These handlers assume the auth pre-middleware already ran; by the time
//! one executes, either a user is signed in or the invocation was
//! redirected to the sign-in page.

use crate::app::{Request, Response};
use crate::error::{ApiError, HandlerResult, RouteError};
use crate::modules::posts::{self, LoadPost, LoadPosts};
use crate::modules::session::SignIn;
use crate::router::RouteHandler;
use crate::store::Store;
use crate::view::Component;
use async_trait::async_trait;
use serde::Deserialize;

/// The dashboard: every post, drafts included.
pub struct AdminIndexRoute;

#[async_trait]
impl RouteHandler for AdminIndexRoute {
    async fn handle(&self, _req: &Request, res: &Response, store: &Store) -> HandlerResult {
        res.dispatch(LoadPosts {
            include_unpublished: true,
        })
        .await?;

        let listing = store.read(posts::all_posts);
        let props = serde_json::json!({
            "posts": serde_json::to_value(&listing)?,
        });
        res.render(Component::AdminIndex, props);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "admin_index"
    }
}

/// The new-post form. Nothing to fetch; the form starts blank.
pub struct NewPostRoute;

#[async_trait]
impl RouteHandler for NewPostRoute {
    async fn handle(&self, _req: &Request, res: &Response, _store: &Store) -> HandlerResult {
        res.render(Component::NewPost, serde_json::json!({}));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "new_post"
    }
}

/// The edit form for an existing post, fetched with its raw body.
pub struct EditPostRoute;

#[async_trait]
impl RouteHandler for EditPostRoute {
    async fn handle(&self, req: &Request, res: &Response, store: &Store) -> HandlerResult {
        let permalink = req.param("post").ok_or(RouteError::MissingParam("post"))?;

        let loaded = res
            .dispatch(LoadPost {
                permalink: permalink.to_string(),
                editable: true,
            })
            .await;
        match loaded {
            Ok(_) => {}
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
                res.render(Component::EditPost, props);
            }
            None => res.render_404(),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "edit_post"
    }
}

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

/// Sign-in: renders the form on a plain visit, exchanges credentials when
/// the navigation carries a submission.
pub struct SignInRoute;

#[async_trait]
impl RouteHandler for SignInRoute {
    async fn handle(&self, req: &Request, res: &Response, _store: &Store) -> HandlerResult {
        let Some(body) = &req.body else {
            res.render(Component::SignIn, serde_json::json!({}));
            return Ok(());
        };

        let credentials: Credentials = serde_json::from_value(body.clone())
            .map_err(|err| RouteError::InvalidForm(err.to_string()))?;

        res.dispatch(SignIn {
            username: credentials.username,
            password: credentials.password,
        })
        .await?;

        res.redirect("/admin");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sign_in"
    }
}
