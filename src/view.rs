//! View contract between route handlers and the rendering collaborator.
//!
//! The engine never produces markup itself. Handlers emit a [`View`] (a
//! component reference plus JSON-shaped props) and the injected [`Renderer`]
//! turns it into HTML on the server or a DOM update in the browser. Any
//! cross-cutting UI shell (layout chrome, providers) is the renderer's
//! responsibility.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of page components the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    Home,
    Projects,
    BlogIndex,
    Post,
    AdminIndex,
    NewPost,
    EditPost,
    SignIn,
    NotFound,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::BlogIndex => "BlogIndex",
            Self::Post => "Post",
            Self::AdminIndex => "AdminIndex",
            Self::NewPost => "NewPost",
            Self::EditPost => "EditPost",
            Self::SignIn => "SignIn",
            Self::NotFound => "NotFound",
        };
        f.write_str(name)
    }
}

/// A renderable page: component reference plus its props.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub component: Component,
    pub props: serde_json::Value,
}

impl View {
    pub fn new(component: Component, props: serde_json::Value) -> Self {
        Self { component, props }
    }
}

/// Rendering collaborator.
///
/// Server implementations produce markup; client implementations mount or
/// update the DOM. Opaque to the engine.
pub trait Renderer: Send + Sync {
    fn render(&self, view: View);
}

/// Navigation collaborator.
///
/// Receives an absolute path. Server implementations issue an HTTP 30x;
/// client implementations push onto the history API and re-route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
