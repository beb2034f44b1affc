//! Site domain modules.
//!
//! Each domain owns its action kinds, creators, reducer, and selectors;
//! `routes` composes them into page handlers. The root reducer in
//! [`crate::state`] stitches the per-domain reducers over the state tree.
//!
//! # Data Flow
//!
//! ```text
//! route handler
//!   └─ dispatch(creator)            // posts, pages, session, ui
//!        └─ reducer()               // merges resolved entities
//!             └─ selector           // read back for view props
//! ```

pub mod pages;
pub mod posts;
pub mod routes;
pub mod session;
pub mod ui;
pub mod users;
