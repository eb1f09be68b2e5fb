//! shelf-ui - Pure view components for the book catalog
//!
//! Props-based components with callback intents: state flows down,
//! intents flow back up through `EventHandler`s. Nothing here owns
//! shared state or fetches data; the app crate wires everything.

pub mod components;

pub use components::*;
