//! Client-side behavior layer for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by the page's static
//! markup. It animates text, reacts to scroll position, picks a light or dark
//! theme, and adds a few accessibility affordances. Every component is split
//! into a pure core (testable natively) and a thin web-sys binding under
//! [`dom`], which only exists with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`typewriter`] | Per-element reveal state machine and the shared virtual-time scheduler |
//! | [`feedback`] | Hover lift and touch press poses for cards |
//! | [`parallax`] | Scroll offset for decorative shapes |
//! | [`visibility`] | Monotonic viewport-entry flags |
//! | [`theme`] | Light/dark selection from stored preference and system signal |
//! | [`navigation`] | Anchor scrolling and arrow-key section stepping |
//! | [`a11y`] | Card labels, skip link, focus outlines |
//! | [`diagnostics`] | Console messages and logger setup |
//! | [`config`] | Tunable constants and the startup environment snapshot |
//! | `dom` | Browser event wiring (feature `hydrate`) |

pub mod a11y;
pub mod config;
pub mod consts;
pub mod diagnostics;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod feedback;
pub mod navigation;
pub mod parallax;
pub mod theme;
pub mod typewriter;
pub mod visibility;
