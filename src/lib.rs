//! Behavior layer for the landing page.
//!
//! Compiled to WebAssembly and loaded by the static page. It keeps the
//! navigation in sync with scrolling, reveals content as it enters the
//! viewport, and runs the theme toggle, mobile menu, in-page anchor scrolling
//! and contact form validation.
//!
//! Everything except [`browser`] is plain Rust: components turn host events
//! into [`effect::Effect`]s and never touch the DOM, so the full behavior is
//! testable natively. The browser binding is compiled only with the
//! `browser` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Page context owning every component; event dispatch |
//! | [`events`] | Host events and the ordered subscription table |
//! | [`tracker`] | Active-section selection and sticky nav state |
//! | [`highlight`] | Nav link active/ARIA projection |
//! | [`reveal`] | One-shot viewport reveal with capability fallback |
//! | [`theme`] | Light/dark toggle and persistence |
//! | [`menu`] | Mobile menu open/close |
//! | [`anchor`] | In-page anchor link resolution |
//! | [`contact`] | Contact form validation |
//! | [`effect`] | Effect vocabulary, `Host` trait, effect applier |
//! | [`config`] | Tunables and `data-page-config` parsing |
//! | [`error`] | Recoverable error types |
//! | [`consts`] | Shared constants and class names |

pub mod anchor;
#[cfg(feature = "browser")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod contact;
pub mod effect;
pub mod error;
pub mod events;
pub mod highlight;
pub mod menu;
pub mod page;
pub mod reveal;
pub mod theme;
pub mod tracker;
