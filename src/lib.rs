//! Interactive detection overlay for scan images.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws
//! one detection box over a scan image on a 2d canvas and lets the user
//! drag it around: the box tracks the pointer while held, coasts under
//! momentum when flung, settles with an elastic ease, and glows on a slow
//! pulse. Every placement change is rescored and reported back. The host
//! JavaScript layer is responsible only for wiring DOM events to the
//! [`engine::Engine`] and reacting to the resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`detection`] | Detection record and its normalized box geometry |
//! | [`surface`] | Screen-to-normalized coordinate mapping |
//! | [`input`] | Drag velocity and the gesture state machine |
//! | [`animate`] | Easing curve and the timed placement transition |
//! | [`score`] | Confidence scoring for a placement |
//! | [`render`] | All 2d-context drawing |
//! | [`frame`] | `requestAnimationFrame` plumbing |
//! | [`color`] | `rgba(...)` parsing and reformatting |
//! | [`consts`] | Shared numeric constants (decay rate, score band, etc.) |
//!
//! With the `browser-log` feature enabled, `logging::init` routes `log`
//! output to the browser console.

pub mod animate;
pub mod color;
pub mod consts;
pub mod detection;
pub mod engine;
pub mod frame;
pub mod input;
#[cfg(feature = "browser-log")]
pub mod logging;
pub mod render;
pub mod score;
pub mod surface;
