//! snip: a terminal client for the goldsborough.me URL shortener.
//!
//! Type a URL, get the short form back, copy it. The whole application is
//! one form lifecycle: validate as you type, submit to the shorten
//! endpoint, display the result. See `app` for the state machine and
//! `shorten` for the HTTP contract.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod shorten;
pub mod theme;
pub mod ui;
pub mod util;
