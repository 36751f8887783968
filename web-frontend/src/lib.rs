//! Static host for the stylist web client.
//!
//! `web/` holds the client's source templates: `flutter build web` fills in
//! the `{{flutter_js}}` and `{{flutter_build_config}}` placeholders of
//! `flutter_bootstrap.js` and writes the result to `build/web`, which is the
//! default `WEB_ROOT`. Point `WEB_ROOT` at that build output, never at `web/`.
pub mod config;
pub mod handlers;
pub mod startup;
