pub mod config;
pub mod logging;
pub mod motion;
pub mod projects;
pub mod state;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
