#[macro_use(log, debug, warn, error)]
extern crate gloo_console;

mod api;
mod app;
mod component;
mod route;
mod scene;
mod session;

/// Bytes, from `default.upload.max_size` in Rocket.toml
pub const MAX_UPLOAD_SIZE: &str = env!("MAX_UPLOAD_SIZE");

pub fn max_upload_size() -> u64 {
    MAX_UPLOAD_SIZE.parse().unwrap_or(u64::MAX)
}

pub fn start() {
    yew::Renderer::<app::App>::new().render();
}

pub fn format_size(bytes: u64) -> String {
    mem::format(bytes as _, &mem::Prefix::Binary)
}
