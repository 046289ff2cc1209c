mod app;
mod components;
mod confirm;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::tao::window::Icon;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn load_icon() -> Option<Icon> {
    let icon_bytes = include_bytes!("../icons/icon.png");
    let image = image::load_from_memory(icon_bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height).ok()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let window_builder = WindowBuilder::new()
        .with_title("RecGuard")
        .with_window_icon(load_icon())
        .with_inner_size(LogicalSize::new(480.0, 600.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_menu(None).with_window(window_builder))
        .launch(app::App);
}
