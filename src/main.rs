mod app;
mod channel;
mod config;
mod console;
mod holder;
mod mode;
mod views;

use app::EditModeApp;
use config::{AppConfig, MIN_WINDOW_SIZE};

const ICON_SIZE: u32 = 64;

/// Rounded-square badge with a diagonal stroke, drawn in code so the binary
/// carries no image assets.
fn build_window_icon() -> egui::IconData {
    const BACKGROUND: [u8; 4] = [52, 120, 246, 255];
    const STROKE: [u8; 4] = [255, 255, 255, 255];
    const RADIUS: i32 = 12;

    let size = ICON_SIZE as i32;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = (RADIUS - x).max(x - (size - 1 - RADIUS)).max(0);
            let dy = (RADIUS - y).max(y - (size - 1 - RADIUS)).max(0);
            let inside = dx * dx + dy * dy <= RADIUS * RADIUS;
            let on_stroke = (x - (size - 1 - y)).abs() <= 3 && (12..size - 12).contains(&x);
            let pixel = match (inside, on_stroke) {
                (false, _) => [0, 0, 0, 0],
                (true, true) => STROKE,
                (true, false) => BACKGROUND,
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let size = config.window_size();
    tracing::debug!(width = size[0], height = size[1], "opening window");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Edit Mode")
            .with_app_id("edit-mode")
            .with_icon(build_window_icon())
            .with_inner_size(size)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "edit-mode",
        native_options,
        Box::new(|cc| Ok(Box::new(EditModeApp::new(cc, config)))),
    )
}

#[cfg(test)]
mod tests {
    #[test]
    fn app_icon_buffer_matches_declared_dimensions() {
        let icon = super::build_window_icon();
        assert_eq!(icon.width, 64);
        assert_eq!(icon.height, 64);
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }

    #[test]
    fn app_icon_corners_are_transparent() {
        let icon = super::build_window_icon();
        assert_eq!(icon.rgba[3], 0);
        let last = icon.rgba.len() - 1;
        assert_eq!(icon.rgba[last], 0);
        let center = ((32 * 64 + 10) * 4) as usize;
        assert_eq!(icon.rgba[center + 3], 255);
    }
}
