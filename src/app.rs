use crate::{config::AppConfig, console::PayloadConsole, views::ContentView};

pub struct EditModeApp {
    content: ContentView,
    console: PayloadConsole,
    show_console: bool,
    config: AppConfig,
}

impl EditModeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            content: ContentView::new(),
            console: PayloadConsole::new(),
            show_console: config.show_console.unwrap_or(false),
            config,
        }
    }
}

impl eframe::App for EditModeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        egui::TopBottomPanel::top("main_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.toggle_value(&mut self.show_console, "Console");
            });
        });

        // Console publishes before the content view drains its channel,
        // so a submission resolves within the same frame.
        if self.show_console {
            let publisher = self.content.holder().environment().publisher;
            egui::Window::new("Payload Console")
                .open(&mut self.show_console)
                .default_size([280.0, 160.0])
                .default_pos([16.0, 48.0])
                .show(ctx, |ui| {
                    self.console.show(ui, &publisher);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.content.show(ui);
        });
        self.console.poll();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.show_console = Some(self.show_console);
        if let Err(err) = self.config.save() {
            tracing::warn!(error = %err, "failed to save config");
        }
    }
}
