use crate::holder::{EditModeHolder, Environment, PollOutcome};

/// Toggles the edit mode by publishing the opposite of the current value.
pub struct EditButton;

impl EditButton {
    pub fn activate(env: &Environment) {
        env.publisher.send(env.edit_mode.toggled());
    }

    pub fn show(ui: &mut egui::Ui, env: &Environment) -> egui::Response {
        let response = ui.button(env.edit_mode.button_label());
        if response.clicked() {
            Self::activate(env);
        }
        response
    }
}

pub struct StatusLabel;

impl StatusLabel {
    pub fn show(ui: &mut egui::Ui, env: &Environment) -> egui::Response {
        ui.label(env.edit_mode.status_text())
    }
}

/// Hands the holder's environment to `add_contents`, then applies whatever
/// the contents published during this frame.
pub fn with_edit_mode(
    holder: &mut EditModeHolder,
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui, &Environment),
) -> PollOutcome {
    let env = holder.environment();
    add_contents(ui, &env);
    let outcome = holder.poll();
    if outcome.changed {
        ui.ctx().request_repaint();
    }
    outcome
}

pub struct ContentView {
    holder: EditModeHolder,
}

impl ContentView {
    pub fn new() -> Self {
        Self {
            holder: EditModeHolder::new(),
        }
    }

    pub fn holder(&self) -> &EditModeHolder {
        &self.holder
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> PollOutcome {
        with_edit_mode(&mut self.holder, ui, |ui, env| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                EditButton::show(ui, env);
                ui.add_space(8.0);
                StatusLabel::show(ui, env);
            });
        })
    }
}
