use crate::channel::{Delivery, Publisher, Receipt};
use crate::mode::EditMode;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConsoleStatus {
    Idle,
    Sent,
    NotJson(String),
    Applied,
    Unchanged,
    Ignored,
}

impl From<Delivery> for ConsoleStatus {
    fn from(delivery: Delivery) -> Self {
        match delivery {
            Delivery::Applied => ConsoleStatus::Applied,
            Delivery::Unchanged => ConsoleStatus::Unchanged,
            Delivery::Ignored => ConsoleStatus::Ignored,
        }
    }
}

impl ConsoleStatus {
    fn text(&self) -> String {
        match self {
            ConsoleStatus::Idle => String::new(),
            ConsoleStatus::Sent => "Sent".to_string(),
            ConsoleStatus::NotJson(err) => format!("Not JSON: {}", err),
            ConsoleStatus::Applied => "Applied".to_string(),
            ConsoleStatus::Unchanged => "Unchanged (same as current mode)".to_string(),
            ConsoleStatus::Ignored => "Ignored (not an edit mode)".to_string(),
        }
    }
}

/// Developer window for pushing raw JSON payloads into the change channel.
pub struct PayloadConsole {
    input: String,
    status: ConsoleStatus,
    pending: Option<Receipt>,
}

impl PayloadConsole {
    pub fn new() -> Self {
        Self {
            input: "\"active\"".to_string(),
            status: ConsoleStatus::Idle,
            pending: None,
        }
    }

    /// Parses the input and publishes it. Invalid JSON never reaches the channel.
    fn submit(&mut self, publisher: &Publisher<EditMode>) {
        match serde_json::from_str::<serde_json::Value>(self.input.trim()) {
            Ok(payload) => {
                tracing::debug!(channel = publisher.name(), %payload, "console publish");
                self.pending = Some(publisher.send_raw(payload));
                self.status = ConsoleStatus::Sent;
            }
            Err(err) => {
                self.pending = None;
                self.status = ConsoleStatus::NotJson(err.to_string());
            }
        }
    }

    /// Picks up the result of the last submission once the holder has drained it.
    pub fn poll(&mut self) {
        let Some(receipt) = &self.pending else {
            return;
        };
        if let Some(delivery) = receipt.try_take() {
            self.status = delivery.into();
            self.pending = None;
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, publisher: &Publisher<EditMode>) {
        ui.label(format!("Channel: {}", publisher.name()));
        ui.add(
            egui::TextEdit::singleline(&mut self.input)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Monospace),
        );
        ui.horizontal(|ui| {
            for preset in ["\"active\"", "\"inactive\"", "42"] {
                if ui.small_button(preset).clicked() {
                    self.input = preset.to_string();
                }
            }
        });
        ui.add_space(8.0);
        if ui.button("Broadcast").clicked() {
            self.submit(publisher);
        }
        let status = self.status.text();
        if !status.is_empty() {
            ui.separator();
            ui.label(egui::RichText::new(status).weak());
        }
    }
}
