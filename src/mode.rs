use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Whether the view tree is currently editing.
pub enum EditMode {
    Active,
    #[default]
    Inactive,
}

impl EditMode {
    pub fn is_editing(self) -> bool {
        self == EditMode::Active
    }

    pub fn toggled(self) -> Self {
        match self {
            EditMode::Active => EditMode::Inactive,
            EditMode::Inactive => EditMode::Active,
        }
    }

    /// Caption for the toggle button.
    pub fn button_label(self) -> &'static str {
        if self.is_editing() { "Done" } else { "Edit" }
    }

    pub fn status_text(self) -> &'static str {
        if self.is_editing() {
            "I'm editing"
        } else {
            "I'm not editing"
        }
    }
}
