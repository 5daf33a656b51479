use crate::ui::mvi::UiState;

/// Focusable elements of the dialog, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Name,
    Quantity,
    AddButton,
    CancelButton,
}

impl DialogField {
    const ORDER: [DialogField; 4] = [
        DialogField::Name,
        DialogField::Quantity,
        DialogField::AddButton,
        DialogField::CancelButton,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// The "Add Item" modal. Pending text only exists while it is visible, so
/// hiding the dialog is what clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AddDialogState {
    #[default]
    Hidden,
    Visible {
        name: String,
        quantity: String,
        focus: DialogField,
    },
}

impl UiState for AddDialogState {}

impl AddDialogState {
    /// Freshly opened dialog: empty fields, name focused.
    pub fn opened() -> Self {
        Self::Visible {
            name: String::new(),
            quantity: String::new(),
            focus: DialogField::Name,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Pending `(name, quantity)` text, if visible.
    pub fn pending(&self) -> Option<(&str, &str)> {
        match self {
            Self::Visible { name, quantity, .. } => Some((name.as_str(), quantity.as_str())),
            Self::Hidden => None,
        }
    }

    pub fn focus(&self) -> Option<DialogField> {
        match self {
            Self::Visible { focus, .. } => Some(*focus),
            Self::Hidden => None,
        }
    }
}
