use crate::config::UiConfig;
use crate::ui::mvi::Reducer;
use crate::ui::shopping::{ShoppingListIntent, ShoppingListReducer, ShoppingListState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Current snapshot of the shopping list screen (MVI pattern).
    state: ShoppingListState,
    ui: UiConfig,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            should_quit: false,
            state: ShoppingListState::default(),
            ui,
        }
    }

    pub fn state(&self) -> &ShoppingListState {
        &self.state
    }

    pub fn ui_config(&self) -> &UiConfig {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Runs `intent` through the reducer and logs what happened.
    pub fn dispatch(&mut self, intent: ShoppingListIntent) {
        match &intent {
            ShoppingListIntent::EditRequested { id } => {
                tracing::debug!(id, "edit requested; editing is not available");
            }
            ShoppingListIntent::DeleteRequested { id } => {
                tracing::debug!(id, "delete requested; deleting is not available");
            }
            other => tracing::trace!(intent = ?other, "dispatch"),
        }

        let is_add = matches!(
            intent,
            ShoppingListIntent::AddItem { .. } | ShoppingListIntent::SubmitDialog
        );
        let count_before = self.state.items.len();

        dispatch_mvi!(self, state, ShoppingListReducer, intent);

        if !is_add {
            return;
        }
        match self.state.items.get(count_before) {
            Some(item) => tracing::info!(
                id = item.id,
                name = %item.name,
                quantity = item.quantity,
                "item added"
            ),
            None => tracing::debug!("add ignored: name or quantity is blank"),
        }
    }
}
