// ── View state ──
//
// The shell's whole presentation state as one value. Transitions are pure:
// the current state plus a notification yields the next state.

use crate::model::{WeaponForm, WeaponId, WeaponRecord};
use crate::notification::Notification;

/// What the shell is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    /// The weapon table.
    List(Vec<WeaponRecord>),
    /// One weapon's details.
    Detail(WeaponRecord),
    /// The add form.
    AddForm(WeaponForm),
    /// The edit form for an existing weapon.
    EditForm { id: WeaponId, form: WeaponForm },
    /// Classification payload for a keyword.
    SearchResults { keyword: String, payload: String },
    /// Generated text for a prompt.
    Reply { prompt: String, response: String },
    /// Confirmation of a completed action.
    Notice(String),
    /// A reported failure. The shell stays usable.
    Error(String),
}

impl ViewState {
    /// Apply one notification.
    ///
    /// A loaded weapon fills an open edit form for the same id; anywhere
    /// else it opens the detail view.
    pub fn reduce(self, notification: &Notification) -> Self {
        match notification {
            Notification::WeaponLoaded(record) => match self {
                Self::EditForm { id, .. } if id == record.id => Self::EditForm {
                    id,
                    form: WeaponForm::from_record(record),
                },
                _ => Self::Detail(record.clone()),
            },
            Notification::AllWeaponsLoaded(records) => Self::List(records.clone()),
            Notification::WeaponAdded(id) => {
                Self::Notice(format!("Weapon added successfully with ID: {id}"))
            }
            Notification::WeaponDeleted(id) => {
                Self::Notice(format!("Weapon deleted successfully with ID: {id}"))
            }
            Notification::KeywordFound { keyword, payload } => Self::SearchResults {
                keyword: keyword.clone(),
                payload: payload.clone(),
            },
            Notification::TextGenerated { prompt, response } => Self::Reply {
                prompt: prompt.clone(),
                response: response.clone(),
            },
            Notification::Failed(failure) => Self::Error(failure.to_string()),
        }
    }

    /// Open an empty add form.
    pub fn open_add_form() -> Self {
        Self::AddForm(WeaponForm::default())
    }

    /// Open an empty edit form; a following `WeaponLoaded` fills it.
    pub fn open_edit_form(id: WeaponId) -> Self {
        Self::EditForm {
            id,
            form: WeaponForm::default(),
        }
    }

    /// Result of an update, which reports a boolean instead of notifying.
    pub fn after_update(id: WeaponId, accepted: bool) -> Self {
        if accepted {
            Self::Notice(format!("Weapon updated successfully with ID: {id}"))
        } else {
            Self::Error(format!("Failed to update weapon with ID: {id}"))
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
