//! Directory view state and its transitions.
//!
//! # Invariants
//! - At most one overlay is open; overlays only open from [`OverlayState::None`].
//! - `Viewing(id)` always names a contact present in the store.
//! - The visible list is always `filter(store, query)`.

use crate::contact::{Contact, ContactId, Draft};
use crate::filter::filter;
use crate::store::ContactStore;
use log::{debug, error, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    None,
    Viewing(ContactId),
    Creating(Draft),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        !matches!(self, OverlayState::None)
    }

    fn label(&self) -> &'static str {
        match self {
            OverlayState::None => "none",
            OverlayState::Viewing(_) => "viewing",
            OverlayState::Creating(_) => "creating",
        }
    }
}

/// A discrete user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SearchChanged(String),
    RowActivated(ContactId),
    CloseDetail,
    /// Floating "+" control: opens the form, or discards it when already open.
    ToggleCreate,
    DraftNameChanged(String),
    DraftNumberChanged(String),
    ConfirmCreate,
    CancelCreate,
}

/// What an [`Event`] changed, so the view only re-renders what it must.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub visible: bool,
    pub overlay: bool,
    pub created: Option<ContactId>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        *self == Changes::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    store: ContactStore,
    query: String,
    overlay: OverlayState,
}

impl DirectoryState {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            query: String::new(),
            overlay: OverlayState::None,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn visible(&self) -> Vec<&Contact> {
        filter(self.store.as_slice(), &self.query)
    }

    /// Contact shown in the detail overlay, if any.
    pub fn selected(&self) -> Option<&Contact> {
        match &self.overlay {
            OverlayState::Viewing(id) => self.store.get(*id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.overlay {
            OverlayState::Creating(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn apply(&mut self, event: Event) -> Changes {
        match event {
            Event::SearchChanged(query) => {
                if query == self.query {
                    return Changes::default();
                }
                self.query = query;
                Changes {
                    visible: true,
                    ..Changes::default()
                }
            }
            Event::RowActivated(id) => {
                if !self.store.contains(id) {
                    warn!("event=overlay_ignored reason=unknown_contact id={id}");
                    return Changes::default();
                }
                self.open(OverlayState::Viewing(id))
            }
            Event::CloseDetail => match self.overlay {
                OverlayState::Viewing(_) => self.close(),
                _ => Changes::default(),
            },
            Event::ToggleCreate => match self.overlay {
                OverlayState::Creating(_) => self.close(),
                _ => self.open(OverlayState::Creating(Draft::default())),
            },
            Event::DraftNameChanged(name) => {
                if let OverlayState::Creating(draft) = &mut self.overlay {
                    draft.name = name;
                }
                Changes::default()
            }
            Event::DraftNumberChanged(number) => {
                if let OverlayState::Creating(draft) = &mut self.overlay {
                    draft.number = number;
                }
                Changes::default()
            }
            Event::ConfirmCreate => self.confirm(),
            Event::CancelCreate => match self.overlay {
                OverlayState::Creating(_) => self.close(),
                _ => Changes::default(),
            },
        }
    }

    fn open(&mut self, next: OverlayState) -> Changes {
        if self.overlay.is_open() {
            debug!(
                "event=overlay_ignored reason=already_open current={} requested={}",
                self.overlay.label(),
                next.label()
            );
            return Changes::default();
        }
        self.overlay = next;
        Changes {
            overlay: true,
            ..Changes::default()
        }
    }

    fn close(&mut self) -> Changes {
        self.overlay = OverlayState::None;
        Changes {
            overlay: true,
            ..Changes::default()
        }
    }

    fn confirm(&mut self) -> Changes {
        let draft = match std::mem::take(&mut self.overlay) {
            OverlayState::Creating(draft) => draft,
            other => {
                self.overlay = other;
                return Changes::default();
            }
        };
        // Creation is not validated; blank entries are accepted and only reported.
        if draft.is_blank() {
            warn!(
                "event=contact_created_blank name_empty={} number_empty={}",
                draft.name.trim().is_empty(),
                draft.number.trim().is_empty()
            );
        }
        let id = match self.store.append(draft.name, draft.number) {
            Ok(contact) => contact.id,
            Err(err) => {
                error!("event=contact_create_failed reason=\"{err}\"");
                return Changes {
                    overlay: true,
                    ..Changes::default()
                };
            }
        };
        info!("event=contact_created id={id} total={}", self.store.len());
        Changes {
            visible: true,
            overlay: true,
            created: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RandomContactGenerator;

    fn state() -> DirectoryState {
        DirectoryState::new(ContactStore::initialize(&mut RandomContactGenerator::seeded(11), 100))
    }

    #[test]
    fn starts_idle_with_everything_visible() {
        let state = state();
        assert_eq!(state.overlay(), &OverlayState::None);
        assert_eq!(state.visible().len(), 102);
        assert!(state.selected().is_none());
    }

    #[test]
    fn search_updates_visible_list() {
        let mut state = state();
        let changes = state.apply(Event::SearchChanged("Jane".into()));
        assert!(changes.visible);
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, ContactId(2));
    }

    #[test]
    fn repeated_query_reports_no_change() {
        let mut state = state();
        state.apply(Event::SearchChanged("a".into()));
        assert!(state.apply(Event::SearchChanged("a".into())).is_empty());
    }

    #[test]
    fn select_then_close_returns_to_idle() {
        let mut state = state();
        let changes = state.apply(Event::RowActivated(ContactId(1)));
        assert!(changes.overlay);
        assert_eq!(state.selected().map(|c| c.name.as_str()), Some("John Doe"));

        state.apply(Event::CloseDetail);
        assert_eq!(state.overlay(), &OverlayState::None);
        assert!(state.selected().is_none());
    }

    #[test]
    fn unknown_row_is_ignored() {
        let mut state = state();
        assert!(state.apply(Event::RowActivated(ContactId(999))).is_empty());
        assert_eq!(state.overlay(), &OverlayState::None);
    }

    #[test]
    fn only_one_overlay_at_a_time() {
        let mut state = state();
        state.apply(Event::RowActivated(ContactId(2)));
        assert!(state.apply(Event::ToggleCreate).is_empty());
        assert_eq!(state.overlay(), &OverlayState::Viewing(ContactId(2)));

        state.apply(Event::CloseDetail);
        state.apply(Event::ToggleCreate);
        assert!(state.apply(Event::RowActivated(ContactId(1))).is_empty());
        assert!(state.draft().is_some());
    }

    #[test]
    fn reopened_form_has_empty_draft() {
        let mut state = state();
        state.apply(Event::ToggleCreate);
        state.apply(Event::DraftNameChanged("Half typed".into()));
        state.apply(Event::DraftNumberChanged("555".into()));
        state.apply(Event::CancelCreate);

        state.apply(Event::ToggleCreate);
        assert_eq!(state.draft(), Some(&Draft::default()));

        state.apply(Event::DraftNameChanged("Again".into()));
        state.apply(Event::ToggleCreate);
        assert!(state.draft().is_none());
        state.apply(Event::ToggleCreate);
        assert_eq!(state.draft(), Some(&Draft::default()));
    }

    #[test]
    fn confirm_appends_draft_and_closes() {
        let mut state = state();
        state.apply(Event::ToggleCreate);
        state.apply(Event::DraftNameChanged("Test User".into()));
        state.apply(Event::DraftNumberChanged("555-000-1111".into()));
        let changes = state.apply(Event::ConfirmCreate);

        assert_eq!(changes.created, Some(ContactId(103)));
        assert!(changes.visible && changes.overlay);
        assert_eq!(state.store().len(), 103);
        assert_eq!(state.overlay(), &OverlayState::None);
        let created = state.store().get(ContactId(103)).unwrap();
        assert_eq!(created.name, "Test User");
        assert_eq!(created.number, "555-000-1111");
    }

    #[test]
    fn confirm_with_blank_draft_is_accepted() {
        let mut state = state();
        state.apply(Event::ToggleCreate);
        let changes = state.apply(Event::ConfirmCreate);
        assert_eq!(changes.created, Some(ContactId(103)));
        assert_eq!(state.store().get(ContactId(103)).unwrap().name, "");
    }

    #[test]
    fn confirm_without_open_form_does_nothing() {
        let mut state = state();
        state.apply(Event::RowActivated(ContactId(1)));
        assert!(state.apply(Event::ConfirmCreate).is_empty());
        assert_eq!(state.store().len(), 102);
        assert_eq!(state.overlay(), &OverlayState::Viewing(ContactId(1)));
    }

    #[test]
    fn draft_edits_outside_form_are_dropped() {
        let mut state = state();
        state.apply(Event::DraftNameChanged("ghost".into()));
        state.apply(Event::ToggleCreate);
        assert_eq!(state.draft(), Some(&Draft::default()));
    }

    #[test]
    fn query_survives_creation() {
        let mut state = state();
        state.apply(Event::SearchChanged("test".into()));
        assert!(state.visible().is_empty());

        state.apply(Event::ToggleCreate);
        state.apply(Event::DraftNameChanged("Test User".into()));
        state.apply(Event::ConfirmCreate);

        assert_eq!(state.query(), "test");
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Test User");
    }
}
