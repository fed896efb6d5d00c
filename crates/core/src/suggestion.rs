//! Session-local suggestion checklist state.
//!
//! Completion state is UI state, not part of the source document: it is
//! seeded from the document's optional status fields on creation and lost
//! when the process exits. Nothing is persisted.

use std::collections::HashMap;

use serde::Deserialize;

use crate::document::Itinerary;

/// Completion status of a single suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Completed,
}

impl SuggestionStatus {
    pub fn flipped(self) -> Self {
        match self {
            SuggestionStatus::Pending => SuggestionStatus::Completed,
            SuggestionStatus::Completed => SuggestionStatus::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        self == SuggestionStatus::Completed
    }
}

/// Identifies a suggestion: (day number, index within the day's list).
pub type SuggestionKey = (u32, usize);

/// Per-suggestion completion state for the current session.
pub struct Checklist {
    statuses: HashMap<SuggestionKey, SuggestionStatus>,
    on_change: Option<Box<dyn FnMut(SuggestionKey, SuggestionStatus)>>,
}

impl Checklist {
    /// Build the checklist from a document, seeding each entry from the
    /// suggestion's status field or Pending when absent.
    pub fn new(itinerary: &Itinerary) -> Self {
        let mut statuses = HashMap::new();
        for day in &itinerary.days {
            for (index, suggestion) in day.suggestions.iter().enumerate() {
                statuses.insert((day.day, index), suggestion.status.unwrap_or_default());
            }
        }
        Self {
            statuses,
            on_change: None,
        }
    }

    /// Register an external hook invoked exactly once per toggle with the
    /// new status.
    pub fn set_on_change(
        &mut self,
        hook: impl FnMut(SuggestionKey, SuggestionStatus) + 'static,
    ) {
        self.on_change = Some(Box::new(hook));
    }

    pub fn status(&self, key: SuggestionKey) -> SuggestionStatus {
        self.statuses.get(&key).copied().unwrap_or_default()
    }

    /// Flip the status for `key` and return the new value.
    pub fn toggle(&mut self, key: SuggestionKey) -> SuggestionStatus {
        let next = self.status(key).flipped();
        self.statuses.insert(key, next);
        if let Some(hook) = &mut self.on_change {
            hook(key, next);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::document::Itinerary;

    fn doc_with_suggestions() -> Itinerary {
        Itinerary::from_json(
            r#"{
                "tripInfo": {
                    "title": "t", "subtitle": "s",
                    "departure": {"city": "a", "date": "d", "time": "h"},
                    "return": {"city": "a", "date": "d", "time": "h"},
                    "duration": "1 día", "countries": 1, "cities": 1
                },
                "days": [{
                    "day": 1, "date": "d", "route": "Lisboa",
                    "country": "portugal", "activities": "a",
                    "suggestions": [
                        {"type": "tip", "title": "t1", "content": "c1"},
                        {"type": "warning", "title": "t2", "content": "c2",
                         "status": "completed"}
                    ]
                }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_seeded_from_document_status() {
        let checklist = Checklist::new(&doc_with_suggestions());
        assert_eq!(checklist.status((1, 0)), SuggestionStatus::Pending);
        assert_eq!(checklist.status((1, 1)), SuggestionStatus::Completed);
    }

    #[test]
    fn test_toggle_flips_and_returns_new_status() {
        let mut checklist = Checklist::new(&doc_with_suggestions());
        assert_eq!(checklist.toggle((1, 0)), SuggestionStatus::Completed);
        assert_eq!(checklist.status((1, 0)), SuggestionStatus::Completed);
    }

    #[test]
    fn test_double_toggle_restores_and_fires_hook_twice() {
        let mut checklist = Checklist::new(&doc_with_suggestions());
        let seen: Rc<RefCell<Vec<SuggestionStatus>>> = Rc::default();
        let sink = Rc::clone(&seen);
        checklist.set_on_change(move |_, status| sink.borrow_mut().push(status));

        checklist.toggle((1, 0));
        checklist.toggle((1, 0));

        assert_eq!(checklist.status((1, 0)), SuggestionStatus::Pending);
        assert_eq!(
            *seen.borrow(),
            vec![SuggestionStatus::Completed, SuggestionStatus::Pending]
        );
    }

    #[test]
    fn test_unknown_key_defaults_to_pending() {
        let checklist = Checklist::new(&doc_with_suggestions());
        assert_eq!(checklist.status((9, 9)), SuggestionStatus::Pending);
    }
}
