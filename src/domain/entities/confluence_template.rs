use crate::domain::values::stats::percent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_CHECKLIST: [&str; 6] = [
    "Trend aligned",
    "Setup confirmed",
    "Entry trigger valid",
    "SL placement correct",
    "Risk respected",
    "News checked",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
}

impl ChecklistItem {
    pub fn new(label: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label,
        }
    }
}

/// The per-journal confluence checklist. A trade's confluence score is the
/// share of these items ticked when it was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfluenceTemplate {
    pub journal_id: String,
    pub items: Vec<ChecklistItem>,
}

impl ConfluenceTemplate {
    pub fn default_for(journal_id: &str) -> Self {
        Self {
            journal_id: journal_id.to_string(),
            items: DEFAULT_CHECKLIST
                .iter()
                .map(|label| ChecklistItem::new(label.to_string()))
                .collect(),
        }
    }

    pub fn add_item(&mut self, label: String) -> &ChecklistItem {
        self.items.push(ChecklistItem::new(label));
        &self.items[self.items.len() - 1]
    }

    pub fn rename_item(&mut self, item_id: &str, label: String) -> bool {
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.label = label;
                true
            }
            None => false,
        }
    }

    /// Move an item up (negative delta) or down. Moves past either end are
    /// ignored and return false.
    pub fn move_item(&mut self, index: usize, delta: isize) -> bool {
        let Some(target) = index.checked_add_signed(delta) else {
            return false;
        };
        if index >= self.items.len() || target >= self.items.len() {
            return false;
        }
        let item = self.items.remove(index);
        self.items.insert(target, item);
        true
    }

    pub fn remove_item(&mut self, index: usize) -> Option<ChecklistItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// `round(ticked / items * 100)`. Ids not in the checklist and repeats
    /// are ignored; an empty checklist scores 0.
    pub fn score(&self, checked: &[String]) -> i64 {
        let checked: HashSet<&str> = checked.iter().map(String::as_str).collect();
        let ticked = self
            .items
            .iter()
            .filter(|i| checked.contains(i.id.as_str()))
            .count();
        percent(ticked, self.items.len()) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(t: &ConfluenceTemplate) -> Vec<&str> {
        t.items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_default_checklist() {
        let t = ConfluenceTemplate::default_for("j1");
        assert_eq!(t.journal_id, "j1");
        assert_eq!(labels(&t), DEFAULT_CHECKLIST.to_vec());
    }

    #[test]
    fn test_score() {
        let t = ConfluenceTemplate::default_for("j1");
        let ids: Vec<String> = t.items.iter().map(|i| i.id.clone()).collect();

        assert_eq!(t.score(&[]), 0);
        assert_eq!(t.score(&ids), 100);
        assert_eq!(t.score(&ids[..3]), 50);
        assert_eq!(t.score(&ids[..1]), 17);

        let noisy = vec![ids[0].clone(), ids[0].clone(), "stale-id".to_string()];
        assert_eq!(t.score(&noisy), 17);
    }

    #[test]
    fn test_empty_template_scores_zero() {
        let t = ConfluenceTemplate {
            journal_id: "j1".into(),
            items: Vec::new(),
        };
        assert_eq!(t.score(&["x".to_string()]), 0);
    }

    #[test]
    fn test_move_item() {
        let mut t = ConfluenceTemplate::default_for("j1");
        assert!(t.move_item(0, 1));
        assert_eq!(&labels(&t)[..2], &["Setup confirmed", "Trend aligned"]);
        assert!(!t.move_item(0, -1));
        assert!(!t.move_item(5, 1));
        assert!(!t.move_item(9, -1));
    }

    #[test]
    fn test_add_rename_remove() {
        let mut t = ConfluenceTemplate::default_for("j1");
        let id = t.add_item("HTF level".into()).id.clone();
        assert_eq!(t.items.len(), 7);
        assert!(t.rename_item(&id, "HTF key level".into()));
        assert!(!t.rename_item("missing", "x".into()));
        assert_eq!(t.items[6].label, "HTF key level");

        let removed = t.remove_item(6).unwrap();
        assert_eq!(removed.id, id);
        assert!(t.remove_item(6).is_none());
    }
}
