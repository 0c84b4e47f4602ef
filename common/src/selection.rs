//! Selection state of the order form and its reducer.
//!
//! A [`Selection`] is an immutable snapshot: every transition returns a new
//! value and leaves the previous one untouched, so the component can compare
//! snapshots to decide whether to re-render.

/// User interactions that change the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Replace the chosen salesperson. `None` comes from the placeholder option.
    SelectSalesperson(Option<i64>),
    /// Flip membership of an article code.
    ToggleArticle(String),
}

/// Chosen salesperson plus the set of chosen article codes.
///
/// Article codes are unique and kept in the order they were first ticked,
/// which is the order they are sent in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    salesperson: Option<i64>,
    articles: Vec<String>,
}

impl Selection {
    /// Applies one action and returns the resulting snapshot.
    #[must_use]
    pub fn reduce(&self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::SelectSalesperson(id) => self.select_salesperson(id),
            SelectionAction::ToggleArticle(code) => self.toggle_article(&code),
        }
    }

    /// Replaces the salesperson unconditionally.
    ///
    /// The id is not checked against the loaded list.
    #[must_use]
    pub fn select_salesperson(&self, id: Option<i64>) -> Self {
        Self {
            salesperson: id,
            articles: self.articles.clone(),
        }
    }

    /// Removes `code` if it is selected, adds it otherwise.
    #[must_use]
    pub fn toggle_article(&self, code: &str) -> Self {
        let mut articles = self.articles.clone();
        match articles.iter().position(|selected| selected == code) {
            Some(index) => {
                articles.remove(index);
            }
            None => articles.push(code.to_owned()),
        }

        Self {
            salesperson: self.salesperson,
            articles,
        }
    }

    pub fn salesperson(&self) -> Option<i64> {
        self.salesperson
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.articles.iter().any(|selected| selected == code)
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Selected codes in selection order.
    pub fn articles(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let selection = Selection::default();
        assert_eq!(selection.salesperson(), None);
        assert_eq!(selection.article_count(), 0);
    }

    #[test]
    fn test_select_salesperson_replaces_previous_choice() {
        let selection = Selection::default()
            .select_salesperson(Some(1))
            .select_salesperson(Some(42));
        assert_eq!(selection.salesperson(), Some(42));
    }

    #[test]
    fn test_select_salesperson_keeps_articles() {
        let selection = Selection::default()
            .toggle_article("A1")
            .select_salesperson(Some(5));
        assert!(selection.is_selected("A1"));
    }

    #[test]
    fn test_select_unknown_salesperson_is_accepted() {
        let selection = Selection::default().select_salesperson(Some(-99));
        assert_eq!(selection.salesperson(), Some(-99));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let once = Selection::default().toggle_article("A1");
        assert!(once.is_selected("A1"));

        let twice = once.toggle_article("A1");
        assert!(!twice.is_selected("A1"));
        assert_eq!(twice, Selection::default());
    }

    #[test]
    fn test_toggle_parity_decides_membership() {
        let codes = ["A1", "B2", "A1", "C3", "A1", "B2", "A1"];
        let mut selection = Selection::default();
        for code in codes {
            selection = selection.toggle_article(code);
        }

        // A1 toggled four times, B2 twice, C3 once.
        assert!(!selection.is_selected("A1"));
        assert!(!selection.is_selected("B2"));
        assert!(selection.is_selected("C3"));
        assert_eq!(selection.article_count(), 1);
    }

    #[test]
    fn test_toggle_never_mutates_previous_snapshot() {
        let before = Selection::default().toggle_article("A1");
        let snapshot = before.clone();

        let after = before.toggle_article("B2");

        assert_eq!(before, snapshot);
        assert_ne!(before, after);
        assert!(!before.is_selected("B2"));
        assert!(after.is_selected("B2"));
    }

    #[test]
    fn test_codes_stay_unique() {
        let selection = Selection::default()
            .toggle_article("A1")
            .toggle_article("B2")
            .toggle_article("A1")
            .toggle_article("A1");
        let codes: Vec<&str> = selection.articles().collect();
        assert_eq!(codes, vec!["B2", "A1"]);
    }

    #[test]
    fn test_reduce_dispatches_actions() {
        let selection = Selection::default()
            .reduce(SelectionAction::SelectSalesperson(Some(1)))
            .reduce(SelectionAction::ToggleArticle("A1".to_string()));
        assert_eq!(selection.salesperson(), Some(1));
        assert!(selection.is_selected("A1"));

        let cleared = selection.reduce(SelectionAction::SelectSalesperson(None));
        assert_eq!(cleared.salesperson(), None);
        assert!(cleared.is_selected("A1"));
    }
}
