//! Runtime state of the order form.

use common::loader::Catalog;
use common::selection::Selection;
use common::submission::SubmitGate;

/// State container for the `OrderFormComponent`.
///
/// Fields are `pub` because `update` and `view` live in sibling modules.
pub struct OrderFormComponent {
    /// Load status of the salespeople and article lists, one slot each.
    pub catalog: Catalog,

    /// Current salesperson and article choices. Replaced, never edited in place.
    pub selection: Selection,

    /// `Sending` while an order request is outstanding.
    pub gate: SubmitGate,

    /// Guard so the lists are requested only on the first render.
    pub loaded: bool,
}

impl OrderFormComponent {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            selection: Selection::default(),
            gate: SubmitGate::default(),
            loaded: false,
        }
    }
}
