//! Pager data source: statically rendered cards and selector options.

/// One card of a grouped collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    /// Group key (`data-assignment-id`), empty when the card has none.
    pub group: String,
    /// Raw `data-submitted-at` value, if present.
    pub submitted_at: Option<String>,
}

impl Card {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            submitted_at: None,
        }
    }

    pub fn submitted_at(mut self, raw: impl Into<String>) -> Self {
        self.submitted_at = Some(raw.into());
        self
    }
}

/// One option of the group selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupOption {
    pub value: String,
    /// Raw `data-due` value, if present.
    pub due: Option<String>,
}

impl GroupOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            due: None,
        }
    }

    pub fn due(mut self, raw: impl Into<String>) -> Self {
        self.due = Some(raw.into());
        self
    }
}
