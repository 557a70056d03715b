//! Filtered pager over pre-grouped cards.
//!
//! The pager keeps a `(group_key, index)` cursor over a static card list.
//! One group is visible at a time; inside it, exactly one card is active.
//! Navigation clamps at both ends instead of wrapping.

use std::collections::HashMap;

use crate::models::{Card, GroupOption};
use crate::time;
use crate::view::PagerSink;

/// Cursor state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PagerState {
    pub group_key: String,
    /// Position inside the visible group; 0 while the group is empty.
    pub index: usize,
}

/// One user gesture against a pager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PagerCommand {
    /// Group selector changed.
    SelectGroup(String),
    /// Prev (`-1`) or next (`+1`) clicked.
    Advance(isize),
}

/// Everything the page needs to reflect the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerView {
    /// Position of the active card in the full card list.
    pub active: Option<usize>,
    /// Active card was submitted after its group's due time.
    pub overdue: bool,
    /// `"i / n"`, or `"0 / 0"` for an empty group.
    pub status: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Number of cards in the visible group.
    pub visible: usize,
}

impl PagerView {
    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }
}

/// Cursor over a statically grouped card collection.
#[derive(Clone, Debug)]
pub struct Pager {
    cards: Vec<Card>,
    groups: HashMap<String, Vec<usize>>,
    /// Due timestamps per group; `None` disables overdue marking.
    due: Option<HashMap<String, String>>,
    state: PagerState,
}

impl Pager {
    /// Build a pager positioned on the first option's group.
    ///
    /// With `track_due`, each option's `due` feeds overdue marking. Options
    /// with an empty value carry no due time.
    pub fn new(cards: Vec<Card>, options: &[GroupOption], track_due: bool) -> Self {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, card) in cards.iter().enumerate() {
            groups.entry(card.group.clone()).or_default().push(position);
        }

        let due = track_due.then(|| {
            options
                .iter()
                .filter(|opt| !opt.value.is_empty())
                .map(|opt| (opt.value.clone(), opt.due.clone().unwrap_or_default()))
                .collect()
        });

        let group_key = options.first().map(|opt| opt.value.clone()).unwrap_or_default();

        Self {
            cards,
            groups,
            due,
            state: PagerState { group_key, index: 0 },
        }
    }

    /// Start on `key` instead of the first option, unless it is empty.
    pub fn starting_at(mut self, key: &str) -> Self {
        if !key.is_empty() {
            self.state = PagerState {
                group_key: key.to_string(),
                index: 0,
            };
        }
        self
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Positions (in the full card list) of the visible group's cards.
    pub fn visible(&self) -> &[usize] {
        self.groups
            .get(&self.state.group_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn select_group(&mut self, key: impl Into<String>) -> PagerView {
        self.state.group_key = key.into();
        self.state.index = 0;
        self.recompute()
    }

    pub fn next(&mut self) -> PagerView {
        self.advance(1)
    }

    pub fn prev(&mut self) -> PagerView {
        self.advance(-1)
    }

    fn advance(&mut self, delta: isize) -> PagerView {
        self.state.index = self.state.index.saturating_add_signed(delta);
        self.recompute()
    }

    /// Clamp the cursor and derive the view.
    pub fn recompute(&mut self) -> PagerView {
        let visible = self.visible().len();
        if visible == 0 {
            self.state.index = 0;
            return PagerView {
                active: None,
                overdue: false,
                status: "0 / 0".to_string(),
                prev_disabled: true,
                next_disabled: true,
                visible,
            };
        }

        let index = self.state.index.min(visible - 1);
        self.state.index = index;
        let active = self.visible()[index];

        PagerView {
            active: Some(active),
            overdue: self.is_overdue(active),
            status: format!("{} / {}", index + 1, visible),
            prev_disabled: index == 0,
            next_disabled: index >= visible - 1,
            visible,
        }
    }

    /// Apply one command and push the resulting view to `sink`.
    pub fn dispatch(&mut self, command: PagerCommand, sink: &mut impl PagerSink) -> PagerView {
        let view = match command {
            PagerCommand::SelectGroup(key) => self.select_group(key),
            PagerCommand::Advance(delta) => self.advance(delta),
        };
        sink.show_pager(&view);
        view
    }

    fn is_overdue(&self, card: usize) -> bool {
        let Some(due) = self
            .due
            .as_ref()
            .and_then(|due| due.get(&self.state.group_key))
        else {
            return false;
        };
        let Some(submitted) = self.cards[card].submitted_at.as_deref() else {
            return false;
        };
        time::is_after(submitted, due).unwrap_or(false)
    }
}
