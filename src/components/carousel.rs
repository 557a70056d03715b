//! Filtered pagers ("carousels") over server-rendered cards.
//!
//! Cards are enumerated once by selector and grouped by
//! `data-assignment-id`. The group `<select>` picks the visible group; prev
//! and next step through it. All state is in [`Pager`]; this module only
//! reflects [`PagerView`]s onto the page.

use std::rc::Rc;

use binder_core::{Card, CarouselOptions, GroupOption, Pager, PagerCommand, PagerSink, PagerView};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlOptionElement, HtmlSelectElement};

use crate::app::PageContext;
use crate::config::{attrs, classes};
use crate::error::DomError;
use crate::utils::dom;

// ============================================================================
// CarouselView
// ============================================================================

/// Page elements a pager writes to. Every control is optional.
pub struct CarouselView {
    cards: Vec<Element>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    status: Option<Element>,
    empty_id: Option<String>,
}

impl PagerSink for CarouselView {
    fn show_pager(&mut self, view: &PagerView) {
        for card in &self.cards {
            if let Err(err) = card.class_list().remove_2(classes::ACTIVE, classes::OVERDUE) {
                tracing::debug!(error = %DomError::from(err), "card classes not cleared");
            }
        }
        if let Some(card) = view.active.and_then(|i| self.cards.get(i)) {
            let tokens = card.class_list();
            let marked = if view.overdue {
                tokens.add_2(classes::ACTIVE, classes::OVERDUE)
            } else {
                tokens.add_1(classes::ACTIVE)
            };
            if let Err(err) = marked {
                tracing::debug!(error = %DomError::from(err), "active card not marked");
            }
        }

        if let Some(status) = &self.status {
            status.set_text_content(Some(&view.status));
        }
        if let Some(prev) = &self.prev {
            prev.set_disabled(view.prev_disabled);
        }
        if let Some(next) = &self.next {
            next.set_disabled(view.next_disabled);
        }
        // looked up on every render: the empty-state element may be re-rendered
        if let Some(empty) = self.empty_id.as_deref().and_then(|id| dom::by_id(id).ok()) {
            dom::set_visible(&empty, view.is_empty());
        }
    }
}

// ============================================================================
// Carousel
// ============================================================================

/// One wired pager.
pub struct Carousel {
    pager: Pager,
    view: CarouselView,
    filter: Option<HtmlSelectElement>,
}

impl Carousel {
    /// Apply a command and reflect the result.
    pub fn dispatch(&mut self, command: PagerCommand) -> PagerView {
        let Self { pager, view, .. } = self;
        pager.dispatch(command, view)
    }

    /// Re-derive the view without moving the cursor.
    pub fn refresh(&mut self) -> PagerView {
        let view = self.pager.recompute();
        self.view.show_pager(&view);
        view
    }
}

/// Read the selector's options, with their `data-due` values.
fn group_options(filter: &HtmlSelectElement) -> Vec<GroupOption> {
    let options = filter.options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| GroupOption {
            value: opt.value(),
            due: opt.get_attribute(attrs::DUE),
        })
        .collect()
}

fn card_model(card: &Element) -> Card {
    Card {
        group: card.get_attribute(attrs::ASSIGNMENT_ID).unwrap_or_default(),
        submitted_at: card.get_attribute(attrs::SUBMITTED_AT),
    }
}

/// Wire one pager described by `options`.
///
/// Missing controls are tolerated individually; the pager still runs with
/// whatever exists.
pub fn setup_carousel(ctx: &Rc<PageContext>, options: CarouselOptions) -> Result<(), DomError> {
    let filter = dom::by_id_as::<HtmlSelectElement>(&options.filter_id).ok();
    let prev = dom::by_id_as::<HtmlButtonElement>(&options.prev_id).ok();
    let next = dom::by_id_as::<HtmlButtonElement>(&options.next_id).ok();
    let status = dom::by_id(&options.status_id).ok();
    let cards = dom::query_document(&options.card_selector);

    let group_opts = filter.as_ref().map(group_options).unwrap_or_default();
    if let Some(filter) = &filter
        && filter.value().is_empty()
        && let Some(first) = group_opts.first()
    {
        filter.set_value(&first.value);
    }
    let selected = filter.as_ref().map(HtmlSelectElement::value).unwrap_or_default();

    let models = cards.iter().map(card_model).collect();
    let pager = Pager::new(models, &group_opts, options.due_data).starting_at(&selected);
    let has_cards = !cards.is_empty();

    let carousel = ctx.add_carousel(
        &options.filter_id,
        Carousel {
            pager,
            view: CarouselView {
                cards,
                prev: prev.clone(),
                next: next.clone(),
                status,
                empty_id: options.empty_id.clone(),
            },
            filter: filter.clone(),
        },
    );

    if let Some(filter) = &filter {
        let carousel = Rc::clone(&carousel);
        let select = filter.clone();
        dom::listen(filter, "change", move |_| {
            carousel
                .borrow_mut()
                .dispatch(PagerCommand::SelectGroup(select.value()));
        })?;
    }
    for (button, delta) in [(prev, -1), (next, 1)] {
        let Some(button) = button else {
            continue;
        };
        let carousel = Rc::clone(&carousel);
        dom::listen(&button, "click", move |_| {
            carousel.borrow_mut().dispatch(PagerCommand::Advance(delta));
        })?;
    }

    if has_cards {
        carousel.borrow_mut().refresh();
    }
    tracing::debug!(filter = %options.filter_id, groups = group_opts.len(), "carousel ready");
    Ok(())
}

/// Switch a pager to `group`, as if picked in its selector.
///
/// Empty groups and unknown pagers are ignored.
pub fn show_group(ctx: &PageContext, filter_id: &str, group: &str) {
    if group.is_empty() {
        return;
    }
    let Some(carousel) = ctx.carousel(filter_id) else {
        tracing::debug!(filter = filter_id, "no carousel to switch");
        return;
    };
    let mut carousel = carousel.borrow_mut();
    if let Some(filter) = &carousel.filter {
        filter.set_value(group);
    }
    carousel.dispatch(PagerCommand::SelectGroup(group.to_string()));
}
