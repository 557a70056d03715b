//! DOM rendering of a [`PreviewList`].
//!
//! Always a full replace of the target's children. Entries are small
//! (attachment counts), so there is no diffing.

use binder_core::{PreviewEntry, PreviewList, PreviewVisual, RemoveControl};
use web_sys::Element;

use crate::config::{actions, attrs, classes};
use crate::error::DomError;
use crate::utils::dom;

/// Replace `area`'s children with `list`.
///
/// An empty list shows `placeholder` when one is given, otherwise leaves
/// the area empty.
pub fn render_into(
    area: &Element,
    list: &PreviewList,
    placeholder: Option<&str>,
) -> Result<(), DomError> {
    area.set_inner_html("");

    if list.is_empty() {
        if let Some(text) = placeholder {
            let empty = dom::create("div", classes::PREVIEW_EMPTY)?;
            empty.set_text_content(Some(text));
            area.append_child(&empty)?;
        }
        return Ok(());
    }

    for entry in list.entries() {
        let node = build_entry(entry)?;
        area.append_child(&node)?;
    }
    Ok(())
}

fn build_entry(entry: &PreviewEntry) -> Result<Element, DomError> {
    let item = dom::create("div", classes::PREVIEW_ITEM)?;

    match &entry.visual {
        PreviewVisual::Image { url, alt } => {
            let img = dom::create("img", classes::PREVIEW_IMAGE)?;
            img.set_attribute("src", url)?;
            img.set_attribute("alt", alt)?;
            item.append_child(&img)?;
        }
        PreviewVisual::Badge(label) => {
            let badge = dom::create("div", classes::PREVIEW_FILE)?;
            badge.set_text_content(Some(label));
            item.append_child(&badge)?;
        }
    }

    let meta = dom::create("div", classes::PREVIEW_META)?;
    meta.set_text_content(Some(&entry.meta));
    item.append_child(&meta)?;

    let remove = dom::create("button", classes::PREVIEW_REMOVE)?;
    remove.set_attribute("type", "button")?;
    match &entry.remove {
        RemoveControl::Staged(index) => {
            remove.set_attribute(attrs::ACTION, actions::REMOVE_FILE_PREVIEW)?;
            remove.set_attribute(attrs::INDEX, &index.to_string())?;
            remove.set_attribute("aria-label", "Remove file")?;
        }
        RemoveControl::Existing(id) => {
            item.set_attribute(attrs::ATTACHMENT_ID, id)?;
            remove.set_attribute(attrs::ACTION, actions::REMOVE_EXISTING_ATTACHMENT)?;
            remove.set_attribute(attrs::ATTACHMENT_ID, id)?;
            remove.set_attribute("aria-label", "Remove attachment")?;
        }
        RemoveControl::Submission => {
            remove.set_attribute(attrs::ACTION, actions::REMOVE_SUBMISSION_ATTACHMENT)?;
            remove.set_attribute("aria-label", "Remove attachment")?;
        }
    }
    remove.set_text_content(Some("×"));
    item.append_child(&remove)?;

    Ok(item)
}
