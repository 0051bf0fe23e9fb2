use std::cell::RefCell;

use anyhow::anyhow;
use campus_trade_lib::{
    models::ProductId,
    tracker::RequestTracker,
    view::{respond, Mutation, TargetPresence, FAVORITED_CLASS},
};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::{common::toast, query, utils::element_by_id};

thread_local! {
    static REQUESTS: RefCell<RequestTracker<ProductId>> = RefCell::new(RequestTracker::new());
}

/// Places on the page showing the favorite state of one product.
struct Targets {
    list_button: Option<Element>,
    detail_icon: Option<Element>,
    detail_text: Option<Element>,
    count_badge: Option<Element>,
}

impl Targets {
    fn resolve(product_id: &ProductId) -> Self {
        Self {
            list_button: element_by_id(&product_id.list_button_id()),
            detail_icon: element_by_id("favorite-icon"),
            detail_text: element_by_id("favorite-text"),
            count_badge: element_by_id(&product_id.count_badge_id()),
        }
    }

    fn presence(&self) -> TargetPresence {
        TargetPresence {
            list_button: self.list_button.is_some(),
            detail_icon: self.detail_icon.is_some(),
            detail_text: self.detail_text.is_some(),
            count_badge: self.count_badge.is_some(),
        }
    }

    fn apply(&self, mutations: &[Mutation]) -> Result<(), anyhow::Error> {
        for mutation in mutations {
            match mutation {
                Mutation::ListButton {
                    favorited,
                    inner_html,
                } => {
                    if let Some(button) = &self.list_button {
                        button
                            .class_list()
                            .toggle_with_force(FAVORITED_CLASS, *favorited)
                            .map_err(|e| anyhow!("error toggle class: {:?}", e))?;
                        button.set_inner_html(inner_html);
                    }
                }
                Mutation::DetailIcon { add, remove } => {
                    if let Some(icon) = &self.detail_icon {
                        let class_list = icon.class_list();
                        class_list
                            .add_1(add)
                            .map_err(|e| anyhow!("error add class: {:?}", e))?;
                        class_list
                            .remove_1(remove)
                            .map_err(|e| anyhow!("error remove class: {:?}", e))?;
                    }
                }
                Mutation::DetailText(text) => {
                    if let Some(label) = &self.detail_text {
                        label.set_text_content(Some(*text));
                    }
                }
                Mutation::CountBadge(count) => {
                    if let Some(badge) = &self.count_badge {
                        badge.set_text_content(Some(count.as_str()));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Sends one toggle request for `product_id` and brings every place on the
/// page showing that product in line with the answer.
///
/// Only the most recent request per product gets to touch the page; an
/// older request finishing late is dropped.
pub fn toggle(product_id: ProductId) {
    let ticket = REQUESTS.with(|r| r.borrow_mut().issue(product_id.clone()));

    spawn_local(async move {
        let response = query::toggle_favorite(&product_id).await;

        if !REQUESTS.with(|r| r.borrow_mut().settle(&ticket)) {
            debug!("newer favorite request for {} pending, ignoring response", product_id);
            return;
        }

        match &response {
            Ok(result) if !result.success => {
                warn!("favorite toggle for {} rejected: {:?}", product_id, result.message)
            }
            Ok(_) => {}
            Err(e) => error!("failed to toggle favorite {}: {}", product_id, e),
        }

        let targets = Targets::resolve(&product_id);
        let reaction = respond(&response, targets.presence());
        if let Err(e) = targets.apply(&reaction.mutations) {
            error!("failed to update favorite state of {}: {}", product_id, e);
        }

        toast::show(reaction.notice.message, reaction.notice.severity);
    });
}
