//! Pure description of how a favorite toggle changes the page.
//!
//! The page can show the same product in up to four places. [`plan`] turns a
//! server result and the set of places that actually exist into a list of
//! [`Mutation`]s; the web crate only looks elements up and applies them.

use crate::{
    error::Error,
    models::{FavoriteResult, Severity},
};

pub const FAVORITED_CLASS: &str = "favorited";
pub const HEART_FILL_CLASS: &str = "bi-heart-fill";
pub const HEART_CLASS: &str = "bi-heart";

pub const LABEL_FAVORITED: &str = "已收藏";
pub const LABEL_FAVORITE: &str = "收藏";
pub const LABEL_UNFAVORITE: &str = "取消收藏";

/// Shown when the request itself fails.
pub const GENERIC_FAILURE: &str = "操作失败，请重试";

/// Which of the page targets are present for a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetPresence {
    pub list_button: bool,
    pub detail_icon: bool,
    pub detail_text: bool,
    pub count_badge: bool,
}

impl TargetPresence {
    pub fn all() -> Self {
        Self {
            list_button: true,
            detail_icon: true,
            detail_text: true,
            count_badge: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Button in product lists: toggles `favorited` and replaces its markup.
    ListButton { favorited: bool, inner_html: String },
    /// Heart icon on the detail page.
    DetailIcon {
        add: &'static str,
        remove: &'static str,
    },
    DetailText(&'static str),
    CountBadge(String),
}

impl Mutation {
    /// Favorite state this mutation puts its target in, if it carries one.
    #[cfg(test)]
    pub fn favorited(&self) -> Option<bool> {
        match self {
            Mutation::ListButton { favorited, .. } => Some(*favorited),
            Mutation::DetailIcon { add, .. } => Some(*add == HEART_FILL_CLASS),
            Mutation::DetailText(text) => Some(*text == LABEL_UNFAVORITE),
            Mutation::CountBadge(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected(String),
}

pub fn outcome(result: &FavoriteResult) -> Outcome {
    if result.success {
        Outcome::Applied
    } else {
        Outcome::Rejected(result.message.clone())
    }
}

/// Toast reporting how a toggle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Everything the page does once a toggle request finishes: the target
/// updates to apply and the single toast to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub mutations: Vec<Mutation>,
    pub notice: Notice,
}

pub fn respond(response: &Result<FavoriteResult, Error>, presence: TargetPresence) -> Reaction {
    match response {
        Ok(result) => match outcome(result) {
            Outcome::Applied => Reaction {
                mutations: plan(result, presence),
                notice: Notice {
                    message: result.message.clone(),
                    severity: Severity::Success,
                },
            },
            Outcome::Rejected(message) => Reaction {
                mutations: vec![],
                notice: Notice {
                    message: if message.is_empty() {
                        GENERIC_FAILURE.to_string()
                    } else {
                        message
                    },
                    severity: Severity::Warning,
                },
            },
        },
        Err(_) => Reaction {
            mutations: vec![],
            notice: Notice {
                message: GENERIC_FAILURE.to_string(),
                severity: Severity::Danger,
            },
        },
    }
}

pub fn list_button_markup(favorited: bool) -> String {
    if favorited {
        format!(r#"<i class="bi {}"></i> {}"#, HEART_FILL_CLASS, LABEL_FAVORITED)
    } else {
        format!(r#"<i class="bi {}"></i> {}"#, HEART_CLASS, LABEL_FAVORITE)
    }
}

pub fn plan(result: &FavoriteResult, presence: TargetPresence) -> Vec<Mutation> {
    let favorited = result.is_favorited;
    let mut mutations = Vec::with_capacity(4);

    if presence.list_button {
        mutations.push(Mutation::ListButton {
            favorited,
            inner_html: list_button_markup(favorited),
        });
    }

    if presence.detail_icon {
        mutations.push(if favorited {
            Mutation::DetailIcon {
                add: HEART_FILL_CLASS,
                remove: HEART_CLASS,
            }
        } else {
            Mutation::DetailIcon {
                add: HEART_CLASS,
                remove: HEART_FILL_CLASS,
            }
        });
    }

    if presence.detail_text {
        mutations.push(Mutation::DetailText(if favorited {
            LABEL_UNFAVORITE
        } else {
            LABEL_FAVORITE
        }));
    }

    if presence.count_badge {
        mutations.push(Mutation::CountBadge(result.favorite_count.to_string()));
    }

    mutations
}
