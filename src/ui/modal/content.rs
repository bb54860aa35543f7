// SPDX-License-Identifier: MPL-2.0
//! Modal dialog contents.
//!
//! Contents are plain data made of translation keys, built by the functions
//! below and rendered by the modal view.

use crate::i18n::Label;

/// A piece of modal body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Label),
    Paragraph(Label),
    /// Unordered list.
    Bullets(Vec<Label>),
    /// Numbered list of `(title, text)` pairs.
    Steps(Vec<(Label, Label)>),
}

/// Content of one modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    /// Short identifier used in logs and diagnostics.
    pub name: &'static str,
    pub title: Label,
    pub blocks: Vec<Block>,
}

fn keys(prefix: &str, names: &[&str]) -> Vec<Label> {
    names
        .iter()
        .map(|name| Label::key(format!("{prefix}-{name}")))
        .collect()
}

/// What Postify is and what it teaches.
#[must_use]
pub fn info() -> ModalContent {
    ModalContent {
        name: "info",
        title: Label::key("modal-info-title"),
        blocks: vec![
            Block::Paragraph(Label::key("modal-info-intro")),
            Block::Heading(Label::key("modal-info-features-heading")),
            Block::Bullets(keys(
                "modal-info-feature",
                &[
                    "scheduling",
                    "analytics",
                    "collaboration",
                    "hashtags",
                    "management",
                ],
            )),
            Block::Heading(Label::key("modal-info-purpose-heading")),
            Block::Paragraph(Label::key("modal-info-purpose")),
        ],
    }
}

/// Content automation guide.
#[must_use]
pub fn guide() -> ModalContent {
    let steps = ["planning", "quality", "engagement", "analytics", "compliance"]
        .iter()
        .map(|step| {
            (
                Label::key(format!("modal-guide-step-{step}-title")),
                Label::key(format!("modal-guide-step-{step}-text")),
            )
        })
        .collect();

    ModalContent {
        name: "guide",
        title: Label::key("modal-guide-title"),
        blocks: vec![
            Block::Paragraph(Label::key("modal-guide-intro")),
            Block::Heading(Label::key("modal-guide-setup-heading")),
            Block::Steps(steps),
            Block::Heading(Label::key("modal-guide-practices-heading")),
            Block::Bullets(keys(
                "modal-guide-practice",
                &["authentic", "consistent", "hashtags", "monitor", "guidelines"],
            )),
        ],
    }
}

/// Former API modal, now the same as [`info`].
#[must_use]
pub fn api() -> ModalContent {
    info()
}
