// SPDX-License-Identifier: MPL-2.0
//! Single modal dialog shown above the page.
//!
//! There is never more than one modal: [`Modal::show`] replaces whatever is
//! displayed. A modal closes only when the click landed on the backdrop or on
//! a close control; clicks inside the dialog body are ignored.

pub mod content;
mod view;

pub use content::{Block, ModalContent};
pub use view::view;

/// Where a close request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSource {
    /// The dimmed area around the dialog.
    Backdrop,
    /// A `×` or "Close" button.
    CloseControl,
    /// Anywhere inside the dialog body.
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Close(CloseSource),
}

/// Modal container state.
#[derive(Debug, Default)]
pub struct Modal {
    content: Option<ModalContent>,
    scroll_locked: bool,
}

impl Modal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays `content`, replacing the current dialog if any, and locks
    /// scrolling of the page behind it.
    pub fn show(&mut self, content: ModalContent) {
        if let Some(previous) = &self.content {
            tracing::debug!(previous = previous.name, next = content.name, "replacing modal");
        } else {
            tracing::debug!(modal = content.name, "showing modal");
        }
        self.content = Some(content);
        self.scroll_locked = true;
    }

    /// Closes the modal if `source` is the backdrop or a close control.
    ///
    /// Returns whether the modal was closed by this call.
    pub fn close(&mut self, source: CloseSource) -> bool {
        match source {
            CloseSource::Content => false,
            CloseSource::Backdrop | CloseSource::CloseControl => {
                let Some(content) = self.content.take() else {
                    return false;
                };
                tracing::debug!(modal = content.name, ?source, "modal closed");
                self.scroll_locked = false;
                true
            }
        }
    }

    /// Handles a modal message. Returns whether the modal was closed.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Close(source) => self.close(source),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    #[must_use]
    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Whether the page behind the modal must ignore scrolling.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_makes_visible_and_locks_scroll() {
        let mut modal = Modal::new();
        assert!(!modal.is_visible());

        modal.show(content::info());
        assert!(modal.is_visible());
        assert!(modal.scroll_locked());
    }

    #[test]
    fn second_show_replaces_first() {
        let mut modal = Modal::new();
        modal.show(content::info());
        modal.show(content::guide());

        assert_eq!(modal.content(), Some(&content::guide()));
    }

    #[test]
    fn click_inside_content_keeps_modal_open() {
        let mut modal = Modal::new();
        modal.show(content::guide());

        assert!(!modal.close(CloseSource::Content));
        assert!(modal.is_visible());
        assert!(modal.scroll_locked());
    }

    #[test]
    fn backdrop_and_close_control_close() {
        for source in [CloseSource::Backdrop, CloseSource::CloseControl] {
            let mut modal = Modal::new();
            modal.show(content::info());

            assert!(modal.update(Message::Close(source)));
            assert!(!modal.is_visible());
            assert!(!modal.scroll_locked());
        }
    }

    #[test]
    fn closing_hidden_modal_is_noop() {
        let mut modal = Modal::new();
        assert!(!modal.close(CloseSource::Backdrop));
    }
}
