// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - [`Label`] values that defer translation to render time

pub mod fluent;

pub use fluent::I18n;

/// Text shown to the user, either a translation key or literal text.
///
/// Literal text is used for messages that come from outside the app, such as
/// the error string of a backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Fluent message key, with optional interpolation arguments.
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    /// Text displayed verbatim.
    Text(String),
}

impl Label {
    /// Creates a translated label without arguments.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Creates a verbatim label.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Adds an interpolation argument. No effect on verbatim labels.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Key { args, .. } = &mut self {
            args.push((name.into(), value.into()));
        }
        self
    }

    /// Returns the translation key, if any.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key { key, .. } => Some(key),
            Self::Text(_) => None,
        }
    }

    /// Resolves the label into display text.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            Self::Key { key, args } if args.is_empty() => i18n.tr(key),
            Self::Key { key, args } => {
                let args: Vec<(&str, &str)> = args
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                i18n.tr_with_args(key, &args)
            }
            Self::Text(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_label_resolves_verbatim() {
        let i18n = I18n::default();
        assert_eq!(Label::text("not found").resolve(&i18n), "not found");
    }

    #[test]
    fn with_arg_is_ignored_for_text() {
        let label = Label::text("plain").with_arg("a", "b");
        assert_eq!(label, Label::Text("plain".to_string()));
    }

    #[test]
    fn as_key_exposes_translation_key() {
        assert_eq!(Label::key("window-title").as_key(), Some("window-title"));
        assert_eq!(Label::text("x").as_key(), None);
    }
}
