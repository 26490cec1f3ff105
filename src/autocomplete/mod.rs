//! Inline tag completion for a single-line text field.
//!
//! The engine is a pure transition: every key release is fed to [`handle_key`] together with
//! the field's current value/caret and the latest vocabulary snapshot, and it returns the new
//! overlay state plus, on commit, the new field contents. The DOM glue lives in
//! `components::tag_input`; nothing in here touches the browser.

mod overlay;

pub(crate) use overlay::OverlayPosition;

use std::str::FromStr;

/// Keys with a dedicated meaning for the completion widget.
///
/// Variant names match the DOM `KeyboardEvent.key` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
pub(crate) enum NamedKey {
    Backspace,
    Tab,
    ArrowUp,
    ArrowDown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Key {
    /// A single character that can be part of a tag.
    Token(char),
    Named(NamedKey),
    /// Anything else (Enter, Escape, punctuation, modifiers...). Closes the widget.
    Other,
}

impl Key {
    pub(crate) fn from_event_key(key: &str) -> Self {
        if let Ok(named) = NamedKey::from_str(key) {
            return Key::Named(named);
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_tag_char(c) => Key::Token(c),
            _ => Key::Other,
        }
    }

    fn keeps_widget_open(&self) -> bool {
        !matches!(self, Key::Other)
    }
}

/// Characters that may appear in a tag as typed by the user.
pub(crate) fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Value and caret of the host field.
///
/// Offsets are byte offsets into `value` and always sit on char boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldState {
    pub value: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl FieldState {
    pub(crate) fn new(value: impl Into<String>, selection_start: usize, selection_end: usize) -> Self {
        Self {
            value: value.into(),
            selection_start,
            selection_end,
        }
    }

    pub(crate) fn with_caret(value: impl Into<String>, caret: usize) -> Self {
        Self::new(value, caret, caret)
    }

    /// Caret position, or `None` while a range is selected.
    pub(crate) fn caret(&self) -> Option<usize> {
        (self.selection_start == self.selection_end).then_some(self.selection_start)
    }
}

/// Byte range `[start, end)` of the token under the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub(crate) fn text<'a>(&self, value: &'a str) -> &'a str {
        &value[self.start..self.end]
    }
}

/// Locate the space-delimited token around `caret`.
///
/// Both boundaries are searched from the character just before the caret, so a caret sitting
/// right after a space has no token. Returns `None` for an empty token.
pub(crate) fn token_at(value: &str, caret: usize) -> Option<TokenSpan> {
    if value.is_empty() {
        return None;
    }

    let mut caret = caret.min(value.len());
    while !value.is_char_boundary(caret) {
        caret -= 1;
    }

    // Start of the char before the caret; the first char when the caret is at 0.
    let anchor = value[..caret]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0);
    let anchor_end = anchor + value[anchor..].chars().next().map_or(0, char::len_utf8);

    let start = value[..anchor_end].rfind(' ').map_or(0, |i| i + 1);
    let end = value[anchor..]
        .find(' ')
        .map_or(value.len(), |i| anchor + i);

    (start < end).then_some(TokenSpan { start, end })
}

/// Vocabulary entries starting with `token`, in vocabulary order.
pub(crate) fn matching_tags(vocabulary: &[String], token: &str) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|tag| tag.starts_with(token))
        .cloned()
        .collect()
}

/// Replace `span` of `field` with `tag`.
///
/// A single space follows the tag when the caret was at the very end of the value, so the
/// user can keep typing the next tag. The caret lands right after the inserted text.
pub(crate) fn splice_tag(field: &FieldState, span: TokenSpan, tag: &str) -> FieldState {
    let value = &field.value;
    let trailing = if field.selection_start == value.len() {
        " "
    } else {
        ""
    };

    let mut next = String::with_capacity(value.len() + tag.len() + trailing.len());
    next.push_str(&value[..span.start]);
    next.push_str(tag);
    next.push_str(trailing);
    next.push_str(&value[span.end..]);

    FieldState::with_caret(next, span.start + tag.len() + trailing.len())
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// The open suggestion list together with the field snapshot it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Completions {
    pub items: Vec<String>,
    pub selected: usize,
    pub span: TokenSpan,
    pub source: FieldState,
}

impl Completions {
    pub(crate) fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    /// Commit the entry at `index` into the snapshot this list was rendered from.
    pub(crate) fn commit(&self, index: usize) -> Option<FieldState> {
        let tag = self.items.get(index)?;
        Some(splice_tag(&self.source, self.span, tag))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Overlay {
    #[default]
    Idle,
    Open(Completions),
}

impl Overlay {
    pub(crate) fn completions(&self) -> Option<&Completions> {
        match self {
            Overlay::Idle => None,
            Overlay::Open(c) => Some(c),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    /// Whether there is at least one entry to navigate or commit.
    pub(crate) fn has_items(&self) -> bool {
        self.completions().is_some_and(|c| !c.items.is_empty())
    }

    fn selected(&self) -> usize {
        self.completions().map_or(0, |c| c.selected)
    }
}

/// Result of one key release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Transition {
    /// New field contents when the key committed a suggestion.
    pub field: Option<FieldState>,
    pub overlay: Overlay,
}

impl Transition {
    fn idle() -> Self {
        Self {
            field: None,
            overlay: Overlay::Idle,
        }
    }

    fn keep(overlay: &Overlay) -> Self {
        Self {
            field: None,
            overlay: overlay.clone(),
        }
    }
}

/// Advance the widget by one key release.
pub(crate) fn handle_key(
    overlay: &Overlay,
    key: &Key,
    field: &FieldState,
    vocabulary: &[String],
) -> Transition {
    if !key.keeps_widget_open() {
        return Transition::idle();
    }

    let Some(caret) = field.caret() else {
        return Transition::keep(overlay);
    };

    let Some(span) = token_at(&field.value, caret) else {
        return Transition::idle();
    };
    let token = span.text(&field.value);

    let selected = match key {
        Key::Named(NamedKey::Tab) => {
            let Some(tag) = overlay.completions().and_then(Completions::selected_item) else {
                return Transition::keep(overlay);
            };
            return Transition {
                field: Some(splice_tag(field, span, tag)),
                overlay: Overlay::Idle,
            };
        }
        Key::Named(NamedKey::ArrowUp) => overlay.selected().saturating_sub(1),
        Key::Named(NamedKey::ArrowDown) => overlay.selected().saturating_add(1),
        _ => 0,
    };

    let items = matching_tags(vocabulary, token);
    let selected = clamp_index(selected, items.len());

    Transition {
        field: None,
        overlay: Overlay::Open(Completions {
            items,
            selected,
            span,
            source: field.clone(),
        }),
    }
}

/// Whether a key press must not reach the field before its release is handled.
///
/// Tab never moves focus. Arrows only hold the caret while there is an entry to move to.
pub(crate) fn suppresses_default(key: &Key, overlay: &Overlay) -> bool {
    match key {
        Key::Named(NamedKey::Tab) => true,
        // With no list shown the caret may still jump before keyup reads it.
        Key::Named(NamedKey::ArrowUp | NamedKey::ArrowDown) => overlay.has_items(),
        _ => false,
    }
}
