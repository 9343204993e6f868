//! Modal URL entry for the "ADD URL" button.

use crate::blocks::AttachKind;
use crate::focus::FocusTarget;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UrlPrompt {
    #[default]
    Closed,
    Open { row: usize, draft: String },
}

impl UrlPrompt {
    pub fn open(&mut self, row: usize, default_draft: &str) {
        *self = UrlPrompt::Open {
            row,
            draft: default_draft.to_string(),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, UrlPrompt::Open { .. })
    }

    /// Row the prompt was opened for.
    pub fn row(&self) -> Option<usize> {
        match self {
            UrlPrompt::Open { row, .. } => Some(*row),
            UrlPrompt::Closed => None,
        }
    }

    /// Control that takes focus back when the prompt closes: the URL button it was opened from.
    pub fn return_focus(&self) -> Option<FocusTarget> {
        self.row().map(|row| FocusTarget::Attach {
            row,
            slot: AttachKind::Url.slot(),
        })
    }

    pub fn draft(&self) -> &str {
        match self {
            UrlPrompt::Open { draft, .. } => draft,
            UrlPrompt::Closed => "",
        }
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        if let UrlPrompt::Open { draft, .. } = self {
            *draft = text.into();
        }
    }

    /// Close the prompt, yielding `(row, url)` unless the draft is blank.
    pub fn submit(&mut self) -> Option<(usize, String)> {
        match std::mem::take(self) {
            UrlPrompt::Open { row, draft } => {
                let url = draft.trim();
                (!url.is_empty()).then(|| (row, url.to_string()))
            }
            UrlPrompt::Closed => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = UrlPrompt::Closed;
    }
}
