//! # Input blocks: the editable list behind the form
//!
//! A [`BlockList`] is an ordered sequence of [`InputBlock`]s. A block has no
//! identifier of its own; it is addressed by its position in the list, and the
//! list only ever grows (there is no delete operation).
//!
//! Every mutating method takes the row index handed out by the rendered
//! component for that row. An index past the end is reported as
//! [`FormError::BlockOutOfRange`] rather than panicking.
//!
//! ## Attachments
//!
//! Each block carries two attachment lists. They are filled through the
//! attach-context buttons described by [`AttachKind`]: a URL entered by the
//! user, or a placeholder filename produced by [`placeholder_file_name`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::focus::GridLayout;

/// One header + prompt unit with its attached context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBlock {
    pub header: String,
    pub value: String,
    pub urls: Vec<String>,
    pub files: Vec<String>,
}

impl InputBlock {
    /// URLs first, then files, in insertion order.
    pub fn attachments(&self) -> impl Iterator<Item = &str> {
        self.urls
            .iter()
            .chain(self.files.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("block {index} does not exist (list has {len} blocks)")]
    BlockOutOfRange { index: usize, len: usize },
}

/// The attach-context buttons rendered for every block, in slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachKind {
    Url,
    File,
}

impl AttachKind {
    pub const ALL: [AttachKind; 2] = [AttachKind::Url, AttachKind::File];

    /// Column position of this button inside its block.
    pub fn slot(self) -> usize {
        match self {
            AttachKind::Url => 0,
            AttachKind::File => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttachKind::Url => "ADD URL",
            AttachKind::File => "ADD FILE",
        }
    }
}

/// Filename stand-in used until real file picking exists.
pub fn placeholder_file_name(unix_millis: i64) -> String {
    format!("document_{unix_millis}.pdf")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<InputBlock>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list pre-filled with `count` empty blocks.
    pub fn with_blocks(count: usize) -> Self {
        Self {
            blocks: vec![InputBlock::default(); count],
        }
    }

    pub fn blocks(&self) -> &[InputBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InputBlock> {
        self.blocks.get(index)
    }

    /// Navigation grid for the current rows; every block renders all of [`AttachKind::ALL`].
    pub fn layout(&self) -> GridLayout {
        GridLayout::uniform(self.blocks.len(), AttachKind::ALL.len())
    }

    /// Append an empty block and return its index.
    pub fn add_block(&mut self) -> usize {
        self.blocks.push(InputBlock::default());
        self.blocks.len() - 1
    }

    pub fn set_header(&mut self, index: usize, header: impl Into<String>) -> Result<(), FormError> {
        self.block_mut(index)?.header = header.into();
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), FormError> {
        self.block_mut(index)?.value = value.into();
        Ok(())
    }

    pub fn add_url(&mut self, index: usize, url: impl Into<String>) -> Result<(), FormError> {
        self.block_mut(index)?.urls.push(url.into());
        Ok(())
    }

    pub fn add_file(&mut self, index: usize, file: impl Into<String>) -> Result<(), FormError> {
        self.block_mut(index)?.files.push(file.into());
        Ok(())
    }

    fn block_mut(&mut self, index: usize) -> Result<&mut InputBlock, FormError> {
        let len = self.blocks.len();
        self.blocks
            .get_mut(index)
            .ok_or(FormError::BlockOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> BlockList {
        let mut list = BlockList::new();
        for i in 0..count {
            let idx = list.add_block();
            list.set_header(idx, format!("h{i}")).unwrap();
            list.set_value(idx, format!("v{i}")).unwrap();
            list.add_url(idx, format!("https://example.com/{i}")).unwrap();
        }
        list
    }

    #[test]
    fn test_add_block_grows_by_one_and_keeps_prior_blocks() {
        let mut list = filled(3);
        let before = list.blocks().to_vec();

        for expected_len in 4..8 {
            let idx = list.add_block();
            assert_eq!(idx, expected_len - 1);
            assert_eq!(list.len(), expected_len);
            assert_eq!(&list.blocks()[..3], &before[..]);
            assert_eq!(list.get(idx), Some(&InputBlock::default()));
        }
    }

    #[test]
    fn test_set_header_only_touches_header() {
        let mut list = filled(3);
        let before = list.clone();

        list.set_header(1, "changed").unwrap();

        let block = list.get(1).unwrap();
        assert_eq!(block.header, "changed");
        assert_eq!(block.value, "v1");
        assert_eq!(block.urls, before.get(1).unwrap().urls);
        assert!(block.files.is_empty());
        assert_eq!(list.get(0), before.get(0));
        assert_eq!(list.get(2), before.get(2));
    }

    #[test]
    fn test_set_value_only_touches_value() {
        let mut list = filled(2);
        list.add_file(0, "document_1.pdf").unwrap();
        let before = list.clone();

        list.set_value(0, "new prompt").unwrap();

        let block = list.get(0).unwrap();
        assert_eq!(block.value, "new prompt");
        assert_eq!(block.header, "h0");
        assert_eq!(block.files, vec!["document_1.pdf".to_string()]);
        assert_eq!(list.get(1), before.get(1));
    }

    #[test]
    fn test_attachments_keep_insertion_order() {
        let mut list = BlockList::with_blocks(1);
        list.add_file(0, "a.pdf").unwrap();
        list.add_url(0, "https://one").unwrap();
        list.add_url(0, "https://two").unwrap();

        let all: Vec<&str> = list.get(0).unwrap().attachments().collect();
        assert_eq!(all, vec!["https://one", "https://two", "a.pdf"]);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mut list = BlockList::with_blocks(2);
        assert_eq!(
            list.set_header(2, "x"),
            Err(FormError::BlockOutOfRange { index: 2, len: 2 })
        );
        assert!(list.add_url(7, "https://").is_err());
        assert_eq!(list, BlockList::with_blocks(2));
    }

    #[test]
    fn test_layout_follows_block_count() {
        let mut list = BlockList::with_blocks(1);
        assert_eq!(list.layout().rows(), 1);
        list.add_block();
        let layout = list.layout();
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.buttons_in(1), AttachKind::ALL.len());
    }

    #[test]
    fn test_placeholder_file_name() {
        assert_eq!(placeholder_file_name(1700000000123), "document_1700000000123.pdf");
    }

    #[test]
    fn test_attach_slots_match_order() {
        for (i, kind) in AttachKind::ALL.iter().enumerate() {
            assert_eq!(kind.slot(), i);
        }
    }
}
