//! The ordered sequence of blocks, spacers and page breaks for one document.

use crate::blocks::{LayoutBlock, TaskCard};

/// A single entry in a [`Flow`].
#[derive(Clone, Debug, PartialEq)]
pub enum FlowItem {
    /// A drawable block.
    Block(LayoutBlock),
    /// Vertical whitespace, in points.
    Spacer(f64),
    /// Forces the following items onto a new page.
    PageBreak,
}

impl FlowItem {
    pub fn as_block(&self) -> Option<&LayoutBlock> {
        match self {
            FlowItem::Block(block) => Some(block),
            _ => None,
        }
    }
}

/// Ordered layout instructions assembled by the page builders.
///
/// The flow only knows about explicit page breaks.  Automatic breaks caused by content that
/// overflows a page are decided later by the pagination engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flow {
    items: Vec<FlowItem>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_block(&mut self, block: impl Into<LayoutBlock>) {
        self.items.push(FlowItem::Block(block.into()));
    }

    pub fn push_spacer(&mut self, height: f64) {
        self.items.push(FlowItem::Spacer(height));
    }

    pub fn push_page_break(&mut self) {
        self.items.push(FlowItem::PageBreak);
    }

    pub fn items(&self) -> &[FlowItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<FlowItem> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the blocks, skipping spacers and page breaks.
    pub fn blocks(&self) -> impl Iterator<Item = &LayoutBlock> {
        self.items.iter().filter_map(FlowItem::as_block)
    }

    /// Splits the flow at its explicit page breaks.
    ///
    /// An empty flow has no pages; otherwise there is one more page than there are breaks.
    pub fn pages(&self) -> Vec<&[FlowItem]> {
        if self.items.is_empty() {
            return Vec::new();
        }
        self.items
            .split(|item| matches!(item, FlowItem::PageBreak))
            .collect()
    }

    /// Number of logical pages, assuming every page's content fits on one sheet.
    pub fn page_count(&self) -> usize {
        self.pages().len()
    }
}

/// Task cards found in a slice of flow items, in order.
pub fn task_cards(items: &[FlowItem]) -> impl Iterator<Item = &TaskCard> {
    items.iter().filter_map(|item| match item {
        FlowItem::Block(LayoutBlock::Task(card)) => Some(card),
        _ => None,
    })
}
