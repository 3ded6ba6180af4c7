// src/articles/expand.rs
//! One-level child expansion for a page's top-level blocks.

use crate::api::NotionRepository;
use crate::error::AppError;
use crate::model::Block;
use crate::types::BlockId;
use futures::future::try_join_all;
use std::collections::HashMap;

/// Fetches the children of every block that reports some, concurrently, then
/// splices them in. Grandchildren are not fetched.
pub async fn expand_children(
    repo: &dyn NotionRepository,
    blocks: Vec<Block>,
) -> Result<Vec<Block>, AppError> {
    let fetches = blocks
        .iter()
        .filter(|block| block.has_children())
        .map(|block| {
            let id = block.id().clone();
            async move {
                let children = repo.retrieve_children(id.as_notion_id()).await?;
                log::debug!("Fetched {} children for block {}", children.len(), id);
                Ok::<_, AppError>((id, children))
            }
        });

    let fetched = try_join_all(fetches).await?;
    log::info!("Expanded children of {} blocks", fetched.len());

    Ok(splice_children(blocks, fetched))
}

/// Attaches each fetched list to the block with the same id, only where that
/// block holds no children yet. Lists with no matching block are dropped.
pub fn splice_children(mut blocks: Vec<Block>, fetched: Vec<(BlockId, Vec<Block>)>) -> Vec<Block> {
    let mut by_id: HashMap<BlockId, Vec<Block>> = fetched.into_iter().collect();

    for block in &mut blocks {
        if !block.children().is_empty() {
            continue;
        }
        if let Some(children) = by_id.remove(block.id()) {
            block.set_children(children);
        }
    }

    if !by_id.is_empty() {
        log::warn!("{} fetched child lists matched no block", by_id.len());
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockCommon, ParagraphBlock, TextBlockContent, ToggleBlock};

    fn id(hex: &str) -> BlockId {
        BlockId::parse(hex).unwrap()
    }

    fn paragraph(block_id: BlockId, text: &str) -> Block {
        Block::Paragraph(ParagraphBlock {
            common: BlockCommon::new(block_id),
            content: TextBlockContent::plain(text),
        })
    }

    fn toggle(block_id: BlockId) -> Block {
        let mut common = BlockCommon::new(block_id);
        common.has_children = true;
        Block::Toggle(ToggleBlock {
            common,
            content: TextBlockContent::plain("toggle"),
        })
    }

    const A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const C: &str = "cccccccccccccccccccccccccccccccc";

    #[test]
    fn test_children_land_on_matching_id() {
        let blocks = vec![toggle(id(A)), paragraph(id(C), "plain"), toggle(id(B))];
        let fetched = vec![
            (id(B), vec![paragraph(BlockId::new_v4(), "for b")]),
            (id(A), vec![paragraph(BlockId::new_v4(), "for a")]),
        ];

        let spliced = splice_children(blocks, fetched);

        assert_eq!(spliced[0].children().len(), 1);
        assert_eq!(spliced[0].children()[0].block_type(), "paragraph");
        assert!(matches!(
            &spliced[0].children()[0],
            Block::Paragraph(p) if p.content.rich_text[0].plain_text == "for a"
        ));
        assert!(spliced[1].children().is_empty());
        assert!(matches!(
            &spliced[2].children()[0],
            Block::Paragraph(p) if p.content.rich_text[0].plain_text == "for b"
        ));
    }

    #[test]
    fn test_existing_children_are_kept() {
        let mut existing = toggle(id(A));
        existing.set_children(vec![paragraph(BlockId::new_v4(), "already")]);

        let spliced = splice_children(
            vec![existing],
            vec![(id(A), vec![paragraph(BlockId::new_v4(), "new")])],
        );

        assert_eq!(spliced[0].children().len(), 1);
        assert!(matches!(
            &spliced[0].children()[0],
            Block::Paragraph(p) if p.content.rich_text[0].plain_text == "already"
        ));
    }

    #[test]
    fn test_unmatched_lists_are_dropped() {
        let spliced = splice_children(
            vec![toggle(id(A))],
            vec![(id(C), vec![paragraph(BlockId::new_v4(), "orphan")])],
        );
        assert_eq!(spliced.len(), 1);
        assert!(spliced[0].children().is_empty());
    }

    #[test]
    fn test_splicing_keeps_order_and_identity() {
        let blocks = vec![toggle(id(A)), toggle(id(B))];
        let ids: Vec<_> = blocks.iter().map(|b| b.id().clone()).collect();

        let spliced = splice_children(blocks, vec![(id(B), vec![])]);

        let after: Vec<_> = spliced.iter().map(|b| b.id().clone()).collect();
        assert_eq!(ids, after);
    }
}
