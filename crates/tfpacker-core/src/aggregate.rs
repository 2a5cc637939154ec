//! Grouping of routed blocks by destination file

use std::collections::HashMap;

use tfpacker_blocks::Block;

use crate::router::Router;

/// Bytes placed between consecutive blocks in one destination file.
pub const BLOCK_SEPARATOR: &[u8] = b"\n\n";

/// All block contents bound for one output file, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationGroup {
    pub file: String,
    pub contents: Vec<Vec<u8>>,
}

impl DestinationGroup {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            contents: Vec::new(),
        }
    }

    pub fn block_count(&self) -> usize {
        self.contents.len()
    }

    /// Contents joined with [`BLOCK_SEPARATOR`], no trailing separator.
    pub fn joined(&self) -> Vec<u8> {
        self.contents.join(BLOCK_SEPARATOR)
    }
}

/// Routes blocks and collects them per destination.
///
/// Groups are kept in the order their file was first produced so that
/// reports and writes are deterministic for a given input.
#[derive(Debug)]
pub struct Aggregator<'r> {
    router: &'r Router,
    groups: Vec<DestinationGroup>,
    index: HashMap<String, usize>,
}

impl<'r> Aggregator<'r> {
    pub fn new(router: &'r Router) -> Self {
        Self {
            router,
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Route `block` and append its content to the matching group.
    pub fn add(&mut self, block: Block) {
        let file = self.router.route_class(block.classification());
        tracing::debug!(
            "Routing {} from {} to {}",
            block.classification(),
            block.source_file().display(),
            file
        );

        let slot = match self.index.get(&file) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.groups.push(DestinationGroup::new(file.clone()));
                self.index.insert(file, slot);
                slot
            }
        };

        self.groups[slot].contents.push(block.into_content());
    }

    pub fn extend<I: IntoIterator<Item = Block>>(&mut self, blocks: I) {
        for block in blocks {
            self.add(block);
        }
    }

    pub fn groups(&self) -> &[DestinationGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<DestinationGroup> {
        self.groups
    }

    pub fn total_blocks(&self) -> usize {
        self.groups.iter().map(DestinationGroup::block_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tfpacker_blocks::Classification;
    use tfpacker_config::Rule;

    fn block(block_type: &str, subtype: &str, name: &str, content: &str) -> Block {
        Block::new(Classification::new(block_type, subtype, name), "main.tf", content.as_bytes())
    }

    #[test]
    fn test_groups_preserve_arrival_order() {
        let router = Router::default();
        let mut agg = Aggregator::new(&router);

        agg.add(block("variable", "", "a", "A"));
        agg.add(block("output", "", "x", "X"));
        agg.add(block("variable", "", "b", "B"));
        agg.add(block("variable", "", "c", "C"));

        let groups = agg.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].file, "variables.tf");
        assert_eq!(groups[1].file, "outputs.tf");
        assert_eq!(groups[0].joined(), b"A\n\nB\n\nC".to_vec());
        assert_eq!(groups[1].joined(), b"X".to_vec());
        assert_eq!(agg.total_blocks(), 4);
    }

    #[test]
    fn test_rules_merge_different_types() {
        let router = Router::new(&[Rule::any_type("all.tf")]);
        let mut agg = Aggregator::new(&router);

        agg.extend(vec![
            block("locals", "", "", "locals {}"),
            block("resource", "aws_vpc", "main", "resource \"aws_vpc\" \"main\" {}"),
        ]);

        let groups = agg.into_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].block_count(), 2);
        assert_eq!(
            String::from_utf8(groups[0].joined()).unwrap(),
            "locals {}\n\nresource \"aws_vpc\" \"main\" {}"
        );
    }

    #[test]
    fn test_empty_aggregator() {
        let router = Router::default();
        let agg = Aggregator::new(&router);
        assert!(agg.is_empty());
        assert_eq!(agg.total_blocks(), 0);
    }
}
