use crate::test::{TestGroup, TestMeta};

/// One node of a [`CollectedItem`]'s chain: a group, or the test itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainNode<'t> {
    /// Identifies the node at its position in the chain.
    pub key: &'t str,

    /// The name written into the outline.
    pub name: &'t str,

    pub docs: Option<&'t str>,
}

impl ChainNode<'_> {
    /// Whether two nodes at the same chain position are the same node.
    pub fn same_node(&self, other: &ChainNode<'_>) -> bool {
        self.key == other.key
    }
}

/// A collected test, as seen by the spec plugin.
///
/// Borrowed from the test's [`TestMeta`], so collecting is free.
#[derive(Debug, Clone, Copy)]
pub struct CollectedItem<'t> {
    groups: &'t [TestGroup],
    key: &'t str,
    name: &'t str,
    docs: Option<&'t str>,
}

impl<'t> CollectedItem<'t> {
    /// The canonical name of the test.
    pub fn display_name(&self) -> &'t str {
        self.name
    }

    pub fn docs(&self) -> Option<&'t str> {
        self.docs
    }

    /// The ancestor chain, outermost group first, ending with the test itself.
    pub fn chain(&self) -> impl Iterator<Item = ChainNode<'t>> + use<'t> {
        let groups: &'t [TestGroup] = self.groups;
        let groups = groups.iter().map(|group| ChainNode {
            key: group.name.as_ref(),
            name: group.name.as_ref(),
            docs: group.docs.as_deref(),
        });
        let item = ChainNode {
            key: self.key,
            name: self.name,
            docs: self.docs,
        };
        groups.chain(std::iter::once(item))
    }
}

impl<'t, Extra> From<&'t TestMeta<Extra>> for CollectedItem<'t> {
    fn from(meta: &'t TestMeta<Extra>) -> Self {
        Self {
            groups: meta.groups.as_ref(),
            key: meta.name.as_ref(),
            name: meta.display_name(),
            docs: meta.docs.as_deref(),
        }
    }
}
