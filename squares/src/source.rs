/// Identity of a pending item request.
///
/// Handed to the item source with every request. A source that cannot answer synchronously
/// returns [`Pull::Pending`] with this id and later completes it through
/// [`crate::Grid::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingId(usize);

impl PendingId {
    pub(crate) fn for_index(index: usize) -> Self {
        Self(index)
    }

    /// Index of the item this request is for.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One pull from the virtual collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemRequest {
    index: usize,
}

impl ItemRequest {
    pub(crate) fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The id to return in [`Pull::Pending`] when this request completes later.
    pub fn pending_id(&self) -> PendingId {
        PendingId::for_index(self.index)
    }

    pub fn ready<N>(&self, node: N) -> Pull<N> {
        Pull::Ready(node)
    }

    pub fn defer<N>(&self) -> Pull<N> {
        Pull::Pending(self.pending_id())
    }
}

/// Answer of the item source for one index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pull<N> {
    Ready(N),
    /// The item will arrive through [`crate::Grid::resolve`].
    Pending(PendingId),
    /// No item exists at this index (or any later one).
    End,
}
