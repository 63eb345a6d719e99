use alloc::vec::Vec;

use crate::node::{Node, Placeholder};
use crate::{GridError, ItemKind, ItemRequest, PendingId, Pull, VirtualRange};

/// Outcome of completing a pending request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// The placeholder at `index` was replaced by the item.
    Swapped { index: usize },
    /// The request resolved to no item; the placeholder stays.
    Vacated { index: usize },
    /// Nothing is waiting on this id (already resolved, cancelled, or never issued).
    Stale,
}

/// Summary of one fetch batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Batch {
    /// Indexes the source was asked for.
    pub(crate) requested: VirtualRange,
    pub(crate) appended: usize,
    /// The source signalled end of stream during this batch.
    pub(crate) end_of_stream: bool,
}

pub(crate) enum Slot<N> {
    Ready(N),
    /// `pending` is cleared once the request resolves empty or is cancelled.
    Placeholder {
        placeholder: Placeholder<N>,
        pending: bool,
    },
}

impl<N> Slot<N> {
    fn kind(&self) -> ItemKind {
        match self {
            Self::Ready(_) => ItemKind::Ready,
            Self::Placeholder { pending: true, .. } => ItemKind::Pending,
            Self::Placeholder { pending: false, .. } => ItemKind::Vacant,
        }
    }
}

enum Pulled<N> {
    Ready(N),
    Pending,
}

/// Owns the backing list of materialized items and the fetch cursor.
///
/// The materialized count (`slots.len()`) only ever grows, and each index is requested from
/// the source at most once.
pub(crate) struct FetchController<N> {
    slots: Vec<Slot<N>>,
    pending: usize,
    end_of_stream: bool,
    /// Set by the first contract violation; every later fetch fails with it.
    failure: Option<GridError>,
}

impl<N: Node> FetchController<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            pending: 0,
            end_of_stream: false,
            failure: None,
        }
    }

    pub(crate) fn materialized_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn pending_count(&self) -> usize {
        self.pending
    }

    pub(crate) fn is_end_of_stream(&self) -> bool {
        self.end_of_stream
    }

    pub(crate) fn failure(&self) -> Option<GridError> {
        self.failure
    }

    /// Pulls up to `size * size * screens` items starting at the materialized count.
    ///
    /// All pulls happen synchronously and in ascending index order. Items obtained before an
    /// end-of-stream answer are committed; placeholders stand in for pending ones.
    ///
    /// A contract violation commits nothing from the batch and is final: the source is never
    /// asked again.
    pub(crate) fn fetch(
        &mut self,
        size: usize,
        screens: usize,
        max_item_count: Option<usize>,
        request_item: &dyn Fn(ItemRequest) -> Pull<N>,
        request_placeholder: &dyn Fn() -> N,
    ) -> Result<Batch, GridError> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        if self.end_of_stream {
            return Ok(Batch::default());
        }

        let pull_count = size.saturating_mul(size).saturating_mul(screens);
        let start = self.slots.len();
        let mut end = start.saturating_add(pull_count);
        if let Some(max) = max_item_count {
            end = end.min(max);
        }
        if end <= start {
            return Ok(Batch::default());
        }

        let mut pulled = Vec::with_capacity(end - start);
        let mut requested_end = start;
        for index in start..end {
            let request = ItemRequest::new(index);
            requested_end = index + 1;
            match request_item(request) {
                Pull::Ready(node) => pulled.push(Pulled::Ready(node)),
                Pull::Pending(id) => {
                    let expected = request.pending_id();
                    if id != expected {
                        vwarn!(
                            index,
                            returned = id.index(),
                            "item source broke the pending contract"
                        );
                        let err = GridError::ContractViolation {
                            index,
                            expected,
                            returned: id,
                        };
                        self.failure = Some(err);
                        return Err(err);
                    }
                    pulled.push(Pulled::Pending);
                }
                Pull::End => {
                    vdebug!(index, "end of stream");
                    self.end_of_stream = true;
                    break;
                }
            }
        }

        let appended = pulled.len();
        self.slots.reserve(appended);
        for item in pulled {
            match item {
                Pulled::Ready(node) => self.slots.push(Slot::Ready(node)),
                Pulled::Pending => {
                    self.pending += 1;
                    self.slots.push(Slot::Placeholder {
                        placeholder: Placeholder::new(request_placeholder()),
                        pending: true,
                    });
                }
            }
        }

        vdebug!(
            start,
            requested = requested_end - start,
            appended,
            end_of_stream = self.end_of_stream,
            "fetch batch"
        );
        Ok(Batch {
            requested: VirtualRange::new(start, requested_end),
            appended,
            end_of_stream: self.end_of_stream,
        })
    }

    /// Completes the pending request `id`.
    ///
    /// Late completions are accepted regardless of end of stream or caps; only a request that
    /// is no longer pending is reported stale.
    pub(crate) fn resolve(&mut self, id: PendingId, item: Option<N>) -> Resolution {
        let index = id.index();
        let Some(slot) = self.slots.get_mut(index) else {
            vwarn!(index, "resolve for an index that was never requested");
            return Resolution::Stale;
        };
        let Slot::Placeholder {
            placeholder,
            pending,
        } = slot
        else {
            vtrace!(index, "resolve for an item that is already ready");
            return Resolution::Stale;
        };
        if !*pending {
            vtrace!(index, "stale resolve");
            return Resolution::Stale;
        }
        *pending = false;
        self.pending -= 1;

        match item {
            Some(mut node) => {
                placeholder.transplant_onto(&mut node);
                *slot = Slot::Ready(node);
                vtrace!(index, "placeholder swapped");
                Resolution::Swapped { index }
            }
            None => {
                vtrace!(index, "pending item resolved empty");
                Resolution::Vacated { index }
            }
        }
    }

    /// Abandons every pending request. Returns how many were cancelled.
    pub(crate) fn cancel_pending(&mut self) -> usize {
        let mut cancelled = 0;
        for slot in self.slots.iter_mut() {
            match slot {
                Slot::Placeholder { pending, .. } if *pending => {
                    *pending = false;
                    cancelled += 1;
                }
                _ => {}
            }
        }
        self.pending = 0;
        cancelled
    }

    pub(crate) fn kind(&self, index: usize) -> Option<ItemKind> {
        self.slots.get(index).map(Slot::kind)
    }

    /// The ready node, or the placeholder standing in for it.
    pub(crate) fn node(&self, index: usize) -> Option<&N> {
        self.slots.get(index).map(|slot| match slot {
            Slot::Ready(node) => node,
            Slot::Placeholder { placeholder, .. } => placeholder.node(),
        })
    }

    pub(crate) fn placeholder(&self, index: usize) -> Option<&Placeholder<N>> {
        match self.slots.get(index)? {
            Slot::Ready(_) => None,
            Slot::Placeholder { placeholder, .. } => Some(placeholder),
        }
    }

    pub(crate) fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> bool {
        self.decorate(index, |node| node.set_attribute(name, value), |p| {
            p.set_attribute(name, value)
        })
    }

    pub(crate) fn set_style(&mut self, index: usize, property: &str, value: &str) -> bool {
        self.decorate(index, |node| node.set_style(property, value), |p| {
            p.set_style(property, value)
        })
    }

    pub(crate) fn add_class(&mut self, index: usize, class: &str) -> bool {
        self.decorate(index, |node| node.add_class(class), |p| p.add_class(class))
    }

    fn decorate(
        &mut self,
        index: usize,
        ready: impl FnOnce(&mut N),
        placeholder: impl FnOnce(&mut Placeholder<N>),
    ) -> bool {
        match self.slots.get_mut(index) {
            Some(Slot::Ready(node)) => ready(node),
            Some(Slot::Placeholder { placeholder: p, .. }) => placeholder(p),
            None => return false,
        }
        true
    }
}
