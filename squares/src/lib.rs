//! A headless engine for infinitely scrolling grids of uniformly sized items ("posters").
//!
//! The collection is never held in full. Items are pulled from a host-provided source in
//! batches sized to fill whole screens, possibly completing later, and only a row-aligned
//! window of them carries visible/positioned render state at any time.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the scroll container size and scroll offset
//! - viewport measurements for automatic column counts (or an explicit column count)
//! - item nodes implementing [`Node`], and a placeholder factory for pending items
//!
//! and to apply each item's [`ItemState`]/[`Placement`] to its surface.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod edge;
mod error;
mod fetch;
mod grid;
mod layout;
mod math;
mod node;
mod options;
mod size;
mod source;
mod types;
mod window;


pub use edge::{EdgeDetector, classify};
pub use error::GridError;
pub use fetch::Resolution;
pub use grid::{Grid, RenderedItem};
pub use layout::{ColumnLayout, LayoutRegistry};
pub use node::{Decorations, Node, Placeholder, RESERVED_ATTRIBUTES, RESERVED_STYLES};
pub use options::{
    GridOptions, OnEdgeCallback, OnSelectCallback, RequestItem, RequestPlaceholder,
};
pub use size::{
    AutoSizePolicy, SIZE_MAX, SIZE_MIN, SizeRange, SizeResolver, resolve_auto_size,
};
pub use source::{ItemRequest, PendingId, Pull};
pub use types::{
    EdgeRegion, Extent, ItemKind, ItemState, Placement, PointerKind, Viewport, VirtualRange,
    WindowUpdate,
};
pub use window::{WindowFrame, WindowInput, WindowRenderer, row_height, window_for};
