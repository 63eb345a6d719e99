use alloc::sync::Arc;

use crate::fetch::{Batch, FetchController};
use crate::math::ceil_usize;
use crate::node::{Decorations, Node};
use crate::options::effective_ratio;
use crate::window::{WindowInput, row_height};
use crate::{
    ColumnLayout, EdgeDetector, EdgeRegion, Extent, GridError, GridOptions, ItemKind, ItemState,
    LayoutRegistry, PendingId, Placement, Resolution, SizeResolver, Viewport, VirtualRange,
    WindowRenderer, WindowUpdate,
};

/// One materialized item as the host should present it.
#[derive(Debug)]
pub struct RenderedItem<'a, N> {
    pub index: usize,
    /// The item, or the placeholder standing in for it.
    pub node: &'a N,
    pub kind: ItemKind,
    pub state: ItemState,
    /// `None` unless the item is positioned.
    pub placement: Option<Placement>,
}

/// A virtualized, pull-fed grid of uniformly sized items.
///
/// The grid holds no UI objects beyond the host's item nodes. The host drives it:
/// - [`Grid::attach`] / [`Grid::detach`] when the scroll container enters or leaves the screen
/// - [`Grid::on_resize`] and [`Grid::on_scroll`] from layout and scroll notifications
/// - [`Grid::resolve`] when a pending item arrives
///
/// After each call the host applies [`Grid::drain_changes`] (or re-renders
/// [`Grid::for_each_visible_item`]) to its surface.
pub struct Grid<N> {
    options: GridOptions<N>,
    registry: LayoutRegistry,
    resolver: SizeResolver,
    fetch: FetchController<N>,
    window: WindowRenderer,
    edges: EdgeDetector,
    size: usize,
    container: Option<Extent>,
    scroll_offset: f64,
}

impl<N: Node> Grid<N> {
    pub fn new(options: GridOptions<N>) -> Self {
        let registry = LayoutRegistry::new(options.size_range);
        let resolver = SizeResolver::new(registry.range(), options.auto_size);
        let size = resolver.range.clamp(options.size);
        vdebug!(size, max_item_count = ?options.max_item_count, "Grid::new");
        Self {
            options,
            registry,
            resolver,
            fetch: FetchController::new(),
            window: WindowRenderer::new(),
            edges: EdgeDetector::new(),
            size,
            container: None,
            scroll_offset: 0.0,
        }
    }

    pub fn options(&self) -> &GridOptions<N> {
        &self.options
    }

    /// Current column count; `0` until first resolved.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_attached(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<Extent> {
        self.container
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn materialized_count(&self) -> usize {
        self.fetch.materialized_count()
    }

    pub fn pending_count(&self) -> usize {
        self.fetch.pending_count()
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.fetch.is_end_of_stream()
    }

    /// The contract violation that stopped fetching for good, if any.
    pub fn failure(&self) -> Option<GridError> {
        self.fetch.failure()
    }

    /// The render window, clipped to materialized items.
    pub fn window(&self) -> VirtualRange {
        self.window.window()
    }

    pub fn row_height_ratio(&self) -> f64 {
        self.options.effective_row_height_ratio()
    }

    pub fn row_height(&self) -> f64 {
        let width = self.container.map_or(0.0, |c| c.width);
        row_height(width, self.size, self.row_height_ratio())
    }

    /// Height of all materialized rows.
    pub fn content_height(&self) -> f64 {
        if self.size == 0 {
            return 0.0;
        }
        let rows = ceil_usize(self.materialized_count() as f64 / self.size as f64);
        rows as f64 * self.row_height()
    }

    /// Total scrollable height, including the scroll margin.
    pub fn scroll_extent(&self) -> f64 {
        self.options.scroll_margin + self.content_height()
    }

    /// See [`LayoutRegistry::container_padding_top_percent`].
    pub fn container_padding_top_percent(&self) -> f64 {
        LayoutRegistry::container_padding_top_percent(self.row_height_ratio())
    }

    pub fn column_layout(&self) -> Option<&ColumnLayout> {
        self.registry.get(self.size)
    }

    pub fn set_on_edge(
        &mut self,
        on_edge: Option<impl Fn(EdgeRegion) + Send + Sync + 'static>,
    ) {
        self.options.on_edge = on_edge.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_select(
        &mut self,
        on_select: Option<impl Fn(usize, &N) + Send + Sync + 'static>,
    ) {
        self.options.on_select = on_select.map(|f| Arc::new(f) as _);
    }

    /// Caps further fetching. Items already materialized beyond the new cap stay.
    pub fn set_max_item_count(&mut self, max_item_count: Option<usize>) {
        self.options.max_item_count = max_item_count;
    }

    pub fn set_row_height_ratio(
        &mut self,
        ratio: f64,
    ) -> Result<Option<WindowUpdate>, GridError> {
        if effective_ratio(ratio) == self.row_height_ratio() {
            self.options.row_height_ratio = ratio;
            return Ok(None);
        }
        self.options.row_height_ratio = ratio;
        self.redraw(false)
    }

    /// Sets the column count. `0` switches back to automatic sizing from the viewport.
    ///
    /// Explicit values are clamped to the configured range and survive resizes.
    pub fn set_size(&mut self, size: usize) -> Result<Option<WindowUpdate>, GridError> {
        self.options.size = size;
        self.apply_size(size)
    }

    /// Updates the viewport measurements used for automatic sizing.
    pub fn set_viewport(
        &mut self,
        viewport: Viewport,
    ) -> Result<Option<WindowUpdate>, GridError> {
        self.options.viewport = Some(viewport);
        if self.options.size > 0 {
            return Ok(None);
        }
        self.apply_size(0)
    }

    /// The scroll container is on screen: measure, size, and fetch the initial screens.
    pub fn attach(&mut self, container: Extent) -> Result<Option<WindowUpdate>, GridError> {
        vdebug!(width = container.width, height = container.height, "attach");
        self.apply_size(self.options.size)?;
        self.container = Some(container);
        self.maybe_fetch(self.options.initial_screens)?;
        Ok(self.recompute())
    }

    /// The scroll container left the screen. Recomputes become no-ops; fetched items are kept.
    pub fn detach(&mut self) {
        vdebug!("detach");
        self.container = None;
    }

    pub fn on_resize(&mut self, container: Extent) -> Result<Option<WindowUpdate>, GridError> {
        vtrace!(width = container.width, height = container.height, "on_resize");
        self.container = Some(container);
        if self.options.size == 0 {
            self.apply_size(0)?;
        }
        self.redraw(false)
    }

    /// Applies a scroll offset reported by the host, fetching more when nearing the end.
    pub fn on_scroll(&mut self, offset: f64) -> Result<Option<WindowUpdate>, GridError> {
        vtrace!(offset, "on_scroll");
        self.scroll_offset = offset;
        self.redraw(true)
    }

    /// Fetches up to `screens` screens (`size * size` items each) from the item source.
    ///
    /// Returns how many items were materialized, including the one continuation screen fetched
    /// when the viewport still reaches the last row.
    pub fn maybe_fetch(&mut self, screens: usize) -> Result<usize, GridError> {
        self.ensure_size()?;
        let before = self.materialized_count();
        let batch = self.fetch_batch(screens)?;
        if batch.appended > 0 {
            self.redraw(!batch.end_of_stream)?;
        }
        Ok(self.materialized_count() - before)
    }

    /// Completes a pending item. `None` means the request produced no item.
    ///
    /// The swap is independent of the current window and size: the item inherits whatever
    /// render state its slot has now.
    pub fn resolve(&mut self, id: PendingId, item: Option<N>) -> Resolution {
        let resolution = self.fetch.resolve(id, item);
        if let Resolution::Swapped { index } = resolution {
            self.window.mark_dirty(index);
        }
        resolution
    }

    /// Abandons all in-flight requests; their later completions are reported stale.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.fetch.cancel_pending();
        vdebug!(cancelled, "cancel_pending");
        cancelled
    }

    /// Raises the "item selected" notification for `index`.
    pub fn select(&self, index: usize) -> bool {
        let Some(node) = self.fetch.node(index) else {
            return false;
        };
        if let Some(cb) = &self.options.on_select {
            cb(index, node);
        }
        true
    }

    pub fn add_class(&mut self, index: usize, class: &str) -> bool {
        self.fetch.add_class(index, class)
    }

    pub fn set_attribute(&mut self, index: usize, name: &str, value: &str) -> bool {
        self.fetch.set_attribute(index, name, value)
    }

    pub fn set_style(&mut self, index: usize, property: &str, value: &str) -> bool {
        self.fetch.set_style(index, property, value)
    }

    pub fn node(&self, index: usize) -> Option<&N> {
        self.fetch.node(index)
    }

    pub fn item_kind(&self, index: usize) -> Option<ItemKind> {
        self.fetch.kind(index)
    }

    /// Mutations recorded on the placeholder at `index`, if one is there.
    pub fn decorations(&self, index: usize) -> Option<&Decorations> {
        self.fetch.placeholder(index).map(|p| p.decorations())
    }

    pub fn item_state(&self, index: usize) -> Option<ItemState> {
        if index >= self.materialized_count() {
            return None;
        }
        Some(
            self.window
                .state(index)
                .copied()
                .unwrap_or_else(|| ItemState::new(index)),
        )
    }

    pub fn placement(&self, index: usize) -> Option<Placement> {
        let state = self.window.state(index)?;
        self.column_layout()?.placement_for(state)
    }

    pub fn for_each_visible_item(&self, mut f: impl FnMut(RenderedItem<'_, N>)) {
        self.window.for_each_visible(|state| {
            if let Some(item) = self.rendered(state.index) {
                f(item);
            }
        });
    }

    /// Visits every item whose presentation changed since the last drain, then forgets them.
    pub fn drain_changes(&mut self, mut f: impl FnMut(RenderedItem<'_, N>)) {
        for &index in self.window.dirty() {
            if let Some(item) = self.rendered(index) {
                f(item);
            }
        }
        self.window.clear_dirty();
    }

    /// Recomputes the render window from the current geometry without fetching.
    ///
    /// Returns `None` when detached, unsized, or empty.
    pub fn recompute(&mut self) -> Option<WindowUpdate> {
        let container = self.container?;
        let input = WindowInput {
            scroll_offset: self.scroll_offset - self.options.scroll_margin,
            container,
            size: self.size,
            row_height_ratio: self.row_height_ratio(),
            materialized: self.materialized_count(),
        };
        let frame = self.window.recompute(&input)?;

        let bottom = self.scroll_extent() - container.height;
        let edge = self.edges.sample(self.scroll_offset, bottom);
        if let Some(region) = edge {
            vdebug!(region = region.as_str(), "edge collision");
            if let Some(cb) = &self.options.on_edge {
                cb(region);
            }
        }

        Some(WindowUpdate {
            window: frame.window,
            changed: frame.changed,
            cleared: frame.cleared,
            nearing_end: frame.nearing_end,
            edge,
        })
    }

    fn rendered(&self, index: usize) -> Option<RenderedItem<'_, N>> {
        let node = self.fetch.node(index)?;
        let kind = self.fetch.kind(index)?;
        let state = self.item_state(index)?;
        Some(RenderedItem {
            index,
            node,
            kind,
            state,
            placement: self.placement(index),
        })
    }

    fn ensure_size(&mut self) -> Result<(), GridError> {
        if self.size == 0 {
            self.apply_size(self.options.size)?;
        }
        Ok(())
    }

    fn apply_size(&mut self, requested: usize) -> Result<Option<WindowUpdate>, GridError> {
        let Some(size) = self
            .resolver
            .resolve_requested(requested, self.options.viewport.as_ref())
        else {
            vwarn!("automatic size needs a viewport");
            return Err(GridError::MissingViewport);
        };
        if size == self.size {
            return Ok(None);
        }
        if self.registry.get(size).is_none() {
            vwarn!(size, "no layout for size");
            return Ok(None);
        }
        vdebug!(from = self.size, to = size, "size changed");
        self.size = size;
        self.redraw(false)
    }

    fn fetch_batch(&mut self, screens: usize) -> Result<Batch, GridError> {
        let batch = self.fetch.fetch(
            self.size,
            screens,
            self.options.max_item_count,
            &*self.options.request_item,
            &*self.options.request_placeholder,
        )?;
        debug_assert!(batch.appended <= batch.requested.len());
        Ok(batch)
    }

    /// Recomputes, then fetches one more screen if the viewport reaches the last row and the
    /// source can continue. At most one continuation screen is fetched per call.
    fn redraw(&mut self, attempt_continue: bool) -> Result<Option<WindowUpdate>, GridError> {
        let Some(update) = self.recompute() else {
            return Ok(None);
        };
        if !attempt_continue || !update.nearing_end || self.fetch.is_end_of_stream() {
            return Ok(Some(update));
        }
        let batch = self.fetch_batch(1)?;
        if batch.appended == 0 {
            return Ok(Some(update));
        }
        let edge = update.edge;
        Ok(self.recompute().map(|mut next| {
            next.edge = next.edge.or(edge);
            next
        }))
    }
}

impl<N> core::fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("options", &self.options)
            .field("size", &self.size)
            .field("container", &self.container)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}
