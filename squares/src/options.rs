use alloc::sync::Arc;

use crate::{AutoSizePolicy, EdgeRegion, ItemRequest, Pull, SizeRange, Viewport};

/// Pull-based item source: called once per index, in ascending order.
pub type RequestItem<N> = Arc<dyn Fn(ItemRequest) -> Pull<N> + Send + Sync>;

/// Factory for the node shown while an item is pending.
pub type RequestPlaceholder<N> = Arc<dyn Fn() -> N + Send + Sync>;

/// Fired when the scroll offset crosses the top or bottom extremity.
pub type OnEdgeCallback = Arc<dyn Fn(EdgeRegion) + Send + Sync>;

/// Fired when the host reports an interaction with a materialized item.
pub type OnSelectCallback<N> = Arc<dyn Fn(usize, &N) + Send + Sync>;

/// Configuration for [`crate::Grid`].
///
/// Callbacks are stored in `Arc`s, so cloning options to tweak a field is cheap.
pub struct GridOptions<N> {
    pub request_item: RequestItem<N>,
    pub request_placeholder: RequestPlaceholder<N>,

    /// Hard cap on the number of items ever fetched.
    pub max_item_count: Option<usize>,

    /// Item height divided by item width. Non-positive values fall back to `1.0`.
    pub row_height_ratio: f64,

    /// Measurements used for automatic sizing. Required unless `size` is set.
    pub viewport: Option<Viewport>,

    /// Explicit column count; `0` resolves it from `viewport`.
    pub size: usize,
    pub size_range: SizeRange,
    pub auto_size: AutoSizePolicy,

    /// Screens fetched when the grid is attached.
    pub initial_screens: usize,

    /// Space above the first row inside the scroll element.
    pub scroll_margin: f64,

    pub on_edge: Option<OnEdgeCallback>,
    pub on_select: Option<OnSelectCallback<N>>,
}

impl<N> Clone for GridOptions<N> {
    fn clone(&self) -> Self {
        Self {
            request_item: Arc::clone(&self.request_item),
            request_placeholder: Arc::clone(&self.request_placeholder),
            max_item_count: self.max_item_count,
            row_height_ratio: self.row_height_ratio,
            viewport: self.viewport,
            size: self.size,
            size_range: self.size_range,
            auto_size: self.auto_size,
            initial_screens: self.initial_screens,
            scroll_margin: self.scroll_margin,
            on_edge: self.on_edge.clone(),
            on_select: self.on_select.clone(),
        }
    }
}

impl<N> GridOptions<N> {
    pub fn new(
        request_item: impl Fn(ItemRequest) -> Pull<N> + Send + Sync + 'static,
        request_placeholder: impl Fn() -> N + Send + Sync + 'static,
    ) -> Self {
        Self {
            request_item: Arc::new(request_item),
            request_placeholder: Arc::new(request_placeholder),
            max_item_count: None,
            row_height_ratio: 1.0,
            viewport: None,
            size: 0,
            size_range: SizeRange::default(),
            auto_size: AutoSizePolicy::default(),
            initial_screens: 2,
            scroll_margin: 0.0,
            on_edge: None,
            on_select: None,
        }
    }

    pub fn with_max_item_count(mut self, max_item_count: Option<usize>) -> Self {
        self.max_item_count = max_item_count;
        self
    }

    pub fn with_row_height_ratio(mut self, row_height_ratio: f64) -> Self {
        self.row_height_ratio = row_height_ratio;
        self
    }

    pub fn with_viewport(mut self, viewport: Option<Viewport>) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_size_range(mut self, size_range: SizeRange) -> Self {
        self.size_range = size_range;
        self
    }

    pub fn with_auto_size(mut self, auto_size: AutoSizePolicy) -> Self {
        self.auto_size = auto_size;
        self
    }

    pub fn with_initial_screens(mut self, initial_screens: usize) -> Self {
        self.initial_screens = initial_screens;
        self
    }

    pub fn with_scroll_margin(mut self, scroll_margin: f64) -> Self {
        self.scroll_margin = scroll_margin;
        self
    }

    pub fn with_on_edge(
        mut self,
        on_edge: Option<impl Fn(EdgeRegion) + Send + Sync + 'static>,
    ) -> Self {
        self.on_edge = on_edge.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(usize, &N) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn effective_row_height_ratio(&self) -> f64 {
        effective_ratio(self.row_height_ratio)
    }
}

pub(crate) fn effective_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

impl<N> core::fmt::Debug for GridOptions<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("max_item_count", &self.max_item_count)
            .field("row_height_ratio", &self.row_height_ratio)
            .field("viewport", &self.viewport)
            .field("size", &self.size)
            .field("size_range", &self.size_range)
            .field("auto_size", &self.auto_size)
            .field("initial_screens", &self.initial_screens)
            .field("scroll_margin", &self.scroll_margin)
            .finish_non_exhaustive()
    }
}
