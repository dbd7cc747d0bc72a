//! Headless searchable-select control.
//!
//! Binds a [`PagedSearch`] accumulator to the interactions a rendering
//! layer forwards: open/close, focus, keystrokes, scrolling, and
//! selection. The control owns no drawing; renderers ask for the current
//! [`ComboboxView`] and draw that.
//!
//! Item field mapping (`id_key`, `name_key`, `items_key`, page size) is
//! configured on the [`FetchConfig`](crate::fetcher::FetchConfig) of the
//! page source backing the control.

use crate::accumulator::PagedSearch;
use crate::error::ClientError;
use crate::fetcher::PageSource;
use crate::label::SelectOption;

/// Scroll distance from the container end that triggers the next page.
pub const SCROLL_THRESHOLD_PX: u32 = 100;

/// Empty-state message shown when a search yields no options.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No results found";

type ChangeHandler = Box<dyn FnMut(Option<&SelectOption>) + Send>;
type InputChangeHandler = Box<dyn FnMut(&str) + Send>;

/// Static configuration of a [`Combobox`].
#[derive(Debug, Clone)]
pub struct ComboboxOptions {
    /// List endpoint path, e.g. `/api/v1/cars`.
    pub endpoint: String,
    /// Placeholder text for the closed, empty control.
    pub placeholder: Option<String>,
    /// Render as a static read-only field with no popover.
    pub disabled: bool,
    /// Message shown when an open control has no results.
    pub empty_message: Option<String>,
    /// Fetch the first page on focus, before the popover opens.
    pub trigger_on_focus: bool,
    /// Extra filter parameters appended to every page request.
    pub additional_params: Vec<(String, String)>,
}

impl ComboboxOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            placeholder: None,
            disabled: false,
            empty_message: None,
            trigger_on_focus: false,
            additional_params: Vec::new(),
        }
    }
}

/// What a renderer should draw for the control's current state.
#[derive(Debug, PartialEq, Eq)]
pub enum ComboboxView<'a> {
    /// Static read-only field; no popover, no interactions.
    Disabled { value: Option<&'a SelectOption> },
    /// Popover closed; the committed selection (if any) is displayed.
    Closed { value: Option<&'a SelectOption> },
    /// Popover open, first page not yet arrived.
    Loading,
    /// Popover open with selectable options.
    Results(&'a [SelectOption]),
    /// Popover open, no options for the current search.
    Empty(&'a str),
}

/// Headless searchable, paginated selection control.
pub struct Combobox<S: PageSource> {
    search: PagedSearch<S>,
    options: ComboboxOptions,
    open: bool,
    raw_input: String,
    value: Option<SelectOption>,
    on_change: Option<ChangeHandler>,
    on_input_change: Option<InputChangeHandler>,
}

impl<S: PageSource> Combobox<S> {
    pub fn new(source: S, options: ComboboxOptions) -> Self {
        let mut search = PagedSearch::new(source, options.endpoint.clone());
        search.set_params(options.additional_params.clone());
        Self {
            search,
            options,
            open: false,
            raw_input: String::new(),
            value: None,
            on_change: None,
            on_input_change: None,
        }
    }

    /// Register the selection callback, invoked exactly once per commit.
    pub fn on_change(mut self, handler: impl FnMut(Option<&SelectOption>) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Register the input-text callback, invoked with the committed
    /// selection's display name whenever the popover closes.
    pub fn on_input_change(mut self, handler: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_input_change = Some(Box::new(handler));
        self
    }

    /// The committed selection.
    pub fn value(&self) -> Option<&SelectOption> {
        self.value.as_ref()
    }

    /// The raw search text as typed so far.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Whether the popover is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// What the renderer should currently draw.
    pub fn view(&self) -> ComboboxView<'_> {
        if self.options.disabled {
            return ComboboxView::Disabled {
                value: self.value.as_ref(),
            };
        }
        if !self.open {
            return ComboboxView::Closed {
                value: self.value.as_ref(),
            };
        }
        if !self.search.first_page_loaded() {
            return ComboboxView::Loading;
        }
        let options = self.search.options();
        if options.is_empty() {
            ComboboxView::Empty(
                self.options
                    .empty_message
                    .as_deref()
                    .unwrap_or(DEFAULT_EMPTY_MESSAGE),
            )
        } else {
            ComboboxView::Results(options)
        }
    }

    /// Focus the control. Pre-fetches the first page when configured with
    /// `trigger_on_focus`.
    pub async fn focus(&mut self) -> Result<(), ClientError> {
        if self.options.disabled || !self.options.trigger_on_focus {
            return Ok(());
        }
        self.search.ensure_first_page().await
    }

    /// Open the popover, fetching the first page unless focus already did.
    pub async fn open(&mut self) -> Result<(), ClientError> {
        if self.options.disabled {
            return Ok(());
        }
        self.open = true;
        self.search.ensure_first_page().await
    }

    /// Record a keystroke. The raw text is shown immediately; the search
    /// itself only re-keys once the term settles through a
    /// [`DebouncedInput`](crate::debounce::DebouncedInput) and the caller
    /// forwards it to [`apply_search`](Self::apply_search).
    pub fn input(&mut self, text: impl Into<String>) {
        self.raw_input = text.into();
    }

    /// Apply a settled search term, re-keying the accumulator and
    /// refetching from page 1 when the popover is open.
    pub async fn apply_search(&mut self, term: &str) -> Result<(), ClientError> {
        self.search.set_search(term);
        if self.open {
            self.search.ensure_first_page().await
        } else {
            Ok(())
        }
    }

    /// Replace the filter parameters, discarding accumulated pages when
    /// they changed.
    pub async fn set_params(&mut self, params: Vec<(String, String)>) -> Result<(), ClientError> {
        self.search.set_params(params);
        if self.open {
            self.search.ensure_first_page().await
        } else {
            Ok(())
        }
    }

    /// Report a scroll position. Fetches the next page when the viewport
    /// is within [`SCROLL_THRESHOLD_PX`] of the container end and more
    /// pages remain.
    pub async fn scrolled(
        &mut self,
        scroll_top: u32,
        viewport_height: u32,
        content_height: u32,
    ) -> Result<(), ClientError> {
        if !self.open || !self.search.has_more() {
            return Ok(());
        }
        let remaining = content_height.saturating_sub(scroll_top + viewport_height);
        if remaining <= SCROLL_THRESHOLD_PX {
            self.search.load_next_page().await?;
        }
        Ok(())
    }

    /// Commit the option at `index` in the current result list.
    ///
    /// Invokes the selection callback (even when re-selecting the already
    /// committed option) and closes the popover. Returns the committed
    /// option, or `None` for an out-of-range index.
    pub fn select(&mut self, index: usize) -> Option<SelectOption> {
        let option = self.search.options().get(index)?.clone();
        self.value = Some(option.clone());
        if let Some(handler) = &mut self.on_change {
            handler(Some(&option));
        }
        self.close();
        Some(option)
    }

    /// Clear the committed selection, reporting `None` to the selection
    /// callback.
    pub fn clear_selection(&mut self) {
        self.value = None;
        if let Some(handler) = &mut self.on_change {
            handler(None);
        }
    }

    /// Close the popover. Clears the raw search text and reports the
    /// committed selection's display name (empty string when nothing was
    /// ever committed) to the input-text callback.
    pub fn close(&mut self) {
        self.open = false;
        self.raw_input.clear();
        let name = self.value.as_ref().map_or("", |v| v.name.as_str());
        if let Some(handler) = &mut self.on_input_change {
            handler(name);
        }
    }
}
