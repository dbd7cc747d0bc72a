//! Remote-search client for Showroom list endpoints.
//!
//! Provides the pieces a searchable, paginated selection control is built
//! from:
//!
//! - [`debounce::DebouncedInput`] turns raw keystrokes into a rate-limited
//!   search term.
//! - [`fetcher::PageFetcher`] retrieves one page of options from a list
//!   endpoint and maps rows to [`label::SelectOption`]s.
//! - [`accumulator::PagedSearch`] concatenates successive pages for the
//!   current (endpoint, search, filters) key.
//! - [`combobox::Combobox`] is the headless control binding the above to
//!   open/type/scroll/select interactions.
//!
//! The crate is UI-agnostic: it owns no rendering, only state and
//! transitions.

pub mod accumulator;
pub mod combobox;
pub mod debounce;
pub mod error;
pub mod fetcher;
pub mod label;

pub use accumulator::PagedSearch;
pub use combobox::{Combobox, ComboboxOptions, ComboboxView};
pub use debounce::DebouncedInput;
pub use error::ClientError;
pub use fetcher::{FetchConfig, FetchedPage, PageFetcher, PageRequest, PageSource};
pub use label::{OptionId, SelectOption};
