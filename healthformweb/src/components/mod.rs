//! The components module contains Maud "partials", such as the notices shown
//! under the form, that are not complete pages in themselves - complete pages
//! are stored in the views folder.
//!
//! The highest-level component is 'page', which provides the common header and
//! footer for all views.

pub(crate) mod notice;
pub(crate) mod page;
