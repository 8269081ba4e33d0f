//! Navigation trait abstraction.
//!
//! Click handling never touches a browser directly. It builds an
//! [`OpenRequest`] and hands it to a `Navigator`, so the coordinate math can
//! be tested with a recording fake.

use std::sync::Arc;

use crate::error::NavigationError;
use crate::models::OpenRequest;

/// Trait for opening destinations.
///
/// Implementations should be fire-and-forget: return as soon as the host has
/// accepted or refused the request, without waiting for the page to load.
///
/// # Example
///
/// ```ignore
/// use spider_rainbow::models::{Destination, OpenRequest};
/// use spider_rainbow::traits::Navigator;
///
/// fn open_docs<N: Navigator>(navigator: &N) {
///     let dest = Destination::parse("https://docs.rs/").unwrap();
///     if let Err(e) = navigator.open(&OpenRequest::isolated(dest)) {
///         eprintln!("{e}");
///     }
/// }
/// ```
pub trait Navigator: Send + Sync {
    /// Request that `request.destination` be opened.
    fn open(&self, request: &OpenRequest) -> Result<(), NavigationError>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn open(&self, request: &OpenRequest) -> Result<(), NavigationError> {
        (**self).open(request)
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn open(&self, request: &OpenRequest) -> Result<(), NavigationError> {
        (**self).open(request)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn open(&self, request: &OpenRequest) -> Result<(), NavigationError> {
        (**self).open(request)
    }
}
