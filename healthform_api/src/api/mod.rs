//! The HTTP surface of the service. There is a single endpoint, the one the
//! dashboard posts its form to.

pub(crate) mod form;
