//! Concrete games built on the `rules` traits.

pub mod stonehenge;
