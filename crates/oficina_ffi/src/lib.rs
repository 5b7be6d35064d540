//! Flutter-facing bridge for Oficina core utilities.

pub mod api;
