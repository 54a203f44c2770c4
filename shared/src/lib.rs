//! Variant selection and prop projection for a polymorphic button.
//!
//! A single request renders either as a plain `<button>`-like control or as
//! a link, depending only on whether it has a destination. This crate decides
//! which shape to produce and which attributes and handlers attach to it; the
//! host renders the result.

pub mod aria;
pub mod element;
pub mod projection;
pub mod render;
pub mod request;
pub mod warning;

pub use aria::apply_aria;
pub use element::{
    AttrValue, Attributes, ButtonElement, ButtonType, CommonAttrs, DisabledLinkElement, Element,
    LinkElement, ParseButtonTypeError, Variant,
};
pub use projection::{project, select_variant};
pub use render::{render, Output};
pub use request::{
    ButtonOptions, ButtonRequest, Download, EventHandlers, Host, LinkHandlers, OptionsError,
};
pub use warning::{pressed_warning_issued, WarnOnce};
