mod converter;
mod root;
mod state;

pub use {
    converter::Converter,
    root::App,
    state::{ConverterAction, ResolvePhase, UiSettings},
};
