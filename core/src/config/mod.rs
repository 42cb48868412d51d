pub use align::AlignConfig;
pub use structure::ConfigStructure;

mod align;
mod structure;
