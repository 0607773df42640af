pub mod color;
pub mod feature;
pub mod plasmid;
pub mod selection;

pub use feature::*;
pub use plasmid::*;
