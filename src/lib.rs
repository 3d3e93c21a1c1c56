mod error;
mod flatten;
mod grayscale;
mod hexfile;
mod load;
mod pipeline;
mod preview;
mod resample;

pub use error::*;
pub use flatten::*;
pub use grayscale::*;
pub use hexfile::*;
pub use load::*;
pub use pipeline::*;
pub use preview::*;
pub use resample::*;
