mod device;
mod envelope;
mod location;
mod wire;

pub use device::*;
pub use envelope::*;
pub use location::*;
