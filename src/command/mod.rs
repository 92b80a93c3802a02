mod fmt;
mod roundtrip;
mod validate;

pub use fmt::fmt;
pub use roundtrip::roundtrip;
pub use validate::validate;
