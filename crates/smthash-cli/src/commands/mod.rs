pub mod canonicalize;
pub mod hash;
pub mod normalize;
