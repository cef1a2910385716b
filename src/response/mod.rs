//! Response shaping - news digests and user projections

pub mod digest;
pub mod profile;

pub use digest::NewsDigest;
pub use profile::UserProfile;
