pub mod kdf;

pub use self::kdf::{
    build_tag, derive_seed_stream, recover_seed, DerivationTag, SeedStream,
    KEY_DERIVATION_SEPARATOR,
};
