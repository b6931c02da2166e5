mod code_hasher;

pub use code_hasher::hash_code;
