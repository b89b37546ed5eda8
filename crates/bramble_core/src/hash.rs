use xxhash_rust::xxh3::xxh3_64;

/// Bramble needs a hasher for the identifiers embedded in production
/// bundle names.
///
/// The hashes don't need to be cryptographic, but they must be stable
/// across runs, machines and platforms, because they end up in shipped
/// file names that clients cache by.
pub fn hash_bytes(bytes: &[u8]) -> String {
  format!("{:016x}", xxh3_64(bytes))
}
