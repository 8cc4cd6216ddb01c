use std::num::NonZeroUsize;

/// Split `trends` into consecutive groups of at most `size`, keeping order.
/// Only the last group may be shorter.
pub fn batch(trends: &[String], size: NonZeroUsize) -> Vec<Vec<String>> {
    trends.chunks(size.get()).map(<[String]>::to_vec).collect()
}
