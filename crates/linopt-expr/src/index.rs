//! Lazy cartesian products over index sets.
//!
//! Filtered index sets are built by generating the product lazily and
//! applying a predicate at the consumer (`sum_over`, `add_variable_map`),
//! so only passing tuples are ever materialized.

/// Lexicographic product of two index sets.
pub fn pairs<'a, A, B>(a: &'a [A], b: &'a [B]) -> impl Iterator<Item = (A, B)> + 'a
where
    A: Clone,
    B: Clone,
{
    a.iter()
        .flat_map(move |x| b.iter().map(move |y| (x.clone(), y.clone())))
}

/// Lexicographic product of three index sets.
pub fn triples<'a, A, B, C>(
    a: &'a [A],
    b: &'a [B],
    c: &'a [C],
) -> impl Iterator<Item = (A, B, C)> + 'a
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    a.iter().flat_map(move |x| {
        b.iter()
            .flat_map(move |y| c.iter().map(move |z| (x.clone(), y.clone(), z.clone())))
    })
}

#[cfg(test)]
mod tests {
    use super::{pairs, triples};

    #[test]
    fn pairs_are_lexicographic() {
        let out: Vec<_> = pairs(&[1, 2], &['a', 'b']).collect();
        assert_eq!(out, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }

    #[test]
    fn triples_cover_full_product() {
        let out: Vec<_> = triples(&[0, 1], &[0, 1], &[0, 1]).collect();
        assert_eq!(out.len(), 8);
        assert_eq!(out[0], (0, 0, 0));
        assert_eq!(out[7], (1, 1, 1));
    }

    #[test]
    fn empty_set_gives_empty_product() {
        let empty: &[i32] = &[];
        assert_eq!(pairs(empty, &[1, 2]).count(), 0);
        assert_eq!(pairs(&[1, 2], empty).count(), 0);
    }
}
