//! Property-based tests for path handling.

use super::canonicalize::resolve_bytes;
use super::join::join_bytes;
use super::normalize::normpath_bytes;
use super::relative::relpath_bytes;
use super::segment::segment;
use super::split::{basename_bytes, dirname_bytes, split_bytes};
use super::{pure, PathValue};
use crate::context::memory::MemoryFileSystem;
use proptest::prelude::*;

// Raw paths over an alphabet dense in separators and dots.
fn raw_path_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop::sample::select(vec![b'a', b'b', b'.', b'/', b'/', 0xff]),
        0..24,
    )
}

fn component_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,6}".prop_map(String::into_bytes),
        1 => Just(b".".to_vec()),
        1 => Just(b"..".to_vec()),
    ]
}

fn name_strategy() -> impl Strategy<Value = Vec<u8>> {
    "[a-c]{1,3}".prop_map(String::into_bytes)
}

// Paths with at least one component and no trailing separator, joined by
// runs of one to three separators, optionally rooted.
fn untrailed_path_strategy() -> impl Strategy<Value = Vec<u8>> {
    (
        0usize..3,
        prop::collection::vec((component_strategy(), 1usize..4), 1..6),
    )
        .prop_map(|(root, parts)| {
            let mut out = vec![b'/'; root];
            for (i, (component, seps)) in parts.into_iter().enumerate() {
                if i > 0 {
                    out.extend(std::iter::repeat(b'/').take(seps));
                }
                out.extend(component);
            }
            out
        })
}

// Absolute paths under a `/` or `//` root.
fn absolute_under(root: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(name_strategy(), 0..5).prop_map(move |parts| {
        let mut out = vec![b'/'; root];
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push(b'/');
            }
            out.extend(part);
        }
        out
    })
}

// Two absolute paths sharing a root descriptor; relpath cannot carry the
// difference between `/` and `//`.
fn absolute_pair_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (1usize..3).prop_flat_map(|root| (absolute_under(root), absolute_under(root)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normpath(normpath(p)) == normpath(p)
    #[test]
    fn normalization_idempotent(path in raw_path_strategy()) {
        let once = normpath_bytes(&path);
        prop_assert_eq!(normpath_bytes(&once), once);
    }

    // A rendered segmentation segments to the same thing again.
    #[test]
    fn segmentation_render_is_stable(path in raw_path_strategy()) {
        let rendered = segment(&path).to_bytes();
        prop_assert_eq!(segment(&rendered).to_bytes(), rendered);
    }

    // split never loses bytes from the tail and the tail has no separator.
    #[test]
    fn split_tail_is_suffix(path in raw_path_strategy()) {
        let (_, tail) = split_bytes(&path);
        prop_assert!(path.ends_with(tail));
        prop_assert!(!tail.contains(&b'/'));
    }

    // normpath(join(dirname(p), basename(p))) == normpath(p)
    #[test]
    fn join_inverts_split(path in untrailed_path_strategy()) {
        let rejoined = join_bytes(dirname_bytes(&path), [basename_bytes(&path)]);
        prop_assert_eq!(normpath_bytes(&rejoined), normpath_bytes(&path));
    }

    // normpath(join(b, relpath(a, b))) == normpath(a)
    #[test]
    fn relpath_round_trip((a, b) in absolute_pair_strategy()) {
        let relative = relpath_bytes(&a, &b, b"/");
        let rejoined = join_bytes(&b, [relative.as_slice()]);
        prop_assert_eq!(normpath_bytes(&rejoined), normpath_bytes(&a));
    }

    // Without links, physical resolution agrees with lexical normalization.
    #[test]
    fn resolution_without_links_is_lexical(path in untrailed_path_strategy()) {
        let mut absolute = b"/".to_vec();
        absolute.extend(path.iter().skip_while(|&&b| b == b'/'));
        let fs = MemoryFileSystem::new();
        let resolution = resolve_bytes(&fs, &absolute, 40).unwrap();
        prop_assert_eq!(resolution.path, normpath_bytes(&absolute));
        prop_assert_eq!(resolution.hops, 0);
    }

    // f(encode(p)) == encode(f(p)) for the lexical operations.
    #[test]
    fn encoding_symmetry(text in "[a-zé./]{0,20}", fragment in "[a-zé./]{0,8}") {
        let as_text = PathValue::from(text.as_str());
        let as_bytes = as_text.encode();
        let fragment_text = PathValue::from(fragment.as_str());
        let fragment_bytes = fragment_text.encode();

        prop_assert_eq!(
            pure::join(&as_bytes, [&fragment_bytes]).unwrap(),
            pure::join(&as_text, [&fragment_text]).unwrap().encode()
        );
        let (head_b, tail_b) = pure::split(&as_bytes).unwrap();
        let (head_t, tail_t) = pure::split(&as_text).unwrap();
        prop_assert_eq!(head_b, head_t.encode());
        prop_assert_eq!(tail_b, tail_t.encode());
        prop_assert_eq!(
            pure::isabs(&as_bytes).unwrap(),
            pure::isabs(&as_text).unwrap()
        );

        prop_assert_eq!(
            pure::normpath(&as_bytes).unwrap(),
            pure::normpath(&as_text).unwrap().encode()
        );
        prop_assert_eq!(
            pure::basename(&as_bytes).unwrap(),
            pure::basename(&as_text).unwrap().encode()
        );
        prop_assert_eq!(
            pure::dirname(&as_bytes).unwrap(),
            pure::dirname(&as_text).unwrap().encode()
        );
        let (root_b, ext_b) = pure::splitext(&as_bytes).unwrap();
        let (root_t, ext_t) = pure::splitext(&as_text).unwrap();
        prop_assert_eq!(root_b, root_t.encode());
        prop_assert_eq!(ext_b, ext_t.encode());
    }
}
