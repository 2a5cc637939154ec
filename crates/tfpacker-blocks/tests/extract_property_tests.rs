use proptest::prelude::*;
use tfpacker_blocks::extract;

/// Brace-free body text: identifiers, assignments, quotes and whitespace.
fn filler() -> impl Strategy<Value = String> {
    "[a-z0-9_ =\"\n\t.]{0,12}"
}

/// A balanced body built from nested `{ ... }` groups.
fn body() -> impl Strategy<Value = String> {
    let leaf = filler();
    leaf.prop_recursive(4, 32, 4, |inner| {
        (filler(), prop::collection::vec(inner, 0..4), filler()).prop_map(|(head, children, tail)| {
            let mut out = head;
            for child in children {
                out.push('{');
                out.push_str(&child);
                out.push('}');
            }
            out.push_str(&tail);
            out
        })
    })
}

fn depth_balanced(bytes: &[u8]) -> bool {
    let mut depth = 0i64;
    for &b in bytes {
        match b {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

proptest! {
    #[test]
    fn test_extract_reproduces_block(
        prefix in filler(),
        header in "(resource|data|locals|module) (\"[a-z_]{1,8}\" ){0,2}",
        inner in body(),
        trailer in filler(),
    ) {
        let block = format!("{header}{{{inner}}}");
        let source = format!("{prefix}{block}{trailer}");
        let start = prefix.len();

        let extracted = extract(source.as_bytes(), start).unwrap();

        prop_assert_eq!(extracted, block.as_bytes());
        prop_assert!(depth_balanced(extracted));
        prop_assert_eq!(*extracted.last().unwrap(), b'}');
    }

    #[test]
    fn test_extract_is_stable_on_its_own_output(inner in body()) {
        let block = format!("locals {{{inner}}}");
        let once = extract(block.as_bytes(), 0).unwrap();
        let twice = extract(once, 0).unwrap();
        prop_assert_eq!(once, twice);
        prop_assert_eq!(once.len(), block.len());
    }

    #[test]
    fn test_extract_never_reads_past_first_balanced_block(inner in body(), extra in body()) {
        let first = format!("variable \"v\" {{{inner}}}");
        let source = format!("{first}\n\nlocals {{{extra}}}");

        let extracted = extract(source.as_bytes(), 0).unwrap();
        prop_assert_eq!(extracted, first.as_bytes());
    }
}
