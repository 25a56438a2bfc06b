use mirror::{List, Map, Mirror, MutableSet};
use std::collections::{HashMap, HashSet};
use tests::*;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Mirror)]
#[mirror(derive(Eq, Hash))]
struct Tag {
    #[persisted]
    label: String,
}

#[derive(Debug, Default, Clone, PartialEq, Mirror)]
struct Post {
    #[persisted]
    lines: List<String>,

    #[persisted]
    scores: List<i32>,

    #[persisted]
    tags: MutableSet<Tag>,

    #[persisted]
    tag_history: List<MutableSet<Tag>>,

    #[persisted]
    counts: Map<String, u64>,

    #[persisted]
    related: Map<u32, List<Tag>>,
}

fn tag(label: &str) -> Tag {
    Tag {
        label: label.to_string(),
    }
}

fn readonly_tag(label: &str) -> ReadonlyTag {
    ReadonlyTag::new(&tag(label))
}

#[test]
fn list_order_and_duplicates_are_preserved() {
    let post = Post {
        lines: List::from(["b".to_string(), "a".to_string(), "b".to_string()]),
        scores: List::from([3, 1, 2, 1]),
        ..Post::default()
    };

    let mirror = ReadonlyPost::new(&post);
    assert_eq!(mirror.lines, ["b", "a", "b"]);
    assert_eq!(mirror.scores, [3, 1, 2, 1]);

    let back = mirror.to_persisted();
    assert_eq!(back.lines, post.lines);
    assert_eq!(back.scores.as_slice(), &[3, 1, 2, 1]);
}

#[test]
fn set_membership_is_preserved() {
    let post = Post {
        tags: MutableSet::from([tag("rust"), tag("codegen"), tag("mirrors")]),
        ..Post::default()
    };

    let mirror = ReadonlyPost::new(&post);
    let tags: &HashSet<ReadonlyTag> = &mirror.tags;

    assert_eq_unordered!(
        tags.iter(),
        &[readonly_tag("mirrors"), readonly_tag("rust"), readonly_tag("codegen")]
    );

    let back = mirror.to_persisted();
    assert_eq!(back.tags, post.tags);
    assert!(back.tags.contains(&tag("codegen")));
}

#[test]
fn map_associations_are_preserved() {
    let post = Post {
        counts: Map::from([
            ("views".to_string(), 1_024),
            ("likes".to_string(), 12),
            ("shares".to_string(), 0),
        ]),
        ..Post::default()
    };

    let mirror = ReadonlyPost::new(&post);
    let counts: &HashMap<String, u64> = &mirror.counts;

    assert_eq!(counts["views"], 1_024);
    assert_eq!(counts["shares"], 0);

    let back = mirror.to_persisted();
    assert_eq!(back.counts, post.counts);
    assert_eq!(back.counts.get("likes"), Some(&12));
}

#[test]
fn nested_containers_compose() {
    let post = Post {
        tag_history: List::from([
            MutableSet::from([tag("draft")]),
            MutableSet::new(),
            MutableSet::from([tag("draft"), tag("published")]),
        ]),
        related: Map::from([
            (1, List::from([tag("a"), tag("b")])),
            (2, List::new()),
        ]),
        ..Post::default()
    };

    let mirror = ReadonlyPost::new(&post);

    assert_eq!(mirror.tag_history.len(), 3);
    assert!(mirror.tag_history[1].is_empty());
    assert!(mirror.tag_history[2].contains(&readonly_tag("published")));
    assert_eq!(mirror.related[&1], [readonly_tag("a"), readonly_tag("b")]);

    assert_eq!(round_trip!(ReadonlyPost, post), post);
}

#[test]
fn empty_collections_round_trip() {
    let post = Post::default();
    let mirror = ReadonlyPost::new(&post);

    assert!(mirror.lines.is_empty());
    assert!(mirror.tags.is_empty());
    assert!(mirror.counts.is_empty());

    assert_eq!(mirror.to_persisted(), post);
}
