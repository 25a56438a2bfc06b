use mirror::{List, Map, Mirror, MutableSet, Observable, Observed};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, PartialEq, Mirror)]
#[mirror(observable)]
struct Person {
    #[persisted]
    name: String,

    #[persisted]
    friends: List<Person>,

    #[persisted]
    nickname: Option<String>,

    cache: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Mirror)]
#[mirror(mode = "observable")]
struct Counter {
    #[persisted]
    count: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Mirror)]
#[mirror(observable, derive(Eq, Hash))]
struct Tag {
    #[persisted]
    label: String,
}

#[derive(Debug, Default, Clone, PartialEq, Mirror)]
#[mirror(observable)]
struct Post {
    #[persisted]
    tags: MutableSet<Tag>,

    #[persisted]
    tags_by_name: Map<String, Tag>,
}

fn tag(label: &str) -> Tag {
    Tag {
        label: label.to_string(),
    }
}

fn ada() -> Person {
    Person {
        name: "Ada".to_string(),
        friends: List::from([Person {
            name: "Grace".to_string(),
            ..Person::default()
        }]),
        nickname: None,
        cache: 99,
    }
}

fn assert_observable<T: Observable>(_: &T) {}

#[test]
fn mirror_carries_the_marker() {
    let mirror = ObservablePerson::new(&ada());
    assert_observable(&mirror);
    assert_observable(&ObservableCounter::new(&Counter::default()));
}

#[test]
fn every_field_is_an_observed_cell() {
    let mirror = ObservablePerson::new(&ada());

    let name: &Observed<String> = &mirror.name;
    let friends: &Observed<Vec<ObservablePerson>> = &mirror.friends;
    let nickname: &Observed<Option<String>> = &mirror.nickname;

    assert_eq!(*name.get(), "Ada");
    assert_eq!(friends.with(|friends| friends[0].name.cloned()), "Grace");
    assert_eq!(nickname.cloned(), None);
}

#[test]
fn fields_are_mutable_through_a_shared_reference() {
    let person = ada();
    let mirror = ObservablePerson::new(&person);
    let shared = &mirror;

    let prev = shared.name.set("Ada Lovelace".to_string());
    shared.nickname.set(Some("Countess".to_string()));
    shared.friends.update(|friends| {
        friends.push(ObservablePerson::new(&Person {
            name: "Charles".to_string(),
            ..Person::default()
        }))
    });

    assert_eq!(prev, "Ada");

    let back = mirror.to_persisted();
    assert_eq!(back.name, "Ada Lovelace");
    assert_eq!(back.nickname.as_deref(), Some("Countess"));

    let names: Vec<_> = back.friends.iter().map(|friend| friend.name.as_str()).collect();
    assert_eq!(names, ["Grace", "Charles"]);
}

#[test]
fn observers_see_every_change() {
    let mirror = ObservableCounter::new(&Counter { count: 1 });
    let seen = Rc::new(Cell::new(0));

    mirror.count.observe({
        let seen = seen.clone();
        move |count| seen.set(*count)
    });

    mirror.count.set(5);
    assert_eq!(seen.get(), 5);

    mirror.count.update(|count| *count += 1);
    assert_eq!(seen.get(), 6);

    assert_eq!(mirror.to_persisted(), Counter { count: 6 });
}

#[test]
fn round_trip_without_changes() {
    let person = ada();
    let back = ObservablePerson::new(&person).to_persisted();

    assert_eq!(back.name, person.name);
    assert_eq!(back.friends, person.friends);
    assert_eq!(back.nickname, person.nickname);
    assert_eq!(back.cache, 0);
}

#[test]
fn sets_and_maps_of_observable_mirrors() {
    let post = Post {
        tags: MutableSet::from([tag("rust"), tag("db")]),
        tags_by_name: Map::from([("lang".to_string(), tag("rust"))]),
    };

    let mirror = ObservablePost::new(&post);

    mirror.tags.with(|tags| {
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&ObservableTag::new(&tag("db"))));
    });
    mirror.tags_by_name.with(|tags| {
        assert_eq!(tags["lang"].label.cloned(), "rust");
    });

    assert_eq!(mirror.to_persisted(), post);

    mirror.tags.update(|tags| {
        tags.insert(ObservableTag::new(&tag("orm")));
    });
    mirror.tags_by_name.update(|tags| {
        tags.insert("kind".to_string(), ObservableTag::new(&tag("orm")));
    });

    let back = mirror.to_persisted();
    assert_eq!(back.tags.len(), 3);
    assert!(back.tags.contains(&tag("orm")));
    assert_eq!(back.tags_by_name.get("kind"), Some(&tag("orm")));
}
