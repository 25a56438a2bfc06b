use mirror::{List, Map, Mirror, MutableSet};
use tests::round_trip;

mod pets {
    use mirror::{Mirror, MutableSet};

    #[derive(Debug, Default, Clone, PartialEq, Mirror)]
    pub struct Dog {
        #[persisted]
        pub name: String,

        #[persisted]
        pub age: u8,

        #[persisted]
        pub tricks: MutableSet<String>,

        /// Not persisted; reset on the way back
        pub treats_today: u32,
    }
}

#[derive(Debug, Default, Clone, PartialEq, Mirror)]
struct Owner {
    #[persisted]
    name: String,

    #[persisted]
    dog: pets::Dog,

    #[persisted]
    walkers: List<pets::Dog>,

    #[persisted]
    favorite: Option<pets::Dog>,

    #[persisted]
    by_nickname: Map<String, pets::Dog>,

    #[persisted]
    litters: Option<List<pets::Dog>>,
}

fn dog(name: &str, age: u8, tricks: &[&str]) -> pets::Dog {
    pets::Dog {
        name: name.to_string(),
        age,
        tricks: tricks.iter().map(|trick| trick.to_string()).collect(),
        treats_today: 0,
    }
}

fn owner() -> Owner {
    Owner {
        name: "Sam".to_string(),
        dog: dog("Rex", 3, &["sit", "roll"]),
        walkers: List::from([dog("Fido", 5, &[]), dog("Lassie", 9, &["rescue"])]),
        favorite: Some(dog("Rex", 3, &["sit", "roll"])),
        by_nickname: Map::from([
            ("pup".to_string(), dog("Bolt", 1, &["run"])),
            ("old".to_string(), dog("Max", 14, &[])),
        ]),
        litters: Some(List::from([dog("Tiny", 0, &[])])),
    }
}

#[test]
fn nested_records_use_their_own_mirror() {
    let owner = owner();
    let mirror = ReadonlyOwner::new(&owner);

    let dog: &pets::ReadonlyDog = &mirror.dog;
    assert_eq!(dog.name, "Rex");
    assert!(dog.tricks.contains("roll"));

    assert_eq!(mirror.walkers[1].name, "Lassie");
    assert_eq!(mirror.favorite.as_ref().map(|dog| dog.age), Some(3));
    assert_eq!(mirror.by_nickname["old"].age, 14);
    assert_eq!(mirror.litters.as_ref().map(Vec::len), Some(1));
}

#[test]
fn inductive_round_trip() {
    let owner = owner();
    assert_eq!(round_trip!(ReadonlyOwner, owner), owner);

    let empty = Owner::default();
    assert_eq!(round_trip!(ReadonlyOwner, empty), empty);
}

#[test]
fn unpersisted_fields_take_default_values() {
    let mut owner = owner();
    owner.dog.treats_today = 7;

    let back = round_trip!(ReadonlyOwner, owner);

    assert_eq!(back.dog.treats_today, 0);
    assert_eq!(back.dog.name, owner.dog.name);
}

#[test]
fn absent_reference_stays_absent() {
    let owner = Owner {
        favorite: None,
        litters: None,
        ..owner()
    };

    let mirror = ReadonlyOwner::new(&owner);
    assert!(mirror.favorite.is_none());
    assert!(mirror.litters.is_none());

    assert_eq!(mirror.to_persisted(), owner);
}

#[test]
fn mirrors_compare_by_value() {
    let owner = owner();
    let a = ReadonlyOwner::new(&owner);
    let b = a.clone();

    assert_eq!(a, b);
    assert_ne!(a, ReadonlyOwner::new(&Owner::default()));
}

#[test]
fn set_of_strings_keeps_members() {
    let rex = dog("Rex", 3, &["sit", "roll", "sit"]);
    let mirror = pets::ReadonlyDog::new(&rex);

    assert_eq!(mirror.tricks.len(), 2);
    assert_eq!(mirror.to_persisted().tricks, MutableSet::from(["sit".to_string(), "roll".to_string()]));
}
