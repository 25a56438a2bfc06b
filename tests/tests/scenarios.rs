mod two_primitive_fields {
    use mirror::Mirror;

    #[derive(Debug, Default, Clone, PartialEq, Mirror)]
    struct Person {
        #[persisted]
        name: String,

        #[persisted]
        age: i64,
    }

    #[test]
    fn constructor_and_builder_copy_both_fields() {
        let person = Person {
            name: "Ada".to_string(),
            age: 36,
        };

        let mirror = ReadonlyPerson::new(&person);
        assert_eq!(mirror.name, "Ada");
        assert_eq!(mirror.age, 36);

        assert_eq!(mirror.to_persisted(), person);
    }
}

mod list_of_strings {
    use mirror::{List, Mirror};
    use tests::round_trip;

    #[derive(Debug, Default, Clone, PartialEq, Mirror)]
    struct Person {
        #[persisted]
        hobbies: List<String>,
    }

    #[test]
    fn builder_appends_into_fresh_list() {
        let person = Person {
            hobbies: List::from(["chess".to_string(), "go".to_string()]),
        };

        let mirror = ReadonlyPerson::new(&person);
        let hobbies: &Vec<String> = &mirror.hobbies;
        assert_eq!(hobbies, &["chess", "go"]);

        let back = mirror.to_persisted();
        assert_eq!(back.hobbies, person.hobbies);
        assert_eq!(round_trip!(ReadonlyPerson, Person::default()), Person::default());
    }
}

mod list_of_records {
    use mirror::{List, Mirror};

    #[derive(Debug, Default, Clone, PartialEq, Mirror)]
    struct Person {
        #[persisted]
        name: String,

        #[persisted]
        friends: List<Person>,
    }

    fn person(name: &str, friends: impl IntoIterator<Item = Person>) -> Person {
        Person {
            name: name.to_string(),
            friends: friends.into_iter().collect(),
        }
    }

    #[test]
    fn elements_map_through_their_own_mirror() {
        let ada = person("Ada", [person("Grace", []), person("Alan", [person("Kurt", [])])]);

        let mirror = ReadonlyPerson::new(&ada);
        let friends: &Vec<ReadonlyPerson> = &mirror.friends;

        assert_eq!(friends.len(), 2);
        assert_eq!(friends[0].name, "Grace");
        assert_eq!(friends[1].name, "Alan");
        assert_eq!(friends[1].friends[0].name, "Kurt");

        assert_eq!(mirror.to_persisted(), ada);
    }
}

mod optional_primitive {
    use mirror::Mirror;
    use tests::round_trip;

    #[derive(Debug, Default, Clone, PartialEq, Mirror)]
    struct Person {
        #[persisted]
        nickname: Option<String>,
    }

    #[test]
    fn present_and_absent_round_trip() {
        let present = Person {
            nickname: Some("Ace".to_string()),
        };
        let absent = Person { nickname: None };

        assert_eq!(ReadonlyPerson::new(&present).nickname.as_deref(), Some("Ace"));
        assert_eq!(ReadonlyPerson::new(&absent).nickname, None);

        assert_eq!(round_trip!(ReadonlyPerson, present), present);
        assert_eq!(round_trip!(ReadonlyPerson, absent), absent);
    }
}

mod string_map {
    use mirror::{Map, Mirror};
    use std::collections::HashMap;

    #[derive(Debug, Default, Clone, PartialEq, Mirror)]
    struct Person {
        #[persisted]
        tags: Map<String, String>,
    }

    #[test]
    fn round_trip_preserves_all_pairs() {
        let person = Person {
            tags: Map::from([
                ("team".to_string(), "core".to_string()),
                ("role".to_string(), "lead".to_string()),
                ("site".to_string(), "remote".to_string()),
            ]),
        };

        let mirror = ReadonlyPerson::new(&person);
        let tags: &HashMap<String, String> = &mirror.tags;

        assert_eq!(tags.len(), 3);
        assert_eq!(tags["role"], "lead");

        assert_eq!(mirror.to_persisted(), person);
    }
}
