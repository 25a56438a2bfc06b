use mirror::Mirror;
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Mirror)]
struct Ordered {
    #[persisted]
    zebra: u8,

    #[allow(dead_code)]
    skipped: u8,

    #[persisted]
    apple: u8,

    #[persisted]
    mango: Option<u8>,
}

#[derive(Debug, Default, Mirror)]
#[mirror(observable)]
struct Watched {
    #[persisted]
    zebra: u8,

    #[persisted]
    apple: u8,

    #[allow(dead_code)]
    skipped: u8,

    #[persisted]
    mango: Option<u8>,
}

#[test]
fn readonly_fields_follow_declaration_order() {
    let ordered = Ordered {
        zebra: 1,
        skipped: 9,
        apple: 2,
        mango: Some(3),
    };

    assert_eq!(
        format!("{:?}", ReadonlyOrdered::new(&ordered)),
        "ReadonlyOrdered { zebra: 1, apple: 2, mango: Some(3) }"
    );
}

#[test]
fn observable_fields_follow_declaration_order() {
    let watched = Watched {
        zebra: 1,
        apple: 2,
        skipped: 9,
        mango: None,
    };

    assert_eq!(
        format!("{:?}", ObservableWatched::new(&watched)),
        "ObservableWatched { zebra: Observed(1), apple: Observed(2), mango: Observed(None) }"
    );
}

#[test]
fn readonly_fields_are_plain_values() {
    let mirror = ReadonlyOrdered::new(&Ordered::default());

    let zebra: u8 = mirror.zebra;
    let mango: Option<u8> = mirror.mango;

    assert_eq!((zebra, mango), (0, None));
}
