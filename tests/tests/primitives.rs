use mirror::{Data, Date, Mirror, Url, Uuid};
use std::time::{Duration, SystemTime};
use tests::round_trip;

#[derive(Debug, Clone, PartialEq, Mirror)]
struct Sample {
    #[persisted]
    string: String,
    #[persisted]
    i8: i8,
    #[persisted]
    i16: i16,
    #[persisted]
    i32: i32,
    #[persisted]
    i64: i64,
    #[persisted]
    u8: u8,
    #[persisted]
    u16: u16,
    #[persisted]
    u32: u32,
    #[persisted]
    u64: u64,
    #[persisted]
    f32: f32,
    #[persisted]
    f64: f64,
    #[persisted]
    bool: bool,
    #[persisted]
    char: char,
    #[persisted]
    date: Date,
    #[persisted]
    data: Data,
    #[persisted]
    url: Url,
    #[persisted]
    uuid: Uuid,
}

// `Date` and `Url` have no default value
impl Default for Sample {
    fn default() -> Sample {
        Sample {
            string: String::new(),
            i8: 0,
            i16: 0,
            i32: 0,
            i64: 0,
            u8: 0,
            u16: 0,
            u32: 0,
            u64: 0,
            f32: 0.0,
            f64: 0.0,
            bool: false,
            char: '\0',
            date: SystemTime::UNIX_EPOCH,
            data: Data::new(),
            url: Url::parse("about:blank").unwrap(),
            uuid: Uuid::nil(),
        }
    }
}

fn sample() -> Sample {
    Sample {
        string: "hello".to_string(),
        i8: i8::MIN,
        i16: -16,
        i32: -32,
        i64: i64::MAX,
        u8: u8::MAX,
        u16: 16,
        u32: 32,
        u64: u64::MAX,
        f32: 1.5,
        f64: -0.25,
        bool: true,
        char: 'λ',
        date: SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000),
        data: vec![0xde, 0xad, 0xbe, 0xef],
        url: Url::parse("https://example.com/a?b=c").unwrap(),
        uuid: Uuid::new_v4(),
    }
}

#[test]
fn primitives_are_copied_unchanged() {
    let sample = sample();
    let mirror = ReadonlySample::new(&sample);

    assert_eq!(mirror.string, sample.string);
    assert_eq!(mirror.i8, sample.i8);
    assert_eq!(mirror.u64, sample.u64);
    assert_eq!(mirror.f64, sample.f64);
    assert_eq!(mirror.char, sample.char);
    assert_eq!(mirror.date, sample.date);
    assert_eq!(mirror.data, sample.data);
    assert_eq!(mirror.url, sample.url);
    assert_eq!(mirror.uuid, sample.uuid);
}

#[test]
fn primitive_round_trip_is_identity() {
    let sample = sample();

    assert_eq!(round_trip!(ReadonlySample, sample), sample);
    assert_eq!(round_trip!(ReadonlySample, Sample::default()), Sample::default());
}

#[test]
fn mirror_is_detached_from_record() {
    let mut sample = sample();
    let mirror = ReadonlySample::new(&sample);

    sample.string.push_str(", world");
    sample.data.clear();

    assert_eq!(mirror.string, "hello");
    assert_eq!(mirror.data, [0xde, 0xad, 0xbe, 0xef]);
}
