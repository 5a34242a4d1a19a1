//! End-to-end tests for sorting and filtering whole entry lists

use natsort_core::{
    natsorted, CaseMode, Error, FilterSpec, Interval, KeyOptions, NumberFormat, NumberType,
    NumberTypeSpec,
};

const ENTRIES: [&str; 7] = [
    "tmp/a57/path2",
    "tmp/a23/path1",
    "tmp/a1/path1",
    "tmp/a1 (1)/path1",
    "tmp/a130/path1",
    "tmp/a64/path1",
    "tmp/a64/path2",
];

fn sort(entries: &[&'static str], options: &KeyOptions) -> Vec<&'static str> {
    natsorted(entries, options, false)
}

#[test]
fn test_default_sort() {
    assert_eq!(
        sort(&ENTRIES, &KeyOptions::default()),
        [
            "tmp/a1 (1)/path1",
            "tmp/a1/path1",
            "tmp/a23/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
            "tmp/a130/path1",
        ]
    );
}

#[test]
fn test_path_sort() {
    let options = KeyOptions::builder().as_path(true).build().unwrap();
    assert_eq!(
        sort(&ENTRIES, &options),
        [
            "tmp/a1/path1",
            "tmp/a1 (1)/path1",
            "tmp/a23/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
            "tmp/a130/path1",
        ]
    );
}

#[test]
fn test_keep_interval() {
    let filter = FilterSpec::builder().keep(20.0, 100.0).build().unwrap();
    let kept = filter.apply(sort(&ENTRIES, &KeyOptions::default()));
    assert_eq!(
        kept,
        [
            "tmp/a23/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
        ]
    );
}

#[test]
fn test_exclude_interval() {
    let filter = FilterSpec::builder().exclude(20.0, 100.0).build().unwrap();
    let kept = filter.apply(sort(&ENTRIES, &KeyOptions::default()));
    assert_eq!(kept, ["tmp/a1 (1)/path1", "tmp/a1/path1", "tmp/a130/path1"]);
}

#[test]
fn test_exclude_values() {
    let filter = FilterSpec::builder()
        .exclude_value(23.0)
        .exclude_value(130.0)
        .build()
        .unwrap();
    let kept = filter.apply(sort(&ENTRIES, &KeyOptions::default()));
    assert_eq!(
        kept,
        [
            "tmp/a1 (1)/path1",
            "tmp/a1/path1",
            "tmp/a57/path2",
            "tmp/a64/path1",
            "tmp/a64/path2",
        ]
    );
}

#[test]
fn test_interval_round_trip() {
    assert!(matches!(
        Interval::new(7.0, 2.0),
        Err(Error::InvalidInterval { .. })
    ));
    assert_eq!(Interval::new(6.0, 7.0).unwrap().as_tuple(), (6.0, 7.0));
}

#[test]
fn test_reverse() {
    let sorted = natsorted(&["a2", "a10", "a1"], &KeyOptions::default(), true);
    assert_eq!(sorted, ["a10", "a2", "a1"]);
}

#[test]
fn test_real_number_type() {
    let spec: NumberTypeSpec = "real".parse().unwrap();
    let options = KeyOptions::builder()
        .number_type_spec(spec)
        .build()
        .unwrap();
    assert_eq!(
        sort(&["x+2.5", "x-1.5", "x-1e1", "x0"], &options),
        ["x-1e1", "x-1.5", "x0", "x+2.5"]
    );
}

#[test]
fn test_version_strings() {
    let spec: NumberTypeSpec = "version".parse().unwrap();
    let options = KeyOptions::builder()
        .number_type_spec(spec)
        .build()
        .unwrap();
    assert_eq!(
        sort(&["1.10.0", "1.9.2", "1.9.10", "1.2"], &options),
        ["1.2", "1.9.2", "1.9.10", "1.10.0"]
    );
}

#[test]
fn test_exponent_can_be_disabled() {
    let with_exp = KeyOptions::builder()
        .number_type(NumberType::Float)
        .build()
        .unwrap();
    let without_exp = KeyOptions::builder()
        .number_type(NumberType::Float)
        .exponent(false)
        .build()
        .unwrap();
    let items = ["a1e2", "a50"];
    assert_eq!(sort(&items, &with_exp), ["a50", "a1e2"]);
    assert_eq!(sort(&items, &without_exp), ["a1e2", "a50"]);
}

#[test]
fn test_ignore_case() {
    let options = KeyOptions::builder()
        .case(CaseMode::IgnoreCase)
        .build()
        .unwrap();
    assert_eq!(
        sort(&["Banana2", "apple10", "apple9"], &options),
        ["apple9", "apple10", "Banana2"]
    );
}

#[test]
fn test_unicode_digits_sort_by_value() {
    assert_eq!(
        sort(&["item١٠", "item٩", "item8"], &KeyOptions::default()),
        ["item8", "item٩", "item١٠"]
    );
    assert_eq!(
        sort(&["v½", "v1", "v0"], &KeyOptions::builder().number_type(NumberType::Float).build().unwrap()),
        ["v0", "v½", "v1"]
    );
}

#[test]
fn test_locale_grouping() {
    let options = KeyOptions::builder()
        .locale_aware(true)
        .locale_name("en_US")
        .build()
        .unwrap();
    assert_eq!(
        sort(&["n1,234", "n999", "n12"], &options),
        ["n12", "n999", "n1,234"]
    );

    let german = KeyOptions::builder()
        .number_type(NumberType::Float)
        .locale_aware(true)
        .locale_name("de_DE")
        .build()
        .unwrap();
    assert_eq!(
        sort(&["p1.234,5", "p2,5", "p999"], &german),
        ["p2,5", "p999", "p1.234,5"]
    );
}

#[test]
fn test_unknown_locale_fails_at_setup() {
    let result = KeyOptions::builder()
        .locale_aware(true)
        .locale_name("xx_YY")
        .build();
    assert!(matches!(result, Err(Error::UnknownLocale(_))));
}

#[test]
fn test_filter_with_float_format() {
    let filter = FilterSpec::builder()
        .keep(1.5, 2.5)
        .number_format(NumberFormat::float())
        .build()
        .unwrap();
    assert_eq!(
        filter.apply(["r1.2", "r1.6", "r2.5", "r3"]),
        ["r1.6", "r2.5"]
    );
}
