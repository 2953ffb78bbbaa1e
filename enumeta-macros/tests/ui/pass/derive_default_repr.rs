use enumeta::Enum;

// No `#[repr]`: the representation is `isize`, like the discriminants.
#[derive(Clone, Copy, Debug, PartialEq, Enum)]
enum Weekday {
    Monday,
    Tuesday,
    Wednesday = 10,
    Thursday,
}

#[derive(Clone, Copy, Enum)]
enum Never {}

fn main() {
    let raw: isize = Weekday::Thursday.to_underlying();
    assert_eq!(raw, 11);
    assert_eq!(Weekday::Thursday.index(), Some(3));
    assert_eq!(Weekday::COUNT, 4);

    assert_eq!(Never::COUNT, 0);
    assert_eq!(Never::values().count(), 0);
    assert!(Never::cast("Anything").is_none());
}
