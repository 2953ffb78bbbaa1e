use enumeta::registry::{self, Registration};
use enumeta::{impl_enum, managed_enum, scoped_enum, Enum, Origin};

managed_enum! {
    in net::proto;
    pub enum Transport: u8 {
        Tcp = 6,
        Udp = 17,
    }
}

scoped_enum! {
    pub enum Direction: u8 {
        North,
        East,
        South,
        West,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Enum)]
#[enumeta(namespace = gfx)]
#[repr(i16)]
enum Filter {
    Nearest = -1,
    Linear = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Flag(u64);

#[allow(non_upper_case_globals)]
impl Flag {
    const Off: Flag = Flag(0);
    const On: Flag = Flag(u64::MAX);
}

impl_enum! { Flag: u64 => { Off, On } }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
enum Plain {
    Yes,
    No,
}

#[test]
fn managed_types() {
    assert!(registry::is_managed::<Transport>());
    assert!(registry::is_managed::<Direction>());
    assert!(registry::is_managed::<Filter>());
    assert!(registry::is_managed::<Flag>());
}

#[test]
fn unmanaged_types() {
    assert!(!registry::is_managed::<Plain>());
    assert!(!registry::is_managed::<u8>());
    assert!(!registry::is_managed::<String>());
    assert!(!registry::is_managed::<[Transport]>());
    assert!(!registry::is_managed::<Option<Transport>>());
    assert!(registry::lookup::<Plain>().is_none());
}

#[test]
fn registrations_mirror_descriptors() {
    fn same<E: Enum>(reg: &Registration) {
        assert_eq!(reg.qualified_name(), E::qualified_name());
        assert_eq!(reg.names(), E::DESCRIPTOR.names());
        assert_eq!(reg.origin(), E::DESCRIPTOR.origin());
        assert_eq!(reg.len(), E::COUNT);
        for (i, value) in E::values().enumerate() {
            assert_eq!(
                reg.underlying_at(i),
                Some(enumeta::Underlying::to_i128(value.to_underlying()))
            );
        }
    }

    same::<Transport>(registry::lookup::<Transport>().unwrap());
    same::<Direction>(registry::lookup::<Direction>().unwrap());
    same::<Filter>(registry::lookup::<Filter>().unwrap());
    same::<Flag>(registry::lookup::<Flag>().unwrap());
}

#[test]
fn wide_values_survive_type_erasure() {
    let reg = registry::lookup::<Flag>().unwrap();
    assert_eq!(reg.underlying_at(1), Some(i128::from(u64::MAX)));

    let reg = registry::lookup::<Filter>().unwrap();
    assert!(reg.entries().eq([("Nearest", -1), ("Linear", 1)]));
}

#[test]
fn find_by_display_name() {
    let reg = registry::find("net::proto::Transport").unwrap();
    assert_eq!(reg.origin(), Origin::INLINE | Origin::NAMESPACED);
    assert!(reg.type_name().ends_with("Transport"));

    assert!(registry::find("gfx::Filter").is_some());
    assert!(registry::find("Direction").is_some());

    // Names are matched exactly, segment by segment.
    assert!(registry::find("Transport").is_none());
    assert!(registry::find("proto::Transport").is_none());
    assert!(registry::find("net::proto::Transport::Tcp").is_none());
    assert!(registry::find("").is_none());
}

#[test]
fn every_registration_is_listed() {
    let count = registry::registrations()
        .filter(|r| {
            ["Transport", "Direction", "Filter", "Flag"].contains(&r.qualified_name().name())
        })
        .count();
    assert_eq!(count, 4);
}

#[test]
fn no_ambiguous_names() {
    assert_eq!(registry::check(), Ok(()));
}
