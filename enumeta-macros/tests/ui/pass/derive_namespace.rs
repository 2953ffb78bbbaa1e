use enumeta::{Enum, Origin};

#[derive(Clone, Copy, Debug, PartialEq, Enum)]
#[enumeta(namespace = audio::mixer)]
#[repr(i32)]
enum Channel {
    Left = -1,
    Center,
    Right,
}

fn main() {
    assert_eq!(Channel::qualified_name().to_string(), "audio::mixer::Channel");
    assert_eq!(
        Channel::DESCRIPTOR.origin(),
        Origin::SCOPED | Origin::NAMESPACED
    );
    assert_eq!(Channel::Center.to_underlying(), 0i32);
    assert_eq!(Channel::from_underlying(1), Some(Channel::Right));

    let registration = enumeta::registry::find("audio::mixer::Channel").unwrap();
    assert_eq!(registration.names(), ["Left", "Center", "Right"]);
}
