use enumeta::Enum;

#[derive(Clone, Copy, Debug, PartialEq, Enum)]
#[repr(u8)]
enum MyEnum {
    Value1 = 1,
    Value2,
    Value3,
}

fn main() {
    assert_eq!(MyEnum::Value1.to_str(), "Value1");
    assert_eq!(MyEnum::Value2.index(), Some(1));
    assert_eq!(MyEnum::Value3.to_underlying(), 3u8);
    assert_eq!(MyEnum::cast("Value2"), Some(MyEnum::Value2));
    assert_eq!(MyEnum::cast("value2"), None);
    assert!(MyEnum::values().eq([MyEnum::Value1, MyEnum::Value2, MyEnum::Value3]));
    assert!(enumeta::registry::is_managed::<MyEnum>());
}
