use enumeta::{scoped_enum, Enum, Origin};

scoped_enum! {
    in storage;
    /// Compression codecs.
    pub enum Codec: u8 {
        None,
        Lz4 = 4,
        Zstd,
    }
}

const ZSTD: &str = Codec::Zstd.to_str();

fn main() {
    assert_eq!(ZSTD, "Zstd");
    assert_eq!(Codec::Zstd as u8, 5);
    assert_eq!(
        Codec::DESCRIPTOR.origin(),
        Origin::INLINE | Origin::SCOPED | Origin::NAMESPACED
    );
    assert_eq!(Codec::qualified_name().to_string(), "storage::Codec");
    assert_eq!(Codec::try_from(4u8), Ok(Codec::Lz4));
    assert_eq!(u8::from(Codec::None), 0);
}
