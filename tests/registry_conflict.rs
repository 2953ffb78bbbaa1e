//! Two types registered under one display name.

use enumeta::registry;
use enumeta::{managed_enum, RegistryError};
use std::sync::Mutex;

mod audio {
    enumeta::managed_enum! {
        in media;
        pub enum Format: u8 {
            Wav,
            Flac,
        }
    }
}

mod video {
    enumeta::scoped_enum! {
        in media;
        pub enum Format: u8 {
            Mp4,
            Mkv,
        }
    }
}

managed_enum! {
    enum Unique: u8 {
        Only,
    }
}

/// Keeps warnings so the test can look at them.
struct Capture {
    warnings: Mutex<Vec<String>>,
}

impl log::Log for Capture {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.warnings
                .lock()
                .unwrap()
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture {
    warnings: Mutex::new(Vec::new()),
};

#[test]
fn shared_name_is_reported() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Warn);

    let err = registry::check().unwrap_err();
    let RegistryError::AmbiguousName(name) = err;
    assert_eq!(name.to_string(), "media::Format");
    assert_eq!(err.to_string(), "`media::Format` names more than one managed enum");

    let warnings = LOGGER.warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("`media::Format` is registered for both"));
    assert!(warnings[0].contains("audio::Format"));
    assert!(warnings[0].contains("video::Format"));
}

#[test]
fn both_types_stay_usable() {
    use enumeta::Enum;

    assert!(registry::is_managed::<audio::Format>());
    assert!(registry::is_managed::<video::Format>());
    assert!(registry::is_managed::<Unique>());
    assert_eq!(audio::Format::Flac.to_str(), "Flac");
    assert_eq!(video::Format::cast("Mkv"), Some(video::Format::Mkv));

    let found = registry::find("media::Format").unwrap();
    assert!(found.names() == ["Wav", "Flac"] || found.names() == ["Mp4", "Mkv"]);
}
