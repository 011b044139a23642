//! App identity, logged at boot

/// Name, author and version of the watch face
pub struct AppInfo {
    pub uuid: [u8; 16],
    pub name: &'static str,
    pub author: &'static str,
    pub version_major: u8,
    pub version_minor: u8,
}

pub const APP_INFO: AppInfo = AppInfo {
    uuid: [
        0x16, 0x17, 0xE9, 0x55, 0x6A, 0x9B, 0x4C, 0xC8, 0x9F, 0x03, 0xAD, 0xAB, 0x5B, 0x84, 0x4D,
        0x8C,
    ],
    name: "T10_SW",
    author: "Scott Woiwode",
    version_major: 0,
    version_minor: 2,
};
