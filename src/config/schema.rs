//! Configuration schema.

/// Settings read from the `[Settings]` section.
///
/// Loaded once at startup and never changed afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorConfig {
    /// Callers at or above this security level get the admin menu entries.
    pub admin_security_level: i64,

    /// WWIVnet applications enabled.
    pub wwivnet: bool,

    /// FidoNet-technology (FTN) applications enabled.
    pub ftn: bool,
}

impl DoorConfig {
    /// INI section holding the door's settings.
    pub const SECTION: &'static str = "Settings";

    /// Default admin threshold (only sysop-level callers).
    pub const DEFAULT_ADMIN_SECURITY_LEVEL: i64 = 255;
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            admin_security_level: Self::DEFAULT_ADMIN_SECURITY_LEVEL,
            wwivnet: false,
            ftn: false,
        }
    }
}
