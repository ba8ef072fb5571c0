//! Shim types, describing which registration call the generated file makes.

/// Version of the runtime shim registration interface.
///
/// Two historical variants of `fs.Register` exist. Generated source must
/// match the one exposed by the shim version the target program depends on.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ShimVersion {
    /// Data only, `fs.Register(data)`.
    Legacy,
    /// Modification time and data, `fs.Register(modTime, data)`.
    #[default]
    Current,
}
impl ShimVersion {
    /// Whether registration call takes the latest modification time.
    pub fn registers_mod_time(self) -> bool {
        match self {
            ShimVersion::Legacy => false,
            ShimVersion::Current => true,
        }
    }
}
