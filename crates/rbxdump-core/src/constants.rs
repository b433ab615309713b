/// Display name used when an instance has no usable `Name` property.
pub const FALLBACK_NAME: &str = "Unnamed";

/// Class name used when an `Item` element carries no `class` attribute.
pub const FALLBACK_CLASS: &str = "Unknown";

/// Body written for script instances that carry no `Source` property.
pub const MISSING_SOURCE_BODY: &str = "-- No source found\n";

/// File-name suffix of the per-instance properties sidecar.
pub const PROPERTIES_SUFFIX: &str = "_properties.txt";

/// Property name that supplies an instance's display name.
pub const NAME_PROPERTY: &str = "Name";

/// Property name that carries script source text.
pub const SOURCE_PROPERTY: &str = "Source";

/// Serialized kind tag marking raw script payloads.
pub const PROTECTED_STRING_KIND: &str = "ProtectedString";
