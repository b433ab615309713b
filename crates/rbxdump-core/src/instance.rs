use crate::constants;

/// One node of the loaded document tree.
///
/// Instances are produced by the loader in document order and read-only to
/// everything downstream. `properties` and `children` both preserve the
/// order they appeared in the document.
#[derive(Debug, Clone, Default)]
pub struct Instance {
    pub class_name: String,
    pub properties: Vec<Property>,
    pub children: Vec<Instance>,
}

/// A single serialized property entry.
#[derive(Debug, Clone)]
pub struct Property {
    /// The `name` attribute; absent on malformed entries.
    pub name: Option<String>,
    /// Serialized kind, taken from the element tag (`string`, `bool`,
    /// `ProtectedString`, ...).
    pub kind: String,
    /// Element text; absent for empty elements.
    pub value: Option<String>,
}

impl Property {
    pub fn is_protected_string(&self) -> bool {
        self.kind == constants::PROTECTED_STRING_KIND
    }
}

impl Instance {
    /// Display name: the value of the first `Name` property, or `"Unnamed"`
    /// when the entry or its text is absent.
    pub fn display_name(&self) -> &str {
        self.properties
            .iter()
            .find(|p| p.name.as_deref() == Some(constants::NAME_PROPERTY))
            .and_then(|p| p.value.as_deref())
            .unwrap_or(constants::FALLBACK_NAME)
    }

    /// The first `ProtectedString` property named `Source`, if any.
    pub fn source_property(&self) -> Option<&Property> {
        self.properties.iter().find(|p| {
            p.is_protected_string() && p.name.as_deref() == Some(constants::SOURCE_PROPERTY)
        })
    }

    /// Ordered name → value mapping over the property entries.
    ///
    /// Entries keep document order; a duplicate name overwrites the earlier
    /// value in place (last occurrence wins). Entries without a `name`
    /// attribute are skipped. Absent values are preserved, not dropped.
    pub fn property_map(&self) -> Vec<(&str, Option<&str>)> {
        let mut map: Vec<(&str, Option<&str>)> = Vec::with_capacity(self.properties.len());
        for prop in &self.properties {
            let Some(name) = prop.name.as_deref() else {
                continue;
            };
            match map.iter_mut().find(|(key, _)| *key == name) {
                Some(slot) => slot.1 = prop.value.as_deref(),
                None => map.push((name, prop.value.as_deref())),
            }
        }
        map
    }
}
