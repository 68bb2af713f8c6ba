//! Classification of resolved modules into families.

use skew_core::module::ResolvedModule;

use crate::family::Family;

/// Maps a module's coordinates to a [`Family`].
///
/// Classification is pure and total: modules from a foreign organization, or
/// with a name no family set contains, become [`Family::Unclassified`].
#[derive(Debug, Clone)]
pub struct Classifier {
    organization: String,
    suffix_len: usize,
}

impl Classifier {
    /// A classifier for the given owning organization, stripping
    /// `suffix_len` characters of cross-build marker from module names
    /// before family lookup.
    pub fn new(organization: impl Into<String>, suffix_len: usize) -> Self {
        Self {
            organization: organization.into(),
            suffix_len,
        }
    }

    /// Classify one module.
    ///
    /// The organization must match exactly; an unrelated library reusing a
    /// known module name never classifies into a family.
    pub fn classify(&self, module: &ResolvedModule) -> Family {
        if module.organization != self.organization {
            return Family::Unclassified;
        }
        let base = strip_suffix(&module.name, self.suffix_len);
        for family in Family::CHECK_ORDER {
            if family.members().contains(base) {
                return family;
            }
        }
        Family::Unclassified
    }

    /// Bucket modules into per-family groups, preserving input order within
    /// each group. Unclassified modules are dropped.
    pub fn partition<'a>(&self, modules: &'a [ResolvedModule]) -> FamilyGroups<'a> {
        let mut groups = FamilyGroups::default();
        for module in modules {
            match self.classify(module) {
                Family::Pekko => groups.pekko.push(module),
                Family::PekkoHttp => groups.pekko_http.push(module),
                Family::PekkoConnectors => groups.pekko_connectors.push(module),
                Family::Unclassified => {
                    tracing::debug!(module = %module, "not part of any known family");
                }
            }
        }
        groups
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new("org.apache.pekko", 5)
    }
}

/// Modules bucketed by family, in input order.
#[derive(Debug, Default)]
pub struct FamilyGroups<'a> {
    pub pekko: Vec<&'a ResolvedModule>,
    pub pekko_http: Vec<&'a ResolvedModule>,
    pub pekko_connectors: Vec<&'a ResolvedModule>,
}

impl<'a> FamilyGroups<'a> {
    /// The group for a family, in check order via [`Family::CHECK_ORDER`].
    pub fn group(&self, family: Family) -> &[&'a ResolvedModule] {
        match family {
            Family::Pekko => &self.pekko,
            Family::PekkoHttp => &self.pekko_http,
            Family::PekkoConnectors => &self.pekko_connectors,
            Family::Unclassified => &[],
        }
    }
}

/// Strip a fixed-width cross-build suffix (e.g. `_2.13`) from a module name.
///
/// Names shorter than the suffix width are returned unchanged.
fn strip_suffix(name: &str, suffix_len: usize) -> &str {
    if suffix_len == 0 || name.len() <= suffix_len {
        return name;
    }
    let cut = name.len() - suffix_len;
    if name.is_char_boundary(cut) {
        &name[..cut]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(org: &str, name: &str, version: &str) -> ResolvedModule {
        ResolvedModule {
            organization: org.to_string(),
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn classifies_core_module() {
        let c = Classifier::default();
        let m = module("org.apache.pekko", "pekko-actor_2.13", "1.1.2");
        assert_eq!(c.classify(&m), Family::Pekko);
    }

    #[test]
    fn classifies_http_module() {
        let c = Classifier::default();
        let m = module("org.apache.pekko", "pekko-http-core_2.13", "1.2.0");
        assert_eq!(c.classify(&m), Family::PekkoHttp);
    }

    #[test]
    fn classifies_connectors_module() {
        let c = Classifier::default();
        let m = module("org.apache.pekko", "pekko-connectors-kafka_2.13", "1.1.0");
        assert_eq!(c.classify(&m), Family::PekkoConnectors);
    }

    #[test]
    fn foreign_organization_is_always_unclassified() {
        let c = Classifier::default();
        // Name collides with a known module, organization does not
        let m = module("com.example", "pekko-actor_2.13", "1.1.2");
        assert_eq!(c.classify(&m), Family::Unclassified);
    }

    #[test]
    fn unknown_name_is_unclassified() {
        let c = Classifier::default();
        let m = module("org.apache.pekko", "pekko-nonexistent_2.13", "1.0.0");
        assert_eq!(c.classify(&m), Family::Unclassified);
    }

    #[test]
    fn short_name_survives_stripping() {
        let c = Classifier::default();
        let m = module("org.apache.pekko", "abc", "1.0.0");
        assert_eq!(c.classify(&m), Family::Unclassified);
    }

    #[test]
    fn custom_suffix_width() {
        let c = Classifier::new("org.apache.pekko", 2);
        let m = module("org.apache.pekko", "pekko-actor_3", "1.1.2");
        assert_eq!(c.classify(&m), Family::Pekko);
    }

    #[test]
    fn partition_preserves_input_order() {
        let c = Classifier::default();
        let modules = vec![
            module("org.apache.pekko", "pekko-stream_2.13", "1.1.2"),
            module("org.apache.pekko", "pekko-http_2.13", "1.2.0"),
            module("com.example", "unrelated_2.13", "9.9.9"),
            module("org.apache.pekko", "pekko-actor_2.13", "1.1.2"),
        ];
        let groups = c.partition(&modules);
        assert_eq!(groups.pekko.len(), 2);
        assert_eq!(groups.pekko[0].name, "pekko-stream_2.13");
        assert_eq!(groups.pekko[1].name, "pekko-actor_2.13");
        assert_eq!(groups.pekko_http.len(), 1);
        assert!(groups.pekko_connectors.is_empty());
    }
}
