//! Class registry mapping platform identifiers to handler constructors.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::HandlerCtor;
use super::vendors;
use crate::error::DispatchError;

/// Transport suffix derived for every base entry.
const SSH_SUFFIX: &str = "_ssh";

/// Process-wide registry of the built-in platforms.
static REGISTRY: Lazy<Arc<PlatformRegistry>> =
    Lazy::new(|| Arc::new(PlatformRegistry::builtin()));

/// Immutable mapping from platform identifier to handler constructor.
///
/// Built once from a base mapping: every base entry is kept as declared, a
/// transport-suffixed variant is derived for each, and manually declared
/// transport-only aliases are added last. Derived keys never displace an
/// explicitly declared entry, so every key resolves to exactly one
/// constructor.
#[derive(Clone)]
pub struct PlatformRegistry {
    entries: HashMap<String, HandlerCtor>,
    base: Vec<String>,
}

impl PlatformRegistry {
    /// Derive a registry from a base mapping plus manual aliases.
    pub fn derive(base: &[(&str, HandlerCtor)], aliases: &[(&str, HandlerCtor)]) -> Self {
        let mut entries: HashMap<String, HandlerCtor> = HashMap::new();

        for (key, ctor) in base {
            entries.insert((*key).to_string(), *ctor);
        }
        for (key, ctor) in base {
            entries
                .entry(format!("{key}{SSH_SUFFIX}"))
                .or_insert(*ctor);
        }
        for (key, ctor) in aliases {
            entries.entry((*key).to_string()).or_insert(*ctor);
        }

        let mut base_keys: Vec<String> =
            base.iter().map(|(key, _)| (*key).to_string()).collect();
        base_keys.sort();

        Self {
            entries,
            base: base_keys,
        }
    }

    /// Registry of the built-in vendor handlers.
    pub fn builtin() -> Self {
        let registry = Self::derive(
            &[
                ("cisco_ios", vendors::cisco_ios::handler as HandlerCtor),
                ("cisco_nxos", vendors::cisco_nxos::handler as HandlerCtor),
            ],
            // Telnet is only wired up for the IOS family
            &[("cisco_ios_telnet", vendors::cisco_ios::handler as HandlerCtor)],
        );
        log::debug!("registered {} built-in platforms", registry.entries.len());
        registry
    }

    /// Shared handle to the process-wide built-in registry.
    pub fn global() -> Arc<PlatformRegistry> {
        Arc::clone(&REGISTRY)
    }

    /// Look up a constructor, `None` if the key is not registered.
    pub fn get(&self, name: &str) -> Option<HandlerCtor> {
        self.entries.get(name).copied()
    }

    /// Look up a constructor, failing with
    /// [`DispatchError::UnknownPlatform`] if the key is absent.
    pub fn lookup(&self, name: &str) -> Result<HandlerCtor, DispatchError> {
        self.get(name).ok_or_else(|| DispatchError::UnknownPlatform {
            name: name.to_string(),
        })
    }

    /// Check whether a platform identifier is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered identifiers, sorted.
    pub fn known_platforms(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted, newline-joined base identifiers for diagnostics and help
    /// output.
    pub fn base_listing(&self) -> String {
        self.base.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;
    use regex::bytes::Regex;

    use super::*;
    use crate::platform::DeviceHandler;
    use crate::session::ConnectionParameters;

    static TEST_PROMPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$]\s*$").unwrap());

    #[derive(Debug)]
    struct TagHandler {
        tag: &'static str,
        params: ConnectionParameters,
    }

    impl DeviceHandler for TagHandler {
        fn platform(&self) -> &str {
            self.tag
        }

        fn host(&self) -> &str {
            &self.params.host
        }

        fn params(&self) -> &ConnectionParameters {
            &self.params
        }

        fn prompt_pattern(&self) -> &Regex {
            &TEST_PROMPT
        }
    }

    fn handler_a(params: ConnectionParameters) -> Box<dyn DeviceHandler> {
        Box::new(TagHandler { tag: "A", params })
    }

    fn handler_b(params: ConnectionParameters) -> Box<dyn DeviceHandler> {
        Box::new(TagHandler { tag: "B", params })
    }

    /// Construct through the registry and report which handler was built.
    fn tag_of(registry: &PlatformRegistry, key: &str) -> String {
        let ctor = registry.lookup(key).unwrap();
        ctor(ConnectionParameters::new("host")).platform().to_string()
    }

    #[test]
    fn test_derivation_adds_ssh_variants() {
        let registry = PlatformRegistry::derive(
            &[
                ("alpha", handler_a as HandlerCtor),
                ("beta", handler_b as HandlerCtor),
            ],
            &[],
        );

        assert_eq!(
            registry.known_platforms(),
            ["alpha", "alpha_ssh", "beta", "beta_ssh"]
        );
        assert_eq!(tag_of(&registry, "alpha"), "A");
        assert_eq!(tag_of(&registry, "alpha_ssh"), "A");
        assert_eq!(tag_of(&registry, "beta_ssh"), "B");
    }

    #[test]
    fn test_manual_alias_included() {
        let registry = PlatformRegistry::derive(
            &[("alpha", handler_a as HandlerCtor)],
            &[("beta_telnet", handler_b as HandlerCtor)],
        );

        assert!(registry.contains("beta_telnet"));
        assert_eq!(tag_of(&registry, "beta_telnet"), "B");
    }

    #[test]
    fn test_derivation_never_overwrites_explicit_entry() {
        let registry = PlatformRegistry::derive(
            &[
                ("alpha", handler_a as HandlerCtor),
                ("alpha_ssh", handler_b as HandlerCtor),
            ],
            &[],
        );

        // The explicitly declared alpha_ssh wins over the derived variant
        assert_eq!(tag_of(&registry, "alpha_ssh"), "B");
        assert_eq!(tag_of(&registry, "alpha"), "A");
    }

    #[test]
    fn test_alias_never_overwrites_base_entry() {
        let registry = PlatformRegistry::derive(
            &[("alpha", handler_a as HandlerCtor)],
            &[("alpha", handler_b as HandlerCtor)],
        );

        assert_eq!(tag_of(&registry, "alpha"), "A");
    }

    #[test]
    fn test_lookup_unknown_platform() {
        let registry = PlatformRegistry::derive(&[("alpha", handler_a as HandlerCtor)], &[]);

        assert!(registry.get("gamma").is_none());
        assert!(matches!(
            registry.lookup("gamma"),
            Err(DispatchError::UnknownPlatform { name }) if name == "gamma"
        ));
    }

    #[test]
    fn test_base_listing_is_sorted() {
        let registry = PlatformRegistry::derive(
            &[
                ("zeta", handler_a as HandlerCtor),
                ("alpha", handler_b as HandlerCtor),
            ],
            &[],
        );

        assert_eq!(registry.base_listing(), "alpha\nzeta");
    }

    #[test]
    fn test_builtin_registry() {
        let registry = PlatformRegistry::global();

        for key in [
            "cisco_ios",
            "cisco_ios_ssh",
            "cisco_ios_telnet",
            "cisco_nxos",
            "cisco_nxos_ssh",
        ] {
            assert!(registry.contains(key), "missing {key}");
        }
        assert!(!registry.contains("cisco_nxos_telnet"));
        assert_eq!(registry.base_listing(), "cisco_ios\ncisco_nxos");
    }
}
