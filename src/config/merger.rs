//! Layering of `config.yml` and `config.local.yml`.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences and scalars in the overlay replace the base
//! - A null in the overlay removes the key from the base

use serde_yaml::Value;

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();

            for (key, value) in overlay_map {
                if value.is_null() {
                    merged.remove(key);
                    continue;
                }
                let next = match base_map.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }

            Value::Mapping(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Fold layers in order; later layers win.
pub fn merge_configs(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn local_host_overrides_only_given_fields() {
        let base = yaml("host:\n  address: bio-1\n  user: ubuntu\n");
        let local = yaml("host:\n  address: bio-2\n");
        let merged = deep_merge(&base, &local);
        assert_eq!(merged, yaml("host:\n  address: bio-2\n  user: ubuntu\n"));
    }

    #[test]
    fn sequences_are_replaced() {
        let base = yaml("args: [--a, --b]");
        let local = yaml("args: [--c]");
        assert_eq!(deep_merge(&base, &local), yaml("args: [--c]"));
    }

    #[test]
    fn null_removes_key() {
        let base = yaml("host:\n  address: bio-1\nuse_sudo: false\n");
        let local = yaml("host: ~\n");
        assert_eq!(deep_merge(&base, &local), yaml("use_sudo: false\n"));
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let merged = merge_configs(&[yaml("use_sudo: true"), yaml("use_sudo: false")]);
        assert_eq!(merged, yaml("use_sudo: false"));
    }

    #[test]
    fn merge_of_nothing_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
