//! Entity-or-attribute value reads
//!
//! An id containing the namespace separator (`sensor.washer`) addresses the
//! registry and yields that entity's state. A bare id (`remaining`) addresses
//! an attribute of the snapshot the feature is bound to.

use crate::data::{EntitySnapshot, Registry, Scalar};

pub const NAMESPACE_SEPARATOR: char = '.';

/// Read a value by id; `None` when the entity or attribute is absent
pub fn read_entity_or_attribute<'a>(
    id: &str,
    registry: &'a Registry,
    current: &'a EntitySnapshot,
) -> Option<&'a Scalar> {
    if id.contains(NAMESPACE_SEPARATOR) {
        registry.get(id).and_then(EntitySnapshot::state)
    } else {
        current.attribute(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Registry, EntitySnapshot) {
        let registry = Registry::new()
            .with_entity("sensor.washer", EntitySnapshot::new("42"))
            .with_entity("sensor.remaining", EntitySnapshot::new("00:10:00"));
        let current = EntitySnapshot::new("running")
            .with_attribute("progress", 64.0)
            .with_attribute("sensor", "not an entity id");
        (registry, current)
    }

    #[test]
    fn test_reads_registry_state_for_namespaced_ids() {
        let (registry, current) = fixtures();
        assert_eq!(
            read_entity_or_attribute("sensor.washer", &registry, &current),
            Some(&Scalar::from("42"))
        );
        assert_eq!(
            read_entity_or_attribute("sensor.missing", &registry, &current),
            None
        );
    }

    #[test]
    fn test_reads_attributes_for_bare_ids() {
        let (registry, current) = fixtures();
        assert_eq!(
            read_entity_or_attribute("progress", &registry, &current),
            Some(&Scalar::Number(64.0))
        );
        assert_eq!(
            read_entity_or_attribute("sensor", &registry, &current),
            Some(&Scalar::from("not an entity id"))
        );
        assert_eq!(read_entity_or_attribute("missing", &registry, &current), None);
    }
}
