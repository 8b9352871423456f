use crate::attributes::DerivedAttributes;
use crate::bodies::{BodyRecord, ORIGIN, PRESETS};
use crate::constants::SOLAR_MASS;
use crate::curve::MotionCurve;
use crate::elements::OrbitalElements;
use crate::error::{OrbitError, Result};
use crate::sampler::TimeSampler;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name-keyed collection of bodies. Parents are referenced by name and
/// resolved here to obtain the mass an orbit is computed against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<BodyRecord>")]
pub struct Catalog(Vec<BodyRecord>);

impl Catalog {
    pub fn new() -> Self {
        Catalog(vec![])
    }

    pub fn presets() -> Self {
        Catalog(PRESETS.clone())
    }

    pub fn with_body(mut self, record: BodyRecord) -> Self {
        self.insert(record);
        self
    }

    /// Adds a record, replacing and returning any record with the same name.
    pub fn insert(&mut self, record: BodyRecord) -> Option<BodyRecord> {
        match self.0.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => {
                tracing::debug!(name = %record.name, "replacing catalog entry");
                Some(std::mem::replace(existing, record))
            }
            None => {
                self.0.push(record);
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<BodyRecord> {
        let idx = self.0.iter().position(|r| r.name == name)?;
        Some(self.0.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<&BodyRecord> {
        self.0.iter().find(|r| r.name == name)
    }

    pub fn lookup(&self, name: &str) -> Result<&BodyRecord> {
        self.get(name)
            .ok_or_else(|| OrbitError::UnknownBody(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyRecord> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn resolve_parent_mass(&self, record: &BodyRecord) -> Result<f64> {
        if record.parent == ORIGIN {
            return Ok(SOLAR_MASS);
        }
        self.get(&record.parent)
            .map(|p| p.mass)
            .ok_or_else(|| OrbitError::UnknownParent {
                name: record.name.clone(),
                parent: record.parent.clone(),
            })
    }

    pub fn elements(&self, name: &str) -> Result<OrbitalElements> {
        let record = self.lookup(name)?;
        let orbit = record
            .orbit
            .ok_or_else(|| OrbitError::NotOrbiting(name.to_string()))?;
        let parent_mass = self.resolve_parent_mass(record)?;
        OrbitalElements::new(&record.name, orbit, record.body(), parent_mass)
    }

    pub fn attributes(&self, name: &str) -> Result<DerivedAttributes> {
        Ok(self.elements(name)?.attributes())
    }

    pub fn curve(&self, name: &str, sampler: &TimeSampler) -> Result<MotionCurve> {
        Ok(sampler.sample(&self.elements(name)?))
    }

    /// Records in construction order: bodies orbiting the origin first, then
    /// bodies with a named parent, each after its parent, then stars.
    pub fn build_order(&self) -> Result<Vec<&BodyRecord>> {
        let mut order: Vec<&BodyRecord> = self
            .0
            .iter()
            .filter(|r| !r.is_star() && r.is_root())
            .collect();

        // stars are placed last but are always valid parents
        let mut placed: HashSet<&str> = order.iter().map(|r| r.name.as_str()).collect();
        placed.extend(self.0.iter().filter(|r| r.is_star()).map(|r| r.name.as_str()));

        let mut stack = vec![];
        for record in self.0.iter().filter(|r| !r.is_star() && !r.is_root()) {
            self.visit(record, &mut placed, &mut stack, &mut order)?;
        }

        order.extend(self.0.iter().filter(|r| r.is_star()));
        Ok(order)
    }

    fn visit<'a>(
        &'a self,
        record: &'a BodyRecord,
        placed: &mut HashSet<&'a str>,
        stack: &mut Vec<&'a str>,
        order: &mut Vec<&'a BodyRecord>,
    ) -> Result<()> {
        if placed.contains(record.name.as_str()) {
            return Ok(());
        }
        if stack.contains(&record.name.as_str()) {
            return Err(OrbitError::ParentCycle(record.name.clone()));
        }
        stack.push(&record.name);

        let parent = self
            .get(&record.parent)
            .ok_or_else(|| OrbitError::UnknownParent {
                name: record.name.clone(),
                parent: record.parent.clone(),
            })?;
        self.visit(parent, placed, stack, order)?;

        stack.pop();
        placed.insert(&record.name);
        order.push(record);
        Ok(())
    }

    /// Elements of every orbiting body in build order. Fails on the first
    /// body that does not validate.
    pub fn build(&self) -> Result<Vec<OrbitalElements>> {
        let mut out = vec![];
        for record in self.build_order()? {
            if record.orbit.is_none() {
                continue;
            }
            let elements = self.elements(&record.name)?;
            tracing::info!(
                name = elements.name(),
                parent = %record.parent,
                period_days = elements.orbital_period_days(),
                "built body"
            );
            out.push(elements);
        }
        Ok(out)
    }
}

impl FromIterator<BodyRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = BodyRecord>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl From<Vec<BodyRecord>> for Catalog {
    fn from(records: Vec<BodyRecord>) -> Self {
        records.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{preset, BodyKind};
    use crate::elements::{Body, Orbit};
    use approx::assert_relative_eq;
    use more_asserts::*;

    fn moon(name: &str, parent: &str) -> BodyRecord {
        BodyRecord::orbiting(
            name,
            BodyKind::NaturalSatellite,
            parent,
            Body::new(7.342e22, 27.321661, 6.687),
            Orbit::new(0.00257, 0.0549, 5.145, 318.15, 125.08),
        )
    }

    fn position(order: &[&BodyRecord], name: &str) -> usize {
        order.iter().position(|r| r.name == name).unwrap()
    }

    #[test]
    fn insert_replaces_by_name() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(preset("Mars").unwrap()).is_none());
        let mut heavy = preset("Mars").unwrap();
        heavy.mass *= 2.0;
        let old = catalog.insert(heavy.clone()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(old, preset("Mars").unwrap());
        assert_eq!(catalog.get("Mars"), Some(&heavy));
        assert_eq!(catalog.remove("Mars"), Some(heavy));
        assert!(catalog.is_empty());
    }

    #[test]
    fn loading_keeps_the_last_record_per_name() {
        let yaml = "
- name: Mars
  kind: Planet
  mass: 6.4185e23
  rotation_period: 1.025957
- name: Phobos
  kind: Natural Satellite
  parent: Mars
  mass: 1.06e16
- name: Mars
  kind: Planet
  mass: 6.5e23
  rotation_period: 1.025957
";
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Mars").unwrap().mass, 6.5e23);
        assert_eq!(catalog.iter().filter(|r| r.name == "Mars").count(), 1);

        let order = catalog.build_order().unwrap();
        assert_eq!(order.len(), 2);
        assert_lt!(position(&order, "Mars"), position(&order, "Phobos"));
    }

    #[test]
    fn parent_mass_resolution() {
        let catalog = Catalog::presets().with_body(moon("Moon", "Earth"));
        let earth = catalog.get("Earth").unwrap();
        assert_eq!(catalog.resolve_parent_mass(earth).unwrap(), SOLAR_MASS);
        let m = catalog.get("Moon").unwrap();
        assert_eq!(catalog.resolve_parent_mass(m).unwrap(), earth.mass);

        let orphan = moon("Charon", "Pluto II");
        assert!(matches!(
            catalog.resolve_parent_mass(&orphan),
            Err(OrbitError::UnknownParent { name, parent }) if name == "Charon" && parent == "Pluto II"
        ));
    }

    #[test]
    fn moon_elements_use_planet_mass() {
        let catalog = Catalog::presets().with_body(moon("Moon", "Earth"));
        let m = catalog.elements("Moon").unwrap();
        assert_eq!(m.parent_mass(), catalog.get("Earth").unwrap().mass);
        // lunar sidereal month, give or take the moon's own mass
        assert_gt!(m.orbital_period_days(), 26.5);
        assert_lt!(m.orbital_period_days(), 28.5);
    }

    #[test]
    fn lookup_errors() {
        let catalog = Catalog::presets();
        assert!(matches!(catalog.elements("Vulcan"), Err(OrbitError::UnknownBody(_))));
        assert!(matches!(catalog.elements("Sun"), Err(OrbitError::NotOrbiting(_))));
    }

    #[test]
    fn build_order_puts_parents_first_and_stars_last() {
        // children listed before their parents on purpose
        let catalog: Catalog = vec![
            BodyRecord::star("Sun", SOLAR_MASS),
            moon("Rover", "Moon"),
            moon("Moon", "Earth"),
            preset("Earth").unwrap(),
            moon("Phobos", "Mars"),
            preset("Mars").unwrap(),
        ]
        .into_iter()
        .collect();

        let order = catalog.build_order().unwrap();
        assert_eq!(order.len(), 6);
        let earth = position(&order, "Earth");
        let mars = position(&order, "Mars");
        let m = position(&order, "Moon");
        assert_lt!(earth, 2);
        assert_lt!(mars, 2);
        assert_lt!(earth, m);
        assert_lt!(m, position(&order, "Rover"));
        assert_lt!(mars, position(&order, "Phobos"));
        assert_eq!(order.last().unwrap().name, "Sun");
    }

    #[test]
    fn build_order_rejects_cycles_and_orphans() {
        let looped = Catalog::new()
            .with_body(moon("A", "B"))
            .with_body(moon("B", "A"));
        assert!(matches!(looped.build_order(), Err(OrbitError::ParentCycle(_))));

        let selfish = Catalog::new().with_body(moon("A", "A"));
        assert!(matches!(selfish.build_order(), Err(OrbitError::ParentCycle(n)) if n == "A"));

        let orphan = Catalog::new().with_body(moon("A", "Nowhere"));
        assert!(matches!(orphan.build_order(), Err(OrbitError::UnknownParent { .. })));
    }

    #[test]
    fn build_all_presets() {
        let built = Catalog::presets().build().unwrap();
        assert_eq!(built.len(), PRESETS.len() - 1);
        let earth = built.iter().find(|e| e.name() == "Earth").unwrap();
        assert_relative_eq!(earth.orbital_period_days(), 365.25, max_relative = 1E-3);
        for e in &built {
            let a = e.attributes();
            assert_lt!(a.distance_at_perihelion, a.distance_at_aphelion);
            assert_gt!(a.velocity_at_perihelion, a.velocity_at_aphelion);
        }
    }

    #[test]
    fn invalid_record_surfaces_on_build() {
        let mut bad = preset("Venus").unwrap();
        bad.rotation_period = 0.0;
        let catalog = Catalog::presets().with_body(bad);
        assert!(matches!(
            catalog.build(),
            Err(OrbitError::InvalidOrbit { field: "rotation_period", .. })
        ));
    }
}
