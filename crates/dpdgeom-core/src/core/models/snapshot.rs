use nalgebra::Point3;

/// Positions of all particles of one species at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Species {
    pub name: String,
    pub positions: Vec<Point3<f64>>,
}

impl Species {
    pub fn new(name: impl Into<String>, positions: Vec<Point3<f64>>) -> Self {
        Self {
            name: name.into(),
            positions,
        }
    }
}

/// A particle snapshot grouped by species.
///
/// Species keep the order in which they were first seen; that order defines the species index
/// used by the multi-species engines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    species: Vec<Species>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_species(species: Vec<Species>) -> Self {
        let mut snapshot = Self::new();
        for s in species {
            snapshot.extend_species(&s.name, s.positions);
        }
        snapshot
    }

    pub fn add_position(&mut self, species: &str, position: Point3<f64>) {
        self.species_mut(species).positions.push(position);
    }

    pub fn extend_species(&mut self, species: &str, positions: Vec<Point3<f64>>) {
        self.species_mut(species).positions.extend(positions);
    }

    fn species_mut(&mut self, name: &str) -> &mut Species {
        let index = match self.species_index(name) {
            Some(index) => index,
            None => {
                self.species.push(Species::new(name, Vec::new()));
                self.species.len() - 1
            }
        };
        &mut self.species[index]
    }

    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name == name)
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn get(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }

    pub fn species_names(&self) -> Vec<&str> {
        self.species.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn positions_by_species(&self) -> Vec<&[Point3<f64>]> {
        self.species.iter().map(|s| s.positions.as_slice()).collect()
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn particle_count(&self) -> usize {
        self.species.iter().map(|s| s.positions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.particle_count() == 0
    }
}
