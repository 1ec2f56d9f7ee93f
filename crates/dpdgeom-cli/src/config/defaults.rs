pub struct DefaultsConfig {
    pub periodic: [bool; 3],
    pub normalize: bool,
    pub species_name: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            periodic: [true, true, true],
            normalize: false,
            species_name: "P".to_string(),
        }
    }
}
