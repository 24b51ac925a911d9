use std::collections::HashSet;

/// Place types that name a specific physical point rather than an area like a city.
pub const POINT_TYPES: [&str; 6] = [
    "street_address",
    "point_of_interest",
    "intersection",
    "premise",
    "subpremise",
    "establishment",
];

#[derive(Debug, Clone)]
pub struct PointTypes(HashSet<&'static str>);

impl PointTypes {
    pub fn new() -> Self {
        PointTypes(POINT_TYPES.into_iter().collect())
    }

    pub fn matches<S: AsRef<str>>(&self, types: &[S]) -> bool {
        types.iter().any(|t| self.0.contains(t.as_ref()))
    }
}

impl Default for PointTypes {
    fn default() -> Self {
        Self::new()
    }
}
