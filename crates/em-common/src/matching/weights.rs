/// Weights combining the four sub-scores into the final 0-100 match score.
/// Skills dominate; preferences act as a light adjustment on top.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.40,
    education: 0.20,
    experience: 0.25,
    preferences: 0.15,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub education: f64,
    pub experience: f64,
    pub preferences: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.education + self.experience + self.preferences
    }
}
