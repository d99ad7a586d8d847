use serde::{Deserialize, Serialize};

/// One of the 40 inventive principles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principle {
    pub number: u32,
    pub name: String,
    pub description: String,
}

/// One of the 39 engineering parameters. `synonyms` drive the keyword match;
/// the two principle-number lists are expanded in their stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub synonyms: Vec<String>,
    pub always_consider_principles: Vec<u32>,
    pub averaged_principles: Vec<u32>,
}

/// The static reference dataset. Loaded once at startup, read-only for the
/// process lifetime, shared by reference. Parameter order is load-bearing:
/// the first entry is the fallback when no synonym matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrizData {
    pub parameters: Vec<Parameter>,
    pub inventive_principles: Vec<Principle>,
}

impl TrizData {
    /// Exact-match lookup by principle number.
    pub fn principle(&self, number: u32) -> Option<&Principle> {
        self.inventive_principles.iter().find(|p| p.number == number)
    }
}
