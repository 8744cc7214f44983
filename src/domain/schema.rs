use std::fmt;

/// Kind of LOBSTER interchange document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Requirement,
    Implementation,
    Activity,
}

impl Schema {
    /// Value of the `schema` field in the written document.
    pub fn name(self) -> &'static str {
        match self {
            Schema::Requirement => "lobster-req-trace",
            Schema::Implementation => "lobster-imp-trace",
            Schema::Activity => "lobster-act-trace",
        }
    }

    /// Value of the `version` field in the written document.
    pub fn version(self) -> u32 {
        match self {
            Schema::Requirement => 4,
            Schema::Implementation | Schema::Activity => 3,
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
