/// Page sections reachable from the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Introduction,
    Architecture,
    Results,
    Citation,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Introduction,
        Section::Architecture,
        Section::Results,
        Section::Citation,
    ];

    /// Element id of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::Architecture => "architecture",
            Section::Results => "results",
            Section::Citation => "citation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::Architecture => "Architecture",
            Section::Results => "Results",
            Section::Citation => "Citation",
        }
    }

    pub fn nav_test_id(self) -> String {
        format!("nav-{}", self.anchor())
    }
}
