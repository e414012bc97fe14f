use std::fmt;

/// Phrasing hint forwarded to the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Unspecified,
    Professional,
    Friendly,
    Casual,
    Witty,
}

impl Tone {
    /// Selector order.
    pub const ALL: [Tone; 5] = [
        Tone::Unspecified,
        Tone::Professional,
        Tone::Friendly,
        Tone::Casual,
        Tone::Witty,
    ];

    /// Value sent on the wire; empty when unspecified.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Unspecified => "",
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Witty => "witty",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Unspecified => "None",
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Casual => "Casual",
            Tone::Witty => "Witty",
        }
    }

    pub fn next(self) -> Tone {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Tone {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|tone| *tone == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
