pub mod constants;
pub mod keys;
pub mod layout;
pub mod render;

/// Which form control receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Tone,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::Email => Focus::Tone,
            Focus::Tone => Focus::Email,
        }
    }
}
