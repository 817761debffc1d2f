use clap::ValueEnum;
use serde::Serialize;

/// Buffer ("tampon") choices offered by the form. The store keeps the
/// label as free text, so records written by other tools may carry
/// labels outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum BufferType {
    #[default]
    Sabit,
    Hareketli,
}

impl BufferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BufferType::Sabit => "Sabit",
            BufferType::Hareketli => "Hareketli",
        }
    }

    /// Case-insensitive lookup of a label.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sabit" => Some(BufferType::Sabit),
            "hareketli" => Some(BufferType::Hareketli),
            _ => None,
        }
    }

    /// Next choice in the selector, wrapping around.
    pub fn next(self) -> Self {
        match self {
            BufferType::Sabit => BufferType::Hareketli,
            BufferType::Hareketli => BufferType::Sabit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(BufferType::from_label("HAREKETLI"), Some(BufferType::Hareketli));
        assert_eq!(BufferType::from_label(" sabit "), Some(BufferType::Sabit));
        assert_eq!(BufferType::from_label("yay"), None);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(BufferType::Sabit.next().next(), BufferType::Sabit);
    }
}
