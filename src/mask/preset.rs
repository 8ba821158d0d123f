//! Built-in mask presets.
//!
//! Common formats that can be selected by name instead of spelling out the
//! pattern. All presets use `#` as the placeholder.

use super::compiled::DEFAULT_PLACEHOLDER;
use super::engine::MaskEngine;

/// A named, built-in mask pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPreset {
    /// North American phone number
    Phone,
    /// Day/month/year
    Date,
    /// Hours and minutes
    Time,
    /// Brazilian individual taxpayer id
    Cpf,
    /// Brazilian company taxpayer id
    Cnpj,
    /// Brazilian postal code
    Cep,
    /// US ZIP+4
    Zip,
    /// 16-digit card number in groups of four
    CreditCard,
}

impl MaskPreset {
    /// Get the mask pattern for this preset
    pub fn pattern(&self) -> &'static str {
        match self {
            MaskPreset::Phone => "(###) ###-####",
            MaskPreset::Date => "##/##/####",
            MaskPreset::Time => "##:##",
            MaskPreset::Cpf => "###.###.###-##",
            MaskPreset::Cnpj => "##.###.###/####-##",
            MaskPreset::Cep => "#####-###",
            MaskPreset::Zip => "#####-####",
            MaskPreset::CreditCard => "#### #### #### ####",
        }
    }

    /// Name used in configuration and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            MaskPreset::Phone => "phone",
            MaskPreset::Date => "date",
            MaskPreset::Time => "time",
            MaskPreset::Cpf => "cpf",
            MaskPreset::Cnpj => "cnpj",
            MaskPreset::Cep => "cep",
            MaskPreset::Zip => "zip",
            MaskPreset::CreditCard => "credit-card",
        }
    }

    /// Look up a preset by name (case-insensitive, `_` accepted for `-`)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::all().iter().copied().find(|p| p.name() == name)
    }

    pub fn all() -> &'static [MaskPreset] {
        &[
            MaskPreset::Phone,
            MaskPreset::Date,
            MaskPreset::Time,
            MaskPreset::Cpf,
            MaskPreset::Cnpj,
            MaskPreset::Cep,
            MaskPreset::Zip,
            MaskPreset::CreditCard,
        ]
    }

    /// Build an engine for this preset
    pub fn engine(&self) -> MaskEngine {
        MaskEngine::new(self.pattern(), DEFAULT_PLACEHOLDER)
    }
}
