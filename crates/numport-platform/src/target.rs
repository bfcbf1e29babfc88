//! Named target profiles.
//!
//! A target profile describes the integer data model of a platform other
//! than the host, so code can reason about how its lengths and natural words
//! would be sized there. Widths go through the same checks as the host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::profile::PlatformProfile;

/// Byte ordering of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte ordering of the platform this crate is compiled for.
    pub const HOST: Self = if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    };
}

/// A well-known C data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataModel {
    /// 32-bit `int`, `long` and pointers.
    Ilp32,
    /// 64-bit `long` and pointers (Unix-like 64-bit).
    Lp64,
    /// 32-bit `long`, 64-bit pointers (64-bit Windows).
    Llp64,
}

impl DataModel {
    /// Every known data model.
    pub const ALL: [DataModel; 3] = [DataModel::Ilp32, DataModel::Lp64, DataModel::Llp64];

    /// The integer widths this data model prescribes.
    pub const fn profile(self) -> PlatformProfile {
        match self {
            DataModel::Ilp32 => PlatformProfile {
                long_width: 4,
                address_width: 4,
                size_width: 4,
            },
            DataModel::Lp64 => PlatformProfile {
                long_width: 8,
                address_width: 8,
                size_width: 8,
            },
            DataModel::Llp64 => PlatformProfile {
                long_width: 4,
                address_width: 8,
                size_width: 8,
            },
        }
    }

    /// Find the data model matching a profile, if it is a known one.
    pub fn classify(profile: &PlatformProfile) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.profile() == *profile)
    }

    /// Conventional upper-case name (e.g., "LP64").
    pub fn name(self) -> &'static str {
        match self {
            DataModel::Ilp32 => "ILP32",
            DataModel::Lp64 => "LP64",
            DataModel::Llp64 => "LLP64",
        }
    }
}

impl fmt::Display for DataModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataModel {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ilp32" => Ok(DataModel::Ilp32),
            "lp64" => Ok(DataModel::Lp64),
            "llp64" => Ok(DataModel::Llp64),
            _ => Err(PlatformError::UnknownDataModel { name: s.into() }),
        }
    }
}

/// A named description of a platform's integer widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetProfile {
    /// Target name (e.g., "linux-x86_64").
    pub name: String,
    /// Short human-readable description.
    #[serde(default)]
    pub description: String,
    /// Declared data model; absent for custom width combinations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_model: Option<DataModel>,
    /// Byte ordering.
    pub endianness: Endianness,
    /// Integer widths in bytes.
    pub widths: PlatformProfile,
}

impl TargetProfile {
    /// Build a target from a known data model.
    pub fn from_model(
        name: impl Into<String>,
        description: impl Into<String>,
        model: DataModel,
        endianness: Endianness,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            data_model: Some(model),
            endianness,
            widths: model.profile(),
        }
    }

    /// The platform this crate is compiled for.
    pub fn host() -> Self {
        Self {
            name: "host".into(),
            description: "Platform numport was compiled for".into(),
            data_model: DataModel::classify(&PlatformProfile::HOST),
            endianness: Endianness::HOST,
            widths: PlatformProfile::HOST,
        }
    }

    /// Width of the natural machine word in bits.
    pub fn natural_bits(&self) -> u32 {
        self.widths.natural_bits()
    }

    /// Generic Linux on x86-64.
    pub fn generic_linux_x86_64() -> Self {
        Self::from_model(
            "linux-x86_64",
            "Generic Linux x86-64 (LP64)",
            DataModel::Lp64,
            Endianness::Little,
        )
    }

    /// Generic Linux on AArch64.
    pub fn generic_linux_aarch64() -> Self {
        Self::from_model(
            "linux-aarch64",
            "Generic Linux AArch64 (LP64)",
            DataModel::Lp64,
            Endianness::Little,
        )
    }

    /// 64-bit Windows on x86-64.
    pub fn windows_x86_64() -> Self {
        Self::from_model(
            "windows-x86_64",
            "Windows x86-64 (LLP64, 32-bit long)",
            DataModel::Llp64,
            Endianness::Little,
        )
    }

    /// 32-bit Linux on i686.
    pub fn linux_i686() -> Self {
        Self::from_model(
            "linux-i686",
            "Linux i686 (ILP32)",
            DataModel::Ilp32,
            Endianness::Little,
        )
    }

    /// Bare-metal ARMv7-M (Cortex-M class).
    pub fn armv7m_bare() -> Self {
        Self::from_model(
            "armv7m-bare",
            "Bare-metal ARMv7-M (ILP32)",
            DataModel::Ilp32,
            Endianness::Little,
        )
    }
}

/// All built-in target profiles.
pub fn builtin_targets() -> Vec<TargetProfile> {
    vec![
        TargetProfile::generic_linux_x86_64(),
        TargetProfile::generic_linux_aarch64(),
        TargetProfile::windows_x86_64(),
        TargetProfile::linux_i686(),
        TargetProfile::armv7m_bare(),
    ]
}

/// Look up a built-in target profile by name.
pub fn builtin_target(name: &str) -> Option<TargetProfile> {
    builtin_targets().into_iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_model_widths() {
        assert_eq!(DataModel::Lp64.profile().natural_bits(), 64);
        assert_eq!(DataModel::Llp64.profile().long_bits(), 32);
        assert_eq!(DataModel::Llp64.profile().natural_bits(), 64);
        assert_eq!(DataModel::Ilp32.profile().natural_bits(), 32);
    }

    #[test]
    fn data_model_profiles_pass_checks() {
        for model in DataModel::ALL {
            assert!(model.profile().check().is_ok(), "{model}");
        }
    }

    #[test]
    fn classify_round_trips() {
        for model in DataModel::ALL {
            assert_eq!(DataModel::classify(&model.profile()), Some(model));
        }
        let custom = PlatformProfile::from_widths(8, 4, 4).unwrap();
        assert_eq!(DataModel::classify(&custom), None);
    }

    #[test]
    fn parse_data_model_names() {
        assert_eq!("lp64".parse::<DataModel>().unwrap(), DataModel::Lp64);
        assert_eq!("LLP64".parse::<DataModel>().unwrap(), DataModel::Llp64);
        assert_eq!("Ilp32".parse::<DataModel>().unwrap(), DataModel::Ilp32);
        assert!(matches!(
            "lp32".parse::<DataModel>(),
            Err(PlatformError::UnknownDataModel { .. })
        ));
    }

    #[test]
    fn host_target() {
        let host = TargetProfile::host();
        assert_eq!(host.widths, PlatformProfile::HOST);
        assert_eq!(host.endianness, Endianness::HOST);
        assert!(matches!(host.natural_bits(), 32 | 64));
    }

    #[test]
    fn builtins_have_unique_names() {
        let targets = builtin_targets();
        for (i, a) in targets.iter().enumerate() {
            for b in &targets[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn builtin_lookup() {
        let windows = builtin_target("windows-x86_64").unwrap();
        assert_eq!(windows.data_model, Some(DataModel::Llp64));
        assert_eq!(windows.widths.long_width, 4);
        assert!(builtin_target("nonexistent").is_none());
    }

    #[test]
    fn every_builtin_has_a_32_or_64_bit_natural_word() {
        for target in builtin_targets() {
            assert!(matches!(target.natural_bits(), 32 | 64), "{}", target.name);
        }
    }
}
