//! Executable architecture codes and their display classification.

/// Raw `NSBundleExecutableArchitecture*` values, as reported by
/// `NSRunningApplication.executableArchitecture`.
pub mod codes {
    pub const I386: i64 = 0x0000_0007;
    pub const PPC: i64 = 0x0000_0012;
    pub const X86_64: i64 = 0x0100_0007;
    pub const ARM64: i64 = 0x0100_000c;
    pub const PPC64: i64 = 0x0100_0012;
}

/// Opacity of the status indicator while an Apple Silicon app is frontmost.
pub const APPLE_SILICON_OPACITY: f64 = 0.25;
/// Opacity of the status indicator for every other case.
pub const FULL_OPACITY: f64 = 1.0;

/// The CPU instruction set a running executable was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    Arm64,
    I386,
    X86_64,
    Ppc,
    Ppc64,
    /// A code that matches none of the known values.
    Unknown(i64),
}

/// Which of the two indicator assets is shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// `processor-icon`
    Filled,
    /// `processor-icon-empty`
    Empty,
}

impl Indicator {
    pub const FILLED_ASSET: &'static str = "processor-icon";
    pub const EMPTY_ASSET: &'static str = "processor-icon-empty";

    /// The bundled asset shown for this indicator.
    pub fn asset_name(self) -> &'static str {
        match self {
            Indicator::Filled => Self::FILLED_ASSET,
            Indicator::Empty => Self::EMPTY_ASSET,
        }
    }
}

/// Display properties derived from an [`Architecture`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: &'static str,
    pub indicator: Indicator,
    pub opacity: f64,
}

const fn dimmed(label: &'static str) -> Classification {
    Classification {
        label,
        indicator: Indicator::Filled,
        opacity: APPLE_SILICON_OPACITY,
    }
}

const fn highlighted(label: &'static str) -> Classification {
    Classification {
        label,
        indicator: Indicator::Empty,
        opacity: FULL_OPACITY,
    }
}

/// Every recognised architecture code. Anything else classifies as [`UNKNOWN`].
const TABLE: [(i64, Architecture, Classification); 5] = [
    (codes::ARM64, Architecture::Arm64, dimmed("arm64 • Apple Silicon")),
    (codes::I386, Architecture::I386, highlighted("x86 • Intel 32-bit")),
    (codes::X86_64, Architecture::X86_64, highlighted("x86-64 • Intel 64-bit")),
    (codes::PPC, Architecture::Ppc, highlighted("ppc32 • PowerPC 32-bit")),
    (codes::PPC64, Architecture::Ppc64, highlighted("ppc64 • PowerPC 64-bit")),
];

/// Classification of codes missing from [`TABLE`].
pub const UNKNOWN: Classification = highlighted("Unknown • Unknown");

impl Architecture {
    /// Maps a raw architecture code using an exact match.
    pub fn from_code(code: i64) -> Self {
        TABLE
            .iter()
            .find(|(known, _, _)| *known == code)
            .map(|(_, architecture, _)| *architecture)
            .unwrap_or(Architecture::Unknown(code))
    }

    pub fn classification(self) -> Classification {
        TABLE
            .iter()
            .find(|(_, architecture, _)| *architecture == self)
            .map(|(_, _, classification)| *classification)
            .unwrap_or(UNKNOWN)
    }
}
