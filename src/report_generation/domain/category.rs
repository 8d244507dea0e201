/// Classification bucket assigned to a package name for report grouping.
///
/// The variant order is the presentation order of the report sections and
/// doubles as the rule priority order, so `Ord` derives from declaration
/// order on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Python,
    Perl,
    DevelopmentTools,
    Bluetooth,
    Audio,
    Storage,
    Desktop,
    Kde,
    GuiLibs,
    Security,
    Java,
    Vr,
    Filesystem,
    System,
    SystemInfo,
    Archive,
    Other,
}

impl Category {
    /// Canonical upper-case label as it appears in section headers
    /// (underscores separating words).
    pub fn label(&self) -> &'static str {
        match self {
            Category::Python => "PYTHON",
            Category::Perl => "PERL",
            Category::DevelopmentTools => "DEVELOPMENT_TOOLS",
            Category::Bluetooth => "BLUETOOTH",
            Category::Audio => "AUDIO",
            Category::Storage => "STORAGE",
            Category::Desktop => "DESKTOP",
            Category::Kde => "KDE",
            Category::GuiLibs => "GUI_LIBS",
            Category::Security => "SECURITY",
            Category::Java => "JAVA",
            Category::Vr => "VR",
            Category::Filesystem => "FILESYSTEM",
            Category::System => "SYSTEM",
            Category::SystemInfo => "SYSTEM_INFO",
            Category::Archive => "ARCHIVE",
            Category::Other => "OTHER",
        }
    }

    /// Human-readable section title (underscores replaced by spaces).
    pub fn display_name(&self) -> String {
        self.label().replace('_', " ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single classification predicate.
///
/// `ContainsAny` matches case-insensitively against the lowercased name;
/// `ExactAny` matches the raw name verbatim (used for short tool names like
/// "git" where substring matching would misfire on e.g. "github-cli").
#[derive(Debug)]
enum Matcher {
    ContainsAny(&'static [&'static str]),
    ExactAny(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, raw: &str, lowered: &str) -> bool {
        match self {
            Matcher::ContainsAny(needles) => needles.iter().any(|n| lowered.contains(n)),
            Matcher::ExactAny(names) => names.iter().any(|n| *n == raw),
        }
    }
}

/// Ordered classification rule table. First match wins.
///
/// The order is a contract: package names may satisfy several rules (a name
/// containing both "python" and "kde" must classify as PYTHON), so this is
/// deliberately a flat slice evaluated in sequence and never a keyword-keyed
/// map that could reorder rules.
const RULES: &[(Matcher, Category)] = &[
    (Matcher::ContainsAny(&["python"]), Category::Python),
    (Matcher::ContainsAny(&["perl"]), Category::Perl),
    (
        Matcher::ExactAny(&["git", "openssh", "rsync", "sudo", "which", "diffutils"]),
        Category::DevelopmentTools,
    ),
    (Matcher::ContainsAny(&["bluez"]), Category::Bluetooth),
    (Matcher::ContainsAny(&["pipewire", "alsa"]), Category::Audio),
    (
        Matcher::ContainsAny(&["device-mapper", "cryptsetup"]),
        Category::Storage,
    ),
    (Matcher::ContainsAny(&["xdg", "desktop"]), Category::Desktop),
    (
        Matcher::ContainsAny(&["kde", "kio", "plasma"]),
        Category::Kde,
    ),
    (Matcher::ContainsAny(&["gtk", "qt"]), Category::GuiLibs),
    (Matcher::ContainsAny(&["gnome-keyring"]), Category::Security),
    (Matcher::ContainsAny(&["jdk", "java"]), Category::Java),
    (Matcher::ContainsAny(&["openxr"]), Category::Vr),
    (
        Matcher::ContainsAny(&["e2fsprogs", "dosfstools", "mtools"]),
        Category::Filesystem,
    ),
    (Matcher::ContainsAny(&["systemd"]), Category::System),
    (
        Matcher::ContainsAny(&["texinfo", "hwinfo"]),
        Category::SystemInfo,
    ),
    (Matcher::ContainsAny(&["unzip"]), Category::Archive),
];

/// Classifies a package name into exactly one category.
///
/// Total and deterministic: every name maps to a category, with
/// `Category::Other` as the catch-all default.
pub fn categorize(package_name: &str) -> Category {
    let lowered = package_name.to_lowercase();
    RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(package_name, &lowered))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
