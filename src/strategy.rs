use std::fmt;

use serde::{Serialize, Serializer};

/// The closed set of `AppiumBy` selection strategies this tool understands.
///
/// Every variant carries exactly one value predicate in [`Strategy::accepts`].
/// The exhaustive match there means a newly added variant without a predicate
/// is a compile error rather than a silent acceptance at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Id,
    Xpath,
    AccessibilityId,
    ClassName,
    CssSelector,
    IosPredicate,
    IosClassChain,
    AndroidUiautomator,
    AndroidViewtag,
    AndroidDataMatcher,
    AndroidViewMatcher,
    Image,
    Custom,
    FlutterIntegrationSemanticsLabel,
    FlutterIntegrationType,
    FlutterIntegrationKey,
    FlutterIntegrationText,
    FlutterIntegrationTextContaining,
}

impl Strategy {
    pub const ALL: [Self; 18] = [
        Self::Id,
        Self::Xpath,
        Self::AccessibilityId,
        Self::ClassName,
        Self::CssSelector,
        Self::IosPredicate,
        Self::IosClassChain,
        Self::AndroidUiautomator,
        Self::AndroidViewtag,
        Self::AndroidDataMatcher,
        Self::AndroidViewMatcher,
        Self::Image,
        Self::Custom,
        Self::FlutterIntegrationSemanticsLabel,
        Self::FlutterIntegrationType,
        Self::FlutterIntegrationKey,
        Self::FlutterIntegrationText,
        Self::FlutterIntegrationTextContaining,
    ];

    /// Resolve the bare upper-snake token from a declaration, e.g. `"XPATH"`.
    ///
    /// Returns `None` for tokens outside the supported set; the caller turns
    /// that into an unsupported-strategy verdict.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ID" => Some(Self::Id),
            "XPATH" => Some(Self::Xpath),
            "ACCESSIBILITY_ID" => Some(Self::AccessibilityId),
            "CLASS_NAME" => Some(Self::ClassName),
            "CSS_SELECTOR" => Some(Self::CssSelector),
            "IOS_PREDICATE" => Some(Self::IosPredicate),
            "IOS_CLASS_CHAIN" => Some(Self::IosClassChain),
            "ANDROID_UIAUTOMATOR" => Some(Self::AndroidUiautomator),
            "ANDROID_VIEWTAG" => Some(Self::AndroidViewtag),
            "ANDROID_DATA_MATCHER" => Some(Self::AndroidDataMatcher),
            "ANDROID_VIEW_MATCHER" => Some(Self::AndroidViewMatcher),
            "IMAGE" => Some(Self::Image),
            "CUSTOM" => Some(Self::Custom),
            "FLUTTER_INTEGRATION_SEMANTICS_LABEL" => Some(Self::FlutterIntegrationSemanticsLabel),
            "FLUTTER_INTEGRATION_TYPE" => Some(Self::FlutterIntegrationType),
            "FLUTTER_INTEGRATION_KEY" => Some(Self::FlutterIntegrationKey),
            "FLUTTER_INTEGRATION_TEXT" => Some(Self::FlutterIntegrationText),
            "FLUTTER_INTEGRATION_TEXT_CONTAINING" => {
                Some(Self::FlutterIntegrationTextContaining)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Xpath => "XPATH",
            Self::AccessibilityId => "ACCESSIBILITY_ID",
            Self::ClassName => "CLASS_NAME",
            Self::CssSelector => "CSS_SELECTOR",
            Self::IosPredicate => "IOS_PREDICATE",
            Self::IosClassChain => "IOS_CLASS_CHAIN",
            Self::AndroidUiautomator => "ANDROID_UIAUTOMATOR",
            Self::AndroidViewtag => "ANDROID_VIEWTAG",
            Self::AndroidDataMatcher => "ANDROID_DATA_MATCHER",
            Self::AndroidViewMatcher => "ANDROID_VIEW_MATCHER",
            Self::Image => "IMAGE",
            Self::Custom => "CUSTOM",
            Self::FlutterIntegrationSemanticsLabel => "FLUTTER_INTEGRATION_SEMANTICS_LABEL",
            Self::FlutterIntegrationType => "FLUTTER_INTEGRATION_TYPE",
            Self::FlutterIntegrationKey => "FLUTTER_INTEGRATION_KEY",
            Self::FlutterIntegrationText => "FLUTTER_INTEGRATION_TEXT",
            Self::FlutterIntegrationTextContaining => "FLUTTER_INTEGRATION_TEXT_CONTAINING",
        }
    }

    /// Check the decoded selector value against this strategy's rule.
    ///
    /// The `ANDROID_UIAUTOMATOR` rule only compares parenthesis counts, so
    /// unbalanced *nesting* with balanced counts still passes. That matches
    /// the behavior teams have relied on; do not tighten it here.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Id | Self::AccessibilityId => !value.trim().is_empty(),
            Self::Xpath => value.starts_with("//"),
            Self::ClassName => value.starts_with("android.") || value.starts_with("XCUIElement"),
            Self::IosPredicate => value.contains("=="),
            Self::IosClassChain => value.starts_with("**/"),
            Self::AndroidUiautomator => {
                let open = value.matches('(').count();
                open == value.matches(')').count() && open >= 1
            }
            Self::Image => value.ends_with(".png") || value.ends_with(".jpg"),
            // Permissive categories: only presence is enforced.
            Self::CssSelector
            | Self::AndroidViewtag
            | Self::AndroidDataMatcher
            | Self::AndroidViewMatcher
            | Self::Custom
            | Self::FlutterIntegrationSemanticsLabel
            | Self::FlutterIntegrationType
            | Self::FlutterIntegrationKey
            | Self::FlutterIntegrationText
            | Self::FlutterIntegrationTextContaining => !value.is_empty(),
        }
    }

    /// Human-readable description of the value rule, for `locator-guard strategies`.
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Id | Self::AccessibilityId => "non-empty string after trimming whitespace",
            Self::Xpath => "must start with //",
            Self::ClassName => "must start with android. or XCUIElement",
            Self::IosPredicate => "must contain an == comparison",
            Self::IosClassChain => "must start with **/",
            Self::AndroidUiautomator => {
                "balanced ( and ) counts with at least one method invocation"
            }
            Self::Image => "must end with .png or .jpg",
            Self::CssSelector
            | Self::AndroidViewtag
            | Self::AndroidDataMatcher
            | Self::AndroidViewMatcher
            | Self::Custom
            | Self::FlutterIntegrationSemanticsLabel
            | Self::FlutterIntegrationType
            | Self::FlutterIntegrationKey
            | Self::FlutterIntegrationText
            | Self::FlutterIntegrationTextContaining => "any non-empty string",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
