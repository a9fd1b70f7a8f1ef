//! Built-in per-file content checks.

pub mod frontmatter;
pub mod headings;
pub mod links;
pub mod media;

pub use frontmatter::{FrontmatterRule, FrontmatterTitleRule};
pub use headings::HeadingHierarchyRule;
pub use links::{LinkSchemeRule, LinkTextRule, RelativeLinkRule};
pub use media::{CodeBlockLanguageRule, ImageAltTextRule};

use crate::config::ContentPolicy;
use crate::lint::RuleRegistry;

use super::ContentFile;

impl RuleRegistry<ContentFile> {
    /// Create a registry with all built-in content checks, configured from
    /// `policy`.
    pub fn with_builtins(policy: &ContentPolicy) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FrontmatterRule::new(policy.frontmatter_exempt.clone())));
        registry.register(Box::new(FrontmatterTitleRule::new(
            policy.frontmatter_exempt.clone(),
        )));
        registry.register(Box::new(HeadingHierarchyRule));
        registry.register(Box::new(LinkTextRule::new(&policy.generic_link_text)));
        registry.register(Box::new(ImageAltTextRule));
        registry.register(Box::new(CodeBlockLanguageRule));
        registry.register(Box::new(LinkSchemeRule::new(policy.max_url_display)));
        registry.register(Box::new(RelativeLinkRule::new(policy.max_url_display)));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered_in_order() {
        let registry = RuleRegistry::<ContentFile>::with_builtins(&ContentPolicy::default());
        let ids: Vec<String> = registry.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(
            ids,
            [
                "frontmatter",
                "frontmatter-title",
                "heading-hierarchy",
                "link-text",
                "image-alt-text",
                "code-block-language",
                "link-scheme",
                "relative-link"
            ]
        );
    }
}
