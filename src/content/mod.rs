//! Markdown content validation.
//!
//! [`ContentValidator`] walks a content directory and runs line-based
//! checks over every markdown file: frontmatter, heading hierarchy, link
//! text, image alt text, code block languages, and link schemes. Internal
//! links are then resolved across the whole tree.
//!
//! Scanning is heuristic and line based. Nothing here builds a markdown
//! syntax tree.

pub mod file;
pub mod links;
pub mod rules;
pub mod validator;

pub use file::{CodeFence, ContentFile, Frontmatter, FrontmatterKind, Heading};
pub use links::{Link, LinkGraph, LinkIndex, LinkKind};
pub use validator::{ContentScan, ContentValidator, CONTENT_REPORT_TITLE};
