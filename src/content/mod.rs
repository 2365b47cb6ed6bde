pub(crate) mod filter;
pub(crate) mod frontmatter;
pub(crate) mod outline;
pub(crate) mod posts;
