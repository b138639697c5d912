pub mod article;
pub mod date;

pub use article::{Article, ArticleSource};
pub use date::format_published;
