mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod publish;
mod text;

pub use block::{BlockType, block_to_block_type, markdown_to_blocks};
pub use config::{Config, ConfigError, PathsConfig, SiteConfig};
pub use error::Error;
pub use html::{HtmlNode, Props};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_textnodes,
};
pub use parser::{block_to_html_node, extract_title, markdown_to_html_node};
pub use publish::{Template, copy_static, generate_page, generate_pages_recursive, publish};
pub use text::{TextNode, TextType};

/// Convert markdown to an HTML fragment wrapped in a `div`
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    markdown_to_html_node(markdown).to_html()
}
