use std::str::FromStr;

use crate::error::Error;
use crate::html::HtmlNode;

/// Inline style of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextType {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl FromStr for TextType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "plain" => Ok(Self::Text),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "code" => Ok(Self::Code),
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            other => Err(Error::InvalidStyle(other.to_string())),
        }
    }
}

/// A run of inline text with a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    /// Target of a link or source of an image
    pub url: Option<String>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, text_type: TextType, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: Some(url.into()),
        }
    }

    /// Convert to the HTML leaf that displays this run
    pub fn to_html_node(&self) -> HtmlNode {
        let url = self.url.as_deref().unwrap_or_default();
        match self.text_type {
            TextType::Text => HtmlNode::text(&self.text),
            TextType::Bold => HtmlNode::leaf("b", &self.text),
            TextType::Italic => HtmlNode::leaf("i", &self.text),
            TextType::Code => HtmlNode::leaf("code", &self.text),
            TextType::Link => HtmlNode::leaf("a", &self.text).with_prop("href", url),
            TextType::Image => HtmlNode::leaf("img", "")
                .with_prop("src", url)
                .with_prop("alt", &self.text),
        }
    }
}
