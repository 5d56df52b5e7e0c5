use crate::error::Error;

/// Attributes of an HTML element, kept in insertion order
pub type Props = Vec<(String, String)>;

/// A node of the rendered document tree.
///
/// A `Leaf` carries a value and renders as `<tag>value</tag>`, or as the bare
/// value when untagged. A `Parent` renders its children between its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        props: Props,
    },
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        props: Props,
    },
}

impl HtmlNode {
    /// Untagged leaf: raw text
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: Some(tag.into()),
            children,
            props: Props::new(),
        }
    }

    /// Append an attribute, keeping earlier ones first
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf { props, .. } | Self::Parent { props, .. } => {
                props.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } | Self::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Leaf value; `None` for parents
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Leaf { value, .. } => value.as_deref(),
            Self::Parent { .. } => None,
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    pub fn props(&self) -> &[(String, String)] {
        match self {
            Self::Leaf { props, .. } | Self::Parent { props, .. } => props,
        }
    }

    /// Render the attributes as ` key="value"` pairs
    pub fn props_to_html(&self) -> String {
        let mut out = String::new();
        push_props(self.props(), &mut out);
        out
    }

    /// Render this node and its subtree to an HTML string
    pub fn to_html(&self) -> Result<String, Error> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), Error> {
        match self {
            Self::Leaf { tag, value, props } => {
                let value = value.as_deref().ok_or(Error::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, props, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            Self::Parent {
                tag,
                children,
                props,
            } => {
                let tag = tag.as_deref().ok_or(Error::MissingTag)?;
                open_tag(tag, props, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, props: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_props(props, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_props(props: &[(String, String)], out: &mut String) {
    for (key, value) in props {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
