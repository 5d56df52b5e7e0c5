//! Static site publishing.
//!
//! Copies static assets into a freshly cleared output directory, then walks
//! the content tree turning each markdown file into a templated HTML page.
//! Any error aborts the whole run.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::Error;
use crate::parser::{extract_title, markdown_to_html_node};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::InvalidSourcePath(path.to_path_buf()));
        }
        fs::read_to_string(path)
            .map(Self::new)
            .map_err(Error::io(path))
    }

    /// Fill in the placeholders, then point root-relative URLs at `base_path`
    pub fn render(&self, title: &str, content: &str, base_path: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
            .replace("href=\"/", &format!("href=\"{base_path}"))
            .replace("src=\"/", &format!("src=\"{base_path}"))
    }
}

/// Publish the site described by `config`. Returns the number of pages written.
pub fn publish(config: &Config) -> Result<usize, Error> {
    let paths = &config.paths;
    tracing::info!(
        content = %paths.content.display(),
        output = %paths.output.display(),
        base_path = %config.site.base_path,
        "Publishing site"
    );

    copy_static(&paths.static_dir, &paths.output)?;
    let template = Template::load(&paths.template)?;
    let pages = generate_pages_recursive(
        &paths.content,
        &template,
        &paths.output,
        &config.site.base_path,
    )?;

    tracing::info!(pages, "Site published");
    Ok(pages)
}

/// Replace `dst` with a recursive copy of `src`
pub fn copy_static(src: &Path, dst: &Path) -> Result<(), Error> {
    if !src.is_dir() {
        return Err(Error::InvalidSourcePath(src.to_path_buf()));
    }
    if dst.exists() {
        tracing::debug!(path = %dst.display(), "Clearing output directory");
        fs::remove_dir_all(dst).map_err(Error::io(dst))?;
    }
    copy_dir(src, dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<(), Error> {
    fs::create_dir_all(dst).map_err(Error::io(dst))?;
    for entry in sorted_entries(src)? {
        let path = entry.path();
        let target = dst.join(entry.file_name());
        if path.is_dir() {
            copy_dir(&path, &target)?;
        } else {
            tracing::debug!(from = %path.display(), to = %target.display(), "Copying file");
            fs::copy(&path, &target).map_err(Error::io(&path))?;
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>, Error> {
    let mut entries = fs::read_dir(dir)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(Error::io(dir))?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}

/// Render one markdown file through `template` into `dest`
pub fn generate_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    base_path: &str,
) -> Result<(), Error> {
    if !from.is_file() {
        return Err(Error::InvalidSourcePath(from.to_path_buf()));
    }
    tracing::info!(from = %from.display(), to = %dest.display(), "Generating page");

    let markdown = fs::read_to_string(from).map_err(Error::io(from))?;
    let title =
        extract_title(&markdown).ok_or_else(|| Error::MissingTitle(from.to_path_buf()))?;
    let content = markdown_to_html_node(&markdown).to_html()?;
    let page = template.render(title, &content, base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    fs::write(dest, page).map_err(Error::io(dest))
}

/// Mirror `content_dir` into `dest_dir`: `.md` files become `.html` pages,
/// everything else is copied as-is. Returns the number of pages generated.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize, Error> {
    if !content_dir.is_dir() {
        return Err(Error::InvalidSourcePath(content_dir.to_path_buf()));
    }
    fs::create_dir_all(dest_dir).map_err(Error::io(dest_dir))?;

    let mut pages = 0;
    for entry in sorted_entries(content_dir)? {
        let path = entry.path();
        let target = dest_dir.join(entry.file_name());
        if path.is_dir() {
            pages += generate_pages_recursive(&path, template, &target, base_path)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            generate_page(&path, template, &target.with_extension("html"), base_path)?;
            pages += 1;
        } else {
            tracing::debug!(from = %path.display(), to = %target.display(), "Copying file");
            fs::copy(&path, &target).map_err(Error::io(&path))?;
        }
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    const TEMPLATE: &str = r#"<html><head><title>{{ Title }}</title><link href="/index.css"></head><body>{{ Content }}<img src="/logo.png"></body></html>"#;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn template_fills_placeholders() {
        let page = Template::new(TEMPLATE).render("Home", "<div><p>hi</p></div>", "/");
        assert_eq!(
            page,
            r#"<html><head><title>Home</title><link href="/index.css"></head><body><div><p>hi</p></div><img src="/logo.png"></body></html>"#
        );
    }

    #[test]
    fn template_rewrites_root_urls() {
        let page = Template::new(TEMPLATE).render(
            "Home",
            r#"<a href="/about">a</a><a href="https://x.dev">x</a>"#,
            "/repo/",
        );
        assert!(page.contains(r#"<link href="/repo/index.css">"#));
        assert!(page.contains(r#"<img src="/repo/logo.png">"#));
        assert!(page.contains(r#"<a href="/repo/about">a</a>"#));
        assert!(page.contains(r#"<a href="https://x.dev">x</a>"#));
    }

    #[test]
    fn copy_static_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("static");
        let dst = dir.path().join("public");
        write(&src.join("index.css"), "body {}");
        write(&src.join("images/logo.png"), "png");
        write(&dst.join("stale.html"), "old");

        copy_static(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dst.join("images/logo.png")).unwrap(), "png");
        assert!(!dst.join("stale.html").exists());
    }

    #[test]
    fn copy_static_requires_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            copy_static(&missing, &dir.path().join("out")),
            Err(Error::InvalidSourcePath(path)) if path == missing
        ));
    }

    #[test]
    fn generate_page_writes_templated_html() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("index.md");
        let dest = dir.path().join("out/nested/index.html");
        write(&from, "# Tolkien Fan Club\n\n**Bilbo** was here");

        generate_page(&from, &Template::new(TEMPLATE), &dest, "/").unwrap();

        assert_eq!(
            fs::read_to_string(dest).unwrap(),
            r#"<html><head><title>Tolkien Fan Club</title><link href="/index.css"></head><body><div><h1>Tolkien Fan Club</h1><p><b>Bilbo</b> was here</p></div><img src="/logo.png"></body></html>"#
        );
    }

    #[test]
    fn generate_page_requires_title() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("untitled.md");
        write(&from, "## Only a subheading");

        let err = generate_page(
            &from,
            &Template::new(TEMPLATE),
            &dir.path().join("untitled.html"),
            "/",
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingTitle(path) if path == from));
    }

    #[test]
    fn generate_page_requires_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_page(
            dir.path(),
            &Template::new(TEMPLATE),
            &dir.path().join("x.html"),
            "/",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSourcePath(_)));
    }

    #[test]
    fn template_load_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Template::load(&dir.path().join("template.html")),
            Err(Error::InvalidSourcePath(_))
        ));
    }

    #[test]
    fn recursive_generation_mirrors_tree() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        let out = dir.path().join("public");
        write(&content.join("index.md"), "# Home");
        write(&content.join("blog/post.md"), "# Post\n\n- a\n- b");
        write(&content.join("blog/photo.jpg"), "jpg");

        let pages =
            generate_pages_recursive(&content, &Template::new("{{ Content }}"), &out, "/").unwrap();

        assert_eq!(pages, 2);
        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            "<div><h1>Home</h1></div>"
        );
        assert_eq!(
            fs::read_to_string(out.join("blog/post.html")).unwrap(),
            "<div><h1>Post</h1><ul><li>a</li><li>b</li></ul></div>"
        );
        assert_eq!(fs::read_to_string(out.join("blog/photo.jpg")).unwrap(), "jpg");
        assert!(!out.join("blog/post.md").exists());
    }

    #[test]
    fn recursive_generation_stops_at_first_error() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write(&content.join("a.md"), "no title");
        write(&content.join("b.md"), "# B");

        let err = generate_pages_recursive(
            &content,
            &Template::new("{{ Content }}"),
            &dir.path().join("public"),
            "/",
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingTitle(path) if path == content.join("a.md")));
        assert!(!dir.path().join("public/b.html").exists());
    }

    #[test]
    fn publish_copies_static_then_generates_pages() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("static/index.css"), "body {}");
        write(&root.join("content/index.md"), "# Home\n\n[About](/about)");
        write(&root.join("template.html"), TEMPLATE);
        write(&root.join("docs/old.html"), "stale");

        let config = Config {
            paths: crate::config::PathsConfig {
                content: root.join("content"),
                static_dir: root.join("static"),
                output: root.join("docs"),
                template: root.join("template.html"),
            },
            site: crate::config::SiteConfig {
                base_path: "/site/".to_string(),
            },
        };

        assert_eq!(publish(&config).unwrap(), 1);
        let output: PathBuf = root.join("docs");
        assert!(!output.join("old.html").exists());
        assert_eq!(fs::read_to_string(output.join("index.css")).unwrap(), "body {}");
        let index = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(index.contains("<title>Home</title>"));
        assert!(index.contains(r#"<a href="/site/about">About</a>"#));
        assert!(index.contains(r#"<link href="/site/index.css">"#));
    }
}
